//! Semantic version values and precedence.
//!
//! This module implements the Semantic Versioning 2.0.0 grammar and
//! precedence rules in three pieces: grammar validation and field
//! extraction (`parse`), the total order (`precedence`), and staged
//! construction for callers that assemble a version field by field
//! (`builder`).

mod builder;
mod parse;
mod precedence;

pub use builder::VersionBuilder;
pub use parse::ParseError;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    /// The text did not match the SemVer 2.0.0 grammar.
    #[error("invalid semantic version: {0}")]
    Parse(#[from] ParseError),

    /// A builder was finalized before every numeric component was set.
    #[error("version is missing its {0} component")]
    Incomplete(&'static str),
}

/// Result alias for version operations.
pub type VersionResult<T> = Result<T, VersionError>;

/// A parsed Semantic Versioning 2.0.0 version.
///
/// Ordering follows SemVer precedence: the numeric triple decides first,
/// a release outranks any prerelease of the same triple, and prerelease
/// identifiers break remaining ties. Build metadata is carried for
/// rendering and never consulted, so `==` treats `1.2.3+a` and `1.2.3+b`
/// as equal.
///
/// ```
/// use semv_core::Version;
///
/// let a: Version = "1.0.0-alpha".parse().unwrap();
/// let b: Version = "1.0.0-alpha.1".parse().unwrap();
/// assert!(a < b);
/// assert_eq!(b.to_string(), "1.0.0-alpha.1");
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    /// Major version number.
    pub major: u64,
    /// Minor version number.
    pub minor: u64,
    /// Patch version number.
    pub patch: u64,
    /// Prerelease identifiers, if the version has a `-` section.
    pub prerelease: Option<Prerelease>,
    /// Build metadata, if the version has a `+` section.
    pub build: Option<BuildMetadata>,
}

impl Version {
    /// Create a release version with no prerelease or build metadata.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Parse a version string against the full SemVer 2.0.0 grammar.
    ///
    /// The grammar is anchored at both ends; missing components, leading
    /// zeros, and stray characters are all rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first rule the text broke.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse::version(text)
    }

    /// Start building a version field by field.
    #[must_use]
    pub fn builder() -> VersionBuilder {
        VersionBuilder::new()
    }

    /// Whether this version has a prerelease section.
    #[must_use]
    pub const fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.prerelease {
            write!(f, "-{pre}")?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::version(s)
    }
}

/// The dot-separated prerelease identifiers of a version
/// (the `alpha.1` in `1.0.0-alpha.1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerelease {
    identifiers: Vec<Identifier>,
}

impl Prerelease {
    /// Parse a prerelease section (without the leading `-`).
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for empty identifiers, characters outside
    /// `[0-9A-Za-z-]`, or a leading zero in a numeric identifier.
    pub fn new(text: &str) -> Result<Self, ParseError> {
        parse::prerelease(text)
    }

    pub(crate) const fn from_identifiers(identifiers: Vec<Identifier>) -> Self {
        Self { identifiers }
    }

    /// The identifiers in declaration order.
    #[must_use]
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{identifier}")?;
        }
        Ok(())
    }
}

impl FromStr for Prerelease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::prerelease(s)
    }
}

/// One prerelease identifier.
///
/// The shape of an identifier decides how it compares: numeric
/// identifiers compare as integers and always rank below alphanumeric
/// ones, which compare as ASCII strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// All digits, no leading zero.
    Numeric(u64),
    /// Letters, digits, and hyphens with at least one non-digit.
    Alphanumeric(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Alphanumeric(text) => f.write_str(text),
        }
    }
}

/// The build metadata of a version (the `build.5` in `1.2.3+build.5`).
///
/// Purely textual: leading zeros are allowed and precedence never looks
/// at it. It exists so that rendering round-trips the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    identifiers: Vec<String>,
}

impl BuildMetadata {
    /// Parse a build metadata section (without the leading `+`).
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for empty identifiers or characters
    /// outside `[0-9A-Za-z-]`.
    pub fn new(text: &str) -> Result<Self, ParseError> {
        parse::build_metadata(text)
    }

    pub(crate) const fn from_identifiers(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }

    /// The identifiers in declaration order.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifiers.join("."))
    }
}

impl FromStr for BuildMetadata {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::build_metadata(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_prerelease_or_build() {
        let v = Version::new(1, 2, 3);
        assert!(!v.is_prerelease());
        assert!(v.build.is_none());
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn round_trips_all_section_combinations() {
        for text in [
            "1.2.3",
            "1.2.3-blah",
            "1.2.3+thing",
            "1.2.3-blah+thing",
            "0.0.0",
            "10.20.30-alpha.1.x-y+001.sha-5114f85",
        ] {
            let v = Version::parse(text).unwrap();
            assert_eq!(v.to_string(), text);
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed = Version::parse("1.0.0-rc.1").unwrap();
        let from_str: Version = "1.0.0-rc.1".parse().unwrap();
        assert_eq!(parsed, from_str);
    }

    #[test]
    fn prerelease_display_joins_identifiers() {
        let pre = Prerelease::new("alpha.1.x-y").unwrap();
        assert_eq!(pre.to_string(), "alpha.1.x-y");
        assert_eq!(pre.identifiers().len(), 3);
    }

    #[test]
    fn build_metadata_keeps_leading_zeros() {
        let build = BuildMetadata::new("001.sha").unwrap();
        assert_eq!(build.to_string(), "001.sha");
    }
}
