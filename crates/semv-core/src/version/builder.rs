//! Staged construction for field-at-a-time callers.
//!
//! A [`Version`] only exists once all three numeric components are set,
//! so a half-built value can never reach comparison or rendering.

use super::{BuildMetadata, ParseError, Prerelease, Version, VersionError, VersionResult};

/// Builder that assembles a [`Version`] one field at a time.
///
/// ```
/// use semv_core::Version;
///
/// let version = Version::builder()
///     .major(1)
///     .minor(2)
///     .patch(3)
///     .prerelease("alpha.1")
///     .unwrap()
///     .finish()
///     .unwrap();
/// assert_eq!(version.to_string(), "1.2.3-alpha.1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    prerelease: Option<Prerelease>,
    build: Option<BuildMetadata>,
}

impl VersionBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the major version number.
    #[must_use]
    pub const fn major(mut self, value: u64) -> Self {
        self.major = Some(value);
        self
    }

    /// Set the minor version number.
    #[must_use]
    pub const fn minor(mut self, value: u64) -> Self {
        self.minor = Some(value);
        self
    }

    /// Set the patch version number.
    #[must_use]
    pub const fn patch(mut self, value: u64) -> Self {
        self.patch = Some(value);
        self
    }

    /// Set the prerelease section from its textual form.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not a valid dot-separated
    /// identifier list.
    pub fn prerelease(mut self, text: &str) -> Result<Self, ParseError> {
        self.prerelease = Some(Prerelease::new(text)?);
        Ok(self)
    }

    /// Set the build metadata section from its textual form.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not a valid dot-separated
    /// identifier list.
    pub fn build_metadata(mut self, text: &str) -> Result<Self, ParseError> {
        self.build = Some(BuildMetadata::new(text)?);
        Ok(self)
    }

    /// Finalize into an immutable [`Version`].
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Incomplete`] naming the first numeric
    /// component that was never set.
    pub fn finish(self) -> VersionResult<Version> {
        let major = self.major.ok_or(VersionError::Incomplete("major"))?;
        let minor = self.minor.ok_or(VersionError::Incomplete("minor"))?;
        let patch = self.patch.ok_or(VersionError::Incomplete("patch"))?;

        Ok(Version {
            major,
            minor,
            patch,
            prerelease: self.prerelease,
            build: self.build,
        })
    }
}
