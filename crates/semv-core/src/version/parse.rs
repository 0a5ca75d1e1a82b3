//! Grammar validation and field extraction.
//!
//! Accepts exactly the SemVer 2.0.0 grammar, anchored at both ends:
//!
//! ```text
//! major "." minor "." patch ["-" prerelease] ["+" buildmetadata]
//! ```
//!
//! The numeric core cannot contain `-`, so the first `-` before any `+`
//! starts the prerelease section and the first `+` starts the build
//! metadata. Nothing is coerced; a string either matches in full or the
//! first broken rule is reported.

use thiserror::Error;

use super::{BuildMetadata, Identifier, Prerelease, Version};

/// Reasons a version string fails to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty.
    #[error("empty version string")]
    Empty,

    /// The numeric core did not have exactly three components.
    #[error("expected `major.minor.patch`, found {found} component(s)")]
    WrongComponentCount {
        /// How many dot-separated components the core had.
        found: usize,
    },

    /// A core component contained something other than digits.
    #[error("{field} component `{text}` is not a number")]
    InvalidNumber {
        /// Which component was malformed.
        field: &'static str,
        /// The offending text.
        text: String,
    },

    /// A core component had a leading zero.
    #[error("{field} component `{text}` has a leading zero")]
    LeadingZero {
        /// Which component was malformed.
        field: &'static str,
        /// The offending text.
        text: String,
    },

    /// A numeric value does not fit in 64 bits.
    #[error("{field} value `{text}` is out of range")]
    Overflow {
        /// Which component or section overflowed.
        field: &'static str,
        /// The offending text.
        text: String,
    },

    /// A prerelease or build identifier was empty.
    #[error("empty {section} identifier")]
    EmptyIdentifier {
        /// Which section held the empty identifier.
        section: &'static str,
    },

    /// An identifier contained a character outside `[0-9A-Za-z-]`.
    #[error("invalid character `{ch}` in {section} identifier `{text}`")]
    InvalidCharacter {
        /// Which section held the identifier.
        section: &'static str,
        /// The first offending character.
        ch: char,
        /// The offending identifier.
        text: String,
    },

    /// A numeric prerelease identifier had a leading zero.
    #[error("numeric prerelease identifier `{0}` has a leading zero")]
    NumericIdentifierLeadingZero(String),
}

const PRERELEASE: &str = "prerelease";
const BUILD: &str = "build metadata";

pub(super) fn version(text: &str) -> Result<Version, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let (rest, build) = match text.split_once('+') {
        Some((rest, build)) => (rest, Some(build_metadata(build)?)),
        None => (text, None),
    };

    let (core, prerelease) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(prerelease(pre)?)),
        None => (rest, None),
    };

    let components: Vec<&str> = core.split('.').collect();
    let [major, minor, patch] = components.as_slice() else {
        return Err(ParseError::WrongComponentCount {
            found: components.len(),
        });
    };

    Ok(Version {
        major: numeric_component("major", major)?,
        minor: numeric_component("minor", minor)?,
        patch: numeric_component("patch", patch)?,
        prerelease,
        build,
    })
}

pub(super) fn prerelease(text: &str) -> Result<Prerelease, ParseError> {
    let identifiers = text
        .split('.')
        .map(prerelease_identifier)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Prerelease::from_identifiers(identifiers))
}

pub(super) fn build_metadata(text: &str) -> Result<BuildMetadata, ParseError> {
    let identifiers = text
        .split('.')
        .map(|identifier| {
            check_identifier_chars(BUILD, identifier)?;
            Ok(identifier.to_owned())
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(BuildMetadata::from_identifiers(identifiers))
}

/// Parse a core component: `0`, or a nonzero digit followed by digits.
fn numeric_component(field: &'static str, text: &str) -> Result<u64, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber {
            field,
            text: text.to_owned(),
        });
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(ParseError::LeadingZero {
            field,
            text: text.to_owned(),
        });
    }
    text.parse().map_err(|_| ParseError::Overflow {
        field,
        text: text.to_owned(),
    })
}

/// Classify one prerelease identifier as numeric or alphanumeric.
fn prerelease_identifier(text: &str) -> Result<Identifier, ParseError> {
    check_identifier_chars(PRERELEASE, text)?;

    if text.bytes().all(|b| b.is_ascii_digit()) {
        if text.len() > 1 && text.starts_with('0') {
            return Err(ParseError::NumericIdentifierLeadingZero(text.to_owned()));
        }
        let value = text.parse().map_err(|_| ParseError::Overflow {
            field: PRERELEASE,
            text: text.to_owned(),
        })?;
        Ok(Identifier::Numeric(value))
    } else {
        Ok(Identifier::Alphanumeric(text.to_owned()))
    }
}

fn check_identifier_chars(section: &'static str, text: &str) -> Result<(), ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyIdentifier { section });
    }
    if let Some(ch) = text.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(ParseError::InvalidCharacter {
            section,
            ch,
            text: text.to_owned(),
        });
    }
    Ok(())
}
