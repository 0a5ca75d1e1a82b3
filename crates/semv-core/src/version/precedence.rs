//! Precedence ordering, SemVer 2.0.0 item 11.
//!
//! One canonical three-way comparison lives here as `Ord::cmp`; every
//! relational operator derives from it. Equality is precedence equality,
//! so versions differing only in build metadata compare equal.

use std::cmp::Ordering;

use super::{Identifier, Prerelease, Version};

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| cmp_prerelease(self.prerelease.as_ref(), other.prerelease.as_ref()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// A release outranks any prerelease of the same numeric triple.
fn cmp_prerelease(a: Option<&Prerelease>, b: Option<&Prerelease>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

impl Ord for Prerelease {
    /// Identifier-by-identifier, left to right. Slice ordering gives the
    /// remaining SemVer rule for free: an equal common prefix makes the
    /// longer list the greater one.
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifiers.cmp(&other.identifiers)
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    /// The authoritative tie-break table for one identifier position:
    /// numeric pairs compare as integers, alphanumeric pairs as ASCII
    /// strings, and a numeric identifier always ranks below an
    /// alphanumeric one.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a.cmp(b),
            (Self::Numeric(_), Self::Alphanumeric(_)) => Ordering::Less,
            (Self::Alphanumeric(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Alphanumeric(a), Self::Alphanumeric(b)) => a.as_str().cmp(b.as_str()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
