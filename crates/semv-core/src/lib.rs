//! Core library for semv.
//!
//! This crate provides the foundational types and functionality used by the
//! `semv` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`version`] - Semantic version parsing and precedence
//!
//! # Quick Start
//!
//! ```
//! use semv_core::Version;
//!
//! let release: Version = "1.0.0".parse().expect("valid version");
//! let candidate: Version = "1.0.0-rc.1".parse().expect("valid version");
//!
//! assert!(candidate < release);
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod error;

pub mod version;

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult};

pub use version::{
    BuildMetadata, Identifier, ParseError, Prerelease, Version, VersionBuilder, VersionError,
};
