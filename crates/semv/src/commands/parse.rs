//! Parse command — validate one version string and show its fields.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use semv_core::Version;

/// Arguments for the `parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version string to validate and decompose
    pub version: String,
}

#[derive(Serialize)]
struct VersionReport {
    input: String,
    major: u64,
    minor: u64,
    patch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    prerelease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build: Option<String>,
    canonical: String,
}

impl VersionReport {
    fn new(input: &str, version: &Version) -> Self {
        Self {
            input: input.to_owned(),
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            prerelease: version.prerelease.as_ref().map(ToString::to_string),
            build: version.build.as_ref().map(ToString::to_string),
            canonical: version.to_string(),
        }
    }
}

/// Validate a version string and print its decomposed fields.
///
/// Exits nonzero when the string does not match the grammar.
#[instrument(name = "cmd_parse", skip_all, fields(version = %args.version))]
pub fn cmd_parse(args: ParseArgs, global_json: bool) -> anyhow::Result<()> {
    let version = Version::parse(&args.version)?;
    debug!(%version, "parsed version");

    let report = VersionReport::new(&args.version, &version);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {}", "Major".dimmed(), report.major);
        println!("{}: {}", "Minor".dimmed(), report.minor);
        println!("{}: {}", "Patch".dimmed(), report.patch);
        if let Some(ref pre) = report.prerelease {
            println!("{}: {}", "Prerelease".dimmed(), pre.cyan());
        }
        if let Some(ref build) = report.build {
            println!("{}: {}", "Build metadata".dimmed(), build.cyan());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_decomposes_all_fields() {
        let version = Version::parse("1.2.3-rc.1+sha.5114f85").unwrap();
        let report = VersionReport::new("1.2.3-rc.1+sha.5114f85", &version);
        assert_eq!((report.major, report.minor, report.patch), (1, 2, 3));
        assert_eq!(report.prerelease.as_deref(), Some("rc.1"));
        assert_eq!(report.build.as_deref(), Some("sha.5114f85"));
        assert_eq!(report.canonical, "1.2.3-rc.1+sha.5114f85");
    }

    #[test]
    fn report_omits_absent_sections() {
        let version = Version::parse("1.2.3").unwrap();
        let report = VersionReport::new("1.2.3", &version);
        assert!(report.prerelease.is_none());
        assert!(report.build.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("prerelease").is_none());
    }

    #[test]
    fn cmd_parse_rejects_malformed_input() {
        let args = ParseArgs {
            version: "1.1".to_owned(),
        };
        assert!(cmd_parse(args, false).is_err());
    }

    #[test]
    fn cmd_parse_accepts_valid_input() {
        let args = ParseArgs {
            version: "1.2.3-alpha".to_owned(),
        };
        assert!(cmd_parse(args, true).is_ok());
    }
}
