//! Compare command — classify pairs of version strings line by line.
//!
//! Each input line holds two whitespace-separated version strings. The
//! command prints one classification per line: `before` when the first
//! version has lower precedence, `after` when it has higher precedence,
//! `equal` when the two are equivalent, and `invalid` when either string
//! fails to parse or the line does not hold exactly two tokens.
//! Whitespace-only lines are skipped silently.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use semv_core::Version;

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Files of version pairs, one pair per line (reads stdin when omitted)
    pub files: Vec<PathBuf>,
}

/// The classification printed for one input pair.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The first version has lower precedence than the second.
    Before,
    /// The first version has higher precedence than the second.
    After,
    /// The two versions have equal precedence.
    Equal,
    /// A version failed to parse, or the line held the wrong token count.
    Invalid,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
            Self::Equal => f.write_str("equal"),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

#[derive(Serialize)]
struct LineReport<'a> {
    input: &'a str,
    verdict: Verdict,
}

/// Classify a pair of version strings.
pub fn classify(left: &str, right: &str) -> Verdict {
    let (Ok(left), Ok(right)) = (Version::parse(left), Version::parse(right)) else {
        return Verdict::Invalid;
    };
    match left.cmp(&right) {
        Ordering::Less => Verdict::Before,
        Ordering::Greater => Verdict::After,
        Ordering::Equal => Verdict::Equal,
    }
}

/// Classify one input line.
///
/// Returns `None` for whitespace-only lines, which produce no output.
pub fn classify_line(line: &str) -> Option<Verdict> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => None,
        [left, right] => Some(classify(left, right)),
        _ => Some(Verdict::Invalid),
    }
}

/// Compare version pairs from the given files, or stdin when none.
#[instrument(name = "cmd_compare", skip_all, fields(files = args.files.len()))]
pub fn cmd_compare(args: CompareArgs, global_json: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.files.is_empty() {
        debug!("reading version pairs from stdin");
        let stdin = io::stdin();
        run(stdin.lock(), &mut out, global_json)?;
    } else {
        for path in &args.files {
            debug!(path = %path.display(), "reading version pairs from file");
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run(BufReader::new(file), &mut out, global_json)?;
        }
    }

    Ok(())
}

/// Classify every line from `reader`, writing one result per pair.
fn run<R: BufRead, W: Write>(reader: R, writer: &mut W, json: bool) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        let Some(verdict) = classify_line(&line) else {
            continue;
        };
        if json {
            let report = LineReport {
                input: line.trim(),
                verdict,
            };
            writeln!(writer, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(writer, "{verdict}")?;
        }
    }
    Ok(())
}
