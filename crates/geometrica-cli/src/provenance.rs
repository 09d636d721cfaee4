//! Sidecar records written next to every CLI output file.
//!
//! `out/rotated.json` gets `out/rotated.provenance.json` holding the build
//! revision, the operation with its parameters, and what the run did to the
//! data (point counts, or how many batch requests failed).

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// What a run did, recorded alongside its parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// A point file went in and a point file came out.
    Points {
        input_format: &'static str,
        points_in: usize,
        points_out: usize,
    },
    /// A request list was evaluated; failures are counted, not fatal.
    Batch { requests: usize, failed: usize },
}

/// Caller-supplied half of a sidecar.
#[derive(Clone, Debug, Serialize)]
pub struct Run<'a> {
    pub op: &'static str,
    pub tag: Option<&'a str>,
    pub params: Value,
    pub summary: Summary,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Record<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    output: String,
    #[serde(flatten)]
    run: &'a Run<'a>,
}

/// `<dir>/<stem>.provenance.json` for an output at `<dir>/<stem>.<ext>`.
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("provenance.json")
}

/// Write the sidecar for `output` and return its path.
#[track_caller]
pub fn write_sidecar(output: &Path, run: &Run<'_>) -> Result<PathBuf> {
    let caller = Location::caller();
    let record = Record {
        code_rev: code_rev(),
        version: geometrica::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        output: output.display().to_string(),
        run,
    };
    let path = sidecar_path(output);
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), op = run.op, "sidecar_written");
    Ok(path)
}

/// Commit the binary was built from: `GIT_COMMIT` (build time, then run
/// time), else `git rev-parse`, else "unknown".
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    match Command::new("git").args(["rev-parse", "HEAD"]).output() {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_owned(),
        _ => "unknown".to_owned(),
    }
}
