//! `<stem>.provenance.json` next to a written solve result.
//!
//! The sidecar says which scramble produced the artifact, under which session
//! limit, and what the replay concluded, so a stored result can be checked
//! without re-parsing the full snapshot history.

use anyhow::{Context, Result};
use rubik::api::{tokenize, SessionCfg};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::response::SolveResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveProvenance {
    pub code_rev: String,
    pub engine_version: &'static str,
    /// Whitespace-normalized scramble tokens, unknown ones included.
    pub scramble: Vec<String>,
    pub max_scramble_len: usize,
    pub scramble_length: usize,
    pub snapshot_count: usize,
    pub move_count: usize,
    pub final_solved: bool,
    pub mismatch_count: usize,
    pub output: String,
}

impl SolveProvenance {
    pub fn new(artifact: &Path, scramble: &str, cfg: SessionCfg, resp: &SolveResponse) -> Self {
        Self {
            code_rev: current_git_rev(),
            engine_version: rubik::VERSION,
            scramble: tokenize(scramble).iter().map(|t| t.to_string()).collect(),
            max_scramble_len: cfg.max_scramble_len,
            scramble_length: resp.scramble_length,
            snapshot_count: resp.states.len(),
            move_count: resp.moves.len(),
            final_solved: resp.final_solved,
            mismatch_count: resp.mismatches.len(),
            output: artifact.to_string_lossy().into_owned(),
        }
    }
}

/// Write the sidecar for `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, record: &SolveProvenance) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "solve".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` when set, else `git rev-parse HEAD`, else `"unknown"`.
fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|out| out.status.success())
                .and_then(|out| String::from_utf8(out.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
