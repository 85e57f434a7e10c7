//! JSON shapes for solve results and errors.
//!
//! Wire format: `states[s][face][row][col]` with faces in U, D, F, B, L, R order
//! and one-letter colors; `moves`, `scrambleLength`, `finalSolved`,
//! `mismatches` as camelCase keys.

use rubik::api::{tokenize, CubeState, ScrambleSession, SessionCfg, SessionReport};
use serde::Serialize;
use serde_json::json;

pub type FaceJson = [[char; 3]; 3];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub states: Vec<[FaceJson; 6]>,
    pub moves: Vec<String>,
    pub scramble_length: usize,
    pub final_solved: bool,
    pub mismatches: Vec<String>,
}

pub fn state_json(cube: &CubeState) -> [FaceJson; 6] {
    let faces = *cube.faces();
    faces.map(|grid| grid.cells.map(|row| row.map(|c| c.as_char())))
}

impl From<&SessionReport> for SolveResponse {
    fn from(r: &SessionReport) -> Self {
        Self {
            states: r.snapshots.iter().map(state_json).collect(),
            moves: r.moves.iter().map(|m| m.to_string()).collect(),
            scramble_length: r.scramble_len,
            final_solved: r.final_solved,
            mismatches: r.mismatches.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Tokenize `scramble`, run one session, and shape the result for the wire.
pub fn solve_scramble(scramble: &str, cfg: SessionCfg) -> anyhow::Result<SolveResponse> {
    let report = ScrambleSession::run(cfg, tokenize(scramble))?;
    tracing::info!(
        scramble_len = report.scramble_len,
        snapshots = report.snapshots.len(),
        final_solved = report.final_solved,
        "solve"
    );
    if !report.final_solved {
        tracing::warn!(mismatches = report.mismatches.len(), "replay left cube unsolved");
    }
    Ok(SolveResponse::from(&report))
}

/// `{"error": ...}` on one line, double quotes swapped for single quotes.
pub fn error_json(message: &str) -> String {
    let flat = message
        .replace('"', "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    json!({ "error": flat }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn solve_response_shape() {
        let resp = solve_scramble("  U   R U' ", SessionCfg::default()).unwrap();
        let v: Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["states"].as_array().unwrap().len(), 7);
        assert_eq!(v["moves"], json!(["U", "R'", "U'"]));
        assert_eq!(v["scrambleLength"], 3);
        assert_eq!(v["finalSolved"], true);
        assert_eq!(v["mismatches"], json!([]));
        // Snapshot 0, face U, row 0.
        assert_eq!(v["states"][0][0][0], json!(["W", "W", "W"]));
        assert_eq!(v["states"][0][5][2], json!(["G", "G", "G"]));
        // After U: front top row shows the right face's color.
        assert_eq!(v["states"][1][2][0], json!(["G", "G", "G"]));
    }

    #[test]
    fn mismatch_strings_follow_facelet_format() {
        let mut cube = CubeState::solved();
        cube.apply("F".parse().unwrap());
        let report = SessionReport {
            snapshots: vec![cube],
            moves: Vec::new(),
            scramble_len: 0,
            final_solved: false,
            mismatches: cube.mismatches(),
        };
        let resp = SolveResponse::from(&report);
        assert_eq!(resp.mismatches.len(), 12);
        assert_eq!(resp.mismatches[0], "U[2,0] expected=W actual=B");
    }

    #[test]
    fn error_json_is_single_line_without_double_quotes() {
        let body = error_json("bad \"token\"\nsecond line");
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["error"], "bad 'token' second line");
        assert!(!body.contains('\n'));
    }

    #[test]
    fn limit_surfaces_as_error() {
        let cfg = SessionCfg {
            max_scramble_len: 1,
        };
        let err = solve_scramble("U R", cfg).unwrap_err();
        assert!(err.to_string().contains("limit is 1"));
    }
}
