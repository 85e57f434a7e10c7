//! Scramble session: reset → scramble → inverse replay → verify.
//!
//! Purpose
//! - Drive one linear run `Init → Scrambling → Solving → Done` over a private
//!   `CubeState`, snapshotting after every step so callers can animate it.
//!
//! Conventions
//! - Snapshot 0 is the solved cube. Every scramble token and every inverse
//!   token adds exactly one snapshot, recognized or not, so a run over `n`
//!   tokens yields `1 + 2n` snapshots.
//! - The recorded move list holds only moves actually applied while solving.
//!   An unknown token's inverse is the same no-op: it still snapshots but
//!   records nothing. `"U Q R"` records `R' U'`.
//! - The solve is the term-by-term inverse of this session's own scramble.
//!   Nothing here can solve a cube scrambled elsewhere.
//! - One session per run; a session is not shared. Callers that keep one
//!   around must serialize access themselves.

use std::fmt;

use crate::cube::{CubeState, Mismatch};
use crate::moves::{apply_move, apply_token, invert, Move, Token};

/// Session limits.
#[derive(Clone, Copy, Debug)]
pub struct SessionCfg {
    /// Longest accepted scramble (tokens, unknown ones included).
    pub max_scramble_len: usize,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            max_scramble_len: 1000,
        }
    }
}

/// Position in the linear session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Init,
    Scrambling,
    Solving,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Init => "init",
            Phase::Scrambling => "scrambling",
            Phase::Solving => "solving",
            Phase::Done => "done",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A phase operation was called from the wrong phase.
    OutOfOrder { expected: Phase, found: Phase },
    ScrambleTooLong { len: usize, limit: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { expected, found } => {
                write!(f, "session step out of order: expected {expected}, found {found}")
            }
            Self::ScrambleTooLong { len, limit } => {
                write!(f, "scramble has {len} tokens, limit is {limit}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Everything a finished run exposes.
#[derive(Clone, Debug)]
pub struct SessionReport {
    pub snapshots: Vec<CubeState>,
    /// Inverse moves in application order.
    pub moves: Vec<Move>,
    /// Scramble token count, unknown tokens included.
    pub scramble_len: usize,
    pub final_solved: bool,
    /// Empty when `final_solved`.
    pub mismatches: Vec<Mismatch>,
}

pub struct ScrambleSession {
    cfg: SessionCfg,
    phase: Phase,
    cube: CubeState,
    scramble: Vec<Token>,
    snapshots: Vec<CubeState>,
    moves: Vec<Move>,
}

impl Default for ScrambleSession {
    fn default() -> Self {
        Self::new(SessionCfg::default())
    }
}

impl ScrambleSession {
    /// Fresh session in `Init`: solved cube, one snapshot, no moves.
    pub fn new(cfg: SessionCfg) -> Self {
        let cube = CubeState::solved();
        Self {
            cfg,
            phase: Phase::Init,
            cube,
            scramble: Vec::new(),
            snapshots: vec![cube],
            moves: Vec::new(),
        }
    }

    /// Run every phase over `tokens` with the given limits.
    pub fn run(cfg: SessionCfg, tokens: Vec<Token>) -> Result<SessionReport, SessionError> {
        let mut s = Self::new(cfg);
        s.scramble(tokens)?;
        s.solve()?;
        s.finish()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    #[inline]
    pub fn snapshots(&self) -> &[CubeState] {
        &self.snapshots
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    fn advance(&mut self, expected: Phase, next: Phase) -> Result<(), SessionError> {
        if self.phase != expected {
            return Err(SessionError::OutOfOrder {
                expected,
                found: self.phase,
            });
        }
        self.phase = next;
        Ok(())
    }

    /// `Init → Scrambling`: apply each token in order, one snapshot per token.
    pub fn scramble(&mut self, tokens: Vec<Token>) -> Result<(), SessionError> {
        if tokens.len() > self.cfg.max_scramble_len {
            return Err(SessionError::ScrambleTooLong {
                len: tokens.len(),
                limit: self.cfg.max_scramble_len,
            });
        }
        self.advance(Phase::Init, Phase::Scrambling)?;
        self.snapshots.reserve(2 * tokens.len());
        for t in &tokens {
            apply_token(&mut self.cube, t);
            self.snapshots.push(self.cube);
        }
        self.scramble = tokens;
        Ok(())
    }

    /// `Scrambling → Solving`: replay the inverse sequence, recording moves.
    pub fn solve(&mut self) -> Result<(), SessionError> {
        self.advance(Phase::Scrambling, Phase::Solving)?;
        for t in invert(&self.scramble) {
            if let Some(mv) = t.as_move() {
                apply_move(&mut self.cube, mv);
                self.moves.push(mv);
            }
            self.snapshots.push(self.cube);
        }
        Ok(())
    }

    /// `Solving → Done`: verify against the solved reference and hand over
    /// the recorded history. The session is spent afterwards.
    pub fn finish(&mut self) -> Result<SessionReport, SessionError> {
        self.advance(Phase::Solving, Phase::Done)?;
        let final_solved = self.cube.is_solved();
        let mismatches = if final_solved {
            Vec::new()
        } else {
            self.cube.mismatches()
        };
        Ok(SessionReport {
            snapshots: std::mem::take(&mut self.snapshots),
            moves: std::mem::take(&mut self.moves),
            scramble_len: self.scramble.len(),
            final_solved,
            mismatches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Face;
    use crate::moves::tokenize;

    fn run(s: &str) -> SessionReport {
        ScrambleSession::run(SessionCfg::default(), tokenize(s)).unwrap()
    }

    fn names(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn records_inverse_moves_in_order() {
        let r = run("U R U'");
        assert_eq!(names(&r.moves), vec!["U", "R'", "U'"]);
        assert_eq!(r.snapshots.len(), 7);
        assert_eq!(r.scramble_len, 3);
        assert!(r.final_solved);
        assert!(r.mismatches.is_empty());
    }

    #[test]
    fn empty_scramble() {
        for s in ["", "   \t "] {
            let r = run(s);
            assert_eq!(r.snapshots.len(), 1);
            assert!(r.snapshots[0].is_solved());
            assert!(r.moves.is_empty());
            assert_eq!(r.scramble_len, 0);
            assert!(r.final_solved);
        }
    }

    #[test]
    fn unknown_tokens_snapshot_but_record_nothing() {
        let r = run("U Q R");
        assert_eq!(r.scramble_len, 3);
        assert_eq!(r.snapshots.len(), 7);
        assert_eq!(names(&r.moves), vec!["R'", "U'"]);
        // Scramble phase: solved, U, (Q no-op), R.
        assert_eq!(r.snapshots[1], r.snapshots[2]);
        // Solve phase: R', (Q no-op), U'.
        assert_eq!(r.snapshots[4], r.snapshots[5]);
        assert!(r.final_solved);
    }

    #[test]
    fn snapshots_trace_the_scramble() {
        let r = run("R U2 F'");
        let mut c = CubeState::solved();
        assert_eq!(r.snapshots[0], c);
        for (i, m) in ["R", "U2", "F'"].iter().enumerate() {
            c.apply(m.parse().unwrap());
            assert_eq!(r.snapshots[i + 1], c);
        }
        // Halfway back.
        assert_eq!(r.snapshots[4], r.snapshots[2]);
        assert_eq!(r.snapshots[5], r.snapshots[1]);
        assert!(r.snapshots[6].is_solved());
        // Snapshots are independent copies.
        assert_ne!(r.snapshots[1], r.snapshots[3]);
    }

    #[test]
    fn cardinality_holds_for_long_scrambles() {
        let s = "R U R' U' F2 D B' L2 X R2 D' F U2 B L' q";
        let r = run(s);
        let n = tokenize(s).len();
        assert_eq!(r.snapshots.len(), 1 + 2 * n);
        assert_eq!(r.moves.len(), n - 2);
        assert!(r.final_solved);
    }

    #[test]
    fn phases_are_linear() {
        let mut s = ScrambleSession::default();
        assert_eq!(s.phase(), Phase::Init);
        assert_eq!(
            s.solve(),
            Err(SessionError::OutOfOrder {
                expected: Phase::Scrambling,
                found: Phase::Init
            })
        );
        s.scramble(tokenize("F")).unwrap();
        assert_eq!(s.phase(), Phase::Scrambling);
        assert!(s.scramble(tokenize("F")).is_err());
        assert!(s.finish().is_err());
        s.solve().unwrap();
        assert_eq!(s.moves().len(), 1);
        assert_eq!(s.snapshots().len(), 3);
        let report = s.finish().unwrap();
        assert_eq!(s.phase(), Phase::Done);
        assert!(report.final_solved);
        assert!(s.cube().is_solved());
        assert!(matches!(
            s.finish(),
            Err(SessionError::OutOfOrder {
                found: Phase::Done,
                ..
            })
        ));
    }

    #[test]
    fn scramble_limit_is_enforced() {
        let cfg = SessionCfg {
            max_scramble_len: 2,
        };
        let err = ScrambleSession::run(cfg, tokenize("U R F")).unwrap_err();
        assert_eq!(err, SessionError::ScrambleTooLong { len: 3, limit: 2 });
        assert_eq!(err.to_string(), "scramble has 3 tokens, limit is 2");
        assert!(ScrambleSession::run(cfg, tokenize("U R")).is_ok());
    }

    #[test]
    fn mismatches_reported_when_not_solved() {
        // Drive the cube off the solved state behind the session's back to
        // check the diagnostics path.
        let mut s = ScrambleSession::default();
        s.scramble(Vec::new()).unwrap();
        s.solve().unwrap();
        s.cube.apply("R".parse().unwrap());
        let report = s.finish().unwrap();
        assert!(!report.final_solved);
        assert_eq!(report.mismatches.len(), 12);
        assert_eq!(report.mismatches[0].face, Face::U);
        assert_eq!(report.mismatches[0].to_string(), "U[0,2] expected=W actual=R");
    }
}
