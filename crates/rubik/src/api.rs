//! Curated surface for the binary and benches (UNSTABLE).
//!
//! Not a public API. Breaking changes are allowed and expected; prefer these
//! re-exports so call sites stay consistent.

// Cube model
pub use crate::cube::{Color, CubeState, Face, FaceletGrid, Mismatch};
// Moves
pub use crate::moves::{
    apply_move, apply_token, invert, invert_moves, tokenize, Move, ParseMoveError, Token, Turn,
};
// Session
pub use crate::session::{Phase, ScrambleSession, SessionCfg, SessionError, SessionReport};
// Random scrambles
pub use crate::scramble::{draw_scramble, ReplayToken, ScrambleGenerator};
