//! Move vocabulary and the move engine.
//!
//! Purpose
//! - Map the 18 move tokens (`X`, `X'`, `X2` for each face) to a tagged
//!   `Move { face, turn }` and apply it to a `CubeState`.
//! - Define inversion: `X ↔ X'`, `X2 ↔ X2`; a sequence inverts by reversing
//!   and inverting each element.
//!
//! Policy
//! - Tokens outside the vocabulary parse to `Token::Unknown` and apply as
//!   no-ops. They are not errors.
//!
//! Layout
//! - `types.rs`: `Turn`, `Move`, `Token`, parsing and inversion.
//! - `engine.rs`: the per-face strip table and `apply_move`.

mod engine;
mod types;

pub use engine::{apply_move, apply_token, Line, Strip, STRIP_CYCLES};
pub use types::{invert, invert_moves, tokenize, Move, ParseMoveError, Token, Turn};
