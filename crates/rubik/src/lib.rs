//! Core cube model and move engine.
//!
//! Layout
//! - `cube`: colors, faces, the 3×3 facelet grid and the six-face `CubeState`.
//! - `moves`: the 18-token move vocabulary, the strip table and the engine that
//!   applies a move to a `CubeState`, plus sequence inversion.
//! - `session`: the scramble → inverse replay → verify state machine that
//!   records every intermediate state.
//! - `scramble`: reproducible random scrambles.
//!
//! Limits
//! - There is no general solver. A session only "solves" by replaying the
//!   inverse of a scramble it applied itself; a cube scrambled elsewhere cannot
//!   be solved by this crate.
//! - No I/O and no logging here; transport and orchestration live in `cli`.

pub mod api;
pub mod cube;
pub mod moves;
pub mod scramble;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cube::{Color, CubeState, Face, FaceletGrid, Mismatch};
    pub use crate::moves::{invert, invert_moves, tokenize, Move, Token, Turn};
    pub use crate::session::{ScrambleSession, SessionCfg, SessionReport};
}
