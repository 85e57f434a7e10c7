//! Cube state model (facelet grids, six faces, solved reference).
//!
//! Conventions
//! - Face order U, D, F, B, L, R maps to indices 0..5 everywhere; the strip
//!   table in `crate::moves` is written against it.
//! - Every grid is row-major and viewed from outside the cube. Side faces
//!   (F, R, B, L) have row 0 at the top; R's column 0 touches F, B's column 0
//!   touches R, L's column 0 touches B. U has row 2 along F; D has row 0
//!   along F. Columns of U and D run left to right as seen from F.
//! - "Solved" means every facelet carries its face's canonical color. Nothing
//!   checks that a state is reachable by legal moves.

mod grid;
mod state;
mod types;

pub use grid::FaceletGrid;
pub use state::{CubeState, Mismatch};
pub use types::{Color, Face};
