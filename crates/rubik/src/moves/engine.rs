//! Strip table and move application.
//!
//! Each face owns a 4-cycle of strips on its neighbours. A strip lists its three
//! facelets in clockwise order around the turning face; `reversed` marks strips
//! where that order runs against the row/column index. A clockwise quarter turn
//! carries strip k into strip k+1 (mod 4), element by element.
//!
//! Every cycle is listed as seen looking straight at its own face. For U that
//! means F → L → B → R, and for D it means F → R → B → L. Running U or D the
//! other way makes `U` a `U'` while F, B, L, R stay as they are. The cube is
//! then no longer a legal puzzle (`(R U)` loses its order of 105), and the
//! U/D adjacency tests fail.

use crate::cube::{Color, CubeState, Face};

use super::types::{Move, Token, Turn};

/// A full row or column of one grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// Three facelets on `face` along `line`, read high-to-low index when `reversed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub line: Line,
    pub reversed: bool,
}

const fn strip(face: Face, line: Line, reversed: bool) -> Strip {
    Strip {
        face,
        line,
        reversed,
    }
}

use Face::{B, D, F, L, R, U};
use Line::{Col, Row};

/// Strip cycles indexed by `Face::index()` (U, D, F, B, L, R).
pub const STRIP_CYCLES: [[Strip; 4]; 6] = [
    // U: F → L → B → R (top rows)
    [
        strip(F, Row(0), false),
        strip(L, Row(0), false),
        strip(B, Row(0), false),
        strip(R, Row(0), false),
    ],
    // D: F → R → B → L (bottom rows)
    [
        strip(F, Row(2), false),
        strip(R, Row(2), false),
        strip(B, Row(2), false),
        strip(L, Row(2), false),
    ],
    // F: U bottom → R left → D top → L right
    [
        strip(U, Row(2), false),
        strip(R, Col(0), false),
        strip(D, Row(0), true),
        strip(L, Col(2), true),
    ],
    // B: U top → L left → D bottom → R right
    [
        strip(U, Row(0), false),
        strip(L, Col(0), true),
        strip(D, Row(2), true),
        strip(R, Col(2), false),
    ],
    // L: U left → F left → D left → B right
    [
        strip(U, Col(0), false),
        strip(F, Col(0), false),
        strip(D, Col(0), false),
        strip(B, Col(2), true),
    ],
    // R: U right → B left → D right → F right
    [
        strip(U, Col(2), false),
        strip(B, Col(0), true),
        strip(D, Col(2), false),
        strip(F, Col(2), false),
    ],
];

impl Strip {
    #[inline]
    fn cell(&self, k: usize) -> (usize, usize) {
        let i = if self.reversed { 2 - k } else { k };
        match self.line {
            Line::Row(r) => (r, i),
            Line::Col(c) => (i, c),
        }
    }

    fn read(&self, cube: &CubeState) -> [Color; 3] {
        let grid = cube.face(self.face);
        [0, 1, 2].map(|k| {
            let (r, c) = self.cell(k);
            grid.get(r, c)
        })
    }

    fn write(&self, cube: &mut CubeState, colors: [Color; 3]) {
        let grid = cube.face_mut(self.face);
        for (k, color) in colors.into_iter().enumerate() {
            let (r, c) = self.cell(k);
            grid.set(r, c, color);
        }
    }
}

/// Move strip k into strip k+shift for the given face.
fn cycle_strips(cube: &mut CubeState, face: Face, shift: usize) {
    let cycle = STRIP_CYCLES[face.index()];
    let taken = cycle.map(|s| s.read(cube));
    for (k, colors) in taken.into_iter().enumerate() {
        cycle[(k + shift) % 4].write(cube, colors);
    }
}

fn quarter_clockwise(cube: &mut CubeState, face: Face) {
    cube.rotate_face_clockwise(face);
    cycle_strips(cube, face, 1);
}

/// Apply one vocabulary move in place.
pub fn apply_move(cube: &mut CubeState, mv: Move) {
    match mv.turn {
        Turn::Clockwise => quarter_clockwise(cube, mv.face),
        Turn::CounterClockwise => {
            cube.rotate_face_counter_clockwise(mv.face);
            cycle_strips(cube, mv.face, 3);
        }
        Turn::Half => {
            quarter_clockwise(cube, mv.face);
            quarter_clockwise(cube, mv.face);
        }
    }
}

/// Apply a token; unknown tokens leave the cube untouched. Returns whether a
/// move was applied.
pub fn apply_token(cube: &mut CubeState, token: &Token) -> bool {
    match token.as_move() {
        Some(mv) => {
            apply_move(cube, mv);
            true
        }
        None => false,
    }
}

impl CubeState {
    /// Convenience for `apply_move(self, mv)`.
    #[inline]
    pub fn apply(&mut self, mv: Move) {
        apply_move(self, mv);
    }

    /// Apply a sequence in order.
    pub fn apply_all<I: IntoIterator<Item = Move>>(&mut self, moves: I) {
        for mv in moves {
            apply_move(self, mv);
        }
    }
}
