use std::fmt;

use super::grid::FaceletGrid;
use super::types::{Color, Face};

/// Six facelet grids indexed by `Face`.
///
/// Invariants:
/// - Exactly six grids, in canonical face order.
/// - Solved only right after `reset`/`solved`; moves mutate in place and
///   nothing re-checks legality afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [FaceletGrid; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// A fresh solved cube.
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|f| FaceletGrid::filled(f.color())),
        }
    }

    /// Paint every face with its canonical color.
    pub fn reset(&mut self) {
        for f in Face::ALL {
            self.faces[f.index()] = FaceletGrid::filled(f.color());
        }
    }

    #[inline]
    pub fn face(&self, face: Face) -> &FaceletGrid {
        &self.faces[face.index()]
    }

    #[inline]
    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceletGrid {
        &mut self.faces[face.index()]
    }

    /// Grids in canonical order (U, D, F, B, L, R).
    #[inline]
    pub fn faces(&self) -> &[FaceletGrid; 6] {
        &self.faces
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&f| self.face(f).is_uniform(f.color()))
    }

    /// Every facelet that differs from its face's canonical color, face-major,
    /// then row-major, then column order. Empty iff `is_solved()`.
    pub fn mismatches(&self) -> Vec<Mismatch> {
        let mut out = Vec::new();
        for face in Face::ALL {
            let expected = face.color();
            let grid = self.face(face);
            for row in 0..3 {
                for col in 0..3 {
                    let actual = grid.get(row, col);
                    if actual != expected {
                        out.push(Mismatch {
                            face,
                            row,
                            col,
                            expected,
                            actual,
                        });
                    }
                }
            }
        }
        out
    }

    /// Turn one grid a quarter clockwise; adjacent faces are untouched.
    pub fn rotate_face_clockwise(&mut self, face: Face) {
        let grid = self.face_mut(face);
        *grid = grid.rotated_clockwise();
    }

    /// Three clockwise quarter turns, so `cw⁴ = id` and `ccw = cw⁻¹` hold by
    /// construction.
    pub fn rotate_face_counter_clockwise(&mut self, face: Face) {
        for _ in 0..3 {
            self.rotate_face_clockwise(face);
        }
    }

    /// Number of facelets of each color, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for grid in &self.faces {
            for &c in grid.cells.iter().flatten() {
                counts[c as usize] += 1;
            }
        }
        counts
    }
}

/// A facelet that disagrees with the solved reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub face: Face,
    pub row: usize,
    pub col: usize,
    pub expected: Color,
    pub actual: Color,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{},{}] expected={} actual={}",
            self.face, self.row, self.col, self.expected, self.actual
        )
    }
}

/// Unfolded net: U on top, then L F R B side by side, then D.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = |cells: [Color; 3]| -> String {
            cells
                .iter()
                .map(|c| c.as_char().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let pad = " ".repeat(6);
        for row in 0..3 {
            writeln!(f, "{pad}{}", line(self.face(Face::U).row(row)))?;
        }
        for row in 0..3 {
            let belt = [Face::L, Face::F, Face::R, Face::B]
                .iter()
                .map(|&face| line(self.face(face).row(row)))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{belt}")?;
        }
        for row in 0..3 {
            writeln!(f, "{pad}{}", line(self.face(Face::D).row(row)))?;
        }
        Ok(())
    }
}
