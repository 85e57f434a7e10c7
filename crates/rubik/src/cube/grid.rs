use super::types::Color;

/// One face: 3×3 colors, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceletGrid {
    pub cells: [[Color; 3]; 3],
}

impl FaceletGrid {
    #[inline]
    pub fn filled(color: Color) -> Self {
        Self {
            cells: [[color; 3]; 3],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row][col] = color;
    }

    #[inline]
    pub fn row(&self, row: usize) -> [Color; 3] {
        self.cells[row]
    }

    #[inline]
    pub fn col(&self, col: usize) -> [Color; 3] {
        [self.cells[0][col], self.cells[1][col], self.cells[2][col]]
    }

    /// Quarter turn clockwise (seen from outside): `new[i][j] = old[2-j][i]`.
    pub fn rotated_clockwise(&self) -> Self {
        let mut out = *self;
        for i in 0..3 {
            for j in 0..3 {
                out.cells[i][j] = self.cells[2 - j][i];
            }
        }
        out
    }

    /// True iff all nine facelets equal `color`.
    pub fn is_uniform(&self, color: Color) -> bool {
        self.cells.iter().flatten().all(|&c| c == color)
    }
}
