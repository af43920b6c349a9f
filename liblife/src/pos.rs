#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moore neighborhood of this position. Offsets that would underflow the
    /// coordinate space are skipped; staying inside a particular grid is the
    /// caller's concern.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        const NEIGHBOR_OFFSETS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        NEIGHBOR_OFFSETS.iter().filter_map(move |[row_off, col_off]| {
            Some(Position {
                row: self.row.checked_add_signed(*row_off)?,
                col: self.col.checked_add_signed(*col_off)?,
            })
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.col]
    }
}
