use itertools::Itertools;

use crate::error::GridError;
use crate::pos::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub fn toggled(self) -> CellState {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

/// A bounded Life board. Cells beyond the edge are dead; there is no
/// wrap-around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![CellState::default(); width * height],
        })
    }

    /// An otherwise empty grid with `alive_cells` distinct cells brought to
    /// life at uniformly chosen positions.
    pub fn with_random_cells(
        width: usize,
        height: usize,
        alive_cells: usize,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;

        let mut open_positions = (0..height)
            .cartesian_product(0..width)
            .map(Position::from)
            .collect_vec();

        if alive_cells > open_positions.len() {
            return Err(GridError::TooManyCells {
                requested: alive_cells,
                capacity: open_positions.len(),
            });
        }

        for _ in 0..alive_cells {
            let chosen_index = rand::random_range(0..open_positions.len());
            let chosen = open_positions.swap_remove(chosen_index);

            grid.set_alive(chosen)?;
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_inside<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();
        row < self.height && col < self.width
    }

    pub fn cell<P>(&self, pos: P) -> Option<&CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn is_alive<P>(&self, pos: P) -> Result<bool, GridError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        self.cell(pos)
            .map(|cell| cell.is_alive())
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    pub fn set_alive<P>(&mut self, pos: P) -> Result<(), GridError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self.pos_to_index(pos).ok_or(self.out_of_bounds(pos))?;

        self.cells[index] = CellState::Alive;
        Ok(())
    }

    pub fn toggle<P>(&mut self, pos: P) -> Result<CellState, GridError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self.pos_to_index(pos).ok_or(self.out_of_bounds(pos))?;

        self.cells[index] = self.cells[index].toggled();
        Ok(self.cells[index])
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    pub fn neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        pos.into()
            .neighbors()
            .filter_map(|neighbor| self.cell(neighbor))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    /// The state this cell takes in the next generation: under- and
    /// over-populated cells die, exactly three live neighbors makes a live
    /// cell, two leaves the cell as it was.
    pub fn next_state<P>(&self, pos: P) -> CellState
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        match self.neighbor_count(pos) {
            2 => self.cell(pos).copied().unwrap_or_default(),
            3 => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    /// Advance one generation. The next matrix is computed entirely from the
    /// current one before it replaces it, so neighbor counts never observe a
    /// partially updated board.
    pub fn step(&mut self) {
        let next_cells = self
            .enumerate_cells()
            .map(|(pos, _)| self.next_state(pos))
            .collect();

        self.cells = next_cells;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &CellState)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    fn out_of_bounds(&self, pos: Position) -> GridError {
        GridError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            width: self.width,
            height: self.height,
        }
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        if !self.is_inside(pos) {
            return None;
        }

        Some(pos.col + pos.row * self.width)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.width,
            col: index % self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 0);
        assert!(grid.enumerate_cells().all(|(_, cell)| !cell.is_alive()));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimensions { width: 5, height: 0 })
        );
    }

    #[test]
    fn is_inside_matches_the_dimensions() {
        let grid = Grid::new(4, 3).unwrap();

        assert!(grid.is_inside([0, 0]));
        assert!(grid.is_inside([2, 3]));
        assert!(!grid.is_inside([3, 0]));
        assert!(!grid.is_inside([0, 4]));
    }

    #[test]
    fn set_alive_touches_only_its_cell() {
        let mut grid = Grid::new(4, 3).unwrap();

        grid.set_alive([1, 2]).unwrap();

        for (pos, cell) in grid.enumerate_cells() {
            assert_eq!(cell.is_alive(), pos == Position::new(1, 2));
        }
    }

    #[test]
    fn mutation_outside_the_grid_is_an_error() {
        let mut grid = Grid::new(3, 3).unwrap();
        let expected = GridError::OutOfBounds {
            row: 5,
            col: 0,
            width: 3,
            height: 3,
        };

        assert_eq!(grid.set_alive([5, 0]), Err(expected));
        assert_eq!(grid.toggle([5, 0]), Err(expected));
        assert_eq!(grid.is_alive([5, 0]), Err(expected));
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut grid = Grid::new(3, 3).unwrap();

        assert_eq!(grid.toggle([1, 1]), Ok(CellState::Alive));
        assert_eq!(grid.toggle([1, 1]), Ok(CellState::Dead));
        assert_eq!(grid.is_alive([1, 1]), Ok(false));
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_alive([0, 0]).unwrap();
        grid.set_alive([3, 3]).unwrap();

        grid.clear();

        assert_eq!(grid.population(), 0);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 4);
    }

    #[test]
    fn neighbor_count_is_zero_on_a_dead_grid() {
        let grid = Grid::new(5, 5).unwrap();

        for (pos, _) in grid.enumerate_cells() {
            assert_eq!(grid.neighbor_count(pos), 0);
        }
    }

    #[test]
    fn neighbor_count_ignores_cells_beyond_the_edge() {
        let mut grid = Grid::new(3, 3).unwrap();
        for pos in (0..3).cartesian_product(0..3) {
            grid.set_alive(pos).unwrap();
        }

        // A corner sees 3 of its 8 offsets, an edge cell 5, the center all 8.
        assert_eq!(grid.neighbor_count([0, 0]), 3);
        assert_eq!(grid.neighbor_count([2, 2]), 3);
        assert_eq!(grid.neighbor_count([0, 1]), 5);
        assert_eq!(grid.neighbor_count([1, 1]), 8);
    }

    #[test]
    fn lonely_cells_die() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_alive([2, 2]).unwrap();

        assert_eq!(grid.next_state([2, 2]), CellState::Dead);

        grid.set_alive([2, 3]).unwrap();

        assert_eq!(grid.next_state([2, 2]), CellState::Dead);
    }

    #[test]
    fn two_neighbors_preserve_the_current_state() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_alive([2, 1]).unwrap();
        grid.set_alive([2, 3]).unwrap();

        // (2, 2) is dead with two live neighbors and stays dead; making it
        // alive makes it survive instead.
        assert_eq!(grid.next_state([2, 2]), CellState::Dead);

        grid.set_alive([2, 2]).unwrap();

        assert_eq!(grid.next_state([2, 2]), CellState::Alive);
    }

    #[test]
    fn three_neighbors_make_a_live_cell() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_alive([1, 1]).unwrap();
        grid.set_alive([1, 2]).unwrap();
        grid.set_alive([1, 3]).unwrap();

        assert_eq!(grid.next_state([2, 2]), CellState::Alive);

        grid.set_alive([2, 2]).unwrap();

        assert_eq!(grid.next_state([2, 2]), CellState::Alive);
    }

    #[test]
    fn crowded_cells_die() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_alive([1, 1]).unwrap();
        grid.set_alive([1, 2]).unwrap();
        grid.set_alive([1, 3]).unwrap();
        grid.set_alive([2, 1]).unwrap();
        grid.set_alive([2, 2]).unwrap();

        assert_eq!(grid.neighbor_count([2, 2]), 4);
        assert_eq!(grid.next_state([2, 2]), CellState::Dead);
    }

    #[test]
    fn random_seeding_places_the_requested_population() {
        let grid = Grid::with_random_cells(10, 8, 25).unwrap();

        assert_eq!(grid.population(), 25);
    }

    #[test]
    fn random_seeding_rejects_impossible_requests() {
        assert_eq!(
            Grid::with_random_cells(3, 3, 10),
            Err(GridError::TooManyCells {
                requested: 10,
                capacity: 9,
            })
        );
    }
}
