//! Fixed-size cell grid for tile-based games.
//!
//! Cells are stored in row-major order: index = y * width + x.
//! Coordinates are signed (`IVec2`) so that a neighbour lookup off the edge
//! is a plain `None` instead of an underflow.

use glam::IVec2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: u32, height: u32, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }

    /// Create a square grid.
    pub fn square(size: u32, fill: T) -> Self {
        Self::new(size, size, fill)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y as u32 * self.width + pos.x as u32) as usize)
    }

    /// Cell at `pos`, or None outside the grid.
    pub fn get(&self, pos: IVec2) -> Option<T> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set the cell at `pos`. Returns false (and does nothing) outside the grid.
    pub fn set(&mut self, pos: IVec2, value: T) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Set every in-bounds position from `positions`. Out-of-bounds entries are skipped.
    /// Returns how many were applied.
    pub fn paint<I>(&mut self, positions: I, value: T) -> usize
    where
        I: IntoIterator<Item = IVec2>,
    {
        positions
            .into_iter()
            .filter(|&pos| self.set(pos, value))
            .count()
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: T) -> usize
    where
        T: PartialEq,
    {
        self.cells.iter().filter(|&&c| c == value).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_filled() {
        let grid = Grid::square(10, 0u8);
        assert_eq!(grid.count(0), 100);
        assert_eq!(grid.width(), 10);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(5, 4, false);
        assert!(grid.set(IVec2::new(2, 3), true));
        assert_eq!(grid.get(IVec2::new(2, 3)), Some(true));
        assert_eq!(grid.get(IVec2::new(3, 2)), Some(false));
    }

    #[test]
    fn out_of_bounds_is_none() {
        let mut grid = Grid::square(5, 0u8);
        assert_eq!(grid.get(IVec2::new(-1, 0)), None);
        assert_eq!(grid.get(IVec2::new(0, 5)), None);
        assert!(!grid.set(IVec2::new(5, 5), 1));
        assert_eq!(grid.count(1), 0);
    }

    #[test]
    fn paint_skips_out_of_bounds() {
        let mut grid = Grid::square(3, '#');
        let applied = grid.paint(
            [IVec2::new(0, 0), IVec2::new(2, 2), IVec2::new(3, 1), IVec2::new(1, -1)],
            '.',
        );
        assert_eq!(applied, 2);
        assert_eq!(grid.count('.'), 2);
    }

    #[test]
    fn rectangular_grid_bounds() {
        let grid = Grid::new(3, 2, 0u8);
        assert!(grid.in_bounds(IVec2::new(2, 1)));
        assert!(!grid.in_bounds(IVec2::new(1, 2)));
        assert_eq!(grid.count(0), 6);
    }
}
