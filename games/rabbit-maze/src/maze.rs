use glam::IVec2;
use maze_engine::{Grid, Viewport};
use serde::Serialize;

/// Viewports narrower than this get the small board.
pub const NARROW_BREAKPOINT: f32 = 768.0;
pub const NARROW_GRID_SIZE: u32 = 8;
pub const WIDE_GRID_SIZE: u32 = 10;
pub const NARROW_CELL_PX: f32 = 40.0;
pub const WIDE_CELL_PX: f32 = 50.0;

/// Where the rabbit starts on every board size.
pub const START: IVec2 = IVec2::new(1, 1);

/// Open cells of the main route from start to gift, as (x, y).
pub const MAIN_PATH: &[(i32, i32)] = &[
    (1, 1), (2, 1), (3, 1), (4, 1),
    (4, 2), (4, 3), (5, 3), (6, 3),
    (6, 4), (6, 5), (7, 5), (8, 5),
    (8, 6), (8, 7), (8, 8),
];

/// Side branches and dead ends.
pub const EXTRA_PATH: &[(i32, i32)] = &[
    (1, 2), (1, 3), (2, 3),
    (2, 5), (3, 5), (3, 6),
    (5, 1), (6, 1), (7, 1),
    (7, 2), (5, 7), (6, 7),
];

/// A maze description: every cell is wall except the listed ones.
#[derive(Debug, Clone, Copy)]
pub struct MazeLayout {
    pub main: &'static [(i32, i32)],
    pub extra: &'static [(i32, i32)],
}

impl MazeLayout {
    fn open_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.main
            .iter()
            .chain(self.extra.iter())
            .map(|&(x, y)| IVec2::new(x, y))
    }
}

/// The one maze this game ships with.
pub const RABBIT_MAZE: MazeLayout = MazeLayout {
    main: MAIN_PATH,
    extra: EXTRA_PATH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Wall,
    Path,
}

/// Board size for a viewport.
pub fn grid_size_for(viewport: &Viewport) -> u32 {
    if viewport.is_narrow(NARROW_BREAKPOINT) {
        NARROW_GRID_SIZE
    } else {
        WIDE_GRID_SIZE
    }
}

/// Cell edge in CSS pixels for a viewport.
pub fn cell_px_for(viewport: &Viewport) -> f32 {
    if viewport.is_narrow(NARROW_BREAKPOINT) {
        NARROW_CELL_PX
    } else {
        WIDE_CELL_PX
    }
}

/// An immutable square maze with fixed start and gift cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<Tile>,
    start: IVec2,
    gift: IVec2,
}

impl Maze {
    /// Paint a `size` × `size` board: all wall, then the layout's cells, then
    /// start and gift forced open. Layout cells off the board are skipped.
    pub fn build(size: u32, layout: &MazeLayout) -> Self {
        let mut grid = Grid::square(size, Tile::Wall);
        let painted = grid.paint(layout.open_cells(), Tile::Path);

        let start = START;
        let gift = IVec2::splat(size as i32 - 2);
        grid.set(start, Tile::Path);
        grid.set(gift, Tile::Path);

        let maze = Self { grid, start, gift };
        log::debug!(
            "maze: {}x{} board, {} of {} layout cells on board, {} open",
            size,
            size,
            painted,
            layout.main.len() + layout.extra.len(),
            maze.open_count()
        );
        maze
    }

    pub fn for_viewport(viewport: &Viewport, layout: &MazeLayout) -> Self {
        Self::build(grid_size_for(viewport), layout)
    }

    pub fn size(&self) -> u32 {
        self.grid.width()
    }

    pub fn start(&self) -> IVec2 {
        self.start
    }

    pub fn gift(&self) -> IVec2 {
        self.gift
    }

    /// Tile at `pos`; None off the board.
    pub fn tile(&self, pos: IVec2) -> Option<Tile> {
        self.grid.get(pos)
    }

    pub fn open_count(&self) -> usize {
        self.grid.count(Tile::Path)
    }
}
