use std::sync::Arc;

use glam::IVec2;
use maze_engine::{CellStyle, Key};
use serde::Serialize;

use crate::maze::{Maze, Tile};

/// Grid cell, (x, y) with y growing downward.
pub type Position = IVec2;

/// One grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Position {
        match self {
            Self::Up => IVec2::new(0, -1),
            Self::Down => IVec2::new(0, 1),
            Self::Left => IVec2::new(-1, 0),
            Self::Right => IVec2::new(1, 0),
        }
    }

    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(Self::Up),
            Key::ArrowDown => Some(Self::Down),
            Key::ArrowLeft => Some(Self::Left),
            Key::ArrowRight => Some(Self::Right),
            Key::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Playing,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Reset,
}

/// Why a move did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    OffBoard,
    Wall,
}

/// Side effects a transition asks for, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    MoveTone,
    ErrorTone(Blocked),
    Redraw,
    Won { steps: u32 },
    /// The session restarted; pending celebration work must be dropped.
    Restarted,
}

/// What the grid shows at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Rabbit,
    Gift,
    Wall,
    Path,
}

impl CellStyle for CellKind {
    fn css_class(&self) -> &'static str {
        match self {
            Self::Rabbit => "rabbit",
            Self::Gift => "gift",
            Self::Wall => "wall",
            Self::Path => "path",
        }
    }
}

/// Game session state. The maze is shared and never changes; everything
/// else is replaced wholesale by `transition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    maze: Arc<Maze>,
    rabbit: Position,
    steps: u32,
    phase: Phase,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub grid_size: u32,
    pub rabbit: [i32; 2],
    pub gift: [i32; 2],
    pub steps: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(maze: Arc<Maze>) -> Self {
        let rabbit = maze.start();
        Self {
            maze,
            rabbit,
            steps: 0,
            phase: Phase::Playing,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn rabbit(&self) -> Position {
        self.rabbit
    }

    pub fn gift(&self) -> Position {
        self.maze.gift()
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Rabbit over gift over wall over path.
    pub fn cell_kind(&self, pos: Position) -> CellKind {
        if pos == self.rabbit {
            CellKind::Rabbit
        } else if pos == self.gift() {
            CellKind::Gift
        } else {
            match self.maze.tile(pos) {
                Some(Tile::Path) => CellKind::Path,
                _ => CellKind::Wall,
            }
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            grid_size: self.maze.size(),
            rabbit: self.rabbit.to_array(),
            gift: self.gift().to_array(),
            steps: self.steps,
            phase: self.phase,
        }
    }

    fn check_target(&self, target: Position) -> Result<(), Blocked> {
        match self.maze.tile(target) {
            None => Err(Blocked::OffBoard),
            Some(Tile::Wall) => Err(Blocked::Wall),
            Some(Tile::Path) => Ok(()),
        }
    }
}

pub struct Transition {
    pub state: GameState,
    pub feedback: Vec<Feedback>,
}

impl Transition {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            feedback: Vec::new(),
        }
    }
}

/// Apply one action. Pure: effects come back as `Feedback` for the caller.
pub fn transition(state: &GameState, action: Action) -> Transition {
    match action {
        Action::Reset => Transition {
            state: GameState::new(Arc::clone(&state.maze)),
            feedback: vec![Feedback::Restarted, Feedback::Redraw],
        },
        // Input after the win is ignored until reset.
        Action::Move(_) if state.is_won() => Transition::unchanged(state),
        Action::Move(dir) => {
            let target = state.rabbit + dir.delta();
            if let Err(reason) = state.check_target(target) {
                return Transition {
                    state: state.clone(),
                    feedback: vec![Feedback::ErrorTone(reason)],
                };
            }

            let steps = state.steps + 1;
            let phase = if target == state.gift() {
                Phase::Won
            } else {
                Phase::Playing
            };
            let mut feedback = vec![Feedback::MoveTone, Feedback::Redraw];
            if phase == Phase::Won {
                feedback.push(Feedback::Won { steps });
            }
            Transition {
                state: GameState {
                    maze: Arc::clone(&state.maze),
                    rabbit: target,
                    steps,
                    phase,
                },
                feedback,
            }
        }
    }
}
