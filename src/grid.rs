//! Grid-world geometry: positions, cell types, actions, and the validated
//! grid configuration.
//!
//! The grid is immutable for the lifetime of a training run. All mutation
//! during learning happens in the Q-table and the trainer's episode state,
//! never here.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cell coordinate.
///
/// Signed so that a candidate move off the top or left edge is representable
/// before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position reached by applying an action's offset. May be out of bounds.
    pub fn offset_by(self, action: Action) -> Self {
        let (dx, dy) = action.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// What occupies a grid cell. Fixed for the lifetime of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    Empty,
    Wall,
    Start,
    Goal,
    Pit,
}

/// The four moves available to the agent, in the fixed order used to index
/// Q-value vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in Q-vector index order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Number of actions (and length of every Q-value vector).
    pub const COUNT: usize = 4;

    /// Index of this action into a Q-value vector.
    pub fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Inverse of [`Action::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// (dx, dy) offset of this action. The y axis points down.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }
}

/// Immutable grid definition: dimensions, row-major cell layout, and the
/// episode start position.
#[derive(Debug, Clone)]
pub struct GridConfig {
    width: usize,
    height: usize,
    layout: Vec<Vec<CellType>>,
    start_pos: Position,
}

impl GridConfig {
    /// Create a validated grid configuration.
    ///
    /// Rejects zero-sized grids, layouts whose shape disagrees with the
    /// declared dimensions, and start positions that are out of bounds or on
    /// a wall. Zero or multiple goal/pit cells are tolerated.
    pub fn new(
        width: usize,
        height: usize,
        layout: Vec<Vec<CellType>>,
        start_pos: Position,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }
        if layout.len() != height {
            return Err(Error::LayoutRowCount {
                expected: height,
                got: layout.len(),
            });
        }
        for (row, cells) in layout.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::LayoutRowWidth {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
        }

        let grid = Self {
            width,
            height,
            layout,
            start_pos,
        };
        match grid.cell(start_pos) {
            None => Err(Error::StartOutOfBounds {
                x: start_pos.x,
                y: start_pos.y,
            }),
            Some(CellType::Wall) => Err(Error::StartOnWall {
                x: start_pos.x,
                y: start_pos.y,
            }),
            Some(_) => Ok(grid),
        }
    }

    /// The default 8x7 training grid: a walled border, a start at (1, 1),
    /// a goal at (6, 5), and pits at (6, 1), (5, 3), and (2, 4).
    pub fn default_layout() -> Self {
        use CellType::{Empty as E, Goal as G, Pit as P, Start as S, Wall as W};
        let layout = vec![
            vec![W, W, W, W, W, W, W, W],
            vec![W, S, E, E, E, E, P, W],
            vec![W, E, W, W, E, W, E, W],
            vec![W, E, E, E, E, P, E, W],
            vec![W, E, P, W, W, W, E, W],
            vec![W, E, E, E, E, E, G, W],
            vec![W, W, W, W, W, W, W, W],
        ];
        Self::new(8, 7, layout, Position::new(1, 1)).expect("default layout is valid")
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start_pos(&self) -> Position {
        self.start_pos
    }

    /// Whether a position lies inside the grid rectangle (walls included).
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.width && pos.y >= 0 && (pos.y as usize) < self.height
    }

    /// Cell at a position, or `None` when out of bounds.
    pub fn cell(&self, pos: Position) -> Option<CellType> {
        if self.in_bounds(pos) {
            Some(self.layout[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Iterate rows of the layout, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellType]> {
        self.layout.iter().map(|row| row.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_order_matches_indices() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), *action);
        }
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Position::new(3, 3).offset_by(Action::Up), Position::new(3, 2));
        assert_eq!(Position::new(3, 3).offset_by(Action::Down), Position::new(3, 4));
        assert_eq!(Position::new(3, 3).offset_by(Action::Left), Position::new(2, 3));
        assert_eq!(Position::new(3, 3).offset_by(Action::Right), Position::new(4, 3));
    }

    #[test]
    fn test_default_layout_landmarks() {
        let grid = GridConfig::default_layout();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.start_pos(), Position::new(1, 1));
        assert_eq!(grid.cell(Position::new(1, 1)), Some(CellType::Start));
        assert_eq!(grid.cell(Position::new(6, 5)), Some(CellType::Goal));
        assert_eq!(grid.cell(Position::new(6, 1)), Some(CellType::Pit));
        assert_eq!(grid.cell(Position::new(0, 0)), Some(CellType::Wall));
    }

    #[test]
    fn test_out_of_bounds_cell_is_none() {
        let grid = GridConfig::default_layout();
        assert_eq!(grid.cell(Position::new(-1, 0)), None);
        assert_eq!(grid.cell(Position::new(0, -1)), None);
        assert_eq!(grid.cell(Position::new(8, 0)), None);
        assert_eq!(grid.cell(Position::new(0, 7)), None);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = GridConfig::new(0, 3, vec![], Position::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::EmptyGrid { width: 0, height: 3 }));
    }

    #[test]
    fn test_rejects_layout_shape_mismatch() {
        use CellType::Empty as E;
        let err = GridConfig::new(2, 2, vec![vec![E, E]], Position::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::LayoutRowCount { expected: 2, got: 1 }));

        let err =
            GridConfig::new(2, 2, vec![vec![E, E], vec![E]], Position::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            Error::LayoutRowWidth {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_rejects_bad_start_positions() {
        use CellType::{Empty as E, Wall as W};
        let layout = vec![vec![W, E], vec![E, E]];

        let err = GridConfig::new(2, 2, layout.clone(), Position::new(5, 0)).unwrap_err();
        assert!(matches!(err, Error::StartOutOfBounds { x: 5, y: 0 }));

        let err = GridConfig::new(2, 2, layout, Position::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::StartOnWall { x: 0, y: 0 }));
    }

    #[test]
    fn test_tolerates_zero_or_many_terminals() {
        use CellType::{Empty as E, Goal as G, Pit as P};
        // No goal at all
        assert!(GridConfig::new(2, 1, vec![vec![E, E]], Position::new(0, 0)).is_ok());
        // Two goals and two pits
        let layout = vec![vec![E, G], vec![G, P], vec![P, E]];
        assert!(GridConfig::new(2, 3, layout, Position::new(0, 0)).is_ok());
    }
}
