//! Lattice cells, parity coloring, and domino pointing directions

use std::fmt;

/// The two-coloring of lattice cells by coordinate parity
///
/// Dominoes always cover one cell of each color, which is what lets the
/// tiling anchor every domino at its black cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Cells with even coordinate sum
    Black,
    /// Cells with odd coordinate sum
    White,
}

/// A unit square of the lattice, identified by its integer corner coordinates
///
/// The cell `(x, y)` covers the square `[x, x+1] × [y, y+1]`, so its center
/// sits at half-integer coordinates. Ordering is lexicographic by `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column coordinate, increasing eastward
    pub x: i32,
    /// Row coordinate, increasing northward
    pub y: i32,
}

impl Cell {
    /// Create a cell from its corner coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Parity color of this cell
    ///
    /// Determined purely by coordinates and stable across all diamond orders.
    pub const fn color(self) -> Color {
        if (self.x + self.y) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Whether this cell is black
    pub const fn is_black(self) -> bool {
        matches!(self.color(), Color::Black)
    }

    /// The cell displaced by the given offset
    pub const fn offset(self, delta: [i32; 2]) -> Self {
        Self {
            x: self.x + delta[0],
            y: self.y + delta[1],
        }
    }

    /// The adjacent cell one step in the given direction
    ///
    /// The neighbor may lie outside any particular diamond; callers check
    /// membership themselves.
    pub const fn neighbor(self, direction: Direction) -> Self {
        self.offset(direction.step())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The direction a domino points, i.e. the way one sliding step moves it
///
/// North and South dominoes span two cells of one row and slide vertically;
/// East and West dominoes span two cells of one column and slide
/// horizontally. Kept as a closed enum so every phase's handling is checked
/// for exhaustiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Slides up one row per cycle
    North,
    /// Slides down one row per cycle
    South,
    /// Slides right one column per cycle
    East,
    /// Slides left one column per cycle
    West,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Unit displacement of one sliding step
    pub const fn step(self) -> [i32; 2] {
        match self {
            Self::North => [0, 1],
            Self::South => [0, -1],
            Self::East => [1, 0],
            Self::West => [-1, 0],
        }
    }

    /// Offset from a domino's lesser cell to its greater cell
    ///
    /// North/South dominoes extend along `x`, East/West along `y`.
    pub const fn extent(self) -> [i32; 2] {
        match self {
            Self::North | Self::South => [1, 0],
            Self::East | Self::West => [0, 1],
        }
    }

    /// The direction pointing the opposite way
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Whether this direction increases a coordinate when sliding
    ///
    /// North and East are the positive directions; the distinction drives the
    /// parity rule that recovers a domino's extent from its anchor.
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::North | Self::East)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        write!(f, "{name}")
    }
}
