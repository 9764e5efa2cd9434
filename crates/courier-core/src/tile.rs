//! Tile-grid coordinates and cardinal directions.
//!
//! A `Tile` is the sole unit waypoints are expressed in: integer (x, y),
//! x growing rightward, y growing downward (screen convention).  Coordinates
//! are signed so out-of-bounds queries are representable; the grid layer
//! answers `blocked = true` for anything outside its extent.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal movement directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the canonical expansion order.
    ///
    /// Planners iterate neighbors in this order; first-minimum tie-breaking
    /// therefore resolves the same way on every run.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The (dx, dy) step this direction applies.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tile ──────────────────────────────────────────────────────────────────────

/// A grid cell address.
///
/// `Ord` is the derived lexicographic (x, y) order; the Dijkstra heap uses it
/// as a secondary key so equal-cost pops are deterministic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Tile) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` when `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Tile) -> bool {
        self.manhattan(other) == 1
    }

    /// The tile one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Tile {
        let (dx, dy) = dir.delta();
        Tile::new(self.x + dx, self.y + dy)
    }

    /// The four cardinal neighbors, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors4(self) -> [Tile; 4] {
        [
            self.step(Direction::Up),
            self.step(Direction::Down),
            self.step(Direction::Left),
            self.step(Direction::Right),
        ]
    }

    /// Cardinal direction from `self` toward `other`, x axis first.
    ///
    /// Exact for adjacent tiles.  For farther tiles this yields the
    /// dominant-x heading, which walks the agent one axis at a time;
    /// `None` only when the tiles are equal.
    pub fn direction_to(self, other: Tile) -> Option<Direction> {
        if other.x < self.x {
            Some(Direction::Left)
        } else if other.x > self.x {
            Some(Direction::Right)
        } else if other.y < self.y {
            Some(Direction::Up)
        } else if other.y > self.y {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Tile {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Tile::new(x, y)
    }
}
