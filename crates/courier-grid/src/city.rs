//! A concrete city map: width × height tile kinds in row-major order.
//!
//! # ASCII format
//!
//! One string per row, one legend code per tile:
//!
//! ```text
//! SSSSS
//! SBBPS        S  street   (cost 1.00)
//! SSSPS        B  building (blocked)
//! SBSSS        P  park     (cost 1.20, rest point)
//! ```
//!
//! All rows must have the same width and use known codes; anything else is a
//! [`GridError`] at parse time, so a constructed grid never holds unknown
//! tiles.

use courier_core::Tile;

use crate::model::GridCost;
use crate::{GridError, GridResult};

// ── TileKind ──────────────────────────────────────────────────────────────────

/// What occupies a tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Plain road, baseline traversal cost.
    Street,
    /// Impassable.
    Building,
    /// Walkable but slower; couriers recover faster resting here.
    Park,
}

impl TileKind {
    /// Legend code used by the ASCII constructor.
    pub fn code(self) -> char {
        match self {
            TileKind::Street   => 'S',
            TileKind::Building => 'B',
            TileKind::Park     => 'P',
        }
    }

    fn from_code(c: char) -> Option<TileKind> {
        match c {
            'S' => Some(TileKind::Street),
            'B' => Some(TileKind::Building),
            'P' => Some(TileKind::Park),
            _   => None,
        }
    }

    /// `true` if the kind cannot be entered.
    #[inline]
    pub fn is_blocked(self) -> bool {
        matches!(self, TileKind::Building)
    }

    /// Traversal cost multiplier for entering this kind of tile.
    #[inline]
    pub fn surface_weight(self) -> f32 {
        match self {
            TileKind::Street   => 1.0,
            TileKind::Building => 1.0, // never entered
            TileKind::Park     => 1.2,
        }
    }
}

// ── CityGrid ──────────────────────────────────────────────────────────────────

/// A rectangular tile map.
///
/// Row-major `Vec<TileKind>`; `(x, y)` with y growing downward, matching the
/// ASCII row order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityGrid {
    width: u32,
    height: u32,
    kinds: Vec<TileKind>,
}

impl CityGrid {
    /// Parse a map from ASCII rows (see the module docs for the format).
    pub fn from_ascii(rows: &[&str]) -> GridResult<CityGrid> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GridError::EmptyMap);
        }
        let width = rows[0].chars().count();

        let mut kinds = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let got = row.chars().count();
            if got != width {
                return Err(GridError::RaggedRow { row: y, expected: width, got });
            }
            for code in row.chars() {
                match TileKind::from_code(code) {
                    Some(kind) => kinds.push(kind),
                    None => return Err(GridError::UnknownCode { code, row: y }),
                }
            }
        }

        Ok(CityGrid {
            width: width as u32,
            height: rows.len() as u32,
            kinds,
        })
    }

    /// An all-street grid — handy for tests and synthetic scenarios.
    pub fn open(width: u32, height: u32) -> CityGrid {
        CityGrid {
            width,
            height,
            kinds: vec![TileKind::Street; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` when (x, y) lies inside the map extent.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// The kind at (x, y); `None` out of bounds.
    #[inline]
    pub fn kind_at(&self, x: i32, y: i32) -> Option<TileKind> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.kinds[(y as u32 * self.width + x as u32) as usize])
    }

    /// Replace the kind at (x, y).  No-op out of bounds.
    ///
    /// Mutation is a scenario-construction convenience; the engine only ever
    /// holds `&dyn GridCost` and cannot reach this.
    pub fn set_kind(&mut self, x: i32, y: i32, kind: TileKind) {
        if self.in_bounds(x, y) {
            self.kinds[(y as u32 * self.width + x as u32) as usize] = kind;
        }
    }

    /// Parks count as rest points for stamina recovery.
    #[inline]
    pub fn is_rest_point(&self, tile: Tile) -> bool {
        self.kind_at(tile.x, tile.y) == Some(TileKind::Park)
    }
}

impl GridCost for CityGrid {
    #[inline]
    fn is_blocked(&self, x: i32, y: i32) -> bool {
        // Out of bounds is always blocked.
        match self.kind_at(x, y) {
            Some(kind) => kind.is_blocked(),
            None => true,
        }
    }

    #[inline]
    fn tile_cost(&self, x: i32, y: i32) -> f32 {
        match self.kind_at(x, y) {
            Some(kind) => kind.surface_weight(),
            None => 1.0,
        }
    }
}
