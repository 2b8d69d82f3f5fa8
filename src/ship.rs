//! Ship definitions and placement logic using the `Cells` mask.

use core::fmt;

use crate::bitboard::Cells;
use crate::common::{BoardError, Location};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on a board, with hits tracked in its own mask.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Location,
    mask: Cells,
    hits: Cells,
}

impl Ship {
    /// Place a ship at `origin` with `orientation` on a grid shaped like
    /// `board`. Only the dimensions of `board` are used.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        origin: Location,
        board: &Cells,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        let fits = match orientation {
            Orientation::Horizontal => {
                origin.row() < board.height() && origin.column() + len <= board.width()
            }
            Orientation::Vertical => {
                origin.column() < board.width() && origin.row() + len <= board.height()
            }
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = board.empty_like();
        for i in 0..len {
            let at = match orientation {
                Orientation::Horizontal => Location::new(origin.row(), origin.column() + i),
                Orientation::Vertical => Location::new(origin.row() + i, origin.column()),
            };
            mask.set(at)?;
        }

        Ok(Ship {
            ship_type,
            orientation,
            origin,
            mask,
            hits: board.empty_like(),
        })
    }

    /// Register a shot at `at`. Returns `true` if it struck this ship.
    pub fn strike(&mut self, at: Location) -> bool {
        if self.mask.get(at).unwrap_or(false) {
            let _ = self.hits.set(at);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Cells {
        self.mask
    }

    /// Segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits.count_ones()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits.count_ones(),
        )
    }
}
