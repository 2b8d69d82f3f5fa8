//! Common types for Battleship: coordinates, tile views, attack outcomes and
//! board errors.

use core::fmt;
use thiserror::Error;

use crate::bitboard::BitGridError;

/// An immutable `(row, column)` coordinate on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    row: usize,
    column: usize,
}

impl Location {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// The location one step in `direction`, or `None` when that would leave
    /// the non-negative quadrant. Upper bounds are checked by the grid.
    pub fn step(&self, direction: Direction) -> Option<Location> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let column = self.column.checked_add_signed(dc)?;
        Some(Location::new(row, column))
    }
}

/// Column label followed by 1-based row, e.g. `C5` for `(4, 2)` and `AB1`
/// for `(0, 27)`.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ColumnLabel(self.column), self.row + 1)
    }
}

/// Spreadsheet-style column label: `A`..`Z`, then `AA`, `AB`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLabel(pub usize);

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 26 {
            write!(f, "{}", ColumnLabel(self.0 / 26 - 1))?;
        }
        write!(f, "{}", (b'A' + (self.0 % 26) as u8) as char)
    }
}

impl ColumnLabel {
    /// Parse a label of ASCII letters, ignoring case. `None` for empty or
    /// non-letter input.
    pub fn parse(label: &str) -> Option<usize> {
        if label.is_empty() {
            return None;
        }
        label
            .bytes()
            .try_fold(0usize, |acc, b| {
                if !b.is_ascii_alphabetic() {
                    return None;
                }
                let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
                acc.checked_mul(26)?.checked_add(digit)
            })
            .map(|n| n - 1)
    }
}

/// Orthogonal directions on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// Enqueue order used when hunting around a hit.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// `(row, column)` delta of one step.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
        }
    }
}

/// What a player sees at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TileView {
    /// Not attacked yet (and, for the attacker, possibly hiding a ship).
    Sea,
    /// Unattacked ship segment. Only the board's owner ever sees this.
    Ship,
    /// Attacked and struck a ship segment.
    Hit,
    /// Attacked and found open water.
    Miss,
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of the named ship.
    Destroyed(&'static str),
    /// Shot sank the named ship, which was the defender's last.
    GameOver(&'static str),
    /// The cell had already been attacked.
    AlreadyShot,
}

impl AttackOutcome {
    /// True for every outcome that struck a ship segment.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            AttackOutcome::Hit | AttackOutcome::Destroyed(_) | AttackOutcome::GameOver(_)
        )
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackOutcome::Miss => write!(f, "missed"),
            AttackOutcome::Hit => write!(f, "hit a ship"),
            AttackOutcome::Destroyed(name) => write!(f, "destroyed the {}", name),
            AttackOutcome::GameOver(name) => write!(f, "destroyed the {} and won", name),
            AttackOutcome::AlreadyShot => write!(f, "already shot that cell"),
        }
    }
}

/// Whether the shooter fires again or hands the turn to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum TurnControl {
    ShootAgain,
    PassTurn,
}

impl TurnControl {
    /// Standard rule: hits earn another shot, misses pass the turn. A repeated
    /// shot is rejected without costing the turn.
    pub fn after(outcome: AttackOutcome) -> Self {
        match outcome {
            AttackOutcome::Hit | AttackOutcome::Destroyed(_) | AttackOutcome::AlreadyShot => {
                TurnControl::ShootAgain
            }
            AttackOutcome::Miss | AttackOutcome::GameOver(_) => TurnControl::PassTurn,
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell mask error (bad dimensions or index).
    #[error("cell mask error: {0}")]
    Grid(#[from] BitGridError),
    /// Specified ship index is out of range.
    #[error("ship index is out of range")]
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    #[error("ship is already placed on the board")]
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    #[error("ship placement overlaps with another ship")]
    ShipOverlaps,
    /// Ship does not fit on the board at the requested position.
    #[error("ship placement is out of bounds")]
    ShipOutOfBounds,
    /// Random placement gave up.
    #[error("unable to place ship")]
    UnableToPlaceShip,
    /// Attack aimed outside the board.
    #[error("location {0} is outside the board")]
    OutOfBounds(Location),
    /// A marked hit did not belong to any placed ship.
    #[error("hit at {0} does not belong to any ship")]
    UnknownShipHit(Location),
}

/// Errors returned when a player cannot produce a shot.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TargetingError {
    /// Every cell of the enemy grid has already been attacked.
    #[error("no unattacked cell left to target")]
    NoLegalCell,
    /// The shooter abandoned the match (e.g. end of input).
    #[error("player forfeited")]
    Forfeit,
}
