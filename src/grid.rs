//! Read-only view of an opponent's sea, as seen by the attacker.

use crate::bitboard::Cells;
use crate::common::{Location, TileView};

/// Read-only interface of a grid. Lets a player inspect the opponent's sea
/// without seeing where the ships are.
pub trait GridView {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// What the attacker sees at `at`, or `None` if it lies off the grid.
    fn tile(&self, at: Location) -> Option<TileView>;

    /// Cells of the ship covering `at`, once that ship has been sunk. Sunk
    /// ships are public knowledge; afloat ones stay hidden.
    fn sunk_ship(&self, _at: Location) -> Option<Cells> {
        None
    }

    /// True when `at` is on the grid and has not been attacked.
    fn is_unattacked(&self, at: Location) -> bool {
        self.tile(at) == Some(TileView::Sea)
    }

    /// True while at least one cell is still unattacked.
    fn has_unattacked(&self) -> bool {
        (0..self.height())
            .any(|row| (0..self.width()).any(|column| self.is_unattacked(Location::new(row, column))))
    }
}
