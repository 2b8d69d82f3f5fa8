//! Game board state: fleet placement, attack resolution and the
//! attacker-facing view of the sea.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::bitboard::Cells;
use crate::common::{AttackOutcome, BoardError, Location, TileView};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::GridView;
use crate::ship::{Orientation, Ship, ShipType};

/// One player's sea: ship placements, hits and misses.
#[derive(Clone)]
pub struct Board {
    fleet: Vec<ShipType>,
    ships: Vec<Option<Ship>>,
    ship_map: Cells,
    hits: Cells,
    misses: Cells,
}

impl Board {
    /// Create an empty board of the given size carrying the standard fleet.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::with_fleet(width, height, &FLEET)
    }

    /// Create an empty board of the given size carrying `fleet`.
    pub fn with_fleet(width: usize, height: usize, fleet: &[ShipType]) -> Result<Self, BoardError> {
        let empty = Cells::try_new(width, height)?;
        Ok(Board {
            fleet: fleet.to_vec(),
            ships: alloc::vec![None; fleet.len()],
            ship_map: empty,
            hits: empty,
            misses: empty,
        })
    }

    /// Ship types this board is expected to carry.
    pub fn fleet(&self) -> &[ShipType] {
        &self.fleet
    }

    /// Placed ships, indexed like [`Board::fleet`].
    pub fn ships(&self) -> &[Option<Ship>] {
        &self.ships
    }

    /// Returns `true` once every fleet slot holds a ship.
    pub fn is_deployed(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> Cells {
        self.ship_map
    }

    pub fn hits(&self) -> Cells {
        self.hits
    }

    pub fn misses(&self) -> Cells {
        self.misses
    }

    /// Number of shots this board has received.
    pub fn shots_fired(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }

    /// Number of placed ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().flatten().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when all placed ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships_remaining() == 0
    }

    /// Place a single ship by fleet index at `origin` with `orientation`.
    pub fn place(
        &mut self,
        ship_index: usize,
        origin: Location,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let def = *self.fleet.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(def, orientation, origin, &self.ship_map)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map = self.ship_map | ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping origin and orientation for `ship_index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(Location, Orientation), BoardError> {
        let def = *self.fleet.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        let (width, height) = (self.ship_map.width(), self.ship_map.height());
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (rows, cols) = match orient {
                Orientation::Horizontal => (height, (width + 1).saturating_sub(def.length())),
                Orientation::Vertical => ((height + 1).saturating_sub(def.length()), width),
            };
            if rows == 0 || cols == 0 {
                continue;
            }
            let origin = Location::new(rng.random_range(0..rows), rng.random_range(0..cols));
            let ship = Ship::new(def, orient, origin, &self.ship_map)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((origin, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place every ship not yet on the board at a random position.
    pub fn deploy_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..self.fleet.len() {
            if self.ships[i].is_some() {
                continue;
            }
            let (origin, orient) = self.random_placement(rng, i)?;
            self.place(i, origin, orient)?;
        }
        Ok(())
    }

    /// Fire at `at`, marking the hit or miss and reporting the outcome.
    ///
    /// A repeated shot returns [`AttackOutcome::AlreadyShot`] and changes
    /// nothing.
    pub fn attack(&mut self, at: Location) -> Result<AttackOutcome, BoardError> {
        if !self.ship_map.contains(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        if self.hits.get(at)? || self.misses.get(at)? {
            return Ok(AttackOutcome::AlreadyShot);
        }
        if !self.ship_map.get(at)? {
            self.misses.set(at)?;
            return Ok(AttackOutcome::Miss);
        }

        self.hits.set(at)?;
        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|ship| ship.mask().get(at).unwrap_or(false))
            .ok_or(BoardError::UnknownShipHit(at))?;
        ship.strike(at);
        if !ship.is_sunk() {
            return Ok(AttackOutcome::Hit);
        }
        let name = ship.ship_type().name();
        debug!("{} sunk at {}", name, at);
        if self.all_sunk() {
            Ok(AttackOutcome::GameOver(name))
        } else {
            Ok(AttackOutcome::Destroyed(name))
        }
    }

    /// Owner's view of a cell, with unattacked ship segments shown.
    pub fn reveal(&self, at: Location) -> Option<TileView> {
        match self.tile(at)? {
            TileView::Sea if self.ship_map.get(at).unwrap_or(false) => Some(TileView::Ship),
            view => Some(view),
        }
    }
}

/// The attacker's view: ships are hidden as [`TileView::Sea`].
impl GridView for Board {
    fn width(&self) -> usize {
        self.ship_map.width()
    }

    fn height(&self) -> usize {
        self.ship_map.height()
    }

    fn tile(&self, at: Location) -> Option<TileView> {
        if !self.ship_map.contains(at) {
            return None;
        }
        if self.hits.get(at).unwrap_or(false) {
            Some(TileView::Hit)
        } else if self.misses.get(at).unwrap_or(false) {
            Some(TileView::Miss)
        } else {
            Some(TileView::Sea)
        }
    }

    fn sunk_ship(&self, at: Location) -> Option<Cells> {
        self.ships
            .iter()
            .flatten()
            .find(|ship| ship.is_sunk() && ship.mask().get(at).unwrap_or(false))
            .map(Ship::mask)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
