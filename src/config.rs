use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::BoardError;
use crate::ship::ShipType;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Tug", 2),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 3),
    ShipType::new("Battleship", 4),
    ShipType::new("Aircraft Carrier", 5),
];

/// Random placement gives up on a ship after this many rejected positions.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Settings shared by every match the binaries set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed RNG seed for reproducible matches.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// An empty board of the configured size with the standard fleet.
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::new(self.width, self.height)
    }

    /// Upper bound on shots in a match: each side can fire at every cell once.
    pub fn max_shots(&self) -> usize {
        2 * self.width * self.height
    }

    /// RNG for the `stream`-th match, seeded when a seed is configured.
    #[cfg(feature = "std")]
    pub fn rng(&self, stream: u64) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s.wrapping_add(stream)),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }

    /// RNG for the `stream`-th match. Without `std` there is no entropy
    /// source, so an unseeded config falls back to seed 0.
    #[cfg(not(feature = "std"))]
    pub fn rng(&self, stream: u64) -> SmallRng {
        SmallRng::seed_from_u64(self.seed.unwrap_or(0).wrapping_add(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_matches_segment_total() {
        let total: usize = FLEET.iter().map(|s| s.length()).sum();
        assert_eq!(total, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn seeded_rngs_are_reproducible() {
        use rand::Rng;
        let config = MatchConfig {
            seed: Some(42),
            ..MatchConfig::default()
        };
        let a: u64 = config.rng(1).random();
        let b: u64 = config.rng(1).random();
        assert_eq!(a, b);
    }
}
