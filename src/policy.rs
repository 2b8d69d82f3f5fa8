//! Difficulty levels and the policy pieces they are assembled from.
//!
//! Every difficulty shares one [`TargetingEngine`](crate::TargetingEngine);
//! what differs is the [`Policy`] it is built with: how it reacts to hits,
//! misses and sunk ships, and how many misses it may make before the turn
//! passes.

use core::fmt;
use core::str::FromStr;

use log::debug;
use rand::Rng;

use crate::common::{Direction, Location};
use crate::grid::GridView;
use crate::target_queue::{Target, TargetQueue};

/// Computer opponent strength, fixed for the life of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Purely random shooting.
    Easy,
    /// Random search, then hunts around hits.
    #[default]
    Medium,
    /// As medium, but drops the opposite probe once a direction misses.
    Hard,
    /// As hard, but must miss twice before the turn passes.
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
        }
    }

    /// The policy an engine of this difficulty runs.
    pub fn policy(self) -> Policy {
        match self {
            Difficulty::Easy => Policy {
                hit: HitPolicy::Ignore,
                miss: MissPolicy::Keep,
                sunk: SunkPolicy::Keep,
                miss_tolerance: 1,
            },
            Difficulty::Medium => Policy {
                hit: HitPolicy::Hunt,
                miss: MissPolicy::Keep,
                sunk: SunkPolicy::Keep,
                miss_tolerance: 1,
            },
            Difficulty::Hard => Policy {
                hit: HitPolicy::Hunt,
                miss: MissPolicy::PruneOpposite,
                sunk: SunkPolicy::Abandon,
                miss_tolerance: 1,
            },
            Difficulty::Insane => Policy {
                miss_tolerance: 2,
                ..Difficulty::Hard.policy()
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownDifficulty)
    }
}

/// Returned when parsing a difficulty name fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty (expected easy, medium, hard or insane)")]
pub struct UnknownDifficulty;

/// The full behaviour of one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub hit: HitPolicy,
    pub miss: MissPolicy,
    pub sunk: SunkPolicy,
    /// Misses allowed in one turn; the last one passes the turn.
    pub miss_tolerance: u8,
}

/// Draw a cell uniformly from the whole grid. Used by every difficulty while
/// searching; the caller rejects cells that were already attacked.
pub fn uniform_search<G, R>(grid: &G, rng: &mut R) -> Location
where
    G: GridView + ?Sized,
    R: Rng + ?Sized,
{
    Location::new(
        rng.random_range(0..grid.height()),
        rng.random_range(0..grid.width()),
    )
}

/// Reaction to a shot that struck a ship without sinking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPolicy {
    /// Keep searching at random.
    Ignore,
    /// Queue the orthogonal neighbours of the hit.
    Hunt,
}

impl HitPolicy {
    /// Apply the policy to a hit at `hit`, returning how many probes were
    /// queued. Neighbours are pushed north, west, south, east and only when
    /// they are on the grid and unattacked.
    pub fn apply<G: GridView + ?Sized>(
        self,
        queue: &mut TargetQueue,
        grid: &G,
        hit: Location,
    ) -> usize {
        match self {
            HitPolicy::Ignore => 0,
            HitPolicy::Hunt => {
                let mut queued = 0;
                for direction in Direction::ALL {
                    if let Some(target) = Target::around(hit, direction) {
                        if grid.is_unattacked(target.location) {
                            queue.push(target);
                            queued += 1;
                        }
                    }
                }
                queued
            }
        }
    }
}

/// Reaction to a queued probe that missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissPolicy {
    /// Leave the queue as is.
    Keep,
    /// Drop the probe on the opposite side of the same hit.
    PruneOpposite,
}

impl MissPolicy {
    /// Apply the policy to the missed probe, returning the entry removed.
    pub fn apply(self, queue: &mut TargetQueue, missed: &Target) -> Option<Target> {
        match self {
            MissPolicy::Keep => None,
            MissPolicy::PruneOpposite => {
                let pruned = queue.remove_probe(missed.source, missed.direction.opposite());
                if let Some(target) = &pruned {
                    debug!(
                        "miss at {} prunes probe {} from hit {}",
                        missed.location, target.location, target.source
                    );
                }
                pruned
            }
        }
    }
}

/// Reaction to a shot that sank a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunkPolicy {
    /// Keep any remaining probes.
    Keep,
    /// Drop the probes derived from hits on the sunk ship. Probes around
    /// other damaged ships stay queued.
    Abandon,
}

impl SunkPolicy {
    /// Apply the policy to the shot at `sunk_at` that sank a ship, returning
    /// how many probes were dropped. When `grid` does not reveal the sunk
    /// ship, only probes around `sunk_at` itself are dropped.
    pub fn apply<G: GridView + ?Sized>(
        self,
        queue: &mut TargetQueue,
        grid: &G,
        sunk_at: Location,
    ) -> usize {
        match self {
            SunkPolicy::Keep => 0,
            SunkPolicy::Abandon => match grid.sunk_ship(sunk_at) {
                Some(ship) => queue.remove_from(|source| ship.get(source).unwrap_or(false)),
                None => queue.remove_from(|source| source == sunk_at),
            },
        }
    }
}
