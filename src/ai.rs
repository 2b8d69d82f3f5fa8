//! Opponent targeting engine.
//!
//! The engine decides where a computer player fires next. While no damaged
//! ship is known it searches at random; once a shot hits, it queues the
//! neighbouring cells and works through them until the queue is exhausted.
//! The engine never touches the enemy board itself: it proposes a shot, the
//! match applies it, and the outcome is fed back through
//! [`TargetingEngine::on_shot_resolved`].

use log::{debug, trace};
use rand::Rng;

use crate::common::{AttackOutcome, Location, TargetingError, TurnControl};
use crate::grid::GridView;
use crate::policy::{self, Difficulty, Policy};
use crate::target_queue::{Target, TargetQueue};

/// Hunting state, derived from the target queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No pending probes; the next shot is exploratory.
    Searching,
    /// At least one probe around a hit is pending.
    Targeting,
}

/// Per-opponent targeting state machine.
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    difficulty: Difficulty,
    policy: Policy,
    queue: TargetQueue,
    /// Queue entry fired by the last `choose_shot`, if it came from the queue.
    in_flight: Option<Target>,
    misses_this_turn: u8,
}

impl TargetingEngine {
    /// Create an engine for `difficulty` with an empty queue.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            policy: difficulty.policy(),
            queue: TargetQueue::new(),
            in_flight: None,
            misses_this_turn: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Pending probes.
    pub fn queue(&self) -> &TargetQueue {
        &self.queue
    }

    /// Misses made so far in the current turn.
    pub fn misses_this_turn(&self) -> u8 {
        self.misses_this_turn
    }

    /// `Targeting` exactly when probes are pending.
    pub fn state(&self) -> EngineState {
        if self.queue.is_empty() {
            EngineState::Searching
        } else {
            EngineState::Targeting
        }
    }

    /// Pick the next cell to fire at.
    ///
    /// The returned location is on the grid and currently
    /// [`TileView::Sea`](crate::TileView::Sea). Candidates from the active
    /// generator are drawn until one is legal; stale queue entries are
    /// discarded on the way. Fails with [`TargetingError::NoLegalCell`] when
    /// the whole grid has already been attacked.
    pub fn choose_shot<G, R>(&mut self, grid: &G, rng: &mut R) -> Result<Location, TargetingError>
    where
        G: GridView + ?Sized,
        R: Rng + ?Sized,
    {
        if !grid.has_unattacked() {
            return Err(TargetingError::NoLegalCell);
        }
        loop {
            let (candidate, probe) = match self.state() {
                EngineState::Searching => (policy::uniform_search(grid, rng), None),
                EngineState::Targeting => {
                    let target = self.next_target();
                    (target.location, Some(target))
                }
            };
            if grid.is_unattacked(candidate) {
                self.in_flight = probe;
                trace!("{} engine fires at {}", self.difficulty, candidate);
                return Ok(candidate);
            }
            if probe.is_some() {
                trace!("discarding stale probe {}", candidate);
            }
        }
    }

    fn next_target(&mut self) -> Target {
        let Some(target) = self.queue.pop() else {
            panic!("target queue is empty while the engine is targeting");
        };
        if self.queue.is_empty() {
            debug!("target queue drained, searching from next shot");
        }
        target
    }

    /// Feed back the outcome of the shot at `at`, returning whether the
    /// engine shoots again.
    ///
    /// `grid` must already reflect the shot.
    ///
    /// # Panics
    ///
    /// Panics on [`AttackOutcome::AlreadyShot`]: `choose_shot` only returns
    /// unattacked cells, so a repeated shot means the engine and the grid
    /// disagree about the board.
    pub fn on_shot_resolved<G>(
        &mut self,
        grid: &G,
        at: Location,
        outcome: AttackOutcome,
    ) -> TurnControl
    where
        G: GridView + ?Sized,
    {
        let probe = self.in_flight.take().filter(|t| t.location == at);
        match outcome {
            AttackOutcome::AlreadyShot => {
                panic!("targeting engine fired at {} which was already attacked", at)
            }
            AttackOutcome::Hit => {
                let was = self.state();
                let queued = self.policy.hit.apply(&mut self.queue, grid, at);
                if was == EngineState::Searching && queued > 0 {
                    debug!("hit at {}, targeting {} neighbours", at, queued);
                }
            }
            AttackOutcome::Destroyed(name) | AttackOutcome::GameOver(name) => {
                let dropped = self.policy.sunk.apply(&mut self.queue, grid, at);
                if dropped > 0 {
                    debug!("{} sunk, abandoning {} probes around it", name, dropped);
                }
            }
            AttackOutcome::Miss => {
                if let Some(missed) = probe {
                    self.policy.miss.apply(&mut self.queue, &missed);
                }
            }
        }
        self.turn_control(outcome)
    }

    fn turn_control(&mut self, outcome: AttackOutcome) -> TurnControl {
        let control = match outcome {
            AttackOutcome::Miss => {
                self.misses_this_turn += 1;
                if self.misses_this_turn < self.policy.miss_tolerance {
                    debug!(
                        "miss {} of {} this turn, firing again",
                        self.misses_this_turn, self.policy.miss_tolerance
                    );
                    TurnControl::ShootAgain
                } else {
                    TurnControl::PassTurn
                }
            }
            other => TurnControl::after(other),
        };
        if control == TurnControl::PassTurn {
            self.misses_this_turn = 0;
        }
        control
    }
}
