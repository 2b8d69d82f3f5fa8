//! The outer turn loop: two seats, each a player with its own board.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use log::{debug, info};
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    ai::TargetingEngine,
    board::Board,
    common::{AttackOutcome, BoardError, Location, TargetingError, TurnControl},
    player::Player,
};

/// Errors that stop a match.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The player on `seat` could not produce a shot.
    #[error("seat {seat} could not fire: {source}")]
    Targeting {
        seat: usize,
        #[source]
        source: TargetingError,
    },
    /// The shot cap was reached without a winner.
    #[error("no winner after {0} shots")]
    ShotLimit(usize),
    /// A shot was requested after the match ended.
    #[error("match is already over")]
    Finished,
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    /// The seat that sank the opponent's last ship.
    Won(usize),
}

/// One shot as it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotReport {
    pub seat: usize,
    pub at: Location,
    pub outcome: AttackOutcome,
    pub control: TurnControl,
}

/// Per-seat statistics of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SeatReport {
    pub name: String,
    pub shots: usize,
    pub hits: usize,
    pub ships_remaining: usize,
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchReport {
    /// Winning seat, if the match is over.
    pub winner: Option<usize>,
    pub seats: [SeatReport; 2],
}

struct Seat {
    player: Box<dyn Player>,
    board: Board,
    shots: usize,
    hits: usize,
}

impl Seat {
    fn new(player: Box<dyn Player>, board: Board) -> Self {
        Self {
            player,
            board,
            shots: 0,
            hits: 0,
        }
    }

    fn report(&self) -> SeatReport {
        SeatReport {
            name: self.player.name().to_string(),
            shots: self.shots,
            hits: self.hits,
            ships_remaining: self.board.ships_remaining(),
        }
    }
}

/// A match between two players. Seat 0 fires first.
pub struct Match {
    seats: [Seat; 2],
    current: usize,
    status: MatchStatus,
}

impl Match {
    /// Seat two players with their (possibly still empty) boards.
    pub fn new(
        first: Box<dyn Player>,
        first_board: Board,
        second: Box<dyn Player>,
        second_board: Board,
    ) -> Self {
        Self {
            seats: [Seat::new(first, first_board), Seat::new(second, second_board)],
            current: 0,
            status: MatchStatus::InProgress,
        }
    }

    /// Let each player place its fleet.
    pub fn deploy(&mut self, rng: &mut SmallRng) -> Result<(), MatchError> {
        for seat in self.seats.iter_mut() {
            seat.player.deploy(rng, &mut seat.board)?;
            debug!("{} deployed {} ships", seat.player.name(), seat.board.fleet().len());
        }
        Ok(())
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Board belonging to `seat`.
    pub fn board(&self, seat: usize) -> &Board {
        &self.seats[seat].board
    }

    pub fn player_name(&self, seat: usize) -> &str {
        self.seats[seat].player.name()
    }

    fn attacker_and_defender(&mut self) -> (&mut Seat, &mut Seat) {
        let [first, second] = &mut self.seats;
        if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Play a single shot for the current seat.
    pub fn play_shot(&mut self, rng: &mut SmallRng) -> Result<ShotReport, MatchError> {
        if self.status != MatchStatus::InProgress {
            return Err(MatchError::Finished);
        }
        let seat = self.current;
        let (attacker, defender) = self.attacker_and_defender();

        let at = attacker
            .player
            .choose_shot(rng, &defender.board)
            .map_err(|source| MatchError::Targeting { seat, source })?;
        let outcome = defender.board.attack(at)?;
        if outcome != AttackOutcome::AlreadyShot {
            attacker.shots += 1;
        }
        if outcome.is_hit() {
            attacker.hits += 1;
        }
        let control = attacker.player.shot_resolved(&defender.board, at, outcome);
        defender.player.opponent_shot(at, outcome);
        debug!("{} fires at {}: {}", attacker.player.name(), at, outcome);

        if let AttackOutcome::GameOver(_) = outcome {
            info!("{} wins after {} shots", attacker.player.name(), attacker.shots);
            self.status = MatchStatus::Won(seat);
        } else if control == TurnControl::PassTurn {
            self.current = 1 - seat;
        }
        Ok(ShotReport {
            seat,
            at,
            outcome,
            control,
        })
    }

    /// Play until one side wins, calling `on_shot` after every shot. Fails
    /// with [`MatchError::ShotLimit`] after `max_shots` shots in total.
    pub fn run<F>(
        &mut self,
        rng: &mut SmallRng,
        max_shots: usize,
        mut on_shot: F,
    ) -> Result<MatchReport, MatchError>
    where
        F: FnMut(&Match, &ShotReport),
    {
        info!(
            "{} vs {}",
            self.seats[0].player.name(),
            self.seats[1].player.name()
        );
        let mut fired = 0;
        while let MatchStatus::InProgress = self.status {
            if fired >= max_shots {
                return Err(MatchError::ShotLimit(max_shots));
            }
            let report = self.play_shot(rng)?;
            fired += 1;
            on_shot(&*self, &report);
        }
        Ok(self.report())
    }

    /// Statistics so far.
    pub fn report(&self) -> MatchReport {
        let winner = match self.status {
            MatchStatus::Won(seat) => Some(seat),
            MatchStatus::InProgress => None,
        };
        MatchReport {
            winner,
            seats: [self.seats[0].report(), self.seats[1].report()],
        }
    }
}

/// Let `engine` fire at `board` alone until the fleet is gone, returning the
/// number of shots it needed. Turn passing is ignored.
pub fn shots_to_sink_fleet(
    engine: &mut TargetingEngine,
    board: &mut Board,
    rng: &mut SmallRng,
) -> Result<usize, MatchError> {
    let mut shots = 0;
    loop {
        let at = engine
            .choose_shot(&*board, rng)
            .map_err(|source| MatchError::Targeting { seat: 0, source })?;
        let outcome = board.attack(at)?;
        shots += 1;
        engine.on_shot_resolved(&*board, at, outcome);
        if let AttackOutcome::GameOver(_) = outcome {
            return Ok(shots);
        }
    }
}
