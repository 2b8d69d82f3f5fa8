use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{AttackOutcome, BoardError, Location, TargetingError, TurnControl},
    grid::GridView,
};

/// Interface implemented by different player types.
///
/// A player places its fleet, chooses where to fire on the opponent's sea and
/// is told how each shot went. The match owns both boards and applies shots;
/// players only see the opponent through a [`GridView`].
pub trait Player {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Place the whole fleet onto the player's own board.
    fn deploy(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next cell to attack on the opponent's sea.
    fn choose_shot(
        &mut self,
        rng: &mut SmallRng,
        enemy: &dyn GridView,
    ) -> Result<Location, TargetingError>;

    /// Inform the player of the result of its last shot. `enemy` already
    /// reflects the shot.
    fn shot_resolved(
        &mut self,
        _enemy: &dyn GridView,
        _at: Location,
        outcome: AttackOutcome,
    ) -> TurnControl {
        TurnControl::after(outcome)
    }

    /// Inform the player of an opponent shot against its board.
    fn opponent_shot(&mut self, _at: Location, _outcome: AttackOutcome) {}
}
