use alloc::format;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{
    ai::TargetingEngine,
    board::Board,
    common::{AttackOutcome, BoardError, Location, TargetingError, TurnControl},
    grid::GridView,
    player::Player,
    policy::Difficulty,
};

/// Computer player driven by a [`TargetingEngine`].
pub struct AiPlayer {
    name: String,
    engine: TargetingEngine,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            name: format!("{} AI", difficulty),
            engine: TargetingEngine::new(difficulty),
        }
    }

    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn deploy(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        board.deploy_randomly(rng)
    }

    fn choose_shot(
        &mut self,
        rng: &mut SmallRng,
        enemy: &dyn GridView,
    ) -> Result<Location, TargetingError> {
        self.engine.choose_shot(enemy, rng)
    }

    fn shot_resolved(
        &mut self,
        enemy: &dyn GridView,
        at: Location,
        outcome: AttackOutcome,
    ) -> TurnControl {
        self.engine.on_shot_resolved(enemy, at, outcome)
    }
}
