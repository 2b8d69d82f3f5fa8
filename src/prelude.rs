//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, AttackOutcome, Board, Difficulty, EngineState, GridView, Location, Match,
    MatchConfig, Player, TargetingEngine, TileView, TurnControl,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::print_player_view, CliPlayer};
