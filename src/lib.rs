#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod policy;
mod ship;
mod target_queue;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use ai::*;
pub use bitboard::{BitGrid, BitGridError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use policy::*;
pub use ship::*;
pub use target_queue::*;
