//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The arena is a square grid with a one-tile border, rebuilt from the snake
//! trail and food after every move.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tile;

// Re-export commonly used types
pub use action::{Action, Direction, Input};
pub use config::{GameConfig, MAX_ARENA_SIZE, MIN_BASE_FPS};
pub use engine::{Flags, GameEngine, Summary, TickOutcome};
pub use error::GameError;
pub use grid::Grid;
pub use snake::{Advance, Snake};
pub use state::{CollisionType, Phase, Position};
pub use tile::TileCode;
