use thiserror::Error;

use super::state::Position;
use super::tile::TileCode;

/// Errors raised by the game core.
///
/// Configuration errors are reported before a session starts. The remaining
/// variants mean an internal invariant broke and the session must abort.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GameError {
    #[error("arena size must be at least 2, got {0}")]
    InvalidArenaSize(usize),
    #[error("arena size must be at most {max}, got {size}")]
    ArenaTooLarge { size: usize, max: usize },
    #[error("base fps must be positive, got {0}")]
    InvalidBaseFps(f64),
    #[error("base fps must be at least {min}, got {fps}")]
    BaseFpsTooLow { fps: f64, min: f64 },
    #[error("a snake needs at least one cell")]
    EmptyLayout,
    #[error("{0:?} is outside the arena")]
    OutsideArena(Position),
    #[error("food at {0:?} is under the snake")]
    FoodOnSnake(Position),
    #[error("snake stepped onto unexpected tile {tile:?} at {pos:?}")]
    UnexpectedTile { tile: TileCode, pos: Position },
    #[error("distance map has no finite neighbour at {0:?} while walking back from food")]
    BrokenPath(Position),
}
