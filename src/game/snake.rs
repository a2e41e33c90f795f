use log::debug;

use super::action::Direction;
use super::error::GameError;
use super::grid::Grid;
use super::state::{CollisionType, Position};
use super::tile::TileCode;

/// Result of advancing the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved,
    /// Ate food and grew by one
    Ate,
    /// Ate the last free cell; no food can be placed
    Filled,
    /// Hit something; nothing was mutated
    Died(CollisionType),
}

/// The snake actor. Its body lives in the grid's trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    direction: Direction,
    head: Position,
    size: usize,
}

impl Snake {
    /// Put a one-cell snake on the grid and place the first food
    pub fn spawn(grid: &mut Grid, head: Position, direction: Direction) -> Self {
        let snake = Self {
            direction,
            head,
            size: 1,
        };
        grid.push_trail(snake.size, head);
        grid.rebuild();
        grid.place_food();
        grid.rebuild();
        snake
    }

    /// Lay out an existing body, tail first, keeping the current food.
    ///
    /// Panics on an empty body.
    pub fn lay(grid: &mut Grid, cells: &[Position], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least one cell");
        for &pos in cells {
            grid.push_trail(cells.len(), pos);
        }
        grid.rebuild();
        Self {
            direction,
            head: cells[cells.len() - 1],
            size: cells.len(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Apply a pending direction. 180-degree turns are rejected.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Step one cell in the current direction.
    ///
    /// Collision is checked against the buffer built from the previous trail,
    /// so the cell the tail is about to vacate can be entered.
    pub fn advance(&mut self, grid: &mut Grid) -> Result<Advance, GameError> {
        let candidate = self.head.moved_in_direction(self.direction);
        let tile = grid.tile_at(candidate);

        if tile.is_collidable() {
            let collision = if tile.is_snake() {
                CollisionType::SelfCollision
            } else {
                CollisionType::Wall
            };
            return Ok(Advance::Died(collision));
        }
        if !tile.is_traversable() {
            return Err(GameError::UnexpectedTile {
                tile,
                pos: candidate,
            });
        }

        self.head = candidate;

        let mut outcome = Advance::Moved;
        if tile == TileCode::Food {
            self.size += 1;
            outcome = match grid.place_food() {
                Some(food) => {
                    debug!("ate food at {:?}, size {}, next food {:?}", candidate, self.size, food);
                    Advance::Ate
                }
                None => Advance::Filled,
            };
        }

        grid.push_trail(self.size, self.head);
        grid.rebuild();
        Ok(outcome)
    }
}
