use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

use super::state::Position;
use super::tile::TileCode;

/// The arena: tile buffer, food position and snake trail.
///
/// The tile buffer is square with side `interior + 2` and is stored row-major
/// in buffer coordinates, where interior cell `(x, y)` lives at `(x + 1, y + 1)`.
/// It is never patched in place: every mutation of the trail or food is
/// followed by a full [`Grid::rebuild`].
#[derive(Debug, Clone)]
pub struct Grid {
    interior: usize,
    tiles: Vec<TileCode>,
    food: Position,
    trail: VecDeque<Position>,
    rng: StdRng,
}

impl Grid {
    pub fn new(interior: usize, rng: StdRng) -> Self {
        let side = interior + 2;
        Self {
            interior,
            tiles: vec![TileCode::Void; side * side],
            food: Position::default(),
            trail: VecDeque::with_capacity(interior * interior),
            rng,
        }
    }

    /// Side length including the border
    pub fn side(&self) -> usize {
        self.interior + 2
    }

    /// Row-major tile buffer, border included
    pub fn tiles(&self) -> &[TileCode] {
        &self.tiles
    }

    pub fn food_pos(&self) -> Position {
        self.food
    }

    /// Snake cells, oldest first; the back element is the head
    pub fn trail(&self) -> &VecDeque<Position> {
        &self.trail
    }

    /// Raw buffer access in border-inclusive coordinates
    pub fn buffer_tile(&self, bx: usize, by: usize) -> TileCode {
        let side = self.side();
        if bx >= side || by >= side {
            return TileCode::OutOfBounds;
        }
        self.tiles[by * side + bx]
    }

    /// Tile at an interior coordinate; anything outside the interior is `OutOfBounds`
    pub fn tile_at(&self, pos: Position) -> TileCode {
        match self.buffer_index(pos) {
            Some(idx) => self.tiles[idx],
            None => TileCode::OutOfBounds,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        let n = self.interior as i32;
        (0..n).contains(&pos.x) && (0..n).contains(&pos.y)
    }

    fn buffer_index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.y as usize + 1) * self.side() + pos.x as usize + 1)
    }

    /// Pick a new food cell uniformly among `Empty` interior tiles.
    ///
    /// Samples against the current buffer, so callers rebuild afterwards.
    /// Returns `None` without touching the food when no tile is `Empty`.
    pub fn place_food(&mut self) -> Option<Position> {
        // the border is never Empty, so this only sees the interior
        if !self.tiles.contains(&TileCode::Empty) {
            return None;
        }

        loop {
            let x = self.rng.gen_range(0..self.interior) as i32;
            let y = self.rng.gen_range(0..self.interior) as i32;
            let pos = Position::new(x, y);

            if self.tile_at(pos) == TileCode::Empty {
                self.food = pos;
                return Some(pos);
            }
        }
    }

    /// Move the food without sampling. Callers rebuild afterwards.
    pub fn set_food(&mut self, pos: Position) {
        debug_assert!(self.contains(pos), "food outside the interior: {pos:?}");
        self.food = pos;
    }

    /// Append the new head and drop the oldest cells beyond `max_len`
    pub fn push_trail(&mut self, max_len: usize, new_pos: Position) -> &VecDeque<Position> {
        self.trail.push_back(new_pos);
        while self.trail.len() > max_len {
            self.trail.pop_front();
        }
        &self.trail
    }

    /// Recompute every tile from the trail and food.
    ///
    /// Stamp order matters: border and empty interior, then food, then the
    /// trail, so a trail cell always wins over food.
    pub fn rebuild(&mut self) {
        let side = self.side();
        for by in 0..side {
            for bx in 0..side {
                let border = bx == 0 || by == 0 || bx == side - 1 || by == side - 1;
                self.tiles[by * side + bx] = if border {
                    TileCode::Barrier
                } else {
                    TileCode::Empty
                };
            }
        }

        if let Some(idx) = self.buffer_index(self.food) {
            self.tiles[idx] = TileCode::Food;
        }

        let last = self.trail.len().saturating_sub(1);
        for (i, &pos) in self.trail.iter().enumerate() {
            // a one-cell trail is head and tail at once; head wins
            let tile = if i == last {
                TileCode::SnakeHead
            } else if i == 0 {
                TileCode::SnakeTailNonColliding
            } else {
                TileCode::SnakeBody
            };
            if let Some(idx) = self.buffer_index(pos) {
                self.tiles[idx] = tile;
            }
        }
    }
}
