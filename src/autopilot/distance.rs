use crate::game::{Direction, Grid, Position};

/// One cell of the flood-fill working map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Border, snake body, snake head before labelling, or anything else the
    /// snake cannot pass through
    Blocked,
    /// Passable but not reached yet
    Unvisited,
    /// Steps from the head
    Distance(u32),
}

impl CellState {
    pub fn distance(self) -> Option<u32> {
        match self {
            CellState::Distance(d) => Some(d),
            _ => None,
        }
    }
}

/// Distance labels from the snake's head over the whole buffer, border included
#[derive(Debug, Clone)]
pub struct DistanceMap {
    side: usize,
    cells: Vec<CellState>,
    passes: usize,
    reached_food: bool,
}

impl DistanceMap {
    /// Relax full passes until the food is labelled or a pass changes nothing.
    ///
    /// Each pass only reads labels from earlier passes, so pass `k` labels
    /// exactly the cells `k` steps away.
    pub fn flood(grid: &Grid, head: Position) -> Self {
        let side = grid.side();
        let mut cells = Vec::with_capacity(side * side);
        for by in 0..side {
            for bx in 0..side {
                let border = bx == 0 || by == 0 || bx == side - 1 || by == side - 1;
                let state = if border || !grid.buffer_tile(bx, by).is_traversable() {
                    CellState::Blocked
                } else {
                    CellState::Unvisited
                };
                cells.push(state);
            }
        }

        let mut map = Self {
            side,
            cells,
            passes: 0,
            reached_food: false,
        };
        if let Some(idx) = map.index(head) {
            map.cells[idx] = CellState::Distance(0);
        }

        let food = grid.food_pos();
        let mut updates = Vec::new();
        loop {
            if map.distance_to(food).is_some() {
                map.reached_food = true;
                break;
            }

            updates.clear();
            for by in 1..side - 1 {
                for bx in 1..side - 1 {
                    let idx = by * side + bx;
                    if map.cells[idx] != CellState::Unvisited {
                        continue;
                    }
                    let nearest = [idx + 1, idx - 1, idx + side, idx - side]
                        .into_iter()
                        .filter_map(|n| map.cells[n].distance())
                        .min();
                    if let Some(d) = nearest {
                        updates.push((idx, d + 1));
                    }
                }
            }

            if updates.is_empty() {
                break;
            }
            for &(idx, d) in &updates {
                map.cells[idx] = CellState::Distance(d);
            }
            map.passes += 1;
        }

        map
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Passes that labelled at least one cell
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn reached_food(&self) -> bool {
        self.reached_food
    }

    /// State at an interior coordinate; outside the interior is `Blocked`
    pub fn state_at(&self, pos: Position) -> CellState {
        match self.index(pos) {
            Some(idx) => self.cells[idx],
            None => CellState::Blocked,
        }
    }

    pub fn distance_to(&self, pos: Position) -> Option<u32> {
        self.state_at(pos).distance()
    }

    /// Neighbours of `pos` in scan order with their states
    pub fn neighbours(
        &self,
        pos: Position,
    ) -> impl Iterator<Item = (Direction, Position, CellState)> + '_ {
        Direction::SCAN_ORDER.into_iter().map(move |dir| {
            let next = pos.moved_in_direction(dir);
            (dir, next, self.state_at(next))
        })
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let n = self.side as i32 - 2;
        if !(0..n).contains(&pos.x) || !(0..n).contains(&pos.y) {
            return None;
        }
        Some((pos.y as usize + 1) * self.side + pos.x as usize + 1)
    }
}
