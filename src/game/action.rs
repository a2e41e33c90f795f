/// Direction the snake can move
///
/// Arena coordinates grow to the right (`+x`) and upward (`+y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour scan order shared by the pathfinder: +x, -x, +y, -y
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A move decision for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Steer towards a specific direction
    Move(Direction),
    /// Keep the current direction
    Continue,
}

/// A command consumed by the tick controller, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    ToggleDebug,
    ToggleAutopilot,
    ToggleTimeWarp,
    Kill,
    Exit,
}
