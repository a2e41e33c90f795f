/// Contents of one arena cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileCode {
    /// Never written by a rebuild; only seen before the first one
    #[default]
    Void,
    Empty,
    Food,
    SnakeBody,
    /// Oldest trail segment. It moves away before the head can arrive.
    SnakeTailNonColliding,
    SnakeHead,
    Barrier,
    OutOfBounds,
}

impl TileCode {
    /// Entering this tile kills the snake
    pub fn is_collidable(self) -> bool {
        matches!(
            self,
            TileCode::Barrier | TileCode::OutOfBounds | TileCode::SnakeBody | TileCode::SnakeHead
        )
    }

    /// The pathfinder may route through this tile
    pub fn is_traversable(self) -> bool {
        matches!(
            self,
            TileCode::Empty | TileCode::Food | TileCode::SnakeTailNonColliding
        )
    }

    pub fn is_snake(self) -> bool {
        matches!(
            self,
            TileCode::SnakeBody | TileCode::SnakeTailNonColliding | TileCode::SnakeHead
        )
    }
}
