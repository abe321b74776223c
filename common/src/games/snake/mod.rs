mod board;
mod game_state;
mod snake;
mod swipe;
mod types;

pub use board::Board;
pub use game_state::SnakeGameState;
pub use snake::Snake;
pub use swipe::direction_from_swipe;
pub use types::{
    Direction, FoodSpawnMode, GameOverReason, HorizontalConvention, Point, SelfCollisionMode,
    SnakeRules, TickOutcome,
};
