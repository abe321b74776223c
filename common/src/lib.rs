pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::snake::{
    Board, Direction, FoodSpawnMode, GameOverReason, HorizontalConvention, Point,
    SelfCollisionMode, Snake, SnakeGameState, SnakeRules, TickOutcome, direction_from_swipe,
};
