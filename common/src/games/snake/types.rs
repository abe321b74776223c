use serde::{Deserialize, Serialize};

/// Board coordinates. Everything the simulation produces is a multiple of the cell size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Unit step in cells. Screen y grows downwards.
    pub fn offset(&self, convention: HorizontalConvention) -> (i32, i32) {
        let horizontal = match convention {
            HorizontalConvention::Mirrored => -1,
            HorizontalConvention::Screen => 1,
        };
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-horizontal, 0),
            Direction::Right => (horizontal, 0),
        }
    }
}

/// How the Left/Right labels map onto the x axis.
///
/// `Mirrored` is the classic mobile layout of this game: `Left` moves
/// towards larger x and `Right` towards smaller x. Swipe mapping uses the same
/// convention, so a physical swipe moves the snake the way the finger went
/// under either setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalConvention {
    #[default]
    Mirrored,
    Screen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfCollisionMode {
    #[default]
    Ignore,
    Death,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodSpawnMode {
    #[default]
    Anywhere,
    AvoidSnake,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeRules {
    #[serde(default)]
    pub horizontal_convention: HorizontalConvention,
    #[serde(default)]
    pub self_collision: SelfCollisionMode,
    #[serde(default)]
    pub food_spawn: FoodSpawnMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    AteFood,
    GameOver(GameOverReason),
    AlreadyOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_offsets_invert_horizontal_axis() {
        let convention = HorizontalConvention::Mirrored;
        assert_eq!(Direction::Left.offset(convention), (1, 0));
        assert_eq!(Direction::Right.offset(convention), (-1, 0));
        assert_eq!(Direction::Up.offset(convention), (0, -1));
        assert_eq!(Direction::Down.offset(convention), (0, 1));
    }

    #[test]
    fn test_screen_offsets() {
        let convention = HorizontalConvention::Screen;
        assert_eq!(Direction::Left.offset(convention), (-1, 0));
        assert_eq!(Direction::Right.offset(convention), (1, 0));
    }

    #[test]
    fn test_is_opposite() {
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }
}
