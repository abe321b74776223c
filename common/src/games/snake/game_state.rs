use std::collections::HashSet;

use crate::log;
use crate::games::SessionRng;
use super::board::Board;
use super::snake::Snake;
use super::types::{
    Direction, FoodSpawnMode, GameOverReason, Point, SelfCollisionMode, SnakeRules, TickOutcome,
};

const FOOD_SPAWN_ATTEMPTS: usize = 100;

/// One play session of the single-player game. The driver owns it and is the only writer.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    board: Board,
    rules: SnakeRules,
    snake: Snake,
    food: Point,
    direction: Direction,
    game_over_reason: Option<GameOverReason>,
}

impl SnakeGameState {
    pub fn new(board: Board, rules: SnakeRules, rng: &mut SessionRng) -> Self {
        let food = board.random_position(rng);
        let head = board.random_position(rng);
        Self::from_parts(board, rules, Snake::new(head), food, Direction::Down)
    }

    pub fn from_parts(
        board: Board,
        rules: SnakeRules,
        snake: Snake,
        food: Point,
        direction: Direction,
    ) -> Self {
        Self {
            board,
            rules,
            snake,
            food,
            direction,
            game_over_reason: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &SnakeRules {
        &self.rules
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over_reason.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn score(&self) -> u32 {
        (self.snake.len() - 1) as u32
    }

    /// Reversals are accepted. With self collision ignored the snake simply folds onto itself.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Position the head would take if it moved one cell in `direction`.
    /// Saturates for a head that is already off the board.
    pub fn next_head(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset(self.rules.horizontal_convention);
        let head = self.snake.head();
        let cell = self.board.cell_size();
        Point::new(
            head.x.saturating_add(dx * cell),
            head.y.saturating_add(dy * cell),
        )
    }

    /// True if moving the head onto `point` ends the game by self collision.
    /// The tail only vacates its cell when the move does not eat.
    pub fn is_blocked(&self, point: Point) -> bool {
        match self.rules.self_collision {
            SelfCollisionMode::Ignore => false,
            SelfCollisionMode::Death if point == self.food => self.snake.occupies(point),
            SelfCollisionMode::Death => self.snake.blocks(point),
        }
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::AlreadyOver;
        }

        // bounds are checked against where the previous tick left the head
        if !self.board.contains(self.snake.head()) {
            return self.end_game(GameOverReason::WallCollision);
        }

        let new_head = self.next_head(self.direction);
        if self.is_blocked(new_head) {
            return self.end_game(GameOverReason::SelfCollision);
        }

        let old_tail = self.snake.tail();
        self.snake.advance(new_head);

        if new_head != self.food {
            return TickOutcome::Moved;
        }

        self.snake.grow(old_tail);
        log!(
            "Ate food at ({}, {}). Score: {}",
            new_head.x,
            new_head.y,
            self.score()
        );
        self.food = self.spawn_food(rng);
        TickOutcome::AteFood
    }

    pub fn restart(&mut self, rng: &mut SessionRng) {
        *self = Self::new(self.board, self.rules, rng);
        log!(
            "Restarted: head at ({}, {}), food at ({}, {})",
            self.snake.head().x,
            self.snake.head().y,
            self.food.x,
            self.food.y
        );
    }

    fn end_game(&mut self, reason: GameOverReason) -> TickOutcome {
        self.game_over_reason = Some(reason);
        log!("Game over ({:?}). Score: {}", reason, self.score());
        TickOutcome::GameOver(reason)
    }

    fn spawn_food(&self, rng: &mut SessionRng) -> Point {
        let mut position = self.board.random_position(rng);
        if self.rules.food_spawn == FoodSpawnMode::AvoidSnake {
            for _ in 1..FOOD_SPAWN_ATTEMPTS {
                if !self.snake.occupies(position) {
                    break;
                }
                position = self.board.random_position(rng);
            }
            if self.snake.occupies(position) {
                position = self.random_free_cell(rng).unwrap_or(position);
            }
        }
        log!("Food spawned at ({}, {})", position.x, position.y);
        position
    }

    fn random_free_cell(&self, rng: &mut SessionRng) -> Option<Point> {
        let occupied: HashSet<Point> = self.snake.body().iter().copied().collect();
        let free: Vec<Point> = self
            .board
            .spawn_cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[rng.random_range(0..free.len())])
    }
}
