use snake_common::{Direction, Point, SnakeGameState};

/// Greedy autopilot: heads for the food while staying on the board.
pub struct BotController;

impl BotController {
    pub fn calculate_move(state: &SnakeGameState) -> Option<Direction> {
        if state.is_game_over() {
            return None;
        }

        let current_direction = state.direction();
        let food = state.food();

        let mut best_dir = None;
        let mut best_distance = i32::MAX;

        for dir in Self::get_valid_directions(state) {
            let next_pos = state.next_head(dir);
            if !Self::is_safe_position(next_pos, state) {
                continue;
            }
            let distance = Self::manhattan_distance(next_pos, food);
            if distance < best_distance {
                best_distance = distance;
                best_dir = Some(dir);
            }
        }

        best_dir.or(Some(current_direction))
    }

    fn get_valid_directions(state: &SnakeGameState) -> Vec<Direction> {
        let current = state.direction();
        let can_reverse = state.snake().len() == 1;
        Direction::ALL
            .into_iter()
            .filter(|d| can_reverse || !d.is_opposite(&current))
            .collect()
    }

    fn is_safe_position(pos: Point, state: &SnakeGameState) -> bool {
        state.board().contains(pos) && !state.is_blocked(pos)
    }

    fn manhattan_distance(a: Point, b: Point) -> i32 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }
}
