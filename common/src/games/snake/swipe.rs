use super::types::{Direction, HorizontalConvention};

/// Turns a drag from `start` to `end` (screen points) into a heading.
///
/// The dominant axis wins; a tie counts as horizontal. Returns `None` when the
/// two points coincide.
pub fn direction_from_swipe(
    start: (f64, f64),
    end: (f64, f64),
    convention: HorizontalConvention,
) -> Option<Direction> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;

    if dy.abs() > dx.abs() {
        return if dy > 0.0 { Some(Direction::Down) } else { Some(Direction::Up) };
    }

    if dx == 0.0 {
        return None;
    }

    let towards_larger_x = dx > 0.0;
    let direction = match (convention, towards_larger_x) {
        (HorizontalConvention::Mirrored, true) => Direction::Left,
        (HorizontalConvention::Mirrored, false) => Direction::Right,
        (HorizontalConvention::Screen, true) => Direction::Right,
        (HorizontalConvention::Screen, false) => Direction::Left,
    };
    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIRRORED: HorizontalConvention = HorizontalConvention::Mirrored;
    const SCREEN: HorizontalConvention = HorizontalConvention::Screen;

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(direction_from_swipe((100.0, 100.0), (110.0, 200.0), MIRRORED), Some(Direction::Down));
        assert_eq!(direction_from_swipe((100.0, 100.0), (90.0, 20.0), MIRRORED), Some(Direction::Up));
        assert_eq!(direction_from_swipe((100.0, 100.0), (100.0, 20.0), SCREEN), Some(Direction::Up));
    }

    #[test]
    fn test_horizontal_swipes_mirrored() {
        assert_eq!(direction_from_swipe((100.0, 100.0), (20.0, 110.0), MIRRORED), Some(Direction::Right));
        assert_eq!(direction_from_swipe((100.0, 100.0), (180.0, 90.0), MIRRORED), Some(Direction::Left));
    }

    #[test]
    fn test_horizontal_swipes_screen() {
        assert_eq!(direction_from_swipe((100.0, 100.0), (20.0, 110.0), SCREEN), Some(Direction::Left));
        assert_eq!(direction_from_swipe((100.0, 100.0), (180.0, 90.0), SCREEN), Some(Direction::Right));
    }

    #[test]
    fn test_swipe_moves_snake_with_the_finger() {
        for convention in [MIRRORED, SCREEN] {
            let direction = direction_from_swipe((100.0, 0.0), (0.0, 0.0), convention).unwrap();
            assert_eq!(direction.offset(convention), (-1, 0));
            let direction = direction_from_swipe((0.0, 0.0), (100.0, 0.0), convention).unwrap();
            assert_eq!(direction.offset(convention), (1, 0));
        }
    }

    #[test]
    fn test_diagonal_tie_is_horizontal() {
        assert_eq!(direction_from_swipe((0.0, 0.0), (50.0, 50.0), SCREEN), Some(Direction::Right));
    }

    #[test]
    fn test_no_movement() {
        assert_eq!(direction_from_swipe((42.0, 42.0), (42.0, 42.0), MIRRORED), None);
    }
}
