use super::types::Point;

/// Snake body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Self { body: vec![head] }
    }

    pub fn from_body(body: Vec<Point>) -> Result<Self, String> {
        if body.is_empty() {
            return Err("Snake body must have at least one segment".to_string());
        }
        Ok(Self { body })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    /// True if `point` is covered by a segment that stays put after the next
    /// move. The tail vacates its cell, so it does not count.
    pub fn blocks(&self, point: Point) -> bool {
        self.body[..self.body.len() - 1].contains(&point)
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Puts the head at `new_head`; every other segment takes its predecessor's old cell.
    pub fn advance(&mut self, new_head: Point) {
        let mut previous = self.body[0];
        self.body[0] = new_head;
        for segment in self.body.iter_mut().skip(1) {
            previous = std::mem::replace(segment, previous);
        }
    }

    pub fn grow(&mut self, segment: Point) {
        self.body.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_follows_the_leader() {
        let mut snake = Snake::from_body(vec![
            Point::new(30, 10),
            Point::new(20, 10),
            Point::new(10, 10),
        ])
        .unwrap();
        snake.advance(Point::new(30, 20));
        assert_eq!(
            snake.body(),
            &[Point::new(30, 20), Point::new(30, 10), Point::new(20, 10)]
        );
    }

    #[test]
    fn test_advance_single_segment() {
        let mut snake = Snake::new(Point::new(50, 50));
        snake.advance(Point::new(50, 60));
        assert_eq!(snake.body(), &[Point::new(50, 60)]);
        assert_eq!(snake.head(), snake.tail());
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(Snake::from_body(Vec::new()).is_err());
    }

    #[test]
    fn test_blocks_ignores_tail() {
        let snake = Snake::from_body(vec![Point::new(10, 10), Point::new(20, 10)]).unwrap();
        assert!(snake.blocks(Point::new(10, 10)));
        assert!(!snake.blocks(Point::new(20, 10)));
        assert!(snake.occupies(Point::new(20, 10)));
    }
}
