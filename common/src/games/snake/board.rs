use crate::games::SessionRng;
use super::types::Point;

/// Playing field in board coordinates. Bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
    cell_size: i32,
}

impl Board {
    /// Board covering a display of `width` x `height` points, anchored at the origin.
    pub fn from_display(width: i32, height: i32, cell_size: i32) -> Result<Self, String> {
        Self::new(0, width, 0, height, cell_size)
    }

    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32, cell_size: i32) -> Result<Self, String> {
        if cell_size <= 0 {
            return Err("Cell size must be greater than 0".to_string());
        }
        if max_x <= min_x || max_y <= min_y {
            return Err("Board extent must be positive on both axes".to_string());
        }
        // a head may step one cell past any edge, which must stay representable
        let representable = max_x.checked_sub(min_x).is_some()
            && max_y.checked_sub(min_y).is_some()
            && max_x.checked_add(cell_size).is_some()
            && max_y.checked_add(cell_size).is_some()
            && min_x.checked_sub(cell_size).is_some()
            && min_y.checked_sub(cell_size).is_some();
        if !representable {
            return Err(format!(
                "Board bounds x {}..={} y {}..={} with cell size {} overflow i32",
                min_x, max_x, min_y, max_y, cell_size
            ));
        }
        let board = Self {
            min_x,
            max_x,
            min_y,
            max_y,
            cell_size,
        };
        // spawn draws from 1..cells, so each axis needs at least two cells
        if board.columns() < 2 || board.rows() < 2 {
            return Err(format!(
                "Board must be at least 2x2 cells, got {}x{}",
                board.columns(),
                board.rows()
            ));
        }
        Ok(board)
    }

    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        (self.max_x - self.min_x) / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        (self.max_y - self.min_y) / self.cell_size
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// Uniform cell in `1..columns` x `1..rows`. Index 0 is never drawn on either axis.
    pub fn random_position(&self, rng: &mut SessionRng) -> Point {
        let column = rng.random_range(1..self.columns());
        let row = rng.random_range(1..self.rows());
        self.cell_position(column, row)
    }

    /// Every cell `random_position` can return, column by column.
    pub fn spawn_cells(&self) -> impl Iterator<Item = Point> {
        let board = *self;
        (1..board.columns())
            .flat_map(move |column| (1..board.rows()).map(move |row| board.cell_position(column, row)))
    }

    fn cell_position(&self, column: i32, row: i32) -> Point {
        Point::new(
            self.min_x + column * self.cell_size,
            self.min_y + row * self.cell_size,
        )
    }
}
