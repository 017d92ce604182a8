use itertools::iproduct;

use crate::breakout::algebra_2d::AaBB;

pub const BRICK_ROWS: usize = 5;
pub const BRICK_COLUMNS: usize = 10;

pub const BRICK_LEN_X: i32 = 75;
pub const BRICK_LEN_Y: i32 = 20;

const BRICKS_SETUP_LEFT_X: i32 = 50;
const BRICKS_SETUP_FIRST_ROW_TOP_Y: i32 = 50;

/// brick at row 0 / column 0; all other brick shapes are translated from it
const FIRST_BRICK_SHAPE: AaBB = AaBB::from_pos_size(BRICKS_SETUP_LEFT_X, BRICKS_SETUP_FIRST_ROW_TOP_Y, BRICK_LEN_X, BRICK_LEN_Y);

/// Grid of bricks without gaps in between.
/// The shape of a brick is fixed by its (row, column); only its alive flag changes over time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrickField {
    rows: usize,
    columns: usize,
    /// row-major
    alive: Vec<bool>,
}

impl BrickField {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            alive: vec![true; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn brick_shape(row: usize, column: usize) -> AaBB {
        FIRST_BRICK_SHAPE.translate(column as i32 * BRICK_LEN_X, row as i32 * BRICK_LEN_Y)
    }

    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        self.alive[self.idx(row, column)]
    }

    pub fn all_broken(&self) -> bool {
        self.alive.iter().all(|alive| !alive)
    }

    pub fn live_count(&self) -> usize {
        self.alive.iter().filter(|alive| **alive).count()
    }

    /// (row, column) of all live bricks in row-major order
    pub fn live_bricks(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(0..self.rows, 0..self.columns).filter(move |&(row, column)| self.is_alive(row, column))
    }

    /// first live brick (row-major scan) which intersects `shape`
    pub fn hit_test(&self, shape: &AaBB) -> Option<(usize, usize)> {
        self.live_bricks()
            .find(|&(row, column)| Self::brick_shape(row, column).intersects(shape))
    }

    pub fn break_brick(&mut self, row: usize, column: usize) {
        let idx = self.idx(row, column);
        self.alive[idx] = false;
    }

    pub fn reset(&mut self) {
        self.alive.fill(true);
    }

    fn idx(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows && column < self.columns, "brick ({row},{column}) out of range");
        row * self.columns + column
    }
}

impl Default for BrickField {
    fn default() -> Self {
        Self::new(BRICK_ROWS, BRICK_COLUMNS)
    }
}
