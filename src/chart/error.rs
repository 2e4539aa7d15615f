use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("lengths of x, y and z must be equal (got {x}, {y}, {z})")]
    LengthMismatch { x: usize, y: usize, z: usize },

    #[error("derived grid {x_range}x{y_range} does not match sample count {points}")]
    GridMismatch {
        x_range: usize,
        y_range: usize,
        points: usize,
    },

    #[error("surface chart requires at least one sample")]
    Empty,
}
