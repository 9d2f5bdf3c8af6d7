use thiserror::Error;

/// Reasons a raster is rejected as a thinning input.
///
/// Every variant is raised by a [`crate::Grid`] constructor, so a run never
/// starts on (and never partially mutates) an invalid grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected} cells, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("grid is not rectangular: row {row} has {actual} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid must be at least 3x3, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("unexpected character {ch:?} on line {line}")]
    Parse { line: usize, ch: char },
}
