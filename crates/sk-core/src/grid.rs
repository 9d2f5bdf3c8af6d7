use core::fmt;
use core::str::FromStr;

use crate::Error;
use crate::neighbors::Neighborhood;

pub const BACKGROUND: u8 = 0;
pub const FOREGROUND: u8 = 1;

/// Smallest accepted side length; anything thinner has no interior pixel.
pub const MIN_SIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Row-major binary raster.
///
/// Cells hold [`BACKGROUND`] or [`FOREGROUND`]. Dimensions are fixed at
/// construction and the only mutation is [`Grid::clear`], so a cell can go
/// from foreground to background but never back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Grid {
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self, Error> {
        check_dims(rows, cols)?;

        let expected = rows.checked_mul(cols).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        if let Some(i) = data.iter().position(|&v| v > FOREGROUND) {
            return Err(Error::InvalidCell {
                row: i / cols,
                col: i % cols,
                value: data[i],
            });
        }

        Ok(Self { rows, cols, data })
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        for (i, r) in rows.iter().enumerate() {
            let len = r.as_ref().len();
            if len != cols {
                return Err(Error::NotRectangular {
                    row: i,
                    expected: cols,
                    actual: len,
                });
            }
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for r in rows {
            data.extend_from_slice(r.as_ref());
        }

        Self::from_vec(rows.len(), cols, data)
    }

    pub fn new_background(rows: usize, cols: usize) -> Result<Self, Error> {
        check_dims(rows, cols)?;
        let len = rows.checked_mul(cols).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: 0,
        })?;
        Ok(Self {
            rows,
            cols,
            data: vec![BACKGROUND; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn row(&self, r: usize) -> &[u8] {
        assert!(r < self.rows, "row index out of bounds");
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    pub fn get(&self, c: Coord) -> Option<u8> {
        if !self.contains(c) {
            return None;
        }
        self.data.get(c.row * self.cols + c.col).copied()
    }

    pub fn is_foreground(&self, c: Coord) -> bool {
        self.get(c) == Some(FOREGROUND)
    }

    /// True for cells on the outermost ring.
    pub fn is_border(&self, c: Coord) -> bool {
        c.row == 0 || c.col == 0 || c.row + 1 == self.rows || c.col + 1 == self.cols
    }

    /// Flips a foreground cell to background. Returns whether the cell changed.
    pub fn clear(&mut self, c: Coord) -> bool {
        if !self.is_foreground(c) {
            return false;
        }
        self.data[c.row * self.cols + c.col] = BACKGROUND;
        true
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == FOREGROUND).count()
    }

    /// Coordinates of all non-border cells in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = Coord> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (1..rows - 1).flat_map(move |row| (1..cols - 1).map(move |col| Coord::new(row, col)))
    }

    pub fn foreground(&self) -> impl Iterator<Item = Coord> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == FOREGROUND)
            .map(|(i, _)| Coord::new(i / self.cols, i % self.cols))
    }

    pub fn neighbors(&self, c: Coord) -> Neighborhood {
        Neighborhood::of(self, c)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for &v in self.row(r) {
                f.write_str(if v == FOREGROUND { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Parses ASCII art: one row per non-empty line, `#`/`1` foreground and
/// `.`/`0` background. Leading and trailing whitespace on a line is ignored.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                let v = match ch {
                    '#' | '1' => FOREGROUND,
                    '.' | '0' => BACKGROUND,
                    _ => {
                        return Err(Error::Parse {
                            line: line_no + 1,
                            ch,
                        });
                    }
                };
                row.push(v);
            }
            rows.push(row);
        }

        Self::from_rows(&rows)
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<(), Error> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
        return Err(Error::TooSmall { rows, cols });
    }
    Ok(())
}
