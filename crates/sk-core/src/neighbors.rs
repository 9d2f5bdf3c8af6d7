use crate::grid::{BACKGROUND, Coord, FOREGROUND, Grid};

/// Relative `(row, col)` offsets of the 8-neighborhood, clockwise from north:
/// N, NE, E, SE, S, SW, W, NW.
///
/// The order is a closed walk around the center pixel; transition counting
/// depends on it.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// In-bounds neighbors of a pixel, in [`NEIGHBOR_OFFSETS`] order.
///
/// Out-of-bounds offsets are omitted (never wrapped or clamped), so a pixel on
/// the outer ring has fewer than 8 entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    coords: [Coord; 8],
    values: [u8; 8],
    len: usize,
}

impl Neighborhood {
    pub fn of(grid: &Grid, center: Coord) -> Self {
        let mut out = Self {
            coords: [Coord::default(); 8],
            values: [BACKGROUND; 8],
            len: 0,
        };

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(row), Some(col)) = (
                center.row.checked_add_signed(dr),
                center.col.checked_add_signed(dc),
            ) else {
                continue;
            };

            let c = Coord::new(row, col);
            let Some(v) = grid.get(c) else {
                continue;
            };

            out.coords[out.len] = c;
            out.values[out.len] = v;
            out.len += 1;
        }

        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len == 8
    }

    pub fn values(&self) -> &[u8] {
        &self.values[..self.len]
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords[..self.len]
    }

    /// The full clockwise ring `P2..P9`, or `None` for a border pixel.
    pub fn ring(&self) -> Option<&[u8; 8]> {
        if self.is_complete() {
            Some(&self.values)
        } else {
            None
        }
    }

    pub fn foreground_count(&self) -> usize {
        self.values().iter().filter(|&&v| v == FOREGROUND).count()
    }

    pub fn background_count(&self) -> usize {
        self.len - self.foreground_count()
    }

    pub fn foreground_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .iter()
            .zip(self.values())
            .filter(|&(_, &v)| v == FOREGROUND)
            .map(|(&c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Coord, Grid};

    #[test]
    fn interior_pixel_walks_clockwise_from_north() {
        let grid: Grid = "\
            #..
            ..#
            .#."
        .parse()
        .expect("valid grid");

        let nb = grid.neighbors(Coord::new(1, 1));
        assert!(nb.is_complete());
        assert_eq!(nb.values(), &[0, 0, 1, 0, 1, 0, 0, 1]);
        assert_eq!(nb.coords()[0], Coord::new(0, 1));
        assert_eq!(nb.coords()[2], Coord::new(1, 2));
        assert_eq!(nb.coords()[7], Coord::new(0, 0));
        assert_eq!(nb.foreground_count(), 3);
        assert_eq!(nb.background_count(), 5);
    }

    #[test]
    fn border_pixels_omit_out_of_bounds_offsets() {
        let grid = Grid::new_background(4, 4).expect("valid grid");

        let corner = grid.neighbors(Coord::new(0, 0));
        assert_eq!(corner.len(), 3);
        assert!(corner.ring().is_none());
        assert_eq!(
            corner.coords(),
            &[Coord::new(0, 1), Coord::new(1, 1), Coord::new(1, 0)]
        );

        let edge = grid.neighbors(Coord::new(3, 2));
        assert_eq!(edge.len(), 5);
        assert!(!edge.is_complete());
    }

    #[test]
    fn foreground_coords_follow_ring_order() {
        let grid: Grid = "\
            .#.
            ###
            ..."
        .parse()
        .expect("valid grid");

        let nb = grid.neighbors(Coord::new(1, 1));
        let fg: Vec<Coord> = nb.foreground_coords().collect();
        assert_eq!(fg, vec![Coord::new(0, 1), Coord::new(1, 2), Coord::new(1, 0)]);
    }
}
