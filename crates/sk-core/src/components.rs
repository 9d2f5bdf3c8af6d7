use crate::grid::{Coord, FOREGROUND, Grid};

/// Number of 8-connected foreground components.
pub fn count_components(grid: &Grid) -> usize {
    let cols = grid.cols();
    let data = grid.data();
    let mut seen = vec![0_u8; data.len()];
    let mut stack = Vec::new();
    let mut count = 0;

    for i in 0..data.len() {
        if data[i] != FOREGROUND || seen[i] != 0 {
            continue;
        }

        count += 1;
        seen[i] = 1;
        stack.clear();
        stack.push(i);

        while let Some(p) = stack.pop() {
            let nb = grid.neighbors(Coord::new(p / cols, p % cols));
            for c in nb.foreground_coords() {
                let q = c.row * cols + c.col;
                if seen[q] == 0 {
                    seen[q] = 1;
                    stack.push(q);
                }
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use crate::{Grid, count_components};

    #[test]
    fn diagonal_contact_joins_components() {
        let grid: Grid = "\
            #....
            .#...
            ...##
            .....
            #...#"
            .parse()
            .expect("valid grid");

        assert_eq!(count_components(&grid), 4);
    }

    #[test]
    fn empty_grid_has_no_components() {
        let grid = Grid::new_background(3, 3).expect("valid grid");
        assert_eq!(count_components(&grid), 0);
    }
}
