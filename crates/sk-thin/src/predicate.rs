//! Zhang-Suen removability test.
//!
//! With `P2..P9` the clockwise neighbors starting north, a foreground pixel is
//! removable when:
//! - `2 <= N(P1) <= 6`, where `N` counts foreground neighbors;
//! - `S(P1) == 1`, where `S` counts `0 -> 1` steps around the closed ring;
//! - the variant-specific pair of products is zero.
//!
//! [`ZsVariant::First`] requires `P2*P4*P6 == 0` and `P4*P6*P8 == 0`;
//! [`ZsVariant::Second`] requires `P2*P4*P8 == 0` and `P2*P6*P8 == 0`.

use serde::{Deserialize, Serialize};
use sk_core::{BACKGROUND, Coord, FOREGROUND, Grid, Neighborhood};

use crate::metrics::MetricsRecorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZsVariant {
    /// Peels south-east boundaries and north-west corners.
    First,
    /// 90-degree counterpart of [`ZsVariant::First`]; peels north-west
    /// boundaries and south-east corners.
    Second,
}

/// Number of `0 -> 1` steps walking `ring` clockwise and back to its start.
pub fn transitions(ring: &[u8; 8]) -> usize {
    (0..8)
        .filter(|&i| ring[i] == BACKGROUND && ring[(i + 1) % 8] == FOREGROUND)
        .count()
}

/// Pure removability test for a pixel with value `center`.
///
/// Border pixels (incomplete neighborhood) are never removable.
pub fn is_removable(center: u8, nb: &Neighborhood, variant: ZsVariant) -> bool {
    if center != FOREGROUND {
        return false;
    }

    let Some(ring) = nb.ring() else {
        return false;
    };

    let n = nb.foreground_count();
    if !(2..=6).contains(&n) {
        return false;
    }

    if transitions(ring) != 1 {
        return false;
    }

    let [p2, _, p4, _, p6, _, p8, _] = *ring;
    match variant {
        ZsVariant::First => p2 * p4 * p6 == 0 && p4 * p6 * p8 == 0,
        ZsVariant::Second => p2 * p4 * p8 == 0 && p2 * p6 * p8 == 0,
    }
}

/// Counted evaluation of `c` against the live grid.
pub fn evaluate(grid: &Grid, c: Coord, variant: ZsVariant, rec: &mut MetricsRecorder) -> bool {
    rec.record_evaluation();
    let center = grid.get(c).unwrap_or(BACKGROUND);
    is_removable(center, &grid.neighbors(c), variant)
}

#[cfg(test)]
mod tests {
    use sk_core::{Coord, Grid};

    use super::{ZsVariant, is_removable, transitions};

    fn removable(text: &str, variant: ZsVariant) -> bool {
        let grid: Grid = text.parse().expect("valid grid");
        let c = Coord::new(1, 1);
        is_removable(grid.get(c).expect("in bounds"), &grid.neighbors(c), variant)
    }

    #[test]
    fn transition_count_wraps_around() {
        assert_eq!(transitions(&[0, 0, 0, 0, 0, 0, 0, 0]), 0);
        assert_eq!(transitions(&[1, 1, 1, 1, 1, 1, 1, 1]), 0);
        assert_eq!(transitions(&[1, 0, 0, 0, 0, 0, 0, 0]), 1);
        assert_eq!(transitions(&[1, 1, 0, 0, 0, 0, 0, 1]), 1);
        assert_eq!(transitions(&[0, 0, 0, 1, 0, 0, 0, 1]), 2);
        assert_eq!(transitions(&[1, 0, 1, 0, 1, 0, 1, 0]), 4);
    }

    #[test]
    fn corner_of_block_is_removable_under_both_variants() {
        let text = "\
            ....
            .##.
            .##.
            ....";
        assert!(removable(text, ZsVariant::First));
        assert!(removable(text, ZsVariant::Second));
    }

    #[test]
    fn neighbor_count_bounds() {
        // one neighbor: line end
        assert!(!removable("...\n.##\n...", ZsVariant::First));
        // seven neighbors
        assert!(!removable("###\n###\n##.", ZsVariant::First));
        // isolated
        assert!(!removable("...\n.#.\n...", ZsVariant::Second));
    }

    #[test]
    fn line_interior_keeps_connectivity() {
        assert!(!removable("...\n###\n...", ZsVariant::First));
        assert!(!removable("#..\n.#.\n..#", ZsVariant::Second));
    }

    #[test]
    fn background_center_is_not_removable() {
        assert!(!removable("##.\n#..\n...", ZsVariant::First));
    }

    #[test]
    fn variants_disagree_on_opposite_edges() {
        // north, east and west set; south clear
        let bottom_edge = "###\n###\n...";
        assert!(removable(bottom_edge, ZsVariant::First));
        assert!(!removable(bottom_edge, ZsVariant::Second));

        // south, east and west set; north clear
        let top_edge = "...\n###\n###";
        assert!(!removable(top_edge, ZsVariant::First));
        assert!(removable(top_edge, ZsVariant::Second));
    }

    #[test]
    fn border_pixel_is_never_removable() {
        let grid: Grid = "\
            ##..
            ##..
            ...."
            .parse()
            .expect("valid grid");
        let c = Coord::new(0, 0);
        assert!(!is_removable(1, &grid.neighbors(c), ZsVariant::First));
    }
}
