//! Bounded 8-connected neighbourhood (cardinal + diagonal).
//!
//! The grid is not a torus: offsets that leave the grid are simply absent,
//! so corner cells have 3 neighbours and edge cells have 5.

use crate::grid::Grid;
use census_core::{Coord, Offset};
use smallvec::SmallVec;

/// All 8 offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
pub const OFFSETS_8: [Offset; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// `(x + dx, y + dy)`, or `None` when either axis overflows `i32`.
fn shifted(x: i32, y: i32, (dx, dy): Offset) -> Option<Coord> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// In-bounds neighbours of `(x, y)`.
pub fn neighbours(grid: &Grid, x: i32, y: i32) -> SmallVec<[Coord; 8]> {
    OFFSETS_8
        .iter()
        .filter_map(|&d| shifted(x, y, d))
        .filter(|&(nx, ny)| grid.in_bounds(nx, ny))
        .collect()
}

/// Number of live cells among the 8 neighbours of `(x, y)`, in `[0, 8]`.
///
/// Neighbours outside the grid count as dead. The cell itself is never
/// counted.
pub fn live_neighbours(grid: &Grid, x: i32, y: i32) -> u8 {
    OFFSETS_8
        .iter()
        .filter_map(|&d| shifted(x, y, d))
        .filter(|&(nx, ny)| grid.is_alive(nx, ny))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::Cell;
    use proptest::prelude::*;

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let g = Grid::from_live_cells(3, 3, [(0, 0), (1, 1), (2, 2)]).unwrap();
        for (x, y) in [
            (i32::MAX, 0),
            (0, i32::MAX),
            (i32::MIN, 0),
            (0, i32::MIN),
            (i32::MAX, i32::MIN),
        ] {
            assert_eq!(live_neighbours(&g, x, y), 0, "({x}, {y})");
            assert!(neighbours(&g, x, y).is_empty(), "({x}, {y})");
        }
    }

    #[test]
    fn interior_has_eight_neighbours() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(neighbours(&g, 2, 2).len(), 8);
    }

    #[test]
    fn corner_has_three_neighbours() {
        let g = Grid::new(5, 5).unwrap();
        let n = neighbours(&g, 0, 0);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&(1, 0)));
        assert!(n.contains(&(0, 1)));
        assert!(n.contains(&(1, 1)));
    }

    #[test]
    fn edge_has_five_neighbours() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(neighbours(&g, 2, 0).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let g = Grid::from_live_cells(1, 1, [(0, 0)]).unwrap();
        assert!(neighbours(&g, 0, 0).is_empty());
        assert_eq!(live_neighbours(&g, 0, 0), 0);
    }

    #[test]
    fn full_interior_counts_eight() {
        let g = Grid::random(3, 3, 1.0, 0).unwrap();
        assert_eq!(live_neighbours(&g, 1, 1), 8);
        assert_eq!(live_neighbours(&g, 0, 0), 3);
    }

    #[test]
    fn no_wraparound() {
        // Live cells on the far edges must not be seen from column 0.
        let g = Grid::from_live_cells(3, 4, [(3, 0), (3, 1), (3, 2)]).unwrap();
        assert_eq!(live_neighbours(&g, 0, 1), 0);
        assert_eq!(live_neighbours(&g, 2, 1), 3);
    }

    #[test]
    fn self_not_counted() {
        let g = Grid::from_live_cells(3, 3, [(1, 1)]).unwrap();
        assert_eq!(live_neighbours(&g, 1, 1), 0);
        assert_eq!(live_neighbours(&g, 0, 0), 1);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1u32..8, 1u32..8).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(any::<bool>(), (rows * cols) as usize).prop_map(
                move |bits| {
                    let mut g = Grid::new(rows, cols).unwrap();
                    for (i, alive) in bits.into_iter().enumerate() {
                        let x = (i as u32 % cols) as i32;
                        let y = (i as u32 / cols) as i32;
                        g.set(x, y, Cell::from(alive)).unwrap();
                    }
                    g
                },
            )
        })
    }

    proptest! {
        #[test]
        fn count_matches_live_in_bounds_neighbours(
            g in arb_grid(),
            x in -1i32..9,
            y in -1i32..9,
        ) {
            let n = live_neighbours(&g, x, y);
            prop_assert!(n <= 8);
            let expected = neighbours(&g, x, y)
                .iter()
                .filter(|&&(nx, ny)| g.is_alive(nx, ny))
                .count();
            prop_assert_eq!(n as usize, expected);
        }

        #[test]
        fn neighbours_symmetric(g in arb_grid(), x in 0i32..8, y in 0i32..8) {
            prop_assume!(g.in_bounds(x, y));
            for (nx, ny) in neighbours(&g, x, y) {
                prop_assert!(neighbours(&g, nx, ny).contains(&(x, y)));
            }
        }
    }
}
