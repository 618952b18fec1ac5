//! Anchor-based shape matching with overlap suppression.
//!
//! Classification is greedy and order-sensitive. At a given anchor, kinds
//! are tried in [`ShapeKind::PRIORITY`] order and each kind's variants in
//! library order; the first variant whose cells are all in range, alive and
//! not yet claimed wins. There is no backtracking and no attempt at a
//! globally optimal decomposition: which cluster is reported depends on the
//! priority table and on the row-major order in which the driver offers
//! anchors.

use crate::library::{PhaseVariant, ShapeLibrary};
use census_core::{Coord, GridError, ShapeKind};
use census_grid::{Grid, VisitedMask};
use smallvec::SmallVec;

/// A successful classification at one anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeMatch {
    /// Kind that matched.
    pub kind: ShapeKind,
    /// Index of the matching variant within the kind's phase list.
    pub phase: usize,
    /// Anchor the variant was laid out from.
    pub anchor: Coord,
    /// Absolute coordinates of the matched cells, in offset order, without
    /// duplicates. These are the cells to mark visited.
    pub cells: SmallVec<[Coord; 12]>,
}

/// Pattern matcher over a borrowed [`ShapeLibrary`].
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    library: &'a ShapeLibrary,
}

impl<'a> Matcher<'a> {
    /// Create a matcher that consults `library`.
    pub fn new(library: &'a ShapeLibrary) -> Self {
        Self { library }
    }

    /// Try every kind, in priority order, anchored at `(x, y)`.
    ///
    /// Returns `Ok(None)` when nothing fits. Cells already marked in
    /// `visited` are treated as unavailable, so a match never overlaps an
    /// earlier one from the same pass. `visited` is only read; marking is
    /// the caller's job.
    ///
    /// # Errors
    ///
    /// Invariant faults only: the anchor lies outside the grid, or
    /// `visited` does not have the grid's dimensions.
    pub fn classify(
        &self,
        grid: &Grid,
        visited: &VisitedMask,
        x: i32,
        y: i32,
    ) -> Result<Option<ShapeMatch>, GridError> {
        if !visited.matches_dimensions(grid) {
            return Err(GridError::DimensionMismatch {
                expected: grid.dimensions(),
                found: visited.dimensions(),
            });
        }
        grid.cell(x, y)?;

        for kind in ShapeKind::PRIORITY {
            for (phase, variant) in self.library.variants(kind).iter().enumerate() {
                if let Some(cells) = fit(grid, visited, variant, x, y) {
                    return Ok(Some(ShapeMatch {
                        kind,
                        phase,
                        anchor: (x, y),
                        cells,
                    }));
                }
            }
        }
        Ok(None)
    }
}

/// Lay `variant` out at `(x, y)`. Fails on the first offset that is out of
/// range, dead, or already claimed.
fn fit(
    grid: &Grid,
    visited: &VisitedMask,
    variant: &PhaseVariant,
    x: i32,
    y: i32,
) -> Option<SmallVec<[Coord; 12]>> {
    let mut cells: SmallVec<[Coord; 12]> = SmallVec::new();
    for &(dx, dy) in variant.offsets() {
        let cx = x.checked_add(dx)?;
        let cy = y.checked_add(dy)?;
        if !grid.is_alive(cx, cy) || visited.is_visited(cx, cy) {
            return None;
        }
        if !cells.contains(&(cx, cy)) {
            cells.push((cx, cy));
        }
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_test_utils::{grid_from_ascii, place};

    fn classify_at(grid: &Grid, x: i32, y: i32) -> Option<ShapeMatch> {
        let lib = ShapeLibrary::standard();
        let visited = VisitedMask::for_grid(grid);
        Matcher::new(&lib).classify(grid, &visited, x, y).unwrap()
    }

    #[test]
    fn block_matches_at_top_left() {
        let g = grid_from_ascii(
            "
            ....
            .##.
            .##.
            ....
            ",
        );
        let m = classify_at(&g, 1, 1).unwrap();
        assert_eq!(m.kind, ShapeKind::Block);
        assert_eq!(m.phase, 0);
        assert_eq!(m.anchor, (1, 1));
        assert_eq!(m.cells.as_slice(), &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn beehive_beats_block_priority() {
        let mut g = Grid::new(12, 12).unwrap();
        place(
            &mut g,
            (5, 5),
            &[(0, 0), (1, 0), (-1, 1), (2, 1), (0, 2), (1, 2)],
        );
        let m = classify_at(&g, 5, 5).unwrap();
        assert_eq!(m.kind, ShapeKind::Beehive);
        assert_eq!(m.cells.len(), 6);
    }

    #[test]
    fn beacon_claims_its_blocks() {
        let g = grid_from_ascii(
            "
            ##..
            ##..
            ..##
            ..##
            ",
        );
        let m = classify_at(&g, 0, 0).unwrap();
        assert_eq!(m.kind, ShapeKind::Beacon);
        assert_eq!(m.phase, 0);
        assert_eq!(m.cells.len(), 8);
    }

    #[test]
    fn later_phase_matches_when_first_fails() {
        let g = grid_from_ascii(
            "
            .....
            .###.
            .....
            ",
        );
        let m = classify_at(&g, 1, 1).unwrap();
        assert_eq!(m.kind, ShapeKind::Blinker);
        assert_eq!(m.phase, 1);
    }

    #[test]
    fn offset_outside_grid_fails_variant() {
        // A horizontal pair at the right edge: the blinker's third cell
        // would be off the grid.
        let g = grid_from_ascii(
            "
            ...##
            ",
        );
        assert_eq!(classify_at(&g, 3, 0), None);
    }

    #[test]
    fn partial_shape_is_no_match() {
        let g = grid_from_ascii(
            "
            .##.
            .#..
            ....
            ",
        );
        assert_eq!(classify_at(&g, 1, 0), None);
    }

    #[test]
    fn visited_cell_blocks_match() {
        let g = grid_from_ascii(
            "
            ##
            ##
            ",
        );
        let lib = ShapeLibrary::standard();
        let mut visited = VisitedMask::for_grid(&g);
        visited.mark(1, 1).unwrap();
        let m = Matcher::new(&lib).classify(&g, &visited, 0, 0).unwrap();
        assert_eq!(m, None);
    }

    #[test]
    fn anchor_outside_grid_is_error() {
        let g = Grid::new(3, 3).unwrap();
        let lib = ShapeLibrary::standard();
        let visited = VisitedMask::for_grid(&g);
        let err = Matcher::new(&lib)
            .classify(&g, &visited, 3, 0)
            .unwrap_err();
        assert!(matches!(err, GridError::CoordOutOfBounds { x: 3, y: 0, .. }));
    }

    #[test]
    fn mismatched_mask_is_error() {
        let g = Grid::new(3, 3).unwrap();
        let lib = ShapeLibrary::standard();
        let visited = VisitedMask::new(4, 3).unwrap();
        assert_eq!(
            Matcher::new(&lib).classify(&g, &visited, 0, 0),
            Err(GridError::DimensionMismatch {
                expected: (3, 3),
                found: (4, 3)
            })
        );
    }

    #[test]
    fn duplicate_offsets_are_reported_once() {
        let lib = ShapeLibrary::standard();
        let ship = &lib.variants(ShapeKind::Spaceship)[1];
        let mut g = Grid::new(10, 10).unwrap();
        place(&mut g, (4, 3), ship.offsets());
        let m = classify_at(&g, 4, 3).unwrap();
        assert_eq!(m.kind, ShapeKind::Spaceship);
        assert_eq!(m.phase, 1);
        assert_eq!(m.cells.len(), 11);
    }

    #[test]
    fn every_standard_variant_classifies_as_itself() {
        let lib = ShapeLibrary::standard();
        for kind in ShapeKind::ALL {
            for (phase, variant) in lib.variants(kind).iter().enumerate() {
                let mut g = Grid::new(16, 16).unwrap();
                place(&mut g, (6, 6), variant.offsets());
                let m = classify_at(&g, 6, 6)
                    .unwrap_or_else(|| panic!("{kind} phase {phase} did not match"));
                assert_eq!((m.kind, m.phase), (kind, phase));
            }
        }
    }

    #[test]
    fn custom_library_without_kind_never_reports_it() {
        let lib = ShapeLibrary::builder()
            .variant(
                ShapeKind::Blinker,
                PhaseVariant::new(&[(0, 0), (0, 1), (0, 2)]).unwrap(),
            )
            .build()
            .unwrap();
        let g = grid_from_ascii(
            "
            ##
            ##
            ",
        );
        let visited = VisitedMask::for_grid(&g);
        assert_eq!(Matcher::new(&lib).classify(&g, &visited, 0, 0), Ok(None));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_grid() -> impl Strategy<Value = Grid> {
            (1u32..12, 1u32..12, 0.0f64..=1.0, any::<u64>())
                .prop_map(|(rows, cols, p, seed)| Grid::random(rows, cols, p, seed).unwrap())
        }

        proptest! {
            #[test]
            fn matched_cells_are_live_distinct_and_include_anchor(g in arb_grid()) {
                let lib = ShapeLibrary::standard();
                let matcher = Matcher::new(&lib);
                let visited = VisitedMask::for_grid(&g);
                for (x, y) in g.live_cells() {
                    if let Some(m) = matcher.classify(&g, &visited, x, y).unwrap() {
                        prop_assert!(m.cells.contains(&(x, y)));
                        for (i, &(cx, cy)) in m.cells.iter().enumerate() {
                            prop_assert!(g.is_alive(cx, cy));
                            prop_assert!(!m.cells[..i].contains(&(cx, cy)));
                        }
                        let variant = &lib.variants(m.kind)[m.phase];
                        prop_assert!(m.cells.len() <= variant.len());
                    }
                }
            }

            #[test]
            fn claimed_anchor_never_matches_again(g in arb_grid()) {
                let lib = ShapeLibrary::standard();
                let matcher = Matcher::new(&lib);
                for (x, y) in g.live_cells() {
                    let mut visited = VisitedMask::for_grid(&g);
                    if let Some(m) = matcher.classify(&g, &visited, x, y).unwrap() {
                        for &(cx, cy) in &m.cells {
                            visited.mark(cx, cy).unwrap();
                        }
                        prop_assert_eq!(matcher.classify(&g, &visited, x, y).unwrap(), None);
                    }
                }
            }
        }
    }
}
