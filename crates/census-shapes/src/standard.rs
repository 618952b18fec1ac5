//! Canonical phase offsets for the standard library.
//!
//! Offsets are `(dx, dy)` from the anchor, which is the first live cell of
//! the shape in row-major scan order for every variant below. The tables
//! define observable classification output and must not be edited.

use census_core::{Offset, ShapeKind};

pub(crate) const BLOCK: &[Offset] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

pub(crate) const BEEHIVE: &[Offset] = &[(0, 0), (1, 0), (-1, 1), (2, 1), (0, 2), (1, 2)];

pub(crate) const LOAF: &[Offset] = &[(0, 0), (1, 0), (-1, 1), (2, 1), (0, 2), (2, 2), (1, 3)];

pub(crate) const BOAT: &[Offset] = &[(0, 0), (1, 0), (0, 1), (2, 1), (1, 2)];

pub(crate) const TUB: &[Offset] = &[(0, 0), (-1, 1), (1, 1), (0, 2)];

pub(crate) const BLINKER_VERTICAL: &[Offset] = &[(0, 0), (0, 1), (0, 2)];
pub(crate) const BLINKER_HORIZONTAL: &[Offset] = &[(0, 0), (1, 0), (2, 0)];

pub(crate) const TOAD_1: &[Offset] = &[(0, 0), (-2, 1), (1, 1), (-2, 2), (1, 2), (-1, 2)];
pub(crate) const TOAD_2: &[Offset] = &[(0, 0), (1, 0), (2, 0), (-1, 1), (0, 1), (1, 1)];

pub(crate) const BEACON_1: &[Offset] = &[
    (0, 0),
    (1, 0),
    (0, 1),
    (1, 1),
    (2, 2),
    (3, 2),
    (2, 3),
    (3, 3),
];
pub(crate) const BEACON_2: &[Offset] = &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)];

pub(crate) const GLIDER_1: &[Offset] = &[(0, 0), (1, 1), (-1, 2), (0, 2), (1, 2)];
pub(crate) const GLIDER_2: &[Offset] = &[(0, 0), (2, 0), (1, 1), (2, 1), (1, 2)];
pub(crate) const GLIDER_3: &[Offset] = &[(0, 0), (-2, 1), (0, 1), (-1, 2), (0, 2)];
pub(crate) const GLIDER_4: &[Offset] = &[(0, 0), (1, 1), (2, 1), (0, 2), (1, 2)];

pub(crate) const SPACESHIP_1: &[Offset] = &[
    (0, 0),
    (3, 0),
    (4, 1),
    (0, 2),
    (4, 2),
    (1, 3),
    (2, 3),
    (3, 3),
    (4, 3),
];
// (1, 2) is listed twice; kept as-is.
pub(crate) const SPACESHIP_2: &[Offset] = &[
    (0, 0),
    (1, 0),
    (-2, 1),
    (-1, 1),
    (1, 1),
    (1, 2),
    (-2, 2),
    (-1, 2),
    (0, 2),
    (1, 2),
    (-1, 3),
    (0, 3),
];
pub(crate) const SPACESHIP_3: &[Offset] = &[
    (0, 0),
    (1, 0),
    (2, 0),
    (3, 0),
    (-1, 1),
    (3, 1),
    (3, 2),
    (-1, 3),
    (2, 3),
];
pub(crate) const SPACESHIP_4: &[Offset] = &[
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (2, 1),
    (-1, 2),
    (0, 2),
    (2, 2),
    (3, 2),
    (1, 3),
    (2, 3),
];

/// `(kind, phases)` in listing order.
pub(crate) const TABLE: [(ShapeKind, &[&[Offset]]); ShapeKind::COUNT] = [
    (ShapeKind::Block, &[BLOCK]),
    (ShapeKind::Beehive, &[BEEHIVE]),
    (ShapeKind::Loaf, &[LOAF]),
    (ShapeKind::Boat, &[BOAT]),
    (ShapeKind::Tub, &[TUB]),
    (ShapeKind::Blinker, &[BLINKER_VERTICAL, BLINKER_HORIZONTAL]),
    (ShapeKind::Toad, &[TOAD_1, TOAD_2]),
    (ShapeKind::Beacon, &[BEACON_1, BEACON_2]),
    (ShapeKind::Glider, &[GLIDER_1, GLIDER_2, GLIDER_3, GLIDER_4]),
    (
        ShapeKind::Spaceship,
        &[SPACESHIP_1, SPACESHIP_2, SPACESHIP_3, SPACESHIP_4],
    ),
];
