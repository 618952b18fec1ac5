//! Shape kinds recognised by the classifier and their matching priority.

use std::fmt;

/// Family a [`ShapeKind`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    /// Unchanged by the rule when isolated; exactly one phase.
    StillLife,
    /// Cycles through several phases in place.
    Oscillator,
    /// Cycles through several phases while translating across the grid.
    Travelling,
}

/// A shape from the fixed library.
///
/// Declaration order is the listing order used for reporting. Matching
/// priority is the reverse and is spelled out in [`ShapeKind::PRIORITY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// 2×2 still life.
    Block,
    /// Six-cell hexagonal still life.
    Beehive,
    /// Seven-cell still life.
    Loaf,
    /// Five-cell still life.
    Boat,
    /// Four-cell diamond still life.
    Tub,
    /// Period-2 line of three.
    Blinker,
    /// Period-2 pair of offset lines.
    Toad,
    /// Period-2 pair of diagonal blocks.
    Beacon,
    /// Period-4 diagonal traveller.
    Glider,
    /// Lightweight spaceship, period-4 orthogonal traveller.
    Spaceship,
}

impl ShapeKind {
    /// Number of shape kinds.
    pub const COUNT: usize = 10;

    /// Every kind in listing order (Block first).
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::Block,
        ShapeKind::Beehive,
        ShapeKind::Loaf,
        ShapeKind::Boat,
        ShapeKind::Tub,
        ShapeKind::Blinker,
        ShapeKind::Toad,
        ShapeKind::Beacon,
        ShapeKind::Glider,
        ShapeKind::Spaceship,
    ];

    /// Every kind in matching order: larger, more specific shapes first.
    ///
    /// Changing this order changes classification output on ambiguous
    /// clusters.
    pub const PRIORITY: [ShapeKind; Self::COUNT] = [
        ShapeKind::Spaceship,
        ShapeKind::Glider,
        ShapeKind::Beacon,
        ShapeKind::Toad,
        ShapeKind::Blinker,
        ShapeKind::Tub,
        ShapeKind::Boat,
        ShapeKind::Loaf,
        ShapeKind::Beehive,
        ShapeKind::Block,
    ];

    /// Position in [`ShapeKind::ALL`]; suitable as an array index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position in [`ShapeKind::PRIORITY`]; 0 is tried first.
    pub fn rank(self) -> usize {
        Self::COUNT - 1 - self.index()
    }

    /// Human-readable name, as printed in reports.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Block => "Block",
            ShapeKind::Beehive => "Beehive",
            ShapeKind::Loaf => "Loaf",
            ShapeKind::Boat => "Boat",
            ShapeKind::Tub => "Tub",
            ShapeKind::Blinker => "Blinker",
            ShapeKind::Toad => "Toad",
            ShapeKind::Beacon => "Beacon",
            ShapeKind::Glider => "Glider",
            ShapeKind::Spaceship => "Spaceship",
        }
    }

    /// Family of this kind.
    pub fn category(self) -> ShapeCategory {
        match self {
            ShapeKind::Block
            | ShapeKind::Beehive
            | ShapeKind::Loaf
            | ShapeKind::Boat
            | ShapeKind::Tub => ShapeCategory::StillLife,
            ShapeKind::Blinker | ShapeKind::Toad | ShapeKind::Beacon => ShapeCategory::Oscillator,
            ShapeKind::Glider | ShapeKind::Spaceship => ShapeCategory::Travelling,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
