//! Cardinal headings and grid positions.

use std::fmt;

/// The direction the agent faces.
///
/// Headings form the cycle `North → East → South → West → North`.
/// [`rotate_right`](Heading::rotate_right) steps forward through it and
/// [`rotate_left`](Heading::rotate_left) steps backward, so four turns in
/// either direction are the identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Toward decreasing `y`.
    #[default]
    North = 0,
    /// Toward increasing `x`.
    East = 1,
    /// Toward increasing `y`.
    South = 2,
    /// Toward decreasing `x`.
    West = 3,
}

impl Heading {
    /// All headings in clockwise order starting at north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn from_index(i: u8) -> Self {
        Self::ALL[(i % 4) as usize]
    }

    /// One quarter turn clockwise.
    pub fn rotate_right(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    /// One quarter turn counter-clockwise.
    pub fn rotate_left(self) -> Self {
        Self::from_index(self as u8 + 3)
    }

    /// Unit `(dx, dy)` offset. `y` grows downward.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        };
        write!(f, "{c}")
    }
}

/// An integer grid coordinate, origin top-left.
///
/// Components are `i64` so that a step off the edge of any grid the
/// engine accepts (each axis fits in `i32`) is representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Position {
    /// Create a position.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one unit toward `heading`.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn right_cycles_clockwise() {
        assert_eq!(Heading::North.rotate_right(), Heading::East);
        assert_eq!(Heading::East.rotate_right(), Heading::South);
        assert_eq!(Heading::South.rotate_right(), Heading::West);
        assert_eq!(Heading::West.rotate_right(), Heading::North);
    }

    #[test]
    fn left_cycles_counter_clockwise() {
        assert_eq!(Heading::North.rotate_left(), Heading::West);
        assert_eq!(Heading::West.rotate_left(), Heading::South);
        assert_eq!(Heading::South.rotate_left(), Heading::East);
        assert_eq!(Heading::East.rotate_left(), Heading::North);
    }

    #[test]
    fn offsets_use_downward_y() {
        let origin = Position::new(5, 5);
        assert_eq!(origin.step(Heading::North), Position::new(5, 4));
        assert_eq!(origin.step(Heading::South), Position::new(5, 6));
        assert_eq!(origin.step(Heading::East), Position::new(6, 5));
        assert_eq!(origin.step(Heading::West), Position::new(4, 5));
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop::sample::select(Heading::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn rotation_has_order_four(h in arb_heading()) {
            let right4 = h.rotate_right().rotate_right().rotate_right().rotate_right();
            let left4 = h.rotate_left().rotate_left().rotate_left().rotate_left();
            prop_assert_eq!(right4, h);
            prop_assert_eq!(left4, h);
        }

        #[test]
        fn left_undoes_right(h in arb_heading()) {
            prop_assert_eq!(h.rotate_right().rotate_left(), h);
        }

        #[test]
        fn opposite_steps_cancel(x in -1000i64..1000, y in -1000i64..1000, h in arb_heading()) {
            let p = Position::new(x, y);
            let back = h.rotate_right().rotate_right();
            prop_assert_eq!(p.step(h).step(back), p);
        }
    }
}
