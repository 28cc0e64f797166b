//! Unit steps along which words run.

use std::fmt::{self, Display};

/// A unit step on the grid.
///
/// `dx` moves along columns (positive is right) and `dy` moves along rows
/// (positive is down). Both components are in `-1..=1` and never both zero, so
/// there are exactly eight directions.
///
/// # Examples
///
/// ```
/// use wordlace_core::Direction;
///
/// assert_eq!(Direction::from_delta(0, 5), Some(Direction::RIGHT));
/// assert_eq!(Direction::from_delta(-2, -2), Some(Direction::UP_LEFT));
/// assert_eq!(Direction::from_delta(1, 2), None);
/// assert!(Direction::UP_RIGHT.is_diagonal());
/// assert_eq!(Direction::UP_RIGHT.reversed(), Direction::DOWN_LEFT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    /// Left to right along a row.
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };
    /// Right to left along a row.
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    /// Top to bottom along a column.
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    /// Bottom to top along a column.
    pub const UP: Self = Self { dx: 0, dy: -1 };
    /// Diagonally towards the bottom right.
    pub const DOWN_RIGHT: Self = Self { dx: 1, dy: 1 };
    /// Diagonally towards the top left.
    pub const UP_LEFT: Self = Self { dx: -1, dy: -1 };
    /// Diagonally towards the top right.
    pub const UP_RIGHT: Self = Self { dx: 1, dy: -1 };
    /// Diagonally towards the bottom left.
    pub const DOWN_LEFT: Self = Self { dx: -1, dy: 1 };

    /// All eight directions.
    pub const ALL: [Self; 8] = [
        Self::RIGHT,
        Self::DOWN,
        Self::DOWN_RIGHT,
        Self::UP_RIGHT,
        Self::LEFT,
        Self::UP,
        Self::UP_LEFT,
        Self::DOWN_LEFT,
    ];

    /// The four horizontal and vertical directions.
    pub const ORTHOGONAL: [Self; 4] = [Self::RIGHT, Self::DOWN, Self::LEFT, Self::UP];

    /// Creates a direction from its components.
    ///
    /// Returns `None` if a component is outside `-1..=1` or both are zero.
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Option<Self> {
        if dx < -1 || dx > 1 || dy < -1 || dy > 1 || (dx == 0 && dy == 0) {
            return None;
        }
        Some(Self { dx, dy })
    }

    /// Infers the direction of a row/column offset.
    ///
    /// Returns `None` unless the offset lies on a row, a column, or a 45° diagonal,
    /// and for the zero offset.
    #[must_use]
    pub fn from_delta(d_row: i32, d_col: i32) -> Option<Self> {
        if d_row == 0 && d_col == 0 {
            return None;
        }
        if d_row != 0 && d_col != 0 && d_row.unsigned_abs() != d_col.unsigned_abs() {
            return None;
        }
        let dx = i8::try_from(d_col.signum()).ok()?;
        let dy = i8::try_from(d_row.signum()).ok()?;
        Self::new(dx, dy)
    }

    /// Column step.
    #[must_use]
    pub const fn dx(self) -> i8 {
        self.dx
    }

    /// Row step.
    #[must_use]
    pub const fn dy(self) -> i8 {
        self.dy
    }

    /// Returns `true` if the direction moves along both axes.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    fn name(self) -> &'static str {
        match (self.dx, self.dy) {
            (1, 0) => "right",
            (-1, 0) => "left",
            (0, 1) => "down",
            (0, -1) => "up",
            (1, 1) => "down-right",
            (-1, -1) => "up-left",
            (1, -1) => "up-right",
            (-1, 1) => "down-left",
            _ => unreachable!("invalid direction ({}, {})", self.dx, self.dy),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The directions a puzzle may place words in.
///
/// Forward directions read left to right or top to bottom: right and down,
/// plus down-right and up-right when diagonals are allowed. Allowing backwards
/// words adds the reverse of each forward direction.
///
/// | diagonals | backwards | directions |
/// | --- | --- | --- |
/// | no | no | 2 |
/// | no | yes | 4 |
/// | yes | no | 4 |
/// | yes | yes | 8 |
///
/// # Examples
///
/// ```
/// use wordlace_core::{Direction, DirectionSet};
///
/// let set = DirectionSet::new(false, true);
/// assert_eq!(set.directions(), Direction::ORTHOGONAL);
/// assert!(!set.contains(Direction::DOWN_RIGHT));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionSet {
    allow_diagonals: bool,
    allow_backwards: bool,
}

impl DirectionSet {
    const FORWARD_ORTHOGONAL: [Direction; 2] = [Direction::RIGHT, Direction::DOWN];
    const FORWARD: [Direction; 4] = [
        Direction::RIGHT,
        Direction::DOWN,
        Direction::DOWN_RIGHT,
        Direction::UP_RIGHT,
    ];

    /// Creates a direction set from the two puzzle flags.
    #[must_use]
    pub const fn new(allow_diagonals: bool, allow_backwards: bool) -> Self {
        Self {
            allow_diagonals,
            allow_backwards,
        }
    }

    /// Returns whether diagonal directions are included.
    #[must_use]
    pub const fn allows_diagonals(self) -> bool {
        self.allow_diagonals
    }

    /// Returns whether reversed directions are included.
    #[must_use]
    pub const fn allows_backwards(self) -> bool {
        self.allow_backwards
    }

    /// Returns the allowed directions in a fixed order.
    ///
    /// The order is part of the generator's determinism and must not change.
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match (self.allow_diagonals, self.allow_backwards) {
            (false, false) => &Self::FORWARD_ORTHOGONAL,
            (false, true) => &Direction::ORTHOGONAL,
            (true, false) => &Self::FORWARD,
            (true, true) => &Direction::ALL,
        }
    }

    /// Returns `true` if `direction` is allowed.
    #[must_use]
    pub fn contains(self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::new(true, true)
    }
}
