//! Two-dimensional coordinates.

use std::fmt;

/// Coordinates of a study group.
///
/// `x` is unconstrained; `y` is required. The "y must not be null"
/// rule of the persisted format is enforced by the codec, which refuses
/// records whose `<y>` element is missing or empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    x: i32,
    y: f64,
}

impl Coordinates {
    /// Creates coordinates. Infallible: both fields are fully typed.
    #[must_use]
    pub fn new(x: i32, y: f64) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
