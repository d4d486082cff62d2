use core::ops::{Add, Sub};

/// Integer pixel coordinate. `x` grows right, `y` grows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// L1 distance.
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Converts to `(x, y)` indices when both components are non-negative.
    pub fn to_index(self) -> Option<(usize, usize)> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        Some((x, y))
    }
}

impl Add for Point2i {
    type Output = Point2i;

    fn add(self, rhs: Point2i) -> Self::Output {
        Point2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point2i {
    type Output = Point2i;

    fn sub(self, rhs: Point2i) -> Self::Output {
        Point2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
