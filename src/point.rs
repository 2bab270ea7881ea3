#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A two dimensional point with integer coordinates.
///
/// This is the basic type used for defining positions. Room centers, super triangle corners and
/// circumcenters are all expressed as `Point2`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2 {
    /// The point's x coordinate
    pub x: i32,
    /// The point's y coordinate
    pub y: i32,
}

impl Point2 {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point2 { x, y }
    }

    /// Returns the squared distance of this point and another point.
    ///
    /// The result is widened to `i128` and can not overflow for any pair of `i32` points.
    #[inline]
    pub fn distance_2(&self, other: Self) -> i128 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        dx * dx + dy * dy
    }

    pub(crate) fn to_f64(self) -> [f64; 2] {
        [f64::from(self.x), f64::from(self.y)]
    }

    /// Integer midpoint of two points, truncating towards zero.
    ///
    /// The sum is formed in `i64`, the halved result always fits back into `i32`.
    pub(crate) fn midpoint(&self, other: Self) -> Self {
        let half = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Point2 {
            x: half(self.x, other.x),
            y: half(self.y, other.y),
        }
    }
}

impl From<Point2> for [i32; 2] {
    #[inline]
    fn from(point: Point2) -> Self {
        [point.x, point.y]
    }
}

impl From<Point2> for (i32, i32) {
    #[inline]
    fn from(point: Point2) -> (i32, i32) {
        (point.x, point.y)
    }
}

impl From<[i32; 2]> for Point2 {
    #[inline]
    fn from(source: [i32; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl From<(i32, i32)> for Point2 {
    #[inline]
    fn from(source: (i32, i32)) -> Self {
        Self::new(source.0, source.1)
    }
}

/// An object with position.
///
/// Anything passed to [Triangulator::triangulate](crate::Triangulator::triangulate) needs to
/// implement this trait. A room would usually report its center here.
///
/// # Example
/// ```
/// use room_delaunay::{HasPosition, Point2};
///
/// struct Room {
///     position: Point2,
///     width: i32,
///     height: i32,
/// }
///
/// impl HasPosition for Room {
///     fn position(&self) -> Point2 {
///         Point2::new(
///             self.position.x + self.width / 2,
///             self.position.y + self.height / 2,
///         )
///     }
/// }
///
/// let room = Room { position: Point2::new(10, 20), width: 7, height: 4 };
/// assert_eq!(room.position(), Point2::new(13, 22));
/// ```
pub trait HasPosition {
    /// Returns the position of this object.
    fn position(&self) -> Point2;
}

impl HasPosition for Point2 {
    fn position(&self) -> Point2 {
        *self
    }
}

impl<T: HasPosition> HasPosition for &T {
    fn position(&self) -> Point2 {
        (*self).position()
    }
}
