use std::{error::Error, fmt::Display};

use num_traits::{Float, FloatConst};

use crate::Point2;

/// The error type used by [Triangulator::try_triangulate](crate::Triangulator::try_triangulate).
///
/// Errors originate either from an unusable bounds hint or from an input point that the
/// Bowyer-Watson algorithm can not handle. Inputs can be checked in advance with
/// [validate_bounds_hint] and [validate_vertex].
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum InsertionError {
    /// The bounds hint was zero, negative or too large to scale the super triangle with.
    ///
    /// A valid bounds hint is positive and not larger than [MAX_BOUNDS_HINT].
    InvalidBoundsHint,

    /// A point was not located strictly inside the super triangle.
    ///
    /// Such a point would never be covered by a triangle and could break the cavity fan.
    OutsideSuperTriangle,

    /// A point was inserted twice.
    Duplicate,
}

impl Display for InsertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Debug>::fmt(self, f)
    }
}

impl Error for InsertionError {}

/// The largest bounds hint whose super triangle coordinates still fit into an `i32`.
pub const MAX_BOUNDS_HINT: i32 = i32::MAX / 5;

/// Returns the corners of the super triangle used for a given bounds hint.
///
/// The corners are `(0, 0)`, `(-hint, 5 * hint)` and `(5 * hint, -hint)`. All points `p` with
/// `0 <= p.x, p.y <= hint` that differ from the origin lie strictly inside.
///
/// Hints above [MAX_BOUNDS_HINT] saturate instead of overflowing.
pub fn super_triangle(bounds_hint: i32) -> [Point2; 3] {
    let scaled = bounds_hint.saturating_mul(5);
    [
        Point2::new(0, 0),
        Point2::new(bounds_hint.saturating_neg(), scaled),
        Point2::new(scaled, bounds_hint.saturating_neg()),
    ]
}

/// Checks if a bounds hint can be used to seed a triangulation.
pub fn validate_bounds_hint(bounds_hint: i32) -> Result<(), InsertionError> {
    if bounds_hint <= 0 || bounds_hint > MAX_BOUNDS_HINT {
        Err(InsertionError::InvalidBoundsHint)
    } else {
        Ok(())
    }
}

/// Checks if a position lies strictly inside the super triangle of `bounds_hint`.
///
/// Points on the super triangle's boundary are rejected as well.
pub fn validate_vertex(bounds_hint: i32, position: Point2) -> Result<(), InsertionError> {
    validate_bounds_hint(bounds_hint)?;
    let [a, b, c] = super_triangle(bounds_hint);

    let sides = [
        orient2d(a, b, position),
        orient2d(b, c, position),
        orient2d(c, a, position),
    ];
    let all_left = sides.iter().all(|side| *side > 0.0);
    let all_right = sides.iter().all(|side| *side < 0.0);
    if all_left || all_right {
        Ok(())
    } else {
        Err(InsertionError::OutsideSuperTriangle)
    }
}

/// Approximates the circumcenter of a triangle by intersecting two perpendicular bisectors.
///
/// The bisectors of the edges `v0 -> v1` and `v0 -> v2` are expressed in slope-intercept form
/// with `f32` precision. `f32::EPSILON` is added to the slopes' denominators which keeps
/// horizontal edges from dividing by zero. The intersection is truncated to integer
/// coordinates: first `x`, then `y` is evaluated at the truncated `x`.
///
/// Returns `None` if both bisectors have the same slope. This happens for collinear vertices
/// that are not aligned horizontally.
///
/// The result is only an approximation. It loses precision quickly if one of the edges is
/// (nearly) horizontal since the slope becomes huge.
pub fn bisector_circumcenter(v0: Point2, v1: Point2, v2: Point2) -> Option<Point2> {
    let slope = |other: Point2| {
        let dx = (i64::from(v0.x) - i64::from(other.x)) as f32;
        let dy = (i64::from(other.y) - i64::from(v0.y)) as f32;
        dx / (dy + f32::EPSILON)
    };
    let slope0 = slope(v1);
    let slope1 = slope(v2);

    if slope0 == slope1 {
        return None;
    }

    let center01 = v0.midpoint(v1);
    let center02 = v0.midpoint(v2);

    let intercept0 = center01.y as f32 - slope0 * center01.x as f32;
    let intercept1 = center02.y as f32 - slope1 * center02.x as f32;

    // Float to int casts saturate, NaN becomes zero.
    let x = ((intercept1 - intercept0) / (slope0 - slope1)) as i32;
    let y = (slope0 * x as f32 + intercept0) as i32;
    Some(Point2::new(x, y))
}

/// Returns `true` if `p` lies inside the circle approximated by [bisector_circumcenter].
///
/// The squared radius is measured from the truncated center to `v1`. Points with a squared
/// distance equal to the radius are considered outside. Triangles without a bisector
/// intersection never contain any point.
pub fn contained_in_bisector_circle(v0: Point2, v1: Point2, v2: Point2, p: Point2) -> bool {
    match bisector_circumcenter(v0, v1, v2) {
        Some(center) => center.distance_2(p) < center.distance_2(v1),
        None => {
            tracing::debug!(
                ?v0,
                ?v1,
                ?v2,
                "parallel perpendicular bisectors, triangle is treated as not violated"
            );
            false
        }
    }
}

fn to_robust_coord(point: Point2) -> robust::Coord<f64> {
    let [x, y] = point.to_f64();
    robust::Coord { x, y }
}

/// Exact orientation test.
///
/// Returns a positive value if `p1`, `p2` and `query_point` are ordered counterclockwise, a
/// negative value if they are ordered clockwise and zero if they are collinear.
pub fn orient2d(p1: Point2, p2: Point2, query_point: Point2) -> f64 {
    robust::orient2d(
        to_robust_coord(p1),
        to_robust_coord(p2),
        to_robust_coord(query_point),
    )
}

/// Returns `true` if `p1`, `p2` and `query_point` are ordered counterclockwise.
pub fn is_ordered_ccw(p1: Point2, p2: Point2, query_point: Point2) -> bool {
    orient2d(p1, p2, query_point) > 0.0
}

/// Exact in-circle test that accepts triangles in either orientation.
///
/// Returns `true` if `p` lies strictly inside the circumcircle of `v1`, `v2` and `v3`.
/// Degenerate (collinear) triangles do not contain any point.
pub fn contained_in_circumference(v1: Point2, v2: Point2, v3: Point2, p: Point2) -> bool {
    let orientation = orient2d(v1, v2, v3);
    if orientation == 0.0 {
        return false;
    }

    // incircle is positive for points inside a counterclockwise triangle's circle and flips
    // its sign for clockwise triangles.
    let determinant = robust::incircle(
        to_robust_coord(v1),
        to_robust_coord(v2),
        to_robust_coord(v3),
        to_robust_coord(p),
    );
    determinant * orientation > 0.0
}

/// Returns the angle of the direction `(dx, dy)`, normalized to `[0, 2π)`.
///
/// Negative results of `atan2` are shifted by a full turn.
pub fn normalized_angle<F: Float + FloatConst>(dy: F, dx: F) -> F {
    let angle = dy.atan2(dx);
    if angle < F::zero() {
        let full_turn = (F::one() + F::one()) * F::PI();
        angle + full_turn
    } else {
        angle
    }
}
