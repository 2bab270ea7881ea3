use crate::Point2;
use hashbrown::HashSet;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

/// Returns `size` distinct points with coordinates in `1..=range`.
///
/// All of them lie inside the super triangle of a bounds hint of `range`.
pub fn random_points_in_range(range: i32, size: usize, seed: &[u8; 32]) -> Vec<Point2> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let range = Uniform::new_inclusive(1, range);
    let mut seen = HashSet::with_capacity(size);
    let mut points = Vec::with_capacity(size);
    while points.len() < size {
        let point = Point2::new(range.sample(&mut rng), range.sample(&mut rng));
        if seen.insert(point) {
            points.push(point);
        }
    }
    points
}
