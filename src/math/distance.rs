use crate::error::Result;

use super::{require_dim, Coordinates};

/// Euclidean distance along a path of points, using the first `dim`
/// coordinates of each.
///
/// Squared deltas of every consecutive pair are summed into one running
/// total and rooted once at the end: `sqrt(Σ_segments Σ_dims Δ²)`. For more
/// than two points this is NOT the sum of the segment lengths.
///
/// Returns `0` when fewer than two points are given.
///
/// # Errors
///
/// Returns an error if any point has fewer than `dim` coordinates.
pub fn euc_dist<P: Coordinates>(dim: usize, points: &[P]) -> Result<f64> {
    check_points("euc_dist", dim, points)?;
    Ok(euclidean(dim, points))
}

/// Absolute (L1) distance along a path of points, using the first `dim`
/// coordinates of each.
///
/// Returns `0` when fewer than two points are given.
///
/// # Errors
///
/// Returns an error if any point has fewer than `dim` coordinates.
pub fn abs_dist<P: Coordinates>(dim: usize, points: &[P]) -> Result<f64> {
    check_points("abs_dist", dim, points)?;
    Ok(path_sum(dim, points, f64::abs))
}

/// Unchecked [`euc_dist`] for callers whose points are known to carry `dim`
/// coordinates.
pub(crate) fn euclidean<P: Coordinates>(dim: usize, points: &[P]) -> f64 {
    path_sum(dim, points, |d| d * d).sqrt()
}

fn check_points<P: Coordinates>(operation: &'static str, dim: usize, points: &[P]) -> Result<()> {
    if points.len() < 2 {
        return Ok(());
    }
    for point in points {
        require_dim(operation, dim, point)?;
    }
    Ok(())
}

fn path_sum<P, F>(dim: usize, points: &[P], term: F) -> f64
where
    P: Coordinates,
    F: Fn(f64) -> f64,
{
    if points.len() < 2 {
        return 0.0;
    }

    points.windows(2).fold(0.0, |acc, pair| {
        let a = pair[0].as_coords();
        let b = pair[1].as_coords();
        a.iter()
            .zip(b)
            .take(dim)
            .fold(acc, |acc, (p, q)| acc + term(p - q))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    const NO_POINTS: [[f64; 2]; 0] = [];

    #[test]
    fn fewer_than_two_points_is_zero() {
        for dim in 0..4 {
            assert_eq!(euc_dist(dim, &NO_POINTS).unwrap(), 0.0);
            assert_eq!(abs_dist(dim, &NO_POINTS).unwrap(), 0.0);
            assert_eq!(euc_dist(dim, &[[7.0, 9.0]]).unwrap(), 0.0);
            assert_eq!(abs_dist(dim, &[[7.0, 9.0]]).unwrap(), 0.0);
        }
    }

    #[test]
    fn three_four_five() {
        let pts = [[0.0, 0.0], [3.0, 4.0]];
        assert_relative_eq!(euc_dist(2, &pts).unwrap(), 5.0);
        assert_relative_eq!(abs_dist(2, &pts).unwrap(), 7.0);
    }

    #[test]
    fn two_points_are_order_independent() {
        let fwd = [Point3::new(1.0, -2.0, 5.0), Point3::new(-3.5, 4.0, 0.25)];
        let rev = [fwd[1], fwd[0]];
        assert_relative_eq!(euc_dist(3, &fwd).unwrap(), euc_dist(3, &rev).unwrap());
        assert_relative_eq!(abs_dist(3, &fwd).unwrap(), abs_dist(3, &rev).unwrap());
    }

    #[test]
    fn path_is_rooted_once() {
        // Two unit segments: sqrt(1 + 1), not 1 + 1.
        let pts = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
        assert_relative_eq!(euc_dist(2, &pts).unwrap(), 2.0_f64.sqrt());
        assert_relative_eq!(abs_dist(2, &pts).unwrap(), 2.0);
    }

    #[test]
    fn only_first_dim_coordinates_count() {
        let pts = [[0.0, 0.0, 100.0], [3.0, 4.0, -100.0]];
        assert_relative_eq!(euc_dist(2, &pts).unwrap(), 5.0);
        assert_relative_eq!(euc_dist(1, &pts).unwrap(), 3.0);
        assert_eq!(euc_dist(0, &pts).unwrap(), 0.0);
    }

    #[test]
    fn short_point_is_a_shape_error() {
        let pts: [&[f64]; 2] = [&[0.0, 0.0, 0.0], &[1.0, 1.0]];
        assert!(euc_dist(3, &pts).is_err());
        assert!(abs_dist(3, &pts).is_err());
        assert!(euc_dist(2, &pts).is_ok());
    }

    #[test]
    fn nan_propagates() {
        let pts = [[f64::NAN, 0.0], [1.0, 1.0]];
        assert!(euc_dist(2, &pts).unwrap().is_nan());
        assert!(abs_dist(2, &pts).unwrap().is_nan());
    }
}
