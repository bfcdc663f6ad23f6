/// Rotate 2D points about the origin.
///
/// Each point is treated as a row vector and right-multiplied by
/// `[[cos a, sin a], [-sin a, cos a]]`, which turns the unrotated telemetry
/// frame into the circuit's published map orientation.
///
/// # Arguments
/// * `points` - `[x, y]` pairs in the telemetry frame
/// * `angle_deg` - rotation angle in degrees
///
/// # Returns
/// The rotated pairs in input order. Empty input gives empty output and NaN
/// coordinates stay NaN.
pub fn rotate(points: &[[f64; 2]], angle_deg: f64) -> Vec<[f64; 2]> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    points
        .iter()
        .map(|&[x, y]| [x * cos - y * sin, x * sin + y * cos])
        .collect()
}

/// Rotate a single point; see [`rotate`].
pub fn rotate_point(point: [f64; 2], angle_deg: f64) -> [f64; 2] {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let [x, y] = point;
    [x * cos - y * sin, x * sin + y * cos]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < EPS && (a[1] - b[1]).abs() < EPS
    }

    fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
    }

    #[test]
    fn test_quarter_turn() {
        let out = rotate(&[[1.0, 0.0], [0.0, 1.0]], 90.0);
        assert!(close(out[0], [0.0, 1.0]), "got {:?}", out[0]);
        assert!(close(out[1], [-1.0, 0.0]), "got {:?}", out[1]);
    }

    #[test]
    fn test_zero_and_full_turn_are_identity() {
        let pts = [[1520.0, -310.5], [0.0, 0.0], [-42.25, 980.0]];
        let zero = rotate(&pts, 0.0);
        let full = rotate(&pts, 360.0);
        for i in 0..pts.len() {
            assert!(close(zero[i], pts[i]));
            assert!((full[i][0] - pts[i][0]).abs() < 1e-6);
            assert!((full[i][1] - pts[i][1]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_preserves_pairwise_distances() {
        let pts = [[3.0, 4.0], [-120.0, 55.5], [800.0, -12.0], [1.0, 1.0]];
        for angle in [-270.0, -45.0, 17.3, 92.0, 225.0] {
            let out = rotate(&pts, angle);
            for i in 0..pts.len() {
                for j in (i + 1)..pts.len() {
                    let before = dist(pts[i], pts[j]);
                    let after = dist(out[i], out[j]);
                    assert!((before - after).abs() < 1e-6, "angle {angle}: {before} vs {after}");
                }
            }
        }
    }

    #[test]
    fn test_empty_and_nan() {
        assert!(rotate(&[], 33.0).is_empty());
        let out = rotate_point([f64::NAN, 1.0], 10.0);
        assert!(out[0].is_nan() && out[1].is_nan());
    }

    #[test]
    fn test_point_matches_batch() {
        let p = [250.0, -75.0];
        assert!(close(rotate_point(p, 48.0), rotate(&[p], 48.0)[0]));
    }
}
