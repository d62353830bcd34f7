use imageproc::geometry::min_area_rect;
use imageproc::point::Point;

/// Rotation angle of the minimum-area rectangle enclosing `points`.
///
/// Reported in degrees in the `[-90, 0)` convention of the classic
/// OpenCV `minAreaRect`: an axis-aligned rectangle reads as `-90`.
/// Degenerate inputs (a single pixel) also read as `-90`.
pub fn min_rect_angle(points: &[Point<i32>]) -> f64 {
    if points.is_empty() {
        return -90.0;
    }

    let corners = min_area_rect(points);
    let edge = first_edge(&corners);
    match edge {
        Some((dx, dy)) => fold_angle(dy.atan2(dx).to_degrees()),
        None => -90.0,
    }
}

/// First non-zero-length edge of the rectangle, as an (dx, dy) direction.
fn first_edge(corners: &[Point<i32>; 4]) -> Option<(f64, f64)> {
    for i in 0..3 {
        let dx = (corners[i + 1].x - corners[i].x) as f64;
        let dy = (corners[i + 1].y - corners[i].y) as f64;
        if dx != 0.0 || dy != 0.0 {
            return Some((dx, dy));
        }
    }
    None
}

/// Fold an arbitrary edge angle into `[-90, 0)`.
fn fold_angle(degrees: f64) -> f64 {
    let mut angle = degrees;
    while angle >= 0.0 {
        angle -= 90.0;
    }
    while angle < -90.0 {
        angle += 90.0;
    }
    angle
}
