//! Circular angle arithmetic shared by every hold component.
//!
//! Directions are circular quantities: differences go through
//! [`signed_difference`] and results are wrapped with [`normalize_360`],
//! never plain subtraction.

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid returns 360.0 for tiny negative inputs and keeps -0.0
    if wrapped >= 360.0 || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// Shortest signed rotation from `from` to `to`, in (-180, 180].
///
/// Positive means `to` lies clockwise (to the right) of `from`.
pub fn signed_difference(to: f64, from: f64) -> f64 {
    let mut diff = (to - from) % 360.0;
    while diff <= -180.0 {
        diff += 360.0;
    }
    while diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

/// Absolute angle between two directions, folded into [0, 180].
pub fn angle_between(a: f64, b: f64) -> f64 {
    let mut angle = (a - b).abs() % 360.0;
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

/// Fold an angle in [0, 180] onto the acute range [0, 90].
///
/// A wind 30° off the nose and one 30° off the tail give the same crosswind
/// component, so both fold to 30.
pub fn fold_acute(angle: f64) -> f64 {
    if angle > 90.0 {
        180.0 - angle
    } else {
        angle
    }
}

/// Round to the nearest integer with ties going toward +infinity.
///
/// `f64::round` sends -0.5 to -1; this keeps -0.5 at 0 so rounding of
/// negative corrections is symmetric with the display layer.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Reciprocal of a course, in [0, 360).
pub fn reciprocal(course_deg: f64) -> f64 {
    normalize_360(course_deg + 180.0)
}
