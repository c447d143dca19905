//! Heading from a course and a drift correction.

use crate::angles::{normalize_360, signed_difference};

/// Correct `course_deg` into the wind by `correction_deg`.
///
/// Wind from the left of the course (relative wind in (-180, 0)) subtracts
/// the correction; anything else, including a direct head or tail wind,
/// adds it.
pub fn apply_correction(course_deg: f64, wind_dir_deg: f64, correction_deg: f64) -> f64 {
    let relative_wind = signed_difference(wind_dir_deg, course_deg);
    let heading = if relative_wind < 0.0 {
        course_deg - correction_deg
    } else {
        course_deg + correction_deg
    };
    normalize_360(heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_from_right_adds_correction() {
        assert_eq!(apply_correction(360.0, 90.0, 5.0), 5.0);
        assert_eq!(apply_correction(270.0, 300.0, 18.0), 288.0);
    }

    #[test]
    fn wind_from_left_subtracts_correction() {
        assert_eq!(apply_correction(90.0, 300.0, 9.0), 81.0);
        assert_eq!(apply_correction(5.0, 270.0, 10.0), 355.0);
    }

    #[test]
    fn direct_tailwind_counts_as_right() {
        // relative wind of exactly 180 is not negative
        assert_eq!(apply_correction(0.0, 180.0, 4.0), 4.0);
        assert_eq!(apply_correction(0.0, 0.0, 4.0), 4.0);
    }

    #[test]
    fn large_corrections_still_wrap() {
        assert_eq!(apply_correction(10.0, 300.0, 400.0), 330.0);
    }
}
