//! Racetrack geometry for a standard (right-hand) hold.
//!
//! Coordinates use a screen-like pattern frame: x to the right, y down,
//! origin at the fix, with the inbound leg running along +x into the fix.
//! [`HoldGeometry::to_world`] rotates that frame so the inbound leg points
//! along the inbound course (0° up, clockwise). Nothing here draws.

use serde::{Deserialize, Serialize};

use crate::angles::{normalize_360, reciprocal, round_half_up};
use crate::rules::HoldRules;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin along a compass bearing.
    pub fn from_bearing(bearing_deg: f64, radius: f64) -> Self {
        let rad = (bearing_deg - 90.0).to_radians();
        Self::new(rad.cos() * radius, rad.sin() * radius)
    }

    /// Rotate clockwise (y down) by `angle_deg` about the origin.
    pub fn rotated(self, angle_deg: f64) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// One piece of the racetrack, in pattern-frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternSegment {
    Leg {
        from: Point,
        to: Point,
    },
    /// Clockwise half circle; angles measured from +x toward +y.
    Turn {
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
    },
}

impl PatternSegment {
    pub fn start(&self) -> Point {
        match *self {
            Self::Leg { from, .. } => from,
            Self::Turn {
                center,
                radius,
                start_deg,
                ..
            } => arc_point(center, radius, start_deg),
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Self::Leg { to, .. } => to,
            Self::Turn {
                center,
                radius,
                start_deg,
                sweep_deg,
            } => arc_point(center, radius, start_deg + sweep_deg),
        }
    }

    /// Sample the segment as a polyline of `steps + 1` points.
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        match *self {
            Self::Leg { from, to } => vec![from, to],
            Self::Turn {
                center,
                radius,
                start_deg,
                sweep_deg,
            } => (0..=steps)
                .map(|i| {
                    let t = i as f64 / steps as f64;
                    arc_point(center, radius, start_deg + sweep_deg * t)
                })
                .collect(),
        }
    }
}

fn arc_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// What a gate marker is annotated with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateMarker {
    /// Gate 1: outbound leg time in whole seconds
    OutboundTime { seconds: f64 },
    /// Gate 2: bearing cue in degrees
    Bearing { degrees: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Pattern-frame position
    pub position: Point,
    pub marker: GateMarker,
}

/// Absolute wind arrow, not rotated with the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindArrow {
    pub direction_deg: f64,
    /// Upwind end
    pub tail: Point,
    /// Downwind end, nearer the fix
    pub head: Point,
}

/// Renderable description of one hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldGeometry {
    pub inbound_track_deg: f64,
    pub outbound_track_deg: f64,
    pub inbound_heading_deg: f64,
    pub outbound_heading_deg: f64,
    pub outbound_time_sec: f64,
    /// Pattern frame rotation: inbound course minus 90
    pub rotation_deg: f64,
    pub leg_length: f64,
    pub turn_radius: f64,
    pub fix: Point,
    /// Inbound leg, turn 1, outbound leg, turn 2
    pub segments: Vec<PatternSegment>,
    pub gate1: Gate,
    pub gate2: Gate,
    pub wind_arrow: WindArrow,
}

impl HoldGeometry {
    /// Rotate a pattern-frame point into the compass-aligned frame.
    pub fn to_world(&self, point: Point) -> Point {
        point.rotated(self.rotation_deg)
    }
}

/// Inputs to [`build_geometry`], already computed by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    pub inbound_course_deg: f64,
    pub inbound_heading_deg: f64,
    pub outbound_heading_deg: f64,
    /// Whole seconds
    pub outbound_time_sec: f64,
    pub wind_dir_deg: f64,
}

/// Lay out the racetrack for an inbound course.
pub fn build_geometry(params: &GeometryParams, rules: &HoldRules) -> HoldGeometry {
    let leg = rules.leg_length;
    let radius = rules.turn_radius;
    let inbound_start = Point::new(-leg, 0.0);
    let outbound_start = Point::new(0.0, 2.0 * radius);
    let outbound_end = Point::new(-leg, 2.0 * radius);

    let segments = vec![
        PatternSegment::Leg {
            from: inbound_start,
            to: Point::ORIGIN,
        },
        PatternSegment::Turn {
            center: Point::new(0.0, radius),
            radius,
            start_deg: 270.0,
            sweep_deg: 180.0,
        },
        PatternSegment::Leg {
            from: outbound_start,
            to: outbound_end,
        },
        PatternSegment::Turn {
            center: Point::new(-leg, radius),
            radius,
            start_deg: 90.0,
            sweep_deg: 180.0,
        },
    ];

    let gate2_bearing = normalize_360(params.inbound_course_deg - rules.gate2_offset_deg);

    HoldGeometry {
        inbound_track_deg: params.inbound_course_deg,
        outbound_track_deg: reciprocal(params.inbound_course_deg),
        inbound_heading_deg: normalize_360(round_half_up(params.inbound_heading_deg)),
        outbound_heading_deg: normalize_360(round_half_up(params.outbound_heading_deg)),
        outbound_time_sec: params.outbound_time_sec,
        rotation_deg: params.inbound_course_deg - 90.0,
        leg_length: leg,
        turn_radius: radius,
        fix: Point::ORIGIN,
        segments,
        gate1: Gate {
            position: outbound_end,
            marker: GateMarker::OutboundTime {
                seconds: params.outbound_time_sec,
            },
        },
        gate2: Gate {
            position: inbound_start,
            marker: GateMarker::Bearing {
                degrees: gate2_bearing,
            },
        },
        wind_arrow: WindArrow {
            direction_deg: params.wind_dir_deg,
            tail: Point::from_bearing(params.wind_dir_deg, rules.wind_arrow_outer),
            head: Point::from_bearing(params.wind_dir_deg, rules.wind_arrow_inner),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < EPS
    }

    fn params(course: f64) -> GeometryParams {
        GeometryParams {
            inbound_course_deg: course,
            inbound_heading_deg: course,
            outbound_heading_deg: reciprocal(course),
            outbound_time_sec: 60.0,
            wind_dir_deg: 300.0,
        }
    }

    #[test]
    fn segments_form_a_closed_loop() {
        let geometry = build_geometry(&params(90.0), &HoldRules::default());
        assert_eq!(geometry.segments.len(), 4);
        for pair in geometry.segments.windows(2) {
            assert!(close(pair[0].end(), pair[1].start()));
        }
        let last = geometry.segments.last().unwrap();
        let first = geometry.segments.first().unwrap();
        assert!(close(last.end(), first.start()));
    }

    #[test]
    fn first_turn_is_to_the_right_of_inbound() {
        // Inbound north: turn 1 apex lies north-east of the fix (y is down)
        let geometry = build_geometry(&params(0.0), &HoldRules::default());
        let samples = geometry.segments[1].sample(8);
        let apex = geometry.to_world(samples[4]);
        assert!((apex.x - 72.0).abs() < 1e-6);
        assert!((apex.y + 72.0).abs() < 1e-6);

        let inbound_start = geometry.to_world(geometry.gate2.position);
        assert!(inbound_start.x.abs() < 1e-6);
        assert!((inbound_start.y - 224.0).abs() < 1e-6);
    }

    #[test]
    fn gates_sit_on_outbound_end_and_inbound_start() {
        let geometry = build_geometry(&params(90.0), &HoldRules::default());
        assert!(close(geometry.gate1.position, Point::new(-224.0, 144.0)));
        assert!(close(geometry.gate2.position, Point::new(-224.0, 0.0)));
        assert_eq!(
            geometry.gate1.marker,
            GateMarker::OutboundTime { seconds: 60.0 }
        );
        assert_eq!(geometry.gate2.marker, GateMarker::Bearing { degrees: 30.0 });
    }

    #[test]
    fn gate2_bearing_wraps_below_zero() {
        let geometry = build_geometry(&params(20.0), &HoldRules::default());
        assert_eq!(geometry.gate2.marker, GateMarker::Bearing { degrees: 320.0 });
    }

    #[test]
    fn outbound_track_is_reciprocal() {
        for course in [0.0, 45.0, 179.0, 180.0, 359.0] {
            let geometry = build_geometry(&params(course), &HoldRules::default());
            assert_eq!(geometry.outbound_track_deg, reciprocal(course));
        }
    }

    #[test]
    fn wind_arrow_points_at_the_fix() {
        let geometry = build_geometry(&params(90.0), &HoldRules::default());
        let arrow = geometry.wind_arrow;
        assert!((arrow.tail.distance_to(Point::ORIGIN) - 320.0).abs() < 1e-6);
        assert!((arrow.head.distance_to(Point::ORIGIN) - 120.0).abs() < 1e-6);
        // wind from 300: tail up and to the left of the fix
        assert!(arrow.tail.x < 0.0 && arrow.tail.y < 0.0);
    }

    #[test]
    fn headings_are_rounded_for_display() {
        let mut p = params(90.0);
        p.inbound_heading_deg = 359.6;
        let geometry = build_geometry(&p, &HoldRules::default());
        assert_eq!(geometry.inbound_heading_deg, 0.0);
    }
}
