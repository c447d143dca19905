//! SVG rendering of a hold solution.
//!
//! Everything is laid out on an 800-unit logical canvas centred on the fix
//! and scaled to the requested pixel size. Labels are drawn upright; only
//! the racetrack itself follows the pattern rotation.

use anyhow::Result;
use hold_core::format::{gate_label, hdg_label, pad3, track_label, wind_arrow_label};
use hold_core::{HoldGeometry, HoldSolution, Point};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;

const LOGICAL_SIZE: f64 = 800.0;
const TURN_STEPS: usize = 48;

const BACKGROUND: RGBColor = RGBColor(0x1e, 0x1e, 0x1e);
const ROSE_TICK: RGBColor = RGBColor(0x44, 0x44, 0x44);
const ROSE_TEXT: RGBColor = RGBColor(0x66, 0x66, 0x66);
const TRACK: RGBColor = RGBColor(0x98, 0xff, 0x98);
const LABEL: RGBColor = RGBColor(0xcc, 0xcc, 0xcc);
const GATE1: RGBColor = RGBColor(0xff, 0x00, 0xff);
const GATE2: RGBColor = RGBColor(0xff, 0xaa, 0x00);
const WIND: RGBColor = RGBColor(0x44, 0x88, 0xff);

const ROSE_OUTER: f64 = 380.0;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output width and height in pixels
    pub size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { size: 800 }
    }
}

/// Maps logical, fix-centred coordinates to pixels.
#[derive(Debug, Clone, Copy)]
struct Frame {
    scale: f64,
}

impl Frame {
    fn new(size: u32) -> Self {
        Self {
            scale: f64::from(size) / LOGICAL_SIZE,
        }
    }

    fn pixel(&self, p: Point) -> (i32, i32) {
        let half = LOGICAL_SIZE / 2.0;
        (
            ((half + p.x) * self.scale).round() as i32,
            ((half + p.y) * self.scale).round() as i32,
        )
    }

    fn len(&self, logical: f64) -> u32 {
        (logical * self.scale).round().max(1.0) as u32
    }

    fn font(&self, logical: f64) -> f64 {
        logical * self.scale
    }
}

/// Tick inner radius and stroke width for a compass degree.
pub fn compass_tick(deg: u32) -> (f64, f64) {
    if deg % 90 == 0 {
        (340.0, 3.0)
    } else if deg % 30 == 0 {
        (350.0, 2.0)
    } else if deg % 10 == 0 {
        (360.0, 2.0)
    } else if deg % 5 == 0 {
        (365.0, 1.0)
    } else {
        (372.0, 0.5)
    }
}

/// Rose label for every 30 degrees; cardinals use letters.
pub fn compass_label(deg: u32) -> Option<String> {
    match deg {
        0 => Some("N".to_string()),
        90 => Some("E".to_string()),
        180 => Some("S".to_string()),
        270 => Some("W".to_string()),
        d if d % 30 == 0 => Some(pad3(f64::from(d))),
        _ => None,
    }
}

/// Triangle with its tip at `tip`, pointing along a screen angle (0 = +x,
/// clockwise).
pub fn arrow_head(tip: Point, angle_deg: f64, size: f64) -> [Point; 3] {
    let back_left = Point::new(-size, size / 2.0).rotated(angle_deg);
    let back_right = Point::new(-size, -size / 2.0).rotated(angle_deg);
    [
        tip,
        Point::new(tip.x + back_left.x, tip.y + back_left.y),
        Point::new(tip.x + back_right.x, tip.y + back_right.y),
    ]
}

/// Render the solution's geometry as an SVG document.
pub fn render_svg(solution: &HoldSolution, config: &RenderConfig) -> Result<String> {
    let frame = Frame::new(config.size);
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (config.size, config.size)).into_drawing_area();
        root.fill(&BACKGROUND)?;
        draw_compass(&root, &frame)?;
        draw_pattern(&root, &frame, &solution.geometry)?;
        draw_wind(&root, &frame, &solution.geometry)?;
        root.present()?;
    }
    tracing::debug!(bytes = svg.len(), size = config.size, "rendered hold");
    Ok(svg)
}

fn text_style(
    frame: &Frame,
    size: f64,
    color: &RGBColor,
    bold: bool,
    h: HPos,
) -> TextStyle<'static> {
    let font = ("sans-serif", frame.font(size)).into_font();
    let font = if bold { font.style(FontStyle::Bold) } else { font };
    font.color(color).pos(Pos::new(h, VPos::Center))
}

fn draw_compass(area: &Area<'_>, frame: &Frame) -> Result<()> {
    for deg in 0..360u32 {
        let (inner, width) = compass_tick(deg);
        let outer_pt = Point::from_bearing(f64::from(deg), ROSE_OUTER);
        let inner_pt = Point::from_bearing(f64::from(deg), inner);
        area.draw(&PathElement::new(
            vec![frame.pixel(outer_pt), frame.pixel(inner_pt)],
            ROSE_TICK.stroke_width(frame.len(width)),
        ))?;

        if let Some(label) = compass_label(deg) {
            let radius = if deg % 90 == 0 { 320.0 } else { 330.0 };
            let at = Point::from_bearing(f64::from(deg), radius);
            area.draw(&Text::new(
                label,
                frame.pixel(at),
                text_style(frame, 16.0, &ROSE_TEXT, false, HPos::Center),
            ))?;
        }
    }
    Ok(())
}

fn draw_pattern(area: &Area<'_>, frame: &Frame, geometry: &HoldGeometry) -> Result<()> {
    let to_pixel = |p: Point| frame.pixel(geometry.to_world(p));
    let track_style = TRACK.stroke_width(frame.len(5.0));

    for segment in &geometry.segments {
        let points = segment
            .sample(TURN_STEPS)
            .into_iter()
            .map(to_pixel)
            .collect::<Vec<_>>();
        area.draw(&PathElement::new(points, track_style))?;
    }

    let leg = geometry.leg_length;
    let bottom = 2.0 * geometry.turn_radius;

    // Direction arrow halfway along the inbound leg
    let head = arrow_head(Point::new(-leg / 2.0, 0.0), 0.0, 10.0);
    area.draw(&Polygon::new(
        head.iter().map(|p| to_pixel(*p)).collect::<Vec<_>>(),
        TRACK.filled(),
    ))?;

    area.draw(&Circle::new(to_pixel(geometry.fix), frame.len(6.0), TRACK.filled()))?;

    let label = |text: String, local: Point, dy: f64| {
        let at = geometry.to_world(local);
        Text::new(
            text,
            frame.pixel(Point::new(at.x, at.y + dy)),
            text_style(frame, 14.0, &LABEL, false, HPos::Center),
        )
    };
    let inbound_at = Point::new(-leg / 2.0, -35.0);
    area.draw(&label(track_label(geometry.inbound_track_deg), inbound_at, -8.0))?;
    area.draw(&label(hdg_label(geometry.inbound_heading_deg), inbound_at, 8.0))?;
    let outbound_at = Point::new(-leg / 2.0, bottom + 35.0);
    area.draw(&label(track_label(geometry.outbound_track_deg), outbound_at, -8.0))?;
    area.draw(&label(hdg_label(geometry.outbound_heading_deg), outbound_at, 8.0))?;

    for (name, gate, color, offset) in [
        ("Gate 1", &geometry.gate1, GATE1, Point::new(-15.0, 15.0)),
        ("Gate 2", &geometry.gate2, GATE2, Point::new(-15.0, -15.0)),
    ] {
        area.draw(&Circle::new(to_pixel(gate.position), frame.len(8.0), color.filled()))?;
        let anchor = Point::new(gate.position.x + offset.x, gate.position.y + offset.y);
        area.draw(&Text::new(
            gate_label(name, gate),
            to_pixel(anchor),
            text_style(frame, 18.0, &color, true, HPos::Right),
        ))?;
    }

    area.draw(&Text::new(
        "FIX".to_string(),
        to_pixel(Point::new(25.0, -25.0)),
        text_style(frame, 20.0, &TRACK, false, HPos::Left),
    ))?;
    Ok(())
}

fn draw_wind(area: &Area<'_>, frame: &Frame, geometry: &HoldGeometry) -> Result<()> {
    let arrow = geometry.wind_arrow;
    area.draw(&PathElement::new(
        vec![frame.pixel(arrow.tail), frame.pixel(arrow.head)],
        WIND.stroke_width(frame.len(6.0)),
    ))?;

    // Screen angle of the downwind direction
    let toward_fix = arrow.direction_deg - 90.0 + 180.0;
    let head = arrow_head(arrow.head, toward_fix, 30.0);
    area.draw(&Polygon::new(
        head.iter().map(|p| frame.pixel(*p)).collect::<Vec<_>>(),
        WIND.filled(),
    ))?;

    let dy = if arrow.tail.y < 0.0 { -25.0 } else { 25.0 };
    area.draw(&Text::new(
        wind_arrow_label(arrow.direction_deg),
        frame.pixel(Point::new(arrow.tail.x, arrow.tail.y + dy)),
        text_style(frame, 20.0, &WIND, true, HPos::Center),
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_ticks_get_heavier_on_round_numbers() {
        assert_eq!(compass_tick(0), (340.0, 3.0));
        assert_eq!(compass_tick(30), (350.0, 2.0));
        assert_eq!(compass_tick(40), (360.0, 2.0));
        assert_eq!(compass_tick(45), (365.0, 1.0));
        assert_eq!(compass_tick(47), (372.0, 0.5));
    }

    #[test]
    fn compass_labels_every_thirty_degrees() {
        assert_eq!(compass_label(0).as_deref(), Some("N"));
        assert_eq!(compass_label(270).as_deref(), Some("W"));
        assert_eq!(compass_label(30).as_deref(), Some("030"));
        assert_eq!(compass_label(330).as_deref(), Some("330"));
        assert_eq!(compass_label(45), None);
    }

    #[test]
    fn arrow_head_points_along_angle() {
        let [tip, left, right] = arrow_head(Point::ORIGIN, 0.0, 10.0);
        assert_eq!(tip, Point::ORIGIN);
        assert!((left.x + 10.0).abs() < 1e-9 && (left.y - 5.0).abs() < 1e-9);
        assert!((right.x + 10.0).abs() < 1e-9 && (right.y + 5.0).abs() < 1e-9);

        // Pointing down the screen: back corners sit above the tip
        let [_, left, right] = arrow_head(Point::ORIGIN, 90.0, 10.0);
        assert!(left.y < 0.0 && right.y < 0.0);
    }

    #[test]
    fn frame_centres_the_fix() {
        let frame = Frame::new(800);
        assert_eq!(frame.pixel(Point::ORIGIN), (400, 400));
        let half = Frame::new(400);
        assert_eq!(half.pixel(Point::new(100.0, -100.0)), (250, 150));
        assert_eq!(half.len(0.5), 1);
    }
}
