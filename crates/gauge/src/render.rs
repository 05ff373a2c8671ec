//! Gauge drawing and PNG serialization.

use health::{Bmi, BmiBand};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::GaugeError;
use crate::font;
use crate::geometry::{self, CENTER_X, CENTER_Y, HEIGHT, INNER_RADIUS, OUTER_RADIUS, WIDTH};

/// Band fill opacity, roughly 70%.
const BAND_ALPHA: u8 = 178;

/// Arc tessellation step in radians. Small enough that the polygonal
/// approximation is invisible at the dial radius.
const ARC_STEP: f64 = 0.02;

const NEEDLE_WIDTH: f32 = 3.0;
const TITLE_SCALE: f32 = 4.0;
const TITLE_TOP: f32 = 24.0;

fn band_color(band: BmiBand) -> (u8, u8, u8) {
    match band {
        BmiBand::Underweight => (0, 0, 255),
        BmiBand::Normal => (0, 128, 0),
        BmiBand::Overweight => (255, 165, 0),
        BmiBand::Obese => (255, 0, 0),
    }
}

/// Builds an annular sector between two dial angles as a closed polygon.
fn sector_path(start: f64, end: f64) -> Option<Path> {
    let steps = ((end - start) / ARC_STEP).ceil().max(1.0) as usize;
    let angle_at = |i: usize| start + (end - start) * i as f64 / steps as f64;

    let mut pb = PathBuilder::new();
    for i in 0..=steps {
        let (x, y) = geometry::point_at(angle_at(i), OUTER_RADIUS);
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    for i in (0..=steps).rev() {
        let (x, y) = geometry::point_at(angle_at(i), INNER_RADIUS);
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

fn solid_paint(r: u8, g: u8, b: u8, a: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Renders the half-circle gauge for a BMI value and encodes it as PNG.
///
/// The needle angle is not clamped; values outside [10, 40] draw the
/// needle past the visible arc without error.
#[tracing::instrument]
pub fn render(bmi: Bmi) -> Result<Vec<u8>, GaugeError> {
    let mut pixmap = Pixmap::new(WIDTH, HEIGHT).ok_or(GaugeError::Allocation)?;
    pixmap.fill(Color::from_rgba8(255, 255, 255, 255));

    // Colored ring segments, one per band, in threshold order.
    let mut start = 0.0;
    for band in BmiBand::ALL {
        let end = geometry::needle_angle(band.upper_bound());
        let sector = sector_path(start, end).ok_or(GaugeError::Geometry)?;
        let (r, g, b) = band_color(band);
        pixmap.fill_path(
            &sector,
            &solid_paint(r, g, b, BAND_ALPHA),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        start = end;
    }

    // Needle from the hub to the outer edge.
    let (tip_x, tip_y) = geometry::point_at(geometry::needle_angle(bmi.value()), OUTER_RADIUS);
    let mut pb = PathBuilder::new();
    pb.move_to(CENTER_X as f32, CENTER_Y as f32);
    pb.line_to(tip_x, tip_y);
    let needle = pb.finish().ok_or(GaugeError::Geometry)?;
    pixmap.stroke_path(
        &needle,
        &solid_paint(0, 0, 0, 255),
        &Stroke {
            width: NEEDLE_WIDTH,
            ..Stroke::default()
        },
        Transform::identity(),
        None,
    );

    // Centered title, one decimal place.
    let title = format!("BMI {bmi}");
    let title_x = (WIDTH as f32 - font::text_width(&title, TITLE_SCALE)) / 2.0;
    let text = font::text_path(&title, title_x, TITLE_TOP, TITLE_SCALE)
        .ok_or(GaugeError::Geometry)?;
    pixmap.fill_path(
        &text,
        &solid_paint(0, 0, 0, 255),
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    pixmap
        .encode_png()
        .map_err(|e| GaugeError::Encode(e.to_string()))
}
