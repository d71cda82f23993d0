//! One frame of the worm, drawn against any [`Surface`].

use crate::color::{color_at, Rgb};
use crate::curve::{Curve, Point};

/// The handful of 2D drawing calls a frame needs. The browser canvas
/// context implements this in `wasm::render`.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn set_color(&mut self, color: Rgb);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

/// Centered, y-up coordinates to surface pixels.
pub fn to_surface(point: &Point, width: f64, height: f64) -> (f64, f64) {
    (point.x + width / 2.0, height / 2.0 - point.y)
}

/// Clears the surface and strokes one path through `points` in `color`.
/// Returns `false` when there was nothing to draw.
pub fn draw_polyline<'a, S, I>(surface: &mut S, color: Rgb, points: I) -> bool
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Point>,
{
    let (width, height) = surface.size();
    surface.clear();

    let mut points = points.into_iter();
    let Some(head) = points.next() else {
        return false;
    };

    surface.set_color(color);
    surface.begin_path();
    let (x, y) = to_surface(head, width, height);
    surface.move_to(x, y);
    for point in points {
        let (x, y) = to_surface(point, width, height);
        surface.line_to(x, y);
    }
    surface.stroke();
    true
}

/// Draws the curve's current window colored by its current parameter.
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, curve: &Curve) -> bool {
    let color = color_at(curve.parameter(), curve.interval());
    draw_polyline(surface, color, curve.points())
}
