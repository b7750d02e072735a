use crate::core::color::Color;
use crate::domain::segment::Segment;

/// Anything the render pass can paint on.
///
/// Coordinates are in surface pixels. `alpha` is 0..=1 and is applied on top
/// of the color, never stored.
pub trait Surface {
    /// Current (width, height)
    fn size(&self) -> (f32, f32);

    fn resize(&mut self, width: u32, height: u32);

    /// Cover the whole surface. With alpha < 1 this is the trail fade.
    fn fill(&mut self, color: Color, alpha: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, alpha: f32);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32);

    fn stroke_line(&mut self, segment: &Segment, color: Color, alpha: f32, width: f32);

    /// Stroke many lines with one shared style. Surfaces with a path API
    /// override this to issue a single draw call.
    fn stroke_lines(&mut self, segments: &[Segment], color: Color, alpha: f32, width: f32) {
        for segment in segments {
            self.stroke_line(segment, color, alpha, width);
        }
    }
}
