//! The concrete surface behind the wasm facade.

use crate::core::color::Color;
use crate::domain::segment::Segment;

#[cfg(target_arch = "wasm32")]
use super::canvas::CanvasSurface;
use super::framebuffer::FrameBuffer;
use super::surface::Surface;

pub enum HostSurface {
    /// Software buffer the host blits from linear memory
    Pixels(FrameBuffer),
    #[cfg(target_arch = "wasm32")]
    Canvas(CanvasSurface),
}

impl HostSurface {
    pub fn frame_buffer(&self) -> Option<&FrameBuffer> {
        match self {
            HostSurface::Pixels(fb) => Some(fb),
            #[cfg(target_arch = "wasm32")]
            HostSurface::Canvas(_) => None,
        }
    }

    fn inner(&mut self) -> &mut dyn Surface {
        match self {
            HostSurface::Pixels(fb) => fb,
            #[cfg(target_arch = "wasm32")]
            HostSurface::Canvas(canvas) => canvas,
        }
    }
}

impl Surface for HostSurface {
    fn size(&self) -> (f32, f32) {
        match self {
            HostSurface::Pixels(fb) => fb.size(),
            #[cfg(target_arch = "wasm32")]
            HostSurface::Canvas(canvas) => canvas.size(),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.inner().resize(width, height);
    }

    fn fill(&mut self, color: Color, alpha: f32) {
        self.inner().fill(color, alpha);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, alpha: f32) {
        self.inner().fill_rect(x, y, w, h, color, alpha);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32) {
        self.inner().fill_circle(x, y, radius, color, alpha);
    }

    fn stroke_line(&mut self, segment: &Segment, color: Color, alpha: f32, width: f32) {
        self.inner().stroke_line(segment, color, alpha, width);
    }

    fn stroke_lines(&mut self, segments: &[Segment], color: Color, alpha: f32, width: f32) {
        self.inner().stroke_lines(segments, color, alpha, width);
    }
}
