//! Canvas 2D surface (browser only).

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::color::Color;
use crate::core::error::EngineError;
use crate::domain::segment::Segment;

use super::surface::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Fails when the canvas cannot hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| EngineError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| EngineError::SurfaceUnavailable("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::SurfaceUnavailable("context is not 2d".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    fn style(&self, color: Color, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.set_fill_style_str(&color.css());
    }

    fn path(&self, segments: &[Segment]) {
        self.ctx.begin_path();
        for s in segments {
            self.ctx.move_to(s.x1 as f64, s.y1 as f64);
            self.ctx.line_to(s.x2 as f64, s.y2 as f64);
        }
    }

    fn stroke_path(&self, color: Color, alpha: f32, width: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width.max(0.0) as f64);
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill(&mut self, color: Color, alpha: f32) {
        let (w, h) = self.size();
        self.style(color, alpha);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, alpha: f32) {
        self.style(color, alpha);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32) {
        self.style(color, alpha);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, segment: &Segment, color: Color, alpha: f32, width: f32) {
        self.path(std::slice::from_ref(segment));
        self.stroke_path(color, alpha, width);
    }

    fn stroke_lines(&mut self, segments: &[Segment], color: Color, alpha: f32, width: f32) {
        if segments.is_empty() {
            return;
        }
        self.path(segments);
        self.stroke_path(color, alpha, width);
    }
}
