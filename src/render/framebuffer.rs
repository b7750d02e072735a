//! Software surface: a packed ABGR pixel buffer (RGBA bytes in memory).
//!
//! The host reads it through `pixels_ptr()` / `pixels_len()` and blits it into
//! an `ImageData`, the same way grid colors are handed over elsewhere.

use crate::core::color::Color;
use crate::domain::segment::Segment;

use super::surface::Surface;

#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y as usize) * (self.width as usize) + x as usize).copied()
    }

    #[inline]
    fn blend_at(&mut self, x: i64, y: i64, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize) * (self.width as usize) + x as usize;
        if let Some(dst) = self.pixels.get_mut(idx) {
            *dst = blend(*dst, color, alpha);
        }
    }

    /// Pixel-space clip of [lo, hi) along an axis of length `extent`
    #[inline]
    fn span(lo: f32, hi: f32, extent: u32) -> (i64, i64) {
        let start = (lo.floor() as i64).max(0);
        let end = (hi.ceil() as i64).min(extent as i64);
        (start, end)
    }
}

/// Source-over blend of `color` at `alpha` onto a packed ABGR pixel.
#[inline]
pub fn blend(dst: u32, color: Color, alpha: f32) -> u32 {
    if alpha.is_nan() || alpha <= 0.0 {
        return dst;
    }
    if alpha >= 1.0 {
        return color.to_abgr(1.0);
    }
    let inv = 1.0 - alpha;
    let mix = |src: u8, shift: u32| -> u32 {
        let d = ((dst >> shift) & 0xFF) as f32;
        ((src as f32) * alpha + d * inv).round() as u32
    };
    let r = mix(color.r, 0);
    let g = mix(color.g, 8);
    let b = mix(color.b, 16);
    let a = (255.0 * alpha + ((dst >> 24) as f32) * inv).round() as u32;
    (a << 24) | (b << 16) | (g << 8) | r
}

impl Surface for FrameBuffer {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize((width as usize) * (height as usize), 0);
    }

    fn fill(&mut self, color: Color, alpha: f32) {
        if alpha >= 1.0 {
            self.pixels.fill(color.to_abgr(1.0));
            return;
        }
        for px in self.pixels.iter_mut() {
            *px = blend(*px, color, alpha);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, alpha: f32) {
        if !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(x, x + w, self.width);
        let (y0, y1) = Self::span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_at(px, py, color, alpha);
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32) {
        if !(x.is_finite() && y.is_finite() && radius.is_finite()) {
            return;
        }
        let r = radius.max(0.5);
        let r2 = r * r;
        let (x0, x1) = Self::span(x - r, x + r, self.width);
        let (y0, y1) = Self::span(y - r, y + r, self.height);

        let mut covered = false;
        for py in y0..y1 {
            let cy = py as f32 + 0.5 - y;
            for px in x0..x1 {
                let cx = px as f32 + 0.5 - x;
                if cx * cx + cy * cy <= r2 {
                    self.blend_at(px, py, color, alpha);
                    covered = true;
                }
            }
        }
        // Sub-pixel dots still show up as one pixel
        if !covered {
            self.blend_at(x.floor() as i64, y.floor() as i64, color, alpha);
        }
    }

    fn stroke_line(&mut self, segment: &Segment, color: Color, alpha: f32, width: f32) {
        let Segment { x1, y1, x2, y2, .. } = *segment;
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return;
        }
        if width.is_finite() && width > 1.0 {
            self.stroke_thick(segment, color, alpha, width * 0.5);
            return;
        }

        // DDA, one blend per pixel
        let (dx, dy) = (x2 - x1, y2 - y1);
        let limit = 2 * (self.width as usize + self.height as usize);
        let steps = (dx.abs().max(dy.abs()).ceil() as usize).min(limit);
        let mut last = None;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let px = (x1 + dx * t).floor() as i64;
            let py = (y1 + dy * t).floor() as i64;
            if last == Some((px, py)) {
                continue;
            }
            last = Some((px, py));
            self.blend_at(px, py, color, alpha);
        }
    }
}

impl FrameBuffer {
    /// Wide lines: every pixel whose center lies within `half` of the segment.
    fn stroke_thick(&mut self, segment: &Segment, color: Color, alpha: f32, half: f32) {
        let Segment { x1, y1, x2, y2, .. } = *segment;
        let (x0, xe) = Self::span(x1.min(x2) - half, x1.max(x2) + half, self.width);
        let (y0, ye) = Self::span(y1.min(y2) - half, y1.max(y2) + half, self.height);
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len2 = dx * dx + dy * dy;
        let half2 = half * half;

        for py in y0..ye {
            let cy = py as f32 + 0.5;
            for px in x0..xe {
                let cx = px as f32 + 0.5;
                let t = if len2 > 0.0 {
                    (((cx - x1) * dx + (cy - y1) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let (ex, ey) = (x1 + dx * t - cx, y1 + dy * t - cy);
                if ex * ex + ey * ey <= half2 {
                    self.blend_at(px, py, color, alpha);
                }
            }
        }
    }
}
