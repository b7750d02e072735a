//! Alpha batching for connection lines.
//!
//! Segments are grouped into a fixed number of alpha buckets so each bucket
//! is stroked with one style change and one path.

use crate::core::color::Color;
use crate::domain::segment::Segment;

use super::surface::Surface;

pub const ALPHA_BUCKETS: usize = 20;

#[derive(Debug)]
pub struct AlphaBatches {
    buckets: Vec<Vec<Segment>>,
}

impl Default for AlphaBatches {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBatches {
    pub fn new() -> Self {
        Self {
            buckets: (0..ALPHA_BUCKETS).map(|_| Vec::new()).collect(),
        }
    }

    /// Bucket index for `alpha` relative to `max_alpha`. Rounds up so a
    /// faint line never lands in an empty (alpha 0) bucket.
    #[inline]
    pub fn bucket_of(alpha: f32, max_alpha: f32) -> usize {
        if max_alpha.is_nan() || max_alpha <= 0.0 || !alpha.is_finite() {
            return 0;
        }
        let t = (alpha / max_alpha).clamp(0.0, 1.0);
        let idx = (t * ALPHA_BUCKETS as f32).ceil() as usize;
        idx.clamp(1, ALPHA_BUCKETS) - 1
    }

    /// Alpha every segment of bucket `idx` is drawn with
    #[inline]
    pub fn bucket_alpha(idx: usize, max_alpha: f32) -> f32 {
        max_alpha * (idx + 1) as f32 / ALPHA_BUCKETS as f32
    }

    /// Re-sort this frame's segments. Bucket storage is kept across frames.
    pub fn fill(&mut self, segments: &[Segment], max_alpha: f32) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        for segment in segments {
            let idx = Self::bucket_of(segment.alpha, max_alpha);
            self.buckets[idx].push(*segment);
        }
    }

    /// Number of non-empty buckets, i.e. draw calls for this frame
    pub fn draw_calls(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Color, max_alpha: f32, width: f32) {
        for (idx, bucket) in self.buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            surface.stroke_lines(bucket, color, Self::bucket_alpha(idx, max_alpha), width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(alpha: f32) -> Segment {
        Segment { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0, alpha }
    }

    #[test]
    fn buckets_cover_the_alpha_range() {
        assert_eq!(AlphaBatches::bucket_of(0.011, 0.6), 0);
        assert_eq!(AlphaBatches::bucket_of(0.6, 0.6), ALPHA_BUCKETS - 1);
        assert_eq!(AlphaBatches::bucket_of(0.29, 0.6), ALPHA_BUCKETS / 2 - 1);
        assert_eq!(AlphaBatches::bucket_of(0.5, 0.0), 0);
    }

    #[test]
    fn bucket_alpha_never_exceeds_max_or_drops_to_zero() {
        for idx in 0..ALPHA_BUCKETS {
            let a = AlphaBatches::bucket_alpha(idx, 0.6);
            assert!(a > 0.0 && a <= 0.6 + 1e-6);
        }
    }

    #[test]
    fn fill_groups_segments_and_counts_draw_calls() {
        let mut batches = AlphaBatches::new();
        batches.fill(&[seg(0.6), seg(0.59), seg(0.05), seg(0.6)], 0.6);
        assert_eq!(batches.draw_calls(), 2);

        batches.fill(&[], 0.6);
        assert_eq!(batches.draw_calls(), 0);
    }
}
