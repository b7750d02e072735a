/// Xorshift32 random number generator
///
/// Zero state would lock the generator at zero forever, so seeds are forced odd.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[inline]
pub fn seed(value: u32) -> u32 {
    value | 1
}

/// Uniform in [0, 1)
#[inline]
pub fn unit_f32(state: &mut u32) -> f32 {
    // Top 24 bits fit exactly in the f32 mantissa.
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform in [lo, hi)
#[inline]
pub fn range_f32(state: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * unit_f32(state)
}

/// Uniform in [-magnitude, magnitude]
#[inline]
pub fn jitter(state: &mut u32, magnitude: f32) -> f32 {
    (unit_f32(state) * 2.0 - 1.0) * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_stays_in_half_open_range() {
        let mut s = seed(12345);
        for _ in 0..10_000 {
            let v = unit_f32(&mut s);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn jitter_respects_magnitude() {
        let mut s = seed(7);
        for _ in 0..10_000 {
            assert!(jitter(&mut s, 2.5).abs() <= 2.5);
        }
    }

    #[test]
    fn zero_seed_is_promoted() {
        let mut s = seed(0);
        assert_ne!(xorshift32(&mut s), 0);
    }
}
