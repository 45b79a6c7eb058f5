//! Numeric policy for scroll offsets and layout measurements
//!
//! Continuous animation accumulates floating error, so "at the top" and
//! "same position" are compared with a fixed tolerance instead of `==`.

/// Tolerance for comparing scroll offsets (in layout units)
pub const OFFSET_EPSILON: f32 = 1.0;

/// Tolerance for treating a layout re-measurement as unchanged
pub const LAYOUT_EPSILON: f32 = 0.1;

/// Compare two offsets within [`OFFSET_EPSILON`]
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < OFFSET_EPSILON
}

/// Pass a value through only if it is finite
#[inline]
pub fn finite(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

/// Check if an offset lies inside the collapsible region `[0, distance]`
///
/// Offsets within [`OFFSET_EPSILON`] past the edge still count as inside.
#[inline]
pub fn within_collapsible(offset: f32, distance: f32) -> bool {
    offset <= distance + OFFSET_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(100.0, 100.6));
        assert!(!approx_eq(100.0, 101.5));
    }

    #[test]
    fn test_finite_rejects_nan_and_infinity() {
        assert_eq!(finite(12.5), Some(12.5));
        assert_eq!(finite(f32::NAN), None);
        assert_eq!(finite(f32::INFINITY), None);
        assert_eq!(finite(f32::NEG_INFINITY), None);
    }

    #[test]
    fn test_within_collapsible() {
        assert!(within_collapsible(0.0, 200.0));
        assert!(within_collapsible(200.0, 200.0));
        assert!(within_collapsible(200.5, 200.0));
        assert!(!within_collapsible(202.0, 200.0));
    }
}
