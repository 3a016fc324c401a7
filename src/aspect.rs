//! Aspect ratio reduction and the resize policy.
//!
//! [`AspectRatio`] reduces a pixel geometry to lowest integer terms;
//! [`resize_for_width`] decides whether a source should be downscaled to the
//! configured maximum width and computes the target dimensions when it
//! should.

/// A width:height ratio reduced to lowest integer terms.
///
/// Invariant: `gcd(width, height) == 1` for any value produced by
/// [`AspectRatio::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct AspectRatio {
    /// Width component of the reduced ratio.
    pub width: u32,
    /// Height component of the reduced ratio.
    pub height: u32,
}

impl AspectRatio {
    /// Reduce a pixel geometry to its aspect ratio.
    ///
    /// Both dimensions must be nonzero; a zero dimension has no meaningful
    /// ratio and the division below fails.
    pub fn of(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "dimensions must be nonzero");
        let divisor = gcd(width, height);
        Self {
            width: width / divisor,
            height: height / divisor,
        }
    }
}

/// Greatest common divisor by the Euclidean algorithm.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Decide whether to resize and compute the target dimensions.
///
/// Returns `None` (no resize) when `source_width` is strictly below
/// `max_width`; the policy only downsizes sources that already reach the
/// cap. When a resize applies, the scale factor is `max_width /
/// aspect.width` and both output dimensions are integer truncations, so the
/// reduced ratio is preserved exactly up to truncation.
pub fn resize_for_width(
    aspect: AspectRatio,
    source_width: u32,
    max_width: u32,
) -> Option<(u32, u32)> {
    if source_width < max_width {
        return None;
    }
    let scale = f64::from(max_width) / f64::from(aspect.width);
    let new_width = (scale * f64::from(aspect.width)) as u32;
    let new_height = (scale * f64::from(aspect.height)) as u32;
    Some((new_width, new_height))
}
