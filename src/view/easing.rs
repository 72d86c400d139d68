//! Easing curves for draw-time interpolation.
//!
//! The state core flips flags at scheduled instants; continuous motion is
//! derived by the renderer from elapsed time mapped through one of these
//! curves. `OutCubic` gives the flap and slide their decelerating feel.

/// An easing curve mapping linear time 0..=1 to progress 0..=1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// No shaping.
    Linear,
    /// Fast start, decelerating finish.
    OutQuad,
    /// Stronger deceleration; the default for flap and slide.
    OutCubic,
    /// Slow-fast-slow, used for the envelope pull.
    InOutQuad,
}

impl Ease {
    /// Apply the curve. Input is clamped to 0..=1.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
        }
    }
}
