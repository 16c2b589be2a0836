/// Easing curves used by the scroll timeline.
///
/// Names follow the usual power family: `Power1` is quadratic, `Power2`
/// cubic, `Power3` quartic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Default curve for tweens that do not name one.
    #[default]
    Power1Out,
    Power2In,
    Power3Out,
}

impl Ease {
    /// Map linear progress to eased progress. Input is clamped to [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2In => t.powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}
