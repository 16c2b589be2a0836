//! Keyframe timeline over the handful of properties the scroll binding
//! drives.
//!
//! Tweens are placed on a shared clock measured in timeline seconds. A tween
//! with no explicit position is appended after everything already on the
//! timeline. Start values are taken from the captured state at construction,
//! or from the previous tween on the same target.

use crate::constants::DEFAULT_TWEEN_DURATION;
use crate::ease::Ease;
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TweenTarget {
    /// Uniform mesh scale.
    MeshScale,
    /// Camera depth along the viewing axis.
    CameraZ,
    /// Mount element opacity, 0..1.
    ContainerOpacity,
    /// Mount element blur radius in CSS px.
    ContainerBlur,
}

/// Values of every animatable property at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimelineValues {
    pub mesh_scale: f32,
    pub camera_z: f32,
    pub container_opacity: f32,
    pub container_blur: f32,
}

impl TimelineValues {
    pub fn get(&self, target: TweenTarget) -> f32 {
        match target {
            TweenTarget::MeshScale => self.mesh_scale,
            TweenTarget::CameraZ => self.camera_z,
            TweenTarget::ContainerOpacity => self.container_opacity,
            TweenTarget::ContainerBlur => self.container_blur,
        }
    }

    pub fn set(&mut self, target: TweenTarget, value: f32) {
        match target {
            TweenTarget::MeshScale => self.mesh_scale = value,
            TweenTarget::CameraZ => self.camera_z = value,
            TweenTarget::ContainerOpacity => self.container_opacity = value,
            TweenTarget::ContainerBlur => self.container_blur = value,
        }
    }
}

/// Where a new tween starts on the timeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Position {
    /// After the current end of the timeline.
    Sequence,
    /// At an absolute time.
    At(f32),
    /// This many seconds before the current end.
    FromEnd(f32),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenVars {
    pub duration: f32,
    pub ease: Ease,
}

impl Default for TweenVars {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TWEEN_DURATION,
            ease: Ease::default(),
        }
    }
}

impl TweenVars {
    pub fn eased(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: TweenTarget,
    pub from: f32,
    pub to: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    pub fn value_at(&self, time: f32) -> f32 {
        let local = if self.duration > 0.0 {
            (time - self.start) / self.duration
        } else if time >= self.start {
            1.0
        } else {
            0.0
        };
        let k = self.ease.apply(local);
        self.from + (self.to - self.from) * k
    }
}

#[derive(Clone, Debug)]
pub struct Timeline {
    initial: TimelineValues,
    tweens: SmallVec<[Tween; 4]>,
}

impl Timeline {
    pub fn new(initial: TimelineValues) -> Self {
        Self {
            initial,
            tweens: SmallVec::new(),
        }
    }

    /// Total length in timeline seconds.
    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    #[inline]
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// Tween `target` towards `value`.
    pub fn to(
        &mut self,
        target: TweenTarget,
        value: f32,
        vars: TweenVars,
        position: Position,
    ) -> &mut Self {
        let end = self.duration();
        let start = match position {
            Position::Sequence => end,
            Position::At(t) => t,
            Position::FromEnd(offset) => end - offset,
        }
        .max(0.0);
        let from = self
            .tweens
            .iter()
            .rev()
            .find(|t| t.target == target)
            .map_or(self.initial.get(target), |t| t.to);
        self.tweens.push(Tween {
            target,
            from,
            to: value,
            start,
            duration: vars.duration.max(0.0),
            ease: vars.ease,
        });
        self
    }

    /// Property values at `time` timeline seconds.
    pub fn sample(&self, time: f32) -> TimelineValues {
        let mut out = self.initial;
        let mut touched: SmallVec<[TweenTarget; 4]> = SmallVec::new();
        for tw in &self.tweens {
            let first = !touched.contains(&tw.target);
            if first || time >= tw.start {
                out.set(tw.target, tw.value_at(time));
            }
            if first {
                touched.push(tw.target);
            }
        }
        out
    }

    /// Property values at normalised progress through the whole timeline.
    pub fn sample_progress(&self, progress: f32) -> TimelineValues {
        self.sample(progress.clamp(0.0, 1.0) * self.duration())
    }
}
