//! Scroll-scrubbed timeline binding.
//!
//! A `ScrollTrigger` turns the page scroll offset into progress through a
//! section, `Scrub` lets the timeline playhead chase that progress instead of
//! jumping to it, and `ScrollBinding` ties both to the timeline that grows
//! the cube, pulls the camera in and fades the container out.

use crate::config::ScrollConfig;
use crate::ease::Ease;
use crate::timeline::{Position, Timeline, TimelineValues, TweenTarget, TweenVars};

/// Vertical extent of the trigger section in document coordinates (CSS px).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Progress through the trigger section: 0 when its top reaches the viewport
/// centre, 1 when its bottom does.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: f64,
    pub end: f64,
}

impl ScrollTrigger {
    pub fn new(bounds: SectionBounds, viewport_height: f64) -> Self {
        let centre = viewport_height * 0.5;
        Self {
            start: bounds.top - centre,
            end: bounds.bottom - centre,
        }
    }

    /// Recompute the scroll range after a layout change.
    pub fn refresh(&mut self, bounds: SectionBounds, viewport_height: f64) {
        *self = Self::new(bounds, viewport_height);
    }

    pub fn progress(&self, scroll_y: f64) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0) as f32
    }
}

/// Smoothed playhead. Every new target starts a catch-up lasting `seconds`.
#[derive(Copy, Clone, Debug)]
pub struct Scrub {
    seconds: f32,
    from: f32,
    target: f32,
    current: f32,
    elapsed: f32,
}

impl Scrub {
    pub fn new(seconds: f32, initial: f32) -> Self {
        Self {
            seconds: seconds.max(0.0),
            from: initial,
            target: initial,
            current: initial,
            elapsed: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Step the catch-up by `dt_sec` and return the playhead.
    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        if self.seconds <= 0.0 {
            self.current = self.target;
            return self.current;
        }
        self.elapsed = (self.elapsed + dt_sec.max(0.0)).min(self.seconds);
        let k = Ease::Power3Out.apply(self.elapsed / self.seconds);
        self.current = self.from + (self.target - self.from) * k;
        self.current
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }
}

/// The cube's scroll choreography for a given config.
pub fn build_timeline(cfg: &ScrollConfig, start: TimelineValues) -> Timeline {
    let mut tl = Timeline::new(start);
    tl.to(
        TweenTarget::MeshScale,
        cfg.scale_to,
        TweenVars::eased(Ease::Power2In),
        Position::Sequence,
    )
    .to(
        TweenTarget::CameraZ,
        cfg.camera_z_to,
        TweenVars::eased(Ease::Power2In),
        Position::At(0.0),
    );
    let fade = TweenVars {
        duration: cfg.fade_duration,
        ..TweenVars::default()
    };
    let fade_at = (tl.duration() - cfg.fade_duration).max(0.0);
    tl.to(
        TweenTarget::ContainerBlur,
        cfg.blur_px,
        fade,
        Position::FromEnd(cfg.fade_duration),
    )
    .to(
        TweenTarget::ContainerOpacity,
        0.0,
        fade,
        Position::At(fade_at),
    );
    tl
}

#[derive(Clone, Debug)]
pub struct ScrollBinding {
    pub trigger: ScrollTrigger,
    pub timeline: Timeline,
    pub scrub: Scrub,
}

impl ScrollBinding {
    /// Bind only when both the scroll capability and the trigger section are
    /// available. Either missing means the enhancement is skipped.
    pub fn bind(
        capability: Option<&ScrollConfig>,
        trigger: Option<SectionBounds>,
        viewport_height: f64,
        scroll_y: f64,
        start: TimelineValues,
    ) -> Option<Self> {
        let cfg = capability?;
        let bounds = trigger?;
        let trigger = ScrollTrigger::new(bounds, viewport_height);
        let timeline = build_timeline(cfg, start);
        let scrub = Scrub::new(cfg.scrub_seconds, trigger.progress(scroll_y));
        log::info!(
            "[scroll] bound to {:.0}..{:.0}px, timeline {:.2}s",
            trigger.start,
            trigger.end,
            timeline.duration()
        );
        Some(Self {
            trigger,
            timeline,
            scrub,
        })
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrub.set_target(self.trigger.progress(scroll_y));
    }

    pub fn refresh(&mut self, bounds: SectionBounds, viewport_height: f64, scroll_y: f64) {
        self.trigger.refresh(bounds, viewport_height);
        self.on_scroll(scroll_y);
    }

    /// Advance the playhead and sample the timeline at it.
    pub fn advance(&mut self, dt_sec: f32) -> TimelineValues {
        let p = self.scrub.advance(dt_sec);
        self.timeline.sample_progress(p)
    }
}
