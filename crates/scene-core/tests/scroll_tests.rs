// Host-side tests for the scroll trigger, scrub and timeline choreography.

use scene_core::*;

fn start_values() -> TimelineValues {
    TimelineValues {
        mesh_scale: 1.0,
        camera_z: 3.0,
        container_opacity: 1.0,
        container_blur: 0.0,
    }
}

fn section() -> SectionBounds {
    SectionBounds {
        top: 1000.0,
        bottom: 2000.0,
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn trigger_spans_section_top_to_bottom_at_viewport_centre() {
    let t = ScrollTrigger::new(section(), 800.0);
    assert_eq!(t.start, 600.0);
    assert_eq!(t.end, 1600.0);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(600.0), 0.0);
    assert!(approx(t.progress(1100.0), 0.5));
    assert_eq!(t.progress(1600.0), 1.0);
    assert_eq!(t.progress(5000.0), 1.0);
}

#[test]
fn trigger_refresh_follows_layout() {
    let mut t = ScrollTrigger::new(section(), 800.0);
    t.refresh(
        SectionBounds {
            top: 500.0,
            bottom: 900.0,
        },
        400.0,
    );
    assert_eq!((t.start, t.end), (300.0, 700.0));
}

#[test]
fn zero_height_section_snaps() {
    let t = ScrollTrigger::new(
        SectionBounds {
            top: 100.0,
            bottom: 100.0,
        },
        0.0,
    );
    assert_eq!(t.progress(99.0), 0.0);
    assert_eq!(t.progress(100.0), 1.0);
}

#[test]
fn choreography_layout() {
    let tl = build_timeline(&ScrollConfig::default(), start_values());
    assert!(approx(tl.duration(), 0.5));
    let tweens = tl.tweens();
    assert_eq!(tweens.len(), 4);

    let find = |target| tweens.iter().find(|t| t.target == target).unwrap();
    let scale = find(TweenTarget::MeshScale);
    let cam = find(TweenTarget::CameraZ);
    let blur = find(TweenTarget::ContainerBlur);
    let fade = find(TweenTarget::ContainerOpacity);

    assert_eq!((scale.start, scale.ease), (0.0, Ease::Power2In));
    assert_eq!((cam.start, cam.ease), (0.0, Ease::Power2In));
    assert!(approx(blur.start, 0.3) && approx(blur.duration, 0.2));
    assert!(approx(fade.start, 0.3) && approx(fade.duration, 0.2));
    assert_eq!(scale.to, 40.0);
    assert_eq!(cam.to, 0.1);
    assert_eq!(blur.to, 20.0);
    assert_eq!(fade.to, 0.0);
}

#[test]
fn sampling_eases_between_ends() {
    let tl = build_timeline(&ScrollConfig::default(), start_values());

    let begin = tl.sample_progress(0.0);
    assert_eq!(begin, start_values());

    let mid = tl.sample(0.25);
    assert!(approx(mid.mesh_scale, 1.0 + 39.0 * 0.125));
    assert!(approx(mid.camera_z, 3.0 - 2.9 * 0.125));
    // fade has not started yet
    assert_eq!(mid.container_opacity, 1.0);
    assert_eq!(mid.container_blur, 0.0);

    let late = tl.sample(0.4);
    assert!(approx(late.container_opacity, 0.25));
    assert!(approx(late.container_blur, 15.0));

    let end = tl.sample_progress(1.0);
    assert!(approx(end.mesh_scale, 40.0));
    assert!(approx(end.camera_z, 0.1));
    assert!(approx(end.container_opacity, 0.0));
    assert!(approx(end.container_blur, 20.0));
}

#[test]
fn chained_tweens_start_where_the_previous_ended() {
    let mut tl = Timeline::new(start_values());
    tl.to(TweenTarget::MeshScale, 2.0, TweenVars::eased(Ease::Linear), Position::Sequence)
        .to(TweenTarget::MeshScale, 4.0, TweenVars::eased(Ease::Linear), Position::Sequence);
    assert!(approx(tl.duration(), 1.0));
    assert_eq!(tl.tweens()[1].from, 2.0);
    assert!(approx(tl.sample(0.25).mesh_scale, 1.5));
    assert!(approx(tl.sample(0.75).mesh_scale, 3.0));
}

#[test]
fn scrub_catches_up_over_its_duration() {
    let mut s = Scrub::new(1.5, 0.0);
    s.set_target(1.0);
    let half = s.advance(0.75);
    assert!(approx(half, 0.9375));
    assert!(approx(s.advance(0.75), 1.0));
    assert!(approx(s.advance(10.0), 1.0));
}

#[test]
fn scrub_retarget_starts_from_current_playhead() {
    let mut s = Scrub::new(1.0, 0.0);
    s.set_target(1.0);
    let p = s.advance(0.5);
    s.set_target(0.0);
    assert!(approx(s.advance(0.0), p));
    assert!(approx(s.advance(1.0), 0.0));
}

#[test]
fn zero_scrub_jumps() {
    let mut s = Scrub::new(0.0, 0.0);
    s.set_target(0.7);
    assert_eq!(s.advance(0.0), 0.7);
}

#[test]
fn binding_requires_capability_and_trigger() {
    let cfg = ScrollConfig::default();
    assert!(ScrollBinding::bind(None, Some(section()), 800.0, 0.0, start_values()).is_none());
    assert!(ScrollBinding::bind(Some(&cfg), None, 800.0, 0.0, start_values()).is_none());
    assert!(ScrollBinding::bind(None, None, 800.0, 0.0, start_values()).is_none());
    assert!(ScrollBinding::bind(Some(&cfg), Some(section()), 800.0, 0.0, start_values()).is_some());
}

#[test]
fn binding_starts_at_current_scroll_and_chases_new_positions() {
    let cfg = ScrollConfig::default();
    let mut b = ScrollBinding::bind(Some(&cfg), Some(section()), 800.0, 1100.0, start_values())
        .unwrap();
    assert!(approx(b.scrub.progress(), 0.5));

    b.on_scroll(1600.0);
    assert_eq!(b.scrub.target(), 1.0);
    let v = b.advance(cfg.scrub_seconds);
    assert!(approx(v.mesh_scale, 40.0));
    assert!(approx(v.container_opacity, 0.0));
}

#[test]
fn binding_drives_scene_state() {
    let cfg = ScrollConfig::default();
    let mut state = SceneState::new(Viewport::new(400.0, 400.0, 1.0).unwrap());
    state
        .attach_cube(LiveTexture::new(8, 8, TextureSettings::canvas()))
        .unwrap();
    let mut b = ScrollBinding::bind(
        Some(&cfg),
        Some(section()),
        800.0,
        0.0,
        state.timeline_values(),
    )
    .unwrap();
    b.on_scroll(2000.0);
    let v = b.advance(10.0);
    state.apply_timeline(&v);
    assert!(approx(state.camera.position.z, 0.1));
    assert!(approx(state.scene.mesh().unwrap().scale.x, 40.0));
}
