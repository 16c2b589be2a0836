// Host-side tests for the animation asset model and loader.

use scene_core::*;
use std::cell::RefCell;

const LOGO: &str =
    r#"{"v":"5.7.4","fr":30,"ip":0,"op":90,"w":512,"h":256,"nm":"logo","layers":[]}"#;

struct Canned(Result<String, u16>);

impl AssetSource for Canned {
    async fn fetch_text(&self, path: &str) -> Result<String, AssetError> {
        match &self.0 {
            Ok(body) => Ok(body.clone()),
            Err(0) => Err(AssetError::Network {
                path: path.to_string(),
                reason: "offline".into(),
            }),
            Err(status) => Err(AssetError::Status {
                path: path.to_string(),
                status: *status,
            }),
        }
    }
}

#[test]
fn parses_header_and_keeps_document() {
    let a = AnimationAsset::from_json(LOGO).unwrap();
    assert_eq!((a.width, a.height), (512.0, 256.0));
    assert_eq!(a.frame_rate, Some(30.0));
    assert_eq!(a.name.as_deref(), Some("logo"));
    assert_eq!(a.document["v"], "5.7.4");
    assert_eq!(a.duration_secs(), Some(3.0));
}

#[test]
fn surface_scales_with_pixel_ratio() {
    let a = AnimationAsset::from_json(LOGO).unwrap();
    assert_eq!(a.surface_size(2.0), (1024, 512));
    assert_eq!(a.surface_size(f64::NAN), (512, 256));
}

#[test]
fn rejects_missing_or_bad_dimensions() {
    assert!(matches!(
        AnimationAsset::from_json(r#"{"h": 10}"#),
        Err(AssetError::Json(_))
    ));
    assert!(matches!(
        AnimationAsset::from_json(r#"{"w": 0, "h": 10}"#),
        Err(AssetError::Dimensions { .. })
    ));
    assert!(matches!(
        AnimationAsset::from_json("not json"),
        Err(AssetError::Json(_))
    ));
}

#[test]
fn loader_returns_asset_on_success() {
    let src = Canned(Ok(LOGO.to_string()));
    let a = pollster::block_on(load_animation(&src, ASSET_PATH)).unwrap();
    assert_eq!(a.width, 512.0);
}

#[test]
fn loader_surfaces_network_and_status_errors() {
    let offline = Canned(Err(0));
    assert!(matches!(
        pollster::block_on(load_animation(&offline, ASSET_PATH)),
        Err(AssetError::Network { .. })
    ));
    let missing = Canned(Err(404));
    assert!(matches!(
        pollster::block_on(load_animation(&missing, ASSET_PATH)),
        Err(AssetError::Status { status: 404, .. })
    ));
}

fn fresh_state() -> RefCell<SceneState> {
    RefCell::new(SceneState::new(Viewport::new(640.0, 480.0, 1.0).unwrap()))
}

#[test]
fn load_cube_attaches_textured_mesh() {
    let state = fresh_state();
    let src = Canned(Ok(LOGO.to_string()));
    let loaded = pollster::block_on(load_cube(&state, &src, ASSET_PATH, 2.0)).unwrap();

    assert_eq!((loaded.texture.width, loaded.texture.height), (1024, 512));
    assert_eq!(loaded.asset.name.as_deref(), Some("logo"));
    let state = state.borrow();
    let mesh = state.scene.mesh().unwrap();
    let map = mesh.material.map.as_ref().unwrap();
    assert_eq!((map.width, map.height), (1024, 512));
}

#[test]
fn load_cube_http_error_leaves_scene_empty() {
    let state = fresh_state();
    let missing = Canned(Err(404));
    let res = pollster::block_on(load_cube(&state, &missing, ASSET_PATH, 1.0));
    assert!(matches!(
        res,
        Err(SceneError::Asset(AssetError::Status { status: 404, .. }))
    ));

    let state = state.borrow();
    assert!(state.scene.mesh().is_none());
    assert!(state.scene.environment.is_none());
    assert_eq!(state.render_size.css_width, 640.0);
    assert_eq!(state.render_size.pixel_height, 480);
}

#[test]
fn load_cube_malformed_json_leaves_scene_empty() {
    let state = fresh_state();
    let broken = Canned(Ok("{ broken".to_string()));
    let res = pollster::block_on(load_cube(&state, &broken, ASSET_PATH, 1.0));
    assert!(matches!(res, Err(SceneError::Asset(AssetError::Json(_)))));
    assert_eq!(state.borrow().scene.mesh_count(), 0);
}

#[test]
fn load_cube_only_attaches_once() {
    let state = fresh_state();
    let src = Canned(Ok(LOGO.to_string()));
    pollster::block_on(load_cube(&state, &src, ASSET_PATH, 1.0)).unwrap();
    let again = pollster::block_on(load_cube(&state, &src, ASSET_PATH, 1.0));
    assert!(matches!(again, Err(SceneError::MeshAlreadyAttached)));
    assert_eq!(state.borrow().scene.mesh_count(), 1);
}

#[test]
fn detached_cube_can_be_loaded_again() {
    let state = fresh_state();
    let src = Canned(Ok(LOGO.to_string()));
    pollster::block_on(load_cube(&state, &src, ASSET_PATH, 1.0)).unwrap();
    assert!(state.borrow_mut().detach_cube().is_some());
    assert!(state.borrow().scene.mesh().is_none());
    pollster::block_on(load_cube(&state, &src, ASSET_PATH, 1.0)).unwrap();
    assert_eq!(state.borrow().scene.mesh_count(), 1);
}

#[test]
fn live_texture_refreshes_in_place() {
    let tex = LiveTexture::new(64, 32, TextureSettings::canvas());
    assert_eq!(tex.settings.min_filter, FilterMode::Nearest);
    assert!(!tex.settings.generate_mipmaps);
    assert_eq!(tex.settings.color_space, ColorSpace::Srgb);

    // starts dirty so the first frame uploads
    assert!(tex.take_dirty());
    assert!(!tex.take_dirty());

    // the player holds its own handle to the same flag
    let flag = tex.dirty_flag();
    flag.set();
    flag.set();
    assert!(tex.take_dirty());
    assert!(!tex.take_dirty());
}
