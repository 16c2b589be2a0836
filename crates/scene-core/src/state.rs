//! The single owned handle for everything the page keeps alive: scene graph,
//! camera and renderer size. Created once at bootstrap and shared with the
//! render loop, resize and scroll callbacks.

use crate::asset::{load_animation, AnimationAsset, AssetSource};
use crate::camera::PerspectiveCamera;
use crate::constants::*;
use crate::environment::{PmremGenerator, RoomEnvironment};
use crate::error::SceneError;
use crate::geometry::RoundedBoxGeometry;
use crate::scene::{Mesh, Scene, StandardMaterial};
use crate::texture::{LiveTexture, TextureSettings};
use crate::timeline::TimelineValues;
use glam::Vec3;
use std::cell::RefCell;

/// Container dimensions as laid out by the page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(
        css_width: f64,
        css_height: f64,
        device_pixel_ratio: f64,
    ) -> Result<Self, SceneError> {
        let finite = css_width.is_finite() && css_height.is_finite();
        if !finite || css_width < 0.0 || css_height < 0.0 {
            return Err(SceneError::InvalidViewport {
                width: css_width,
                height: css_height,
            });
        }
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Ok(Self {
            css_width,
            css_height,
            device_pixel_ratio: dpr,
        })
    }

    /// Width over height; a collapsed container counts as one pixel tall.
    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.css_width / self.css_height.max(1.0)) as f32
    }
}

/// Renderer output: CSS size of the canvas and its backing store in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSize {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl RenderSize {
    pub fn from_viewport(v: &Viewport) -> Self {
        Self {
            css_width: v.css_width,
            css_height: v.css_height,
            pixel_width: ((v.css_width * v.device_pixel_ratio) as u32).max(1),
            pixel_height: ((v.css_height * v.device_pixel_ratio) as u32).max(1),
        }
    }
}

#[derive(Debug)]
pub struct SceneState {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub viewport: Viewport,
    pub render_size: RenderSize,
}

impl SceneState {
    /// Scene, camera and renderer size for a container; no environment yet.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::for_aspect(viewport.aspect()),
            viewport,
            render_size: RenderSize::from_viewport(&viewport),
        }
    }

    /// Bake the neutral room into a reflection map and make it the scene's
    /// ambient environment.
    pub fn with_room_environment(mut self, pmrem: &PmremGenerator) -> Self {
        self.scene.environment = Some(pmrem.from_scene(&RoomEnvironment::new()));
        self
    }

    /// Build the rounded cube textured with `map` and add it to the scene.
    /// Only one cube may ever be attached.
    pub fn attach_cube(&mut self, map: LiveTexture) -> Result<&mut Mesh, SceneError> {
        let geometry =
            RoundedBoxGeometry::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE, CUBE_SEGMENTS, CUBE_RADIUS);
        let material = StandardMaterial {
            roughness: CUBE_ROUGHNESS,
            map: Some(map),
            ..StandardMaterial::default()
        };
        self.scene
            .add(Mesh::new(geometry, material))
            .map_err(|_| SceneError::MeshAlreadyAttached)
    }

    /// Take the cube out of the scene again, e.g. when its GPU upload failed.
    pub fn detach_cube(&mut self) -> Option<Mesh> {
        self.scene.take()
    }

    /// One render-loop step: fixed rotation increments, independent of
    /// elapsed time.
    pub fn tick(&mut self) {
        if let Some(mesh) = self.scene.mesh_mut() {
            mesh.rotation.x += ROTATION_STEP_X;
            mesh.rotation.y += ROTATION_STEP_Y;
        }
    }

    /// Follow a container resize: aspect, projection and renderer size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        self.camera.update_projection_matrix();
        self.render_size = RenderSize::from_viewport(&viewport);
    }

    /// Current values of everything the scroll timeline animates.
    pub fn timeline_values(&self) -> TimelineValues {
        TimelineValues {
            mesh_scale: self.scene.mesh().map_or(1.0, |m| m.scale.x),
            camera_z: self.camera.position.z,
            container_opacity: 1.0,
            container_blur: 0.0,
        }
    }

    /// Write the scene-side part of a timeline sample. Container style is
    /// left to the caller.
    pub fn apply_timeline(&mut self, values: &TimelineValues) {
        if let Some(mesh) = self.scene.mesh_mut() {
            mesh.scale = Vec3::splat(values.mesh_scale);
        }
        self.camera.position.z = values.camera_z;
    }
}

impl AsMut<SceneState> for SceneState {
    fn as_mut(&mut self) -> &mut SceneState {
        self
    }
}

/// The decoded animation and the texture the cube samples it through.
#[derive(Debug)]
pub struct LoadedCube {
    pub asset: AnimationAsset,
    pub texture: LiveTexture,
}

/// Fetch the animation at `path` and attach the cube textured with its
/// drawing surface, sized for `device_pixel_ratio`.
///
/// `state` is only borrowed once the fetch has settled, so callbacks sharing
/// it keep running while the asset loads. A failed fetch or decode leaves the
/// scene without a mesh.
pub async fn load_cube<T, S>(
    state: &RefCell<T>,
    source: &S,
    path: &str,
    device_pixel_ratio: f64,
) -> Result<LoadedCube, SceneError>
where
    T: AsMut<SceneState>,
    S: AssetSource,
{
    let asset = load_animation(source, path).await?;
    let (w, h) = asset.surface_size(device_pixel_ratio);
    let texture = LiveTexture::new(w, h, TextureSettings::canvas());
    state.borrow_mut().as_mut().attach_cube(texture.clone())?;
    Ok(LoadedCube { asset, texture })
}
