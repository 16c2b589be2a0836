//! Minimal scene graph: one environment map and at most one textured mesh.

use crate::environment::EnvironmentMap;
use crate::geometry::RoundedBoxGeometry;
use crate::texture::LiveTexture;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Lit, physically based surface description.
#[derive(Clone, Debug)]
pub struct StandardMaterial {
    /// Linear base colour multiplied with the map.
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub map: Option<LiveTexture>,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            roughness: 1.0,
            metalness: 0.0,
            map: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: RoundedBoxGeometry,
    pub material: StandardMaterial,
    pub position: Vec3,
    /// Euler angles in radians, applied in X then Y then Z order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Mesh {
    pub fn new(geometry: RoundedBoxGeometry, material: StandardMaterial) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    pub environment: Option<EnvironmentMap>,
    mesh: Option<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    #[inline]
    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        self.mesh.as_mut()
    }

    #[inline]
    pub fn mesh_count(&self) -> usize {
        usize::from(self.mesh.is_some())
    }

    /// Insert the mesh. Returns it back if a mesh is already present.
    pub(crate) fn add(&mut self, mesh: Mesh) -> Result<&mut Mesh, Mesh> {
        if self.mesh.is_some() {
            return Err(mesh);
        }
        Ok(self.mesh.insert(mesh))
    }

    pub(crate) fn take(&mut self) -> Option<Mesh> {
        self.mesh.take()
    }
}
