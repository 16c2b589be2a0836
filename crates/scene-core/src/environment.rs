//! Neutral indoor lighting environment and its pre-filtered reflection map.
//!
//! `RoomEnvironment` is an analytic grey room with a handful of emissive
//! panels, evaluated per view direction from the room origin.
//! `PmremGenerator` bakes it into a cube map and convolves each mip level
//! with a lobe matching increasing roughness, so the renderer can fetch
//! blurred reflections with a single `textureSampleLevel`.

use crate::constants::{ENV_FACE_SIZE, ENV_MIP_LEVELS};
use glam::Vec3;

/// Axis-aligned emissive box.
#[derive(Copy, Clone, Debug)]
pub struct LightPanel {
    pub center: Vec3,
    pub half_size: Vec3,
    pub intensity: f32,
}

impl LightPanel {
    const fn new(center: [f32; 3], size: [f32; 3], intensity: f32) -> Self {
        Self {
            center: Vec3::from_array(center),
            half_size: Vec3::new(size[0] * 0.5, size[1] * 0.5, size[2] * 0.5),
            intensity,
        }
    }

    /// Entry distance of a ray from `origin` along unit `dir`, if it hits.
    fn hit(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        ray_box(origin, dir, self.center - self.half_size, self.center + self.half_size)
            .filter(|&(t0, _)| t0 > 0.0)
            .map(|(t0, _)| t0)
    }
}

#[derive(Clone, Debug)]
pub struct RoomEnvironment {
    pub room_center: Vec3,
    pub room_half_size: Vec3,
    pub wall_radiance: f32,
    pub floor_radiance: f32,
    pub panels: Vec<LightPanel>,
}

impl Default for RoomEnvironment {
    fn default() -> Self {
        Self {
            room_center: Vec3::new(-0.757, 13.219, 0.717),
            room_half_size: Vec3::new(31.5, 28.5, 27.0) * 0.5,
            wall_radiance: 0.35,
            floor_radiance: 0.2,
            panels: vec![
                LightPanel::new([-16.116, 14.37, 8.208], [0.1, 2.428, 2.739], 50.0),
                LightPanel::new([-16.109, 18.021, -8.207], [0.1, 2.425, 2.751], 50.0),
                LightPanel::new([14.904, 12.198, -1.832], [0.15, 4.265, 6.331], 17.0),
                LightPanel::new([-0.462, 8.89, 14.520], [4.38, 5.441, 0.088], 43.0),
                LightPanel::new([3.235, 11.486, -12.541], [2.5, 2.0, 0.1], 20.0),
                LightPanel::new([0.0, 20.0, 0.0], [1.0, 0.1, 1.0], 100.0),
            ],
        }
    }
}

impl RoomEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear radiance seen from the origin along unit direction `dir`.
    pub fn radiance(&self, dir: Vec3) -> Vec3 {
        let origin = Vec3::ZERO;
        let lo = self.room_center - self.room_half_size;
        let hi = self.room_center + self.room_half_size;
        let wall_t = ray_box(origin, dir, lo, hi).map(|(_, t1)| t1).unwrap_or(f32::MAX);

        let mut nearest: Option<(f32, f32)> = None;
        for p in &self.panels {
            if let Some(t) = p.hit(origin, dir) {
                if t < wall_t && nearest.map_or(true, |(bt, _)| t < bt) {
                    nearest = Some((t, p.intensity));
                }
            }
        }
        if let Some((_, intensity)) = nearest {
            return Vec3::splat(intensity);
        }
        // walls brighten slightly towards the ceiling
        let hit_y = dir.y * wall_t.min(1.0e4);
        if hit_y <= lo.y + 1.0e-3 {
            Vec3::splat(self.floor_radiance)
        } else {
            let h = ((hit_y - lo.y) / (hi.y - lo.y)).clamp(0.0, 1.0);
            Vec3::splat(self.wall_radiance * (0.8 + 0.4 * h))
        }
    }
}

/// Slab test. Returns `(t_enter, t_exit)` for a ray that meets the box ahead.
fn ray_box(origin: Vec3, dir: Vec3, lo: Vec3, hi: Vec3) -> Option<(f32, f32)> {
    let inv = dir.recip();
    let a = (lo - origin) * inv;
    let b = (hi - origin) * inv;
    let t0 = a.min(b).max_element();
    let t1 = a.max(b).min_element();
    (t1 >= t0.max(0.0)).then_some((t0, t1))
}

/// Direction through texel centre `(x, y)` of cube face `face` (+X, -X, +Y, -Y, +Z, -Z).
pub fn cube_direction(face: usize, x: u32, y: u32, size: u32) -> Vec3 {
    let u = 2.0 * (x as f32 + 0.5) / size as f32 - 1.0;
    let v = 2.0 * (y as f32 + 0.5) / size as f32 - 1.0;
    let d = match face {
        0 => Vec3::new(1.0, -v, -u),
        1 => Vec3::new(-1.0, -v, u),
        2 => Vec3::new(u, 1.0, v),
        3 => Vec3::new(u, -1.0, -v),
        4 => Vec3::new(u, -v, 1.0),
        _ => Vec3::new(-u, -v, -1.0),
    };
    d.normalize()
}

fn texel_solid_angle(x: u32, y: u32, size: u32) -> f32 {
    let u = 2.0 * (x as f32 + 0.5) / size as f32 - 1.0;
    let v = 2.0 * (y as f32 + 0.5) / size as f32 - 1.0;
    let texel = 2.0 / size as f32;
    texel * texel / (1.0 + u * u + v * v).powf(1.5)
}

/// Largest finite value a 16-bit float texel can hold.
pub const HALF_MAX: f32 = 65504.0;

/// One mip of a cube map: six faces of `size * size` linear RGBA texels,
/// stored face-major, row-major.
#[derive(Clone, Debug)]
pub struct EnvLevel {
    pub size: u32,
    pub roughness: f32,
    pub texels: Vec<[f32; 4]>,
}

impl EnvLevel {
    #[inline]
    pub fn face(&self, face: usize) -> &[[f32; 4]] {
        let n = (self.size * self.size) as usize;
        &self.texels[face * n..(face + 1) * n]
    }
}

#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    pub levels: Vec<EnvLevel>,
}

impl EnvironmentMap {
    #[inline]
    pub fn face_size(&self) -> u32 {
        self.levels.first().map_or(0, |l| l.size)
    }

    #[inline]
    pub fn mip_count(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Face `face` of mip `level` as linear RGBA radiance scaled by
    /// `intensity`. Radiance above 1 is kept, limited to the half-float range.
    pub fn face_rgba(&self, level: usize, face: usize, intensity: f32) -> Vec<f32> {
        self.levels[level]
            .face(face)
            .iter()
            .flat_map(|t| t.iter().map(move |c| (c * intensity).clamp(0.0, HALF_MAX)))
            .collect()
    }
}

/// Bakes a scene into a pre-filtered mip-mapped radiance environment map.
#[derive(Copy, Clone, Debug)]
pub struct PmremGenerator {
    pub face_size: u32,
    pub mip_levels: u32,
    /// Resolution of the bake convolved into the rough levels.
    pub source_size: u32,
}

impl Default for PmremGenerator {
    fn default() -> Self {
        Self {
            face_size: ENV_FACE_SIZE,
            mip_levels: ENV_MIP_LEVELS,
            source_size: 16,
        }
    }
}

impl PmremGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scene(&self, room: &RoomEnvironment) -> EnvironmentMap {
        let face_size = self.face_size.max(1);
        let max_levels = 32 - face_size.leading_zeros();
        let levels = self.mip_levels.clamp(1, max_levels);

        let source = bake(room, self.source_size.clamp(1, face_size));
        let source_dirs: Vec<(Vec3, f32)> = (0..6)
            .flat_map(|f| {
                let n = source.size;
                (0..n * n).map(move |i| {
                    let (x, y) = (i % n, i / n);
                    (cube_direction(f, x, y, n), texel_solid_angle(x, y, n))
                })
            })
            .collect();

        let mut out = Vec::with_capacity(levels as usize);
        for level in 0..levels {
            let size = (face_size >> level).max(1);
            let roughness = if levels > 1 {
                level as f32 / (levels - 1) as f32
            } else {
                0.0
            };
            if level == 0 {
                let mut base = bake(room, size);
                base.roughness = 0.0;
                out.push(base);
                continue;
            }
            let alpha = roughness * roughness;
            let power = (2.0 / (alpha * alpha).max(1.0e-4) - 2.0).max(1.0);
            let mut texels = Vec::with_capacity((6 * size * size) as usize);
            for f in 0..6 {
                for y in 0..size {
                    for x in 0..size {
                        let n = cube_direction(f, x, y, size);
                        let mut sum = Vec3::ZERO;
                        let mut wsum = 0.0;
                        for ((dir, sa), t) in source_dirs.iter().zip(&source.texels) {
                            let c = n.dot(*dir);
                            if c <= 0.0 {
                                continue;
                            }
                            let w = c.powf(power) * sa;
                            sum += Vec3::new(t[0], t[1], t[2]) * w;
                            wsum += w;
                        }
                        let c = if wsum > 0.0 { sum / wsum } else { Vec3::ZERO };
                        texels.push([c.x, c.y, c.z, 1.0]);
                    }
                }
            }
            out.push(EnvLevel {
                size,
                roughness,
                texels,
            });
        }
        log::debug!(
            "[env] baked {} levels from {}px faces",
            out.len(),
            face_size
        );
        EnvironmentMap { levels: out }
    }
}

fn bake(room: &RoomEnvironment, size: u32) -> EnvLevel {
    let mut texels = Vec::with_capacity((6 * size * size) as usize);
    for f in 0..6 {
        for y in 0..size {
            for x in 0..size {
                let c = room.radiance(cube_direction(f, x, y, size));
                texels.push([c.x, c.y, c.z, 1.0]);
            }
        }
    }
    EnvLevel {
        size,
        roughness: 0.0,
        texels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_directions_point_out_of_their_face() {
        let axes = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
        for (f, axis) in axes.iter().enumerate() {
            let d = cube_direction(f, 3, 5, 8);
            assert!(d.dot(*axis) > 0.5, "face {f} dir {d:?}");
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn ceiling_light_is_visible_straight_up() {
        let room = RoomEnvironment::new();
        assert_eq!(room.radiance(Vec3::Y), Vec3::splat(100.0));
        assert!(room.radiance(Vec3::NEG_Y).x < 1.0);
    }
}
