//! Rounded-box mesh generation.
//!
//! Each face is a `(2 * segments + 1)` square grid on the unit cube. Every
//! grid vertex is then pushed onto the rounded surface: an inner box of
//! half-extent `size / 2 - radius` grown by a sphere of `radius`. The odd
//! grid guarantees a single flat strip through the middle of each face while
//! the remaining rows wrap around the edges and corners.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Construction parameters, kept alongside the buffers for inspection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub segments: u32,
    pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct RoundedBoxGeometry {
    pub params: BoxParams,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

// (outward normal, right, up) with right x up == normal, so quads wound
// a -> b -> c read counter-clockwise from outside.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

#[inline]
fn sign0(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
fn sign0_vec(v: Vec3) -> Vec3 {
    Vec3::new(sign0(v.x), sign0(v.y), sign0(v.z))
}

impl RoundedBoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32, segments: u32, radius: f32) -> Self {
        let segments = segments.max(1);
        let radius = radius.max(0.0).min(width / 2.0).min(height / 2.0).min(depth / 2.0);
        let params = BoxParams {
            width,
            height,
            depth,
            segments,
            radius,
        };

        let n = segments * 2 + 1;
        let half_segment = 0.5 / n as f32;
        let size = Vec3::new(width, height, depth);
        let inner = size / 2.0 - Vec3::splat(radius);
        let half = size / 2.0;

        let per_face = ((n + 1) * (n + 1)) as usize;
        let mut vertices = Vec::with_capacity(per_face * FACES.len());
        let mut indices = Vec::with_capacity((n * n * 6) as usize * FACES.len());

        for (normal, right, up) in FACES {
            let base = vertices.len() as u32;
            for j in 0..=n {
                for i in 0..=n {
                    let s = i as f32 / n as f32 - 0.5;
                    let t = j as f32 / n as f32 - 0.5;
                    let p = normal * 0.5 + right * s + up * t;

                    let dir = (p - sign0_vec(p) * half_segment).normalize_or_zero();
                    let pos = inner * sign0_vec(p) + dir * radius;

                    let u = (pos.dot(right) / (half.dot(right.abs()) * 2.0) + 0.5).clamp(0.0, 1.0);
                    let v = 1.0 - (pos.dot(up) / (half.dot(up.abs()) * 2.0) + 0.5).clamp(0.0, 1.0);

                    vertices.push(Vertex {
                        position: pos.to_array(),
                        normal: dir.to_array(),
                        uv: [u, v],
                    });
                }
            }
            let row = n + 1;
            for j in 0..n {
                for i in 0..n {
                    let a = base + j * row + i;
                    let b = a + 1;
                    let c = a + row + 1;
                    let d = a + row;
                    indices.extend_from_slice(&[a, b, c, a, c, d]);
                }
            }
        }

        Self {
            params,
            vertices,
            indices,
        }
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
