// Host-side tests for rounded-box geometry generation.

use glam::Vec3;
use scene_core::{RoundedBoxGeometry, CUBE_RADIUS, CUBE_SEGMENTS, CUBE_SIZE};

fn cube() -> RoundedBoxGeometry {
    RoundedBoxGeometry::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE, CUBE_SEGMENTS, CUBE_RADIUS)
}

#[test]
fn keeps_construction_parameters() {
    let g = cube();
    assert_eq!(g.params.width, 1.2);
    assert_eq!(g.params.height, 1.2);
    assert_eq!(g.params.depth, 1.2);
    assert_eq!(g.params.segments, 8);
    assert!((g.params.radius - 0.15).abs() < 1e-6);
}

#[test]
fn grid_sizes_match_segment_count() {
    let g = cube();
    // 17 cells per side, 18 vertices per side, six faces
    assert_eq!(g.vertices.len(), 6 * 18 * 18);
    assert_eq!(g.indices.len(), 6 * 17 * 17 * 6);
    let max = *g.indices.iter().max().unwrap() as usize;
    assert!(max < g.vertices.len());
}

#[test]
fn vertices_stay_inside_the_bounding_box() {
    let g = cube();
    for v in &g.vertices {
        for c in v.position {
            assert!(c.abs() <= 0.6 + 1e-5, "{:?}", v.position);
        }
    }
}

#[test]
fn every_vertex_lies_on_the_rounded_surface() {
    let g = cube();
    let inner = Vec3::splat(0.6 - 0.15);
    for v in &g.vertices {
        let p = Vec3::from_array(v.position);
        // distance to the inner box equals the corner radius
        let clamped = p.clamp(-inner, inner);
        let d = (p - clamped).length();
        assert!((d - 0.15).abs() < 1e-4, "p={p:?} d={d}");
    }
}

#[test]
fn normals_are_unit_length() {
    let g = cube();
    for v in &g.vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn faces_reach_full_half_extent() {
    let g = cube();
    let max_x = g
        .vertices
        .iter()
        .map(|v| v.position[0])
        .fold(f32::MIN, f32::max);
    assert!((max_x - 0.6).abs() < 1e-5);
}

#[test]
fn triangles_wind_outwards() {
    let g = cube();
    for tri in g.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| g.vertices[i as usize]);
        let pa = Vec3::from_array(a.position);
        let pb = Vec3::from_array(b.position);
        let pc = Vec3::from_array(c.position);
        let face_n = (pb - pa).cross(pc - pa);
        if face_n.length() < 1e-7 {
            continue;
        }
        let avg =
            Vec3::from_array(a.normal) + Vec3::from_array(b.normal) + Vec3::from_array(c.normal);
        assert!(face_n.dot(avg) > 0.0, "inward triangle {tri:?}");
    }
}

#[test]
fn uvs_are_normalised() {
    let g = cube();
    for v in &g.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}
