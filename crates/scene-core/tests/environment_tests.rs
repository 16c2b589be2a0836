// Host-side tests for the room environment bake and pre-filtering.

use scene_core::*;

fn small() -> EnvironmentMap {
    PmremGenerator {
        face_size: 16,
        mip_levels: 4,
        source_size: 8,
    }
    .from_scene(&RoomEnvironment::new())
}

fn spread(level: &EnvLevel) -> f32 {
    let lum: Vec<f32> = level.texels.iter().map(|t| t[0]).collect();
    let max = lum.iter().copied().fold(f32::MIN, f32::max);
    let min = lum.iter().copied().fold(f32::MAX, f32::min);
    max - min
}

#[test]
fn mip_chain_halves_each_level() {
    let env = small();
    let sizes: Vec<u32> = env.levels.iter().map(|l| l.size).collect();
    assert_eq!(sizes, vec![16, 8, 4, 2]);
    for l in &env.levels {
        assert_eq!(l.texels.len(), (6 * l.size * l.size) as usize);
    }
    assert_eq!(env.face_size(), 16);
}

#[test]
fn roughness_rises_with_level() {
    let env = small();
    assert_eq!(env.levels[0].roughness, 0.0);
    assert_eq!(env.levels.last().unwrap().roughness, 1.0);
    for w in env.levels.windows(2) {
        assert!(w[1].roughness > w[0].roughness);
    }
}

#[test]
fn rough_levels_are_smoother() {
    let env = small();
    assert!(spread(&env.levels[3]) < spread(&env.levels[0]));
}

#[test]
fn mip_count_is_limited_by_face_size() {
    let env = PmremGenerator {
        face_size: 4,
        mip_levels: 10,
        source_size: 4,
    }
    .from_scene(&RoomEnvironment::new());
    assert_eq!(env.mip_count(), 3);
}

#[test]
fn faces_are_tightly_packed_rgba() {
    let env = small();
    let texels = env.face_rgba(1, 2, ENV_INTENSITY);
    assert_eq!(texels.len(), 8 * 8 * 4);
    assert!(texels.chunks_exact(4).all(|px| px[3] == 1.0));
}

#[test]
fn light_panels_stay_brighter_than_white() {
    let env = small();
    // two 50x panels hang on the -X wall
    let wall = env.face_rgba(0, 1, ENV_INTENSITY);
    let peak = wall.iter().copied().fold(0.0, f32::max);
    assert!(peak > 1.0, "peak radiance {peak}");
    assert!(peak <= HALF_MAX);
}
