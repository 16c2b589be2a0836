// Shared scene tuning constants used by the web frontend.

// DOM contract
pub const CONTAINER_ID: &str = "three-canvas-container";
pub const TRIGGER_SELECTOR: &str = ".section-about-me";
pub const CONFIG_ATTRIBUTE: &str = "data-scene-config";
pub const ASSET_PATH: &str = "assets/textures/lottie/24017-lottie-logo-animation.json";

// Camera
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 3.0; // initial depth offset along the viewing axis

// Rounded cube
pub const CUBE_SIZE: f32 = 1.2;
pub const CUBE_SEGMENTS: u32 = 8;
pub const CUBE_RADIUS: f32 = 0.15;
pub const CUBE_ROUGHNESS: f32 = 0.1;

// Per-frame rotation deltas (radians, not time-scaled)
pub const ROTATION_STEP_X: f32 = 0.005;
pub const ROTATION_STEP_Y: f32 = 0.01;

// Scroll timeline
pub const SCRUB_SECONDS: f32 = 1.5;
pub const SCROLL_SCALE_TO: f32 = 40.0;
pub const SCROLL_CAMERA_Z_TO: f32 = 0.1;
pub const SCROLL_BLUR_PX: f32 = 20.0;
pub const SCROLL_FADE_DURATION: f32 = 0.2;
pub const DEFAULT_TWEEN_DURATION: f32 = 0.5; // seconds of timeline time

// Environment bake
pub const ENV_FACE_SIZE: u32 = 32;
pub const ENV_MIP_LEVELS: u32 = 6;
pub const ENV_INTENSITY: f32 = 1.0;

// Renderer
pub const MSAA_SAMPLES: u32 = 4;
