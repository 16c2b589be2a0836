use thiserror::Error;

/// Errors raised while assembling the scene graph.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("cube mesh already attached to the scene")]
    MeshAlreadyAttached,
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Errors raised while fetching or decoding the animation asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("fetch {path} failed: {reason}")]
    Network { path: String, reason: String },
    #[error("fetch {path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("invalid animation JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("animation has invalid dimensions {w}x{h}")]
    Dimensions { w: f64, h: f64 },
}
