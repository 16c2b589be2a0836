//! Vector-animation asset model and loader.
//!
//! Only the header fields the scene needs are typed; the complete document
//! is kept as a `serde_json::Value` and handed to the player untouched.

use crate::error::AssetError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Header {
    w: f64,
    h: f64,
    #[serde(default)]
    fr: Option<f64>,
    #[serde(default)]
    ip: Option<f64>,
    #[serde(default)]
    op: Option<f64>,
    #[serde(default)]
    nm: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AnimationAsset {
    /// Native width in CSS pixels.
    pub width: f64,
    /// Native height in CSS pixels.
    pub height: f64,
    pub frame_rate: Option<f64>,
    pub in_frame: Option<f64>,
    pub out_frame: Option<f64>,
    pub name: Option<String>,
    pub document: serde_json::Value,
}

impl AnimationAsset {
    pub fn from_json(s: &str) -> Result<Self, AssetError> {
        let document: serde_json::Value = serde_json::from_str(s)?;
        let header = Header::deserialize(&document)?;
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(header.w) || !valid(header.h) {
            return Err(AssetError::Dimensions {
                w: header.w,
                h: header.h,
            });
        }
        Ok(Self {
            width: header.w,
            height: header.h,
            frame_rate: header.fr,
            in_frame: header.ip,
            out_frame: header.op,
            name: header.nm,
            document,
        })
    }

    /// Drawing-surface size for a given device pixel ratio, at least 1x1.
    pub fn surface_size(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        (
            ((self.width * dpr) as u32).max(1),
            ((self.height * dpr) as u32).max(1),
        )
    }

    /// Loop length in seconds when the header carries enough timing data.
    pub fn duration_secs(&self) -> Option<f64> {
        let fr = self.frame_rate.filter(|f| *f > 0.0)?;
        Some((self.out_frame? - self.in_frame.unwrap_or(0.0)) / fr)
    }
}

/// Where animation documents come from. The browser implementation wraps
/// `fetch`; tests substitute canned responses.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    async fn fetch_text(&self, path: &str) -> Result<String, AssetError>;
}

/// Fetch and decode the animation at `path`.
pub async fn load_animation<S: AssetSource>(
    source: &S,
    path: &str,
) -> Result<AnimationAsset, AssetError> {
    let text = source.fetch_text(path).await?;
    let asset = AnimationAsset::from_json(&text)?;
    log::info!(
        "[asset] {} {}x{} ({} bytes)",
        asset.name.as_deref().unwrap_or(path),
        asset.width,
        asset.height,
        text.len()
    );
    Ok(asset)
}
