use scene_core::{AssetError, AssetSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `AssetSource` backed by `window.fetch`, resolving relative to the page.
pub struct FetchSource;

fn network(path: &str, e: impl std::fmt::Debug) -> AssetError {
    AssetError::Network {
        path: path.to_string(),
        reason: format!("{:?}", e),
    }
}

impl AssetSource for FetchSource {
    async fn fetch_text(&self, path: &str) -> Result<String, AssetError> {
        let window = web::window().ok_or_else(|| network(path, "no window"))?;
        let resp = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|e| network(path, e))?;
        let resp: web::Response = resp.dyn_into().map_err(|e| network(path, e))?;
        if !resp.ok() {
            return Err(AssetError::Status {
                path: path.to_string(),
                status: resp.status(),
            });
        }
        let text = JsFuture::from(resp.text().map_err(|e| network(path, e))?)
            .await
            .map_err(|e| network(path, e))?;
        text.as_string()
            .ok_or_else(|| network(path, "response body is not text"))
    }
}
