use scene_core::{SceneConfig, SectionBounds, Viewport, CONFIG_ATTRIBUTE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map_or(1.0, |w| w.device_pixel_ratio())
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Container client size and the current device pixel ratio.
pub fn container_viewport(container: &web::Element) -> anyhow::Result<Viewport> {
    Viewport::new(
        container.client_width() as f64,
        container.client_height() as f64,
        device_pixel_ratio(),
    )
    .map_err(anyhow::Error::from)
}

/// Document-space vertical extent of the first element matching `selector`.
pub fn section_bounds(document: &web::Document, selector: &str) -> Option<SectionBounds> {
    let el = document.query_selector(selector).ok().flatten()?;
    let rect = el.get_bounding_client_rect();
    let y = scroll_y();
    Some(SectionBounds {
        top: rect.top() + y,
        bottom: rect.bottom() + y,
    })
}

/// Config override from the mount element, falling back to defaults.
pub fn read_config(container: &web::Element, base: SceneConfig) -> SceneConfig {
    match container.get_attribute(CONFIG_ATTRIBUTE) {
        Some(raw) => match SceneConfig::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("ignoring invalid {}: {}", CONFIG_ATTRIBUTE, e);
                base
            }
        },
        None => base,
    }
}

/// Size the renderer canvas: CSS size equals the container, backing store
/// scaled by the device pixel ratio.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, size: &scene_core::RenderSize) {
    canvas.set_width(size.pixel_width);
    canvas.set_height(size.pixel_height);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", size.css_width));
    let _ = style.set_property("height", &format!("{}px", size.css_height));
    let _ = style.set_property("display", "block");
}

pub fn set_container_effects(container: &web::HtmlElement, opacity: f32, blur_px: f32) {
    let style = container.style();
    let _ = style.set_property("opacity", &format!("{:.4}", opacity));
    let _ = style.set_property("filter", &format!("blur({:.3}px)", blur_px));
}

/// Run `f` once the page has finished loading, or immediately if it has.
pub fn on_document_ready(f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let complete = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        f();
        return;
    }
    let closure = Closure::once(f);
    let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
