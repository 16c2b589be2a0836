//! Bindings to the lottie-web player and the hidden surface it draws into.

use js_sys::{Object, Reflect};
use scene_core::{AnimationAsset, DirtyFlag};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// `AnimationItem` returned by `lottie.loadAnimation`.
    pub type AnimationItem;

    #[wasm_bindgen(catch, js_namespace = lottie, js_name = loadAnimation)]
    fn load_animation(params: &Object) -> Result<AnimationItem, JsValue>;

    /// For the canvas renderer this is the `<canvas>` the player draws into.
    #[wasm_bindgen(method, getter)]
    fn container(this: &AnimationItem) -> JsValue;

    #[wasm_bindgen(method, js_name = addEventListener)]
    fn add_event_listener(this: &AnimationItem, name: &str, callback: &js_sys::Function);
}

/// A looping, autoplaying player bound to an off-DOM canvas.
pub struct VectorPlayer {
    _item: AnimationItem,
    canvas: web::HtmlCanvasElement,
    _host: web::HtmlElement,
}

fn set(obj: &Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    Reflect::set(obj, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("set {}: {:?}", key, e))
}

impl VectorPlayer {
    /// Start playing `asset` into a hidden surface of `w*dpr` by `h*dpr`
    /// pixels. Every frame the player enters sets `on_frame`.
    pub fn start(
        document: &web::Document,
        asset: &AnimationAsset,
        device_pixel_ratio: f64,
        on_frame: DirtyFlag,
    ) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        let host: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let (w, h) = asset.surface_size(device_pixel_ratio);
        let style = host.style();
        let _ = style.set_property("width", &format!("{}px", w));
        let _ = style.set_property("height", &format!("{}px", h));
        let _ = style.set_property("display", "none");
        body.append_child(&host)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        match Self::play(&host, asset, device_pixel_ratio, on_frame) {
            Ok((item, canvas)) => Ok(Self {
                _item: item,
                canvas,
                _host: host,
            }),
            Err(e) => {
                host.remove();
                Err(e)
            }
        }
    }

    fn play(
        host: &web::HtmlElement,
        asset: &AnimationAsset,
        device_pixel_ratio: f64,
        on_frame: DirtyFlag,
    ) -> anyhow::Result<(AnimationItem, web::HtmlCanvasElement)> {
        let data = asset
            .document
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| anyhow::anyhow!("animation data: {}", e))?;
        let renderer_settings = Object::new();
        set(&renderer_settings, "dpr", &JsValue::from_f64(device_pixel_ratio))?;
        let params = Object::new();
        set(&params, "container", host)?;
        set(&params, "renderer", &JsValue::from_str("canvas"))?;
        set(&params, "loop", &JsValue::TRUE)?;
        set(&params, "autoplay", &JsValue::TRUE)?;
        set(&params, "animationData", &data)?;
        set(&params, "rendererSettings", &renderer_settings)?;

        let item = load_animation(&params)
            .map_err(|e| anyhow::anyhow!("lottie.loadAnimation failed: {:?}", e))?;
        let canvas = match item.container().dyn_into::<web::HtmlCanvasElement>() {
            Ok(c) => c,
            Err(_) => host
                .query_selector("canvas")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
                .ok_or_else(|| anyhow::anyhow!("player created no canvas"))?,
        };

        let closure = Closure::wrap(Box::new(move || {
            on_frame.set();
        }) as Box<dyn FnMut()>);
        item.add_event_listener("enterFrame", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok((item, canvas))
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}
