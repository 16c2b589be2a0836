#![cfg(target_arch = "wasm32")]
use instant::Instant;
use scene_core::{load_cube, LoadedCube, PmremGenerator, SceneConfig, SceneState, ScrollBinding};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod asset;
mod dom;
mod events;
mod frame;
mod lottie;
mod render;

use frame::FrameContext;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    dom::on_document_ready(|| {
        if STARTED.swap(true, Ordering::SeqCst) {
            return;
        }
        spawn_local(async move {
            if let Err(e) = init(SceneConfig::default()).await {
                log::error!("scene init error: {:?}", e);
            }
        });
    });
    Ok(())
}

/// Bootstrap the scene inside the configured mount element.
///
/// A missing mount element is not an error: nothing is touched and `Ok` is
/// returned. Setup failures abort with an error before the canvas is
/// attached. A failed animation fetch is logged and leaves the renderer
/// running with an empty scene.
pub async fn init(base: SceneConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(container_el) = document.get_element_by_id(&base.container_id) else {
        log::debug!("no #{} on this page, scene skipped", base.container_id);
        return Ok(());
    };
    let config = dom::read_config(&container_el, base);
    let container: web::HtmlElement = container_el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::container_viewport(&container)?;
    let state = SceneState::new(viewport).with_room_environment(&PmremGenerator::new());

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::size_canvas(&canvas, &state.render_size);
    let gpu = frame::init_gpu(&canvas, &state).await?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let asset_path = config.asset_path.clone();
    let ctx = Rc::new(RefCell::new(FrameContext {
        config,
        state,
        container,
        canvas,
        gpu: Some(gpu),
        live_texture: None,
        player: None,
        scroll: None,
        last_instant: Instant::now(),
    }));
    events::wire_resize(ctx.clone());
    frame::start_loop(ctx.clone());

    let dpr = dom::device_pixel_ratio();
    let loaded = match load_cube(&*ctx, &asset::FetchSource, &asset_path, dpr).await {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Error loading animation: {}", e);
            return Ok(());
        }
    };
    if let Err(e) = attach_animation(&document, &ctx, loaded, dpr) {
        log::error!("animation setup error: {:?}", e);
        return Ok(());
    }
    log::info!("scene ready with {}", asset_path);
    Ok(())
}

/// Upload the attached cube and start its player. Any failure takes the cube
/// back out of the scene so nothing half-attached is left behind.
fn attach_animation(
    document: &web::Document,
    ctx: &Rc<RefCell<FrameContext<'static>>>,
    loaded: LoadedCube,
    dpr: f64,
) -> anyhow::Result<()> {
    let bound = {
        let mut guard = ctx.borrow_mut();
        let c = &mut *guard;
        let gpu = c
            .gpu
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("renderer not initialised"))?;
        if let Err(e) = gpu.attach_cube(&c.state, &loaded.texture) {
            c.state.detach_cube();
            return Err(e);
        }
        let dirty = loaded.texture.dirty_flag();
        let player = match lottie::VectorPlayer::start(document, &loaded.asset, dpr, dirty) {
            Ok(p) => p,
            Err(e) => {
                gpu.detach_cube();
                c.state.detach_cube();
                return Err(e);
            }
        };
        c.live_texture = Some(loaded.texture);
        c.player = Some(player);

        let trigger = dom::section_bounds(document, &c.config.trigger_selector);
        c.scroll = ScrollBinding::bind(
            c.config.scroll.as_ref(),
            trigger,
            dom::viewport_height(),
            dom::scroll_y(),
            c.state.timeline_values(),
        );
        c.scroll.is_some()
    };
    if bound {
        events::wire_scroll(ctx.clone());
    } else {
        log::debug!("scroll binding skipped");
    }
    Ok(())
}
