use crate::dom;
use crate::lottie::VectorPlayer;
use crate::render;
use instant::Instant;
use scene_core::{LiveTexture, SceneConfig, SceneState, ScrollBinding};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame and resize callbacks touch, owned in one place.
pub struct FrameContext<'a> {
    pub config: SceneConfig,
    pub state: SceneState,
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    // Filled in by the asset continuation
    pub live_texture: Option<LiveTexture>,
    pub player: Option<VectorPlayer>,
    pub scroll: Option<ScrollBinding>,

    pub last_instant: Instant,
}

impl AsMut<SceneState> for FrameContext<'_> {
    fn as_mut(&mut self) -> &mut SceneState {
        &mut self.state
    }
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(binding) = self.scroll.as_mut() {
            let values = binding.advance(dt_sec);
            self.state.apply_timeline(&values);
            dom::set_container_effects(
                &self.container,
                values.container_opacity,
                values.container_blur,
            );
        }

        self.state.tick();

        if let Some(g) = &mut self.gpu {
            if let (Some(live), Some(player)) = (&self.live_texture, &self.player) {
                g.refresh_live_texture(live, player.canvas());
            }
            let size = self.state.render_size;
            g.resize_if_needed(size.pixel_width, size.pixel_height);
            if let Err(e) = g.render(&self.state) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    pub fn on_resize(&mut self) {
        match dom::container_viewport(&self.container) {
            Ok(viewport) => {
                self.state.resize(viewport);
                dom::size_canvas(&self.canvas, &self.state.render_size);
            }
            Err(e) => log::error!("resize: {:?}", e),
        }
        if let Some(binding) = self.scroll.as_mut() {
            if let Some(doc) = dom::window_document() {
                if let Some(bounds) = dom::section_bounds(&doc, &self.config.trigger_selector) {
                    binding.refresh(bounds, dom::viewport_height(), dom::scroll_y());
                }
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    state: &SceneState,
) -> anyhow::Result<render::GpuState<'static>> {
    let environment = state
        .scene
        .environment
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("scene has no environment"))?;
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, environment).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
