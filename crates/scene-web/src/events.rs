use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Recompute camera aspect, renderer size and scroll range on every window
/// resize. No debouncing.
pub fn wire_resize(ctx: Rc<RefCell<FrameContext<'static>>>) {
    let closure = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().on_resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Feed scroll position to the scroll binding, if one exists.
pub fn wire_scroll(ctx: Rc<RefCell<FrameContext<'static>>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(binding) = ctx.borrow_mut().scroll.as_mut() {
            binding.on_scroll(dom::scroll_y());
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
