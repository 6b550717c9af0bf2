use crate::dom;
use crate::reveal::RevealSet;
use crate::sections::{ParallaxSection, SpeedLayer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame update touches. Sections and layers re-measure
/// layout on every frame, so scroll position, resize, and content changes all
/// flow through the same path with no invalidation bookkeeping.
pub struct FrameContext {
    pub sections: Vec<ParallaxSection>,
    pub layers: Vec<SpeedLayer>,
    pub reveal: RevealSet,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport_height = dom::viewport_height();
        if viewport_height <= 0.0 {
            return;
        }
        for section in &self.sections {
            let p = section.progress(viewport_height);
            section.update(p);
        }
        for layer in &mut self.layers {
            layer.update(viewport_height);
        }
        self.reveal.sweep(viewport_height);
    }
}

/// Drive the update from requestAnimationFrame, rescheduling itself each
/// frame for at-least-once-per-visible-frame cadence.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
