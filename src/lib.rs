#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod frame;
mod progress;
mod reveal;
mod sections;
mod theme;

use constants::FOOTER_YEAR_ID;

fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FOOTER_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Persisted theme goes on before any visual wiring
    theme::init_theme(&window, &document);
    theme::wire_toggle(&document);

    cursor::wire_cursor(&document);
    set_footer_year(&document);

    // Scroll-driven effects. Sections whose anchors are missing simply do
    // not register; the rest of the page keeps working.
    let mut sections = Vec::new();
    if let Some(s) = sections::ParallaxSection::register_projects(&document) {
        sections.push(s);
    }
    if let Some(s) = sections::ParallaxSection::register_about(&document, dom::viewport_width()) {
        sections.push(s);
    }
    let layers = sections::register_speed_layers(&document);
    let reveal = reveal::collect(&document);

    log::info!(
        "[wire] sections={} speed_layers={} reveal_tiles={}",
        sections.len(),
        layers.len(),
        reveal.pending_count()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sections,
        layers,
        reveal,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
