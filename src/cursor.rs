use crate::constants::CURSOR_SELECTOR;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn place(cursor: &web::HtmlElement, pos: Vec2) {
    let style = cursor.style();
    _ = style.set_property("left", &format!("{}px", pos.x));
    _ = style.set_property("top", &format!("{}px", pos.y));
    _ = style.set_property("opacity", "1");
}

fn set_opacity(cursor: &web::HtmlElement, value: &str) {
    _ = cursor.style().set_property("opacity", value);
}

/// Follow the pointer with the custom cursor element, hiding it whenever the
/// pointer leaves the page or the window loses focus. No cursor element means
/// no wiring.
pub fn wire_cursor(document: &web::Document) {
    let Some(cursor) = document
        .query_selector(CURSOR_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    let cursor_move = cursor.clone();
    let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        place(
            &cursor_move,
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        );
    }) as Box<dyn FnMut(_)>);
    _ = document
        .add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
    move_closure.forget();

    let cursor_leave = cursor.clone();
    let leave_closure = Closure::wrap(Box::new(move || {
        set_opacity(&cursor_leave, "0");
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
    leave_closure.forget();

    // mouseout only counts as leaving the page when there is nowhere to go
    let cursor_out = cursor.clone();
    let out_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if ev.related_target().is_none() {
            set_opacity(&cursor_out, "0");
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mouseout", out_closure.as_ref().unchecked_ref());
    out_closure.forget();

    if let Some(window) = web::window() {
        let cursor_blur = cursor.clone();
        let blur_closure = Closure::wrap(Box::new(move || {
            set_opacity(&cursor_blur, "0");
        }) as Box<dyn FnMut()>);
        _ = window
            .add_event_listener_with_callback("blur", blur_closure.as_ref().unchecked_ref());
        blur_closure.forget();
    }

    let cursor_enter = cursor;
    let enter_closure = Closure::wrap(Box::new(move || {
        set_opacity(&cursor_enter, "1");
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("mouseenter", enter_closure.as_ref().unchecked_ref());
    enter_closure.forget();
}
