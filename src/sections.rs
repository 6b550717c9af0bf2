//! Parallax section registration and effect application.
//!
//! Each section owns its configuration and DOM handles; nothing here is
//! module-scope mutable state. Registration is fallible and silent: a page
//! without a given section simply does not get that effect.

use crate::constants::*;
use crate::dom;
use crate::progress::{self, SectionGeometry};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pinned parallax region. The outer `section` element defines the scroll
/// span, the inner `content` translates against it, and an optional card
/// collection is highlighted by discrete index.
pub struct ParallaxSection {
    section: web::Element,
    content: web::HtmlElement,
    viewport: web::HtmlElement,
    cards: Vec<web::Element>,
}

impl ParallaxSection {
    /// The projects section: pinned content plus indexed cards. Requires the
    /// section root, the scrolling content, and at least one card.
    pub fn register_projects(document: &web::Document) -> Option<Self> {
        let section = document.query_selector(PROJECTS_SECTION_SELECTOR).ok()??;
        let content: web::HtmlElement = document
            .get_element_by_id(PROJECTS_CONTENT_ID)?
            .dyn_into()
            .ok()?;
        let viewport: web::HtmlElement = content.parent_element()?.dyn_into().ok()?;
        let cards = dom::query_all(document, PROJECT_CARD_SELECTOR);
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            section,
            content,
            viewport,
            cards,
        })
    }

    /// The about section: translation only, no card indexing, and only on
    /// viewports wide enough for the two-column layout.
    pub fn register_about(document: &web::Document, viewport_width: f64) -> Option<Self> {
        if viewport_width <= ABOUT_MIN_VIEWPORT_WIDTH {
            return None;
        }
        let section = document.query_selector(ABOUT_SECTION_SELECTOR).ok()??;
        let content: web::HtmlElement = document
            .get_element_by_id(ABOUT_CONTENT_ID)?
            .dyn_into()
            .ok()?;
        let viewport: web::HtmlElement = content
            .closest(ABOUT_VIEWPORT_SELECTOR)
            .ok()??
            .dyn_into()
            .ok()?;
        Some(Self {
            section,
            content,
            viewport,
            cards: Vec::new(),
        })
    }

    /// Live layout snapshot. Measured fresh on every call so the section
    /// stays correct across viewport resizes without an invalidation hook.
    fn geometry(&self) -> SectionGeometry {
        SectionGeometry {
            content_extent: self.content.scroll_height() as f64
                - self.viewport.offset_height() as f64,
            card_count: self.cards.len(),
        }
    }

    /// Progress through the pinned span, measured on the outer section. The
    /// transform sits on the inner content, so the outer rect is untouched
    /// by our own writes.
    pub fn progress(&self, viewport_height: f64) -> f64 {
        let rect = self.section.get_bounding_client_rect();
        progress::pinned_progress(rect.top(), rect.height(), viewport_height)
    }

    /// Recompute derived values and apply them: content transform, and when
    /// cards exist, exactly one card marked active.
    pub fn update(&self, progress: f64) {
        let out = progress::map_progress(progress, self.geometry());
        dom::set_translate_y(&self.content, out.translation_offset);
        if let Some(active) = out.active_index {
            for (i, card) in self.cards.iter().enumerate() {
                dom::set_class(card, CARD_ACTIVE_CLASS, i == active);
            }
        }
    }
}

/// A free-scrolling element translated proportionally to its `data-speed`
/// attribute as it traverses the viewport.
pub struct SpeedLayer {
    el: web::HtmlElement,
    speed: f64,
    // The measured rect includes our own transform; subtracting the last
    // applied offset recovers the layout position.
    applied_offset: f64,
}

/// Collect every `[data-speed]` element with a parseable speed value.
pub fn register_speed_layers(document: &web::Document) -> Vec<SpeedLayer> {
    dom::query_all(document, SPEED_LAYER_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let speed: f64 = el.get_attribute(SPEED_ATTR)?.trim().parse().ok()?;
            let el: web::HtmlElement = el.dyn_into().ok()?;
            Some(SpeedLayer {
                el,
                speed,
                applied_offset: 0.0,
            })
        })
        .collect()
}

impl SpeedLayer {
    pub fn update(&mut self, viewport_height: f64) {
        let rect = self.el.get_bounding_client_rect();
        let layout_top = rect.top() - self.applied_offset;
        let p = progress::traversal_progress(layout_top, rect.height(), viewport_height);
        let offset = progress::speed_offset(p, self.speed, viewport_height);
        dom::set_translate_y(&self.el, offset);
        self.applied_offset = offset;
    }
}
