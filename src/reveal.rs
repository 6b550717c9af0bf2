use crate::constants::{REVEAL_TILE_SELECTOR, REVEAL_VIEWPORT_FRACTION, REVEAL_VISIBLE_CLASS};
use crate::dom;
use web_sys as web;

/// One-shot tile reveal: tiles gain the visible class once their top edge
/// crosses the reveal line and keep it. The CSS transition owns the motion.
pub struct RevealSet {
    pending: Vec<web::Element>,
}

pub fn collect(document: &web::Document) -> RevealSet {
    RevealSet {
        pending: dom::query_all(document, REVEAL_TILE_SELECTOR),
    }
}

impl RevealSet {
    /// Check every still-hidden tile against the reveal line and drop the
    /// ones that fire, so revealed tiles cost nothing on later frames.
    pub fn sweep(&mut self, viewport_height: f64) {
        let reveal_line = viewport_height * REVEAL_VIEWPORT_FRACTION;
        self.pending.retain(|tile| {
            let rect = tile.get_bounding_client_rect();
            if rect.top() <= reveal_line {
                _ = tile.class_list().add_1(REVEAL_VISIBLE_CLASS);
                false
            } else {
                true
            }
        });
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
