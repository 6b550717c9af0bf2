// Pure scroll-progress arithmetic.
//
// Everything here is DOM-free: the frame loop measures layout, calls into
// these functions, and applies the results. Keeping the numeric mapping
// separate from effect application lets the host-side tests exercise it
// without a browser.

/// Layout snapshot for one parallax section, re-measured from live layout
/// before every update so viewport resizes need no separate invalidation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionGeometry {
    /// Scrollable extent of the inner content (content height minus viewport
    /// height). Non-positive means there is nothing to scroll.
    pub content_extent: f64,
    /// Number of discrete cards indexed by this section; 0 disables indexing.
    pub card_count: usize,
}

/// Derived values for one progress notification. Recomputed every frame,
/// never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectUpdate {
    pub translation_offset: f64,
    pub active_index: Option<usize>,
}

/// Map a progress ratio in [0, 1] to the section's derived effects.
pub fn map_progress(progress: f64, geom: SectionGeometry) -> EffectUpdate {
    EffectUpdate {
        translation_offset: translation_offset(progress, geom.content_extent),
        active_index: active_index(progress, geom.card_count),
    }
}

/// Content moves against scroll direction, one content-extent over the full
/// progress range. No-op when the content is not taller than its viewport.
#[inline]
pub fn translation_offset(progress: f64, content_extent: f64) -> f64 {
    if content_extent <= 0.0 {
        0.0
    } else {
        -progress * content_extent
    }
}

/// Discrete card index for a progress ratio: `floor(progress * count)`,
/// clamped so that progress 1.0 lands on the last card rather than one past
/// it. `None` when the section has no cards.
#[inline]
pub fn active_index(progress: f64, card_count: usize) -> Option<usize> {
    if card_count == 0 {
        return None;
    }
    let raw = (progress.max(0.0) * card_count as f64).floor() as usize;
    Some(raw.min(card_count - 1))
}

/// Progress for a pinned section anchored top-of-section-at-top-of-viewport
/// through bottom-of-section-at-bottom-of-viewport. `rect_top` is the
/// section's top in viewport coordinates (negative once scrolled past).
/// Overshoot from overscroll clamps to [0, 1].
#[inline]
pub fn pinned_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = rect_height - viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    (-rect_top / span).clamp(0.0, 1.0)
}

/// Progress for an element traversing the viewport: 0 when its top edge
/// enters at the bottom, 1 when its bottom edge leaves at the top.
#[inline]
pub fn traversal_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// Offset for a `data-speed` layer. Speed 1.0 scrolls normally (zero offset);
/// slower layers drift down, faster ones up, by up to half a viewport over a
/// full traversal.
#[inline]
pub fn speed_offset(progress: f64, speed: f64, viewport_height: f64) -> f64 {
    progress * (1.0 - speed) * viewport_height * 0.5
}
