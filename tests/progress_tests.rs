// Host-side tests for the pure progress mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod progress {
    include!("../src/progress.rs");
}

use progress::*;

#[test]
fn active_index_matches_floor_min_invariant() {
    for card_count in 1usize..=8 {
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let expected = ((p * card_count as f64).floor() as usize).min(card_count - 1);
            assert_eq!(
                active_index(p, card_count),
                Some(expected),
                "count={card_count} p={p}"
            );
        }
    }
}

#[test]
fn active_index_boundaries() {
    for card_count in 1usize..=8 {
        assert_eq!(active_index(0.0, card_count), Some(0));
        assert_eq!(active_index(1.0, card_count), Some(card_count - 1));
    }
}

#[test]
fn active_index_no_cards_produces_nothing() {
    assert_eq!(active_index(0.0, 0), None);
    assert_eq!(active_index(0.5, 0), None);
    assert_eq!(active_index(1.0, 0), None);
}

#[test]
fn active_index_scenarios() {
    // floor(0.41 * 5) = 2
    assert_eq!(active_index(0.41, 5), Some(2));
    // min(2, floor(2.999997)) = 2
    assert_eq!(active_index(0.999999, 3), Some(2));
}

#[test]
fn active_index_is_monotonic_over_a_traversal() {
    let card_count = 7;
    let mut prev = 0usize;
    for step in 0..=500 {
        let p = step as f64 / 500.0;
        let idx = active_index(p, card_count).unwrap();
        assert!(idx >= prev, "index fell from {prev} to {idx} at p={p}");
        prev = idx;
    }
    assert_eq!(prev, card_count - 1);
}

#[test]
fn translation_scales_linearly_with_progress() {
    let extent = 1234.5;
    let full = translation_offset(1.0, extent);
    for step in 1..=100 {
        let p = step as f64 / 100.0;
        let ratio = translation_offset(p, extent) / p;
        assert!((ratio - full).abs() < 1e-9, "nonlinear at p={p}");
    }
}

#[test]
fn translation_magnitude_and_direction() {
    assert_eq!(translation_offset(0.0, 800.0), 0.0);
    assert_eq!(translation_offset(1.0, 800.0), -800.0);
    assert_eq!(translation_offset(0.5, 800.0), -400.0);
}

#[test]
fn translation_is_noop_without_scrollable_extent() {
    for p in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(translation_offset(p, 0.0), 0.0);
        assert_eq!(translation_offset(p, -120.0), 0.0);
    }
}

#[test]
fn map_progress_combines_both_effects() {
    let geom = SectionGeometry {
        content_extent: 600.0,
        card_count: 4,
    };
    let out = map_progress(0.5, geom);
    assert_eq!(out.translation_offset, -300.0);
    assert_eq!(out.active_index, Some(2));

    let no_cards = SectionGeometry {
        content_extent: 600.0,
        card_count: 0,
    };
    let out = map_progress(0.5, no_cards);
    assert_eq!(out.translation_offset, -300.0);
    assert_eq!(out.active_index, None);
}

#[test]
fn pinned_progress_covers_full_range() {
    let (height, viewport) = (3000.0, 1000.0);
    // Section top at viewport top: start of the span
    assert_eq!(pinned_progress(0.0, height, viewport), 0.0);
    // Scrolled exactly the span: section bottom meets viewport bottom
    assert_eq!(pinned_progress(-(height - viewport), height, viewport), 1.0);
    // Halfway
    let mid = pinned_progress(-(height - viewport) / 2.0, height, viewport);
    assert!((mid - 0.5).abs() < 1e-9);
}

#[test]
fn pinned_progress_clamps_overscroll() {
    let (height, viewport) = (3000.0, 1000.0);
    // Rubber-band overscroll above the section
    assert_eq!(pinned_progress(150.0, height, viewport), 0.0);
    // Scrolled past the section
    assert_eq!(pinned_progress(-5000.0, height, viewport), 1.0);
}

#[test]
fn pinned_progress_with_nothing_to_scroll() {
    // Section no taller than the viewport: span is empty
    assert_eq!(pinned_progress(-100.0, 800.0, 1000.0), 0.0);
    assert_eq!(pinned_progress(-100.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn traversal_progress_endpoints() {
    let (height, viewport) = (400.0, 1000.0);
    // Top edge at the viewport bottom: just entering
    assert_eq!(traversal_progress(viewport, height, viewport), 0.0);
    // Bottom edge at the viewport top: just leaving
    assert_eq!(traversal_progress(-height, height, viewport), 1.0);
    assert_eq!(traversal_progress(2000.0, height, viewport), 0.0);
    assert_eq!(traversal_progress(-2000.0, height, viewport), 1.0);
}

#[test]
fn speed_offset_directions() {
    let viewport = 1000.0;
    // Speed 1.0 moves with the page: no offset
    assert_eq!(speed_offset(0.7, 1.0, viewport), 0.0);
    // Slow layers drift down, fast layers up
    assert!(speed_offset(1.0, 0.5, viewport) > 0.0);
    assert!(speed_offset(1.0, 1.5, viewport) < 0.0);
    // Full traversal at speed 0 covers half a viewport
    assert_eq!(speed_offset(1.0, 0.0, viewport), 500.0);
    assert_eq!(speed_offset(0.0, 0.0, viewport), 0.0);
}
