//! Scroll-driven header state.
//!
//! Geometry sampling happens in the frontend; everything here works on plain
//! numbers so it can be exercised without a browser.

/// Vertical offset past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// A section counts as active once its top edge reaches this distance from
/// the viewport top.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 200.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState<'a> {
    pub past_threshold: bool,
    pub active_section: Option<&'a str>,
}

/// Derives the header state from the window scroll offset and the
/// viewport-relative top edge of each section, given in declaration order.
///
/// Sections are checked from last to first and the first one at or above
/// [`ACTIVE_SECTION_OFFSET_PX`] wins, so when several qualify the one
/// declared last is active.
pub fn compute_scroll_state<'a>(section_tops: &[(&'a str, f64)], scroll_y: f64) -> ScrollState<'a> {
    let active_section = section_tops
        .iter()
        .rev()
        .find(|(_, top)| *top <= ACTIVE_SECTION_OFFSET_PX)
        .map(|(id, _)| *id);

    ScrollState {
        past_threshold: scroll_y > SCROLL_THRESHOLD_PX,
        active_section,
    }
}
