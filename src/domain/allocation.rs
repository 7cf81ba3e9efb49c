//! Sub-panel height allocation.
//!
//! The explorer's five sub-panels share one vertical container. Allocation
//! is a pure function over measurements the rendering layer reads at toggle
//! time, so the arithmetic is unit-testable without a layout pass:
//! - each open sub-panel takes its content height, capped (the editors list
//!   at [`EDITOR_MAX_HEIGHT`], the small panels at [`SMALL_PANEL_MAX_HEIGHT`])
//!   and clamped to the space still available
//! - the portfolio tree absorbs whatever remains after headers and the
//!   other open sub-panels

/// Slot order within the container: editors, portfolio, outline, timeline,
/// scripts.
pub const SUB_PANEL_SLOTS: usize = 5;
pub const EDITOR_SLOT: usize = 0;
pub const PORTFOLIO_SLOT: usize = 1;

/// The open-editors list never grows beyond this.
pub const EDITOR_MAX_HEIGHT: f32 = 100.0;

/// Cap for the outline, timeline, and scripts sub-panels.
pub const SMALL_PANEL_MAX_HEIGHT: f32 = 140.0;

/// Computes the height allotment for every sub-panel slot.
///
/// # Arguments
/// * `container_height` - Height of the shared container
/// * `header_height` - Height of one sub-panel header row (all five headers
///   are always visible)
/// * `content_heights` - Natural content height per slot
/// * `open` - Open flag per slot
///
/// # Returns
/// Allotted content height per slot; closed slots get `0.0`. The sum of
/// allotments never exceeds `container_height` minus the header rows.
pub fn compute_allocation(
    container_height: f32,
    header_height: f32,
    content_heights: [f32; SUB_PANEL_SLOTS],
    open: [bool; SUB_PANEL_SLOTS],
) -> [f32; SUB_PANEL_SLOTS] {
    let mut heights = [0.0; SUB_PANEL_SLOTS];
    let mut remaining =
        (container_height - header_height * SUB_PANEL_SLOTS as f32).max(0.0);

    for slot in 0..SUB_PANEL_SLOTS {
        if slot == PORTFOLIO_SLOT || !open[slot] {
            continue;
        }
        let cap = if slot == EDITOR_SLOT {
            EDITOR_MAX_HEIGHT
        } else {
            SMALL_PANEL_MAX_HEIGHT
        };
        let height = content_heights[slot].min(cap).min(remaining);
        heights[slot] = height;
        remaining -= height;
    }

    if open[PORTFOLIO_SLOT] {
        heights[PORTFOLIO_SLOT] = remaining;
    }

    heights
}
