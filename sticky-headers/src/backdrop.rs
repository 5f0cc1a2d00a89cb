//! Section backdrops: background bounds spanning a section's visible extent.
//!
//! A section edge that is the true boundary of its run in the data set uses the item's edge. An
//! edge whose run continues outside the window is pushed past the viewport: `-width` above, or
//! `height + width` below, so the backdrop reads as continuing off-screen.

use crate::types::len_i32;
use crate::{BackdropOptions, Bounds, Item, Section, Size};

/// Computes the backdrop bounds for `section` of `window`.
///
/// `key_at` looks up keys by absolute position, `total` is the data set size.
pub fn section_backdrop<K: PartialEq>(
    section: &Section<'_, K>,
    window: &[Item<K>],
    mut key_at: impl FnMut(usize) -> K,
    total: usize,
    envelope: Size,
    options: &BackdropOptions,
) -> Option<Bounds> {
    let first = window.get(section.items.start)?;
    let last = window.get(section.items.end.checked_sub(1)?)?;
    let width = len_i32(envelope.width);
    let height = len_i32(envelope.height);

    let opens_here = first.position == 0 || key_at(first.position - 1) != *section.key;
    let top = if opens_here { first.top() } else { -width };

    let closes_here = last.position + 1 >= total || key_at(last.position + 1) != *section.key;
    let bottom = if closes_here {
        last.bottom()
    } else {
        height.saturating_add(width)
    };

    let bounds = Bounds {
        left: options.margin_left,
        top: top.saturating_add(options.margin_top),
        right: width.saturating_sub(options.margin_right),
        bottom: bottom.saturating_sub(options.margin_bottom),
    };
    if bounds.is_empty() {
        return None;
    }
    Some(bounds)
}
