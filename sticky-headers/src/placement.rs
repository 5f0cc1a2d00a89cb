//! Header placement: where a section's header is drawn for the current viewport.
//!
//! With `start = top(first) - margin_top(first) - header_height` and
//! `end = bottom(last) + margin_bottom(last)`:
//!
//! | case        | condition                          | offset                 |
//! |-------------|------------------------------------|------------------------|
//! | `Docked`    | `start <= 0 && end >= header`      | `0`                    |
//! | `Overtaken` | `start <= 0 && end < header`       | `end - header`         |
//! | `Scrolling` | `start > 0`                        | `start`                |
//!
//! The offset is continuous across case boundaries: at `start == 0` all cases meet at `0` and at
//! `end == header` docked and overtaken both yield `0`.

use alloc::vec::Vec;

use crate::types::len_i32;
use crate::{HeaderBox, Item, Section};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderPhase {
    /// Pinned to the top edge of the viewport.
    Docked,
    /// Pushed up by the section's trailing edge as the next section arrives.
    Overtaken,
    /// Not yet at the top; the header moves with its section's content.
    Scrolling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Vertical draw offset of the header's top edge.
    pub offset: i32,
    pub phase: HeaderPhase,
}

impl Placement {
    pub fn fully_visible(&self) -> bool {
        self.phase == HeaderPhase::Docked
    }
}

/// The leading and trailing edges of a section, header space included.
pub fn section_extent<K>(start: &Item<K>, end: &Item<K>, header_height: u32) -> (i32, i32) {
    let section_start = start.outer_top().saturating_sub(len_i32(header_height));
    (section_start, end.outer_bottom())
}

pub fn place_extent(section_start: i32, section_end: i32, header_height: u32) -> Placement {
    let header_height = len_i32(header_height);
    if section_start > 0 {
        return Placement {
            offset: section_start,
            phase: HeaderPhase::Scrolling,
        };
    }
    if section_end >= header_height {
        Placement {
            offset: 0,
            phase: HeaderPhase::Docked,
        }
    } else {
        Placement {
            offset: section_end.saturating_sub(header_height),
            phase: HeaderPhase::Overtaken,
        }
    }
}

pub fn place_header<K>(start: &Item<K>, end: &Item<K>, header_height: u32) -> Placement {
    let (section_start, section_end) = section_extent(start, end, header_height);
    place_extent(section_start, section_end, header_height)
}

/// A section whose header has been resolved and placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedHeader<'w, K, C> {
    pub section: Section<'w, K>,
    pub header: HeaderBox<C>,
    pub placement: Placement,
}

/// Places the header of every section with both boundary items known, in section order.
///
/// `header_for` resolves the header box for a key; it is only called for placed sections.
pub fn place<'w, K, C>(
    sections: &[Section<'w, K>],
    mut header_for: impl FnMut(&K) -> HeaderBox<C>,
) -> Vec<PlacedHeader<'w, K, C>> {
    let mut out = Vec::with_capacity(sections.len());
    for section in sections {
        let Some((start, end)) = section.boundaries() else {
            sh_trace!(
                first = section.items.start,
                last = section.items.end,
                "place: open section skipped"
            );
            continue;
        };
        let header = header_for(section.key);
        let placement = place_header(start, end, header.height);
        out.push(PlacedHeader {
            section: section.clone(),
            header,
            placement,
        });
    }
    out
}
