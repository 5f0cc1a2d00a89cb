//! Headless sticky section headers for virtualized vertical lists.
//!
//! Items of a list are grouped into sections: maximal contiguous runs sharing a key. While the
//! list scrolls, the header of the section at the top of the viewport docks at the top edge, is
//! pushed up by the next section as it arrives, and otherwise scrolls with its section.
//!
//! The crate only computes geometry. It works from the currently materialized items and never
//! needs the full data set, except for looking up keys by position during reservation. A UI
//! layer is expected to provide:
//! - the materialized window and item bounds ([`ListHost`])
//! - header content and its intrinsic size ([`HeaderProvider`])
//! - painting ([`Renderer`])
//!
//! The pipeline is split into independent pieces: [`scan`] (section detection), [`reserve_top`]
//! (leading space above section starts), [`place`] (header offsets), composed by
//! [`StickyHeaders`]. For caching across frames, see the `sticky-headers-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod backdrop;
mod host;
mod key;
mod measure;
mod options;
mod overlay;
mod placement;
mod reserve;
mod scanner;
mod types;


pub use backdrop::section_backdrop;
pub use host::{HeaderContent, HeaderProvider, ListHost, Renderer};
pub use key::{KeySizeMap, SectionKey};
pub use measure::{HeaderBox, HeaderConstraints, Size, SizingMode, resolve, resolve_axis};
pub use options::{BackdropOptions, StickyHeaderOptions};
pub use overlay::{DrawCommand, StickyHeaders, materialized_window};
pub use placement::{
    HeaderPhase, PlacedHeader, Placement, place, place_extent, place_header, section_extent,
};
pub use reserve::{reserve_top, starts_section};
pub use scanner::{OpenRunEnd, Section, scan};
pub use types::{Bounds, Item, ItemBounds};
