//! Section detection over the materialized window.

use alloc::vec::Vec;
use core::ops::Range;

use crate::Item;

/// Decides the end item of a run that no key change has closed.
///
/// A scan only sees the materialized window, so the last run's true end may lie beyond it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenRunEnd {
    /// The run keeps no end item and is never placed.
    Unset,
    /// A run opened by a key change provisionally ends at its own first item; the window's first
    /// run stays open until a key change closes it.
    ///
    /// Limitation: when an earlier section is still materialized (for example through overscan),
    /// the window's last run is not its first run, so it gets that provisional end. Once its
    /// first item is within one header height of the top, the header is placed
    /// [`HeaderPhase::Overtaken`](crate::HeaderPhase::Overtaken) and slides up although the run
    /// continues below. It disappears when the earlier section leaves the window. Use
    /// [`OpenRunEnd::LastMaterialized`] with overscanned windows.
    #[default]
    StartItem,
    /// The final run ends at the last materialized item.
    LastMaterialized,
}

/// A maximal run of equally keyed items inside the materialized window.
#[derive(Debug, PartialEq, Eq)]
pub struct Section<'w, K> {
    pub key: &'w K,
    /// Window indexes covered by the run.
    pub items: Range<usize>,
    pub start_item: Option<&'w Item<K>>,
    pub end_item: Option<&'w Item<K>>,
}

impl<K> Clone for Section<'_, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            items: self.items.clone(),
            start_item: self.start_item,
            end_item: self.end_item,
        }
    }
}

impl<'w, K> Section<'w, K> {
    /// Both boundary items, when known. Only such sections are placed.
    pub fn boundaries(&self) -> Option<(&'w Item<K>, &'w Item<K>)> {
        Some((self.start_item?, self.end_item?))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partitions `window` (in visual top-to-bottom order) into sections.
///
/// Every item lands in exactly one section, sections follow window order, and adjacent sections
/// never share a key. Runs closed by a key change end at the item before the change; the end of
/// a run still open when the window ends is decided by `open_run_end`.
pub fn scan<K: PartialEq>(window: &[Item<K>], open_run_end: OpenRunEnd) -> Vec<Section<'_, K>> {
    let mut sections: Vec<Section<'_, K>> = Vec::new();
    let mut previous: Option<&Item<K>> = None;

    for (i, item) in window.iter().enumerate() {
        if let Some(current) = sections.last_mut() {
            if *current.key == item.key {
                current.items.end = i + 1;
                previous = Some(item);
                continue;
            }
            current.end_item = previous;
        }
        let seeded_end = match open_run_end {
            OpenRunEnd::StartItem if i > 0 => Some(item),
            _ => None,
        };
        sections.push(Section {
            key: &item.key,
            items: i..i + 1,
            start_item: Some(item),
            end_item: seeded_end,
        });
        previous = Some(item);
    }

    if open_run_end == OpenRunEnd::LastMaterialized {
        if let Some(last) = sections.last_mut() {
            last.end_item = previous;
        }
    }

    sh_trace!(items = window.len(), sections = sections.len(), "scan");
    sections
}
