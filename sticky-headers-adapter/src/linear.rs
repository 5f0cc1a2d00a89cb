use alloc::vec::Vec;
use core::ops::Range;

use sticky_headers::{ItemBounds, ListHost, Size};

/// An in-memory vertical list that materializes only the items intersecting its viewport.
///
/// Every item occupies a slot of `reserved + margin_top + height + margin_bottom`, where
/// `reserved` is the leading space returned by the layout callback. Item bounds are reported
/// in viewport coordinates (slot position minus scroll offset).
#[derive(Clone, Debug)]
pub struct LinearListHost<K> {
    keys: Vec<K>,
    heights: Vec<u32>,
    margin_top: u32,
    margin_bottom: u32,
    reserved: Vec<u32>,
    starts: Vec<u64>, // slot start per item, plus the total at the end
    viewport: Size,
    scroll_offset: u64,
    overscan: usize,
    window: Range<usize>,
}

fn to_coord(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl<K> LinearListHost<K> {
    /// Creates a list with no reserved space. Call [`Self::layout`] to apply reservation.
    pub fn new(keys: Vec<K>, item_height: impl Fn(usize) -> u32, viewport: Size) -> Self {
        let heights = (0..keys.len()).map(item_height).collect();
        let reserved = alloc::vec![0; keys.len()];
        let mut host = Self {
            keys,
            heights,
            margin_top: 0,
            margin_bottom: 0,
            reserved,
            starts: Vec::new(),
            viewport,
            scroll_offset: 0,
            overscan: 0,
            window: 0..0,
        };
        host.rebuild();
        host
    }

    pub fn with_margins(mut self, margin_top: u32, margin_bottom: u32) -> Self {
        self.margin_top = margin_top;
        self.margin_bottom = margin_bottom;
        self.rebuild();
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self.refresh_window();
        self
    }

    /// Lays out every item, asking `reserve` for the leading space above each position.
    pub fn layout(&mut self, mut reserve: impl FnMut(&Self, usize) -> u32) {
        let this: &Self = self;
        let reserved: Vec<u32> = (0..this.keys.len()).map(|p| reserve(this, p)).collect();
        self.reserved = reserved;
        self.rebuild();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn reserved(&self, position: usize) -> u32 {
        self.reserved[position]
    }

    pub fn total_size(&self) -> u64 {
        self.starts.last().copied().unwrap_or(0)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport.height as u64)
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Scrolls to `offset`, clamped to the scrollable range.
    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset.min(self.max_scroll_offset());
        self.refresh_window();
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let next = if delta >= 0 {
            self.scroll_offset.saturating_add(delta as u64)
        } else {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        };
        self.set_scroll_offset(next);
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Absolute positions of the materialized items.
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    fn rebuild(&mut self) {
        let n = self.keys.len();
        self.starts.clear();
        self.starts.reserve_exact(n + 1);
        let mut offset = 0u64;
        for p in 0..n {
            self.starts.push(offset);
            offset = offset
                .saturating_add(self.reserved[p] as u64)
                .saturating_add(self.margin_top as u64)
                .saturating_add(self.heights[p] as u64)
                .saturating_add(self.margin_bottom as u64);
        }
        self.starts.push(offset);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        self.refresh_window();
    }

    fn refresh_window(&mut self) {
        let n = self.keys.len();
        let view = self.viewport.height as u64;
        if n == 0 || view == 0 {
            self.window = 0..0;
            return;
        }
        let slots = &self.starts[..n];
        let top = self.scroll_offset;
        let bottom = top.saturating_add(view);
        let first = slots.partition_point(|&s| s <= top).saturating_sub(1);
        let end = slots.partition_point(|&s| s < bottom);

        let start = first.saturating_sub(self.overscan);
        let end = end.saturating_add(self.overscan).min(n);
        sh_trace!(start, end, scroll_offset = top, "LinearListHost: window");
        self.window = start..end;
    }
}

impl<K: Clone> ListHost for LinearListHost<K> {
    type Key = K;

    fn materialized_item_count(&self) -> usize {
        self.window.len()
    }

    fn item_at(&self, index: usize) -> ItemBounds {
        let p = self.window.start + index;
        let top = self.starts[p] as i64 + self.reserved[p] as i64 + self.margin_top as i64
            - self.scroll_offset as i64;
        let bottom = top + self.heights[p] as i64;
        ItemBounds::new(to_coord(top), to_coord(bottom))
            .with_margins(to_coord(self.margin_top as i64), to_coord(self.margin_bottom as i64))
    }

    fn adapter_position_of(&self, index: usize) -> usize {
        self.window.start + index
    }

    fn key_at(&self, position: usize) -> K {
        self.keys[position].clone()
    }

    fn total_item_count(&self) -> usize {
        self.keys.len()
    }

    fn envelope(&self) -> Size {
        self.viewport
    }
}
