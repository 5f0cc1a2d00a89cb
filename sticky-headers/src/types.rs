/// Vertical bounds and margins of a materialized item, in viewport coordinates.
///
/// `top`/`bottom` describe the item's own box; margins and reserved leading space lie outside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBounds {
    pub top: i32,
    pub bottom: i32,
    pub margin_top: i32,
    pub margin_bottom: i32,
}

impl ItemBounds {
    pub fn new(top: i32, bottom: i32) -> Self {
        Self {
            top,
            bottom,
            margin_top: 0,
            margin_bottom: 0,
        }
    }

    pub fn with_margins(mut self, margin_top: i32, margin_bottom: i32) -> Self {
        self.margin_top = margin_top;
        self.margin_bottom = margin_bottom;
        self
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// A read-only view of one materialized list entry for the duration of a pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K> {
    /// Section-grouping identity.
    pub key: K,
    /// Absolute position of the item in the host's data set.
    pub position: usize,
    pub bounds: ItemBounds,
}

impl<K> Item<K> {
    pub fn new(key: K, position: usize, bounds: ItemBounds) -> Self {
        Self {
            key,
            position,
            bounds,
        }
    }

    pub fn top(&self) -> i32 {
        self.bounds.top
    }

    pub fn bottom(&self) -> i32 {
        self.bounds.bottom
    }

    /// The top edge including the item's top margin.
    pub fn outer_top(&self) -> i32 {
        self.bounds.top.saturating_sub(self.bounds.margin_top)
    }

    /// The bottom edge including the item's bottom margin.
    pub fn outer_bottom(&self) -> i32 {
        self.bounds.bottom.saturating_add(self.bounds.margin_bottom)
    }
}

/// An axis-aligned rectangle in viewport coordinates (edges, not origin + size).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }
}

/// Converts a non-negative length to a signed coordinate delta.
pub(crate) fn len_i32(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
