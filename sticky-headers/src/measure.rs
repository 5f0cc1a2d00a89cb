//! Header box measurement.
//!
//! Every header size, whether used to reserve leading space or to place a header, is resolved
//! here from the same [`HeaderConstraints`], so the layout and draw passes agree on geometry.

/// How one axis of a header box is sized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizingMode {
    /// A fixed length. Negative values resolve to 0.
    Fixed(i32),
    /// The whole available length.
    #[default]
    FillAvailable,
    /// The content's unconstrained size, bounded by the available length.
    Intrinsic,
}

/// A width/height pair of non-negative lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Sizing constraints handed to the header provider and to [`resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderConstraints {
    pub width: SizingMode,
    pub height: SizingMode,
    /// The maximum envelope (usually the viewport size).
    pub available: Size,
}

impl HeaderConstraints {
    pub fn new(width: SizingMode, height: SizingMode, available: Size) -> Self {
        Self {
            width,
            height,
            available,
        }
    }

    /// Resolves a concrete size given the content's intrinsic size.
    pub fn resolve(&self, intrinsic: Size) -> Size {
        resolve(
            self.width,
            self.height,
            self.available.width,
            self.available.height,
            intrinsic.width,
            intrinsic.height,
        )
    }
}

/// A resolved header: its concrete size plus the provider's content handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderBox<C> {
    pub width: u32,
    pub height: u32,
    pub content: C,
}

impl<C> HeaderBox<C> {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

pub fn resolve_axis(mode: SizingMode, available: u32, intrinsic: u32) -> u32 {
    match mode {
        SizingMode::Fixed(v) => u32::try_from(v).unwrap_or(0),
        SizingMode::FillAvailable => available,
        SizingMode::Intrinsic => available.min(intrinsic),
    }
}

/// Resolves a header box size for both axes.
///
/// Pure and infallible: degenerate inputs yield 0, never negative lengths.
pub fn resolve(
    width: SizingMode,
    height: SizingMode,
    available_width: u32,
    available_height: u32,
    intrinsic_width: u32,
    intrinsic_height: u32,
) -> Size {
    Size {
        width: resolve_axis(width, available_width, intrinsic_width),
        height: resolve_axis(height, available_height, intrinsic_height),
    }
}
