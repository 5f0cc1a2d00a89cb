use crate::{HeaderConstraints, OpenRunEnd, Size, SizingMode};

/// Insets applied to section backdrops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackdropOptions {
    pub margin_left: i32,
    pub margin_right: i32,
    pub margin_top: i32,
    pub margin_bottom: i32,
}

impl BackdropOptions {
    pub fn new(margin_left: i32, margin_right: i32, margin_top: i32, margin_bottom: i32) -> Self {
        Self {
            margin_left,
            margin_right,
            margin_top,
            margin_bottom,
        }
    }
}

/// Configuration for [`crate::StickyHeaders`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyHeaderOptions {
    pub header_width: SizingMode,
    pub header_height: SizingMode,

    /// How to end a run that is still open when the materialized window ends.
    ///
    /// Sections without an end item get no header.
    pub open_run_end: OpenRunEnd,

    /// When disabled, reservation returns 0 and draw passes emit nothing.
    pub enabled: bool,

    /// Section backdrops; `None` disables them.
    pub backdrop: Option<BackdropOptions>,
}

impl Default for StickyHeaderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl StickyHeaderOptions {
    /// Full-width headers measured to their content height.
    pub fn new() -> Self {
        Self {
            header_width: SizingMode::FillAvailable,
            header_height: SizingMode::Intrinsic,
            open_run_end: OpenRunEnd::default(),
            enabled: true,
            backdrop: None,
        }
    }

    /// Full-width headers of a fixed height.
    pub fn fixed_height(height: i32) -> Self {
        Self::new().with_header_height(SizingMode::Fixed(height))
    }

    pub fn with_header_width(mut self, header_width: SizingMode) -> Self {
        self.header_width = header_width;
        self
    }

    pub fn with_header_height(mut self, header_height: SizingMode) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn with_open_run_end(mut self, open_run_end: OpenRunEnd) -> Self {
        self.open_run_end = open_run_end;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_backdrop(mut self, backdrop: Option<BackdropOptions>) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// The constraints headers are measured with inside `envelope`.
    pub fn constraints(&self, envelope: Size) -> HeaderConstraints {
        HeaderConstraints::new(self.header_width, self.header_height, envelope)
    }
}
