use alloc::vec::Vec;
use core::ops::Range;

use crate::backdrop::section_backdrop;
use crate::placement::{PlacedHeader, place};
use crate::reserve::reserve_top;
use crate::scanner::scan;
use crate::{
    Bounds, HeaderBox, HeaderPhase, HeaderProvider, Item, ListHost, Placement, Renderer, Size,
    StickyHeaderOptions,
};

/// One header to paint for the current draw pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawCommand<K, C> {
    pub key: K,
    /// Window indexes of the section this header belongs to.
    pub items: Range<usize>,
    pub header: HeaderBox<C>,
    pub placement: Placement,
}

impl<K, C> DrawCommand<K, C> {
    pub fn offset(&self) -> i32 {
        self.placement.offset
    }

    pub fn phase(&self) -> HeaderPhase {
        self.placement.phase
    }

    pub fn fully_visible(&self) -> bool {
        self.placement.fully_visible()
    }
}

/// Reads the host's materialized window into items, in visual order.
pub fn materialized_window<H: ListHost>(host: &H) -> Vec<Item<H::Key>> {
    let count = host.materialized_item_count();
    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let position = host.adapter_position_of(index);
        out.push(Item::new(host.key_at(position), position, host.item_at(index)));
    }
    out
}

/// Sticky section headers for a virtualized vertical list.
///
/// This type holds no per-frame state: each call recomputes from the inputs it is given.
/// The host drives it from two places:
/// - its layout pass, calling [`StickyHeaders::reserve_top_offset`] for every item it measures
/// - its draw pass, calling [`StickyHeaders::draw_overlay`] (or `paint_overlay`) after content
///
/// Reservation and placement resolve header sizes from the same options and envelope, so a
/// section's reserved space always matches the header drawn for it.
#[derive(Clone, Debug)]
pub struct StickyHeaders<P> {
    options: StickyHeaderOptions,
    provider: P,
}

impl<P> StickyHeaders<P> {
    pub fn new(provider: P) -> Self {
        Self::with_options(StickyHeaderOptions::new(), provider)
    }

    pub fn with_options(options: StickyHeaderOptions, provider: P) -> Self {
        sh_debug!(
            enabled = options.enabled,
            open_run_end = ?options.open_run_end,
            "StickyHeaders::new"
        );
        Self { options, provider }
    }

    pub fn options(&self) -> &StickyHeaderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: StickyHeaderOptions) {
        sh_debug!(
            enabled = options.enabled,
            open_run_end = ?options.open_run_end,
            "StickyHeaders::set_options"
        );
        self.options = options;
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut StickyHeaderOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.update_options(|o| o.enabled = enabled);
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Resolves the header box for `key` inside `envelope`.
    pub fn header_box<K>(&self, key: &K, envelope: Size) -> HeaderBox<P::Content>
    where
        P: HeaderProvider<K>,
    {
        let constraints = self.options.constraints(envelope);
        self.provider
            .header_for(key, &constraints)
            .into_box(&constraints)
    }

    pub fn header_height<K>(&self, key: &K, envelope: Size) -> u32
    where
        P: HeaderProvider<K>,
    {
        self.header_box(key, envelope).height
    }

    /// Extra top offset the host must insert above the item at `position`.
    ///
    /// Returns 0 without a host or when disabled.
    ///
    /// # Panics
    ///
    /// Panics if `position >= host.total_item_count()`.
    pub fn reserve_top_offset<H>(&self, host: Option<&H>, position: usize) -> u32
    where
        H: ListHost,
        H::Key: PartialEq,
        P: HeaderProvider<H::Key>,
    {
        let Some(host) = host else {
            return 0;
        };
        if !self.options.enabled {
            return 0;
        }
        let total = host.total_item_count();
        if position >= total {
            sh_warn!(position, total, "reserve_top_offset: position out of range");
        }
        assert!(
            position < total,
            "reserve_top_offset: position out of range (position={position}, total={total})"
        );
        let envelope = host.envelope();
        reserve_top(
            position,
            |p| host.key_at(p),
            |key| self.header_height(key, envelope),
        )
    }

    /// Places the headers of `window` without copying keys out of it.
    pub fn place_window<'w, K>(
        &self,
        window: &'w [Item<K>],
        envelope: Size,
    ) -> Vec<PlacedHeader<'w, K, P::Content>>
    where
        K: PartialEq,
        P: HeaderProvider<K>,
    {
        if !self.options.enabled || window.is_empty() {
            return Vec::new();
        }
        let sections = scan(window, self.options.open_run_end);
        place(&sections, |key| self.header_box(key, envelope))
    }

    /// Computes the draw commands for an explicit materialized window.
    pub fn draw_overlay_items<K>(
        &self,
        window: &[Item<K>],
        envelope: Size,
    ) -> Vec<DrawCommand<K, P::Content>>
    where
        K: PartialEq + Clone,
        P: HeaderProvider<K>,
    {
        let commands: Vec<_> = self
            .place_window(window, envelope)
            .into_iter()
            .map(|placed| DrawCommand {
                key: placed.section.key.clone(),
                items: placed.section.items,
                header: placed.header,
                placement: placed.placement,
            })
            .collect();
        sh_trace!(
            items = window.len(),
            commands = commands.len(),
            "draw_overlay"
        );
        commands
    }

    /// Computes the draw commands for the host's current materialized window.
    ///
    /// Returns an empty list without a host, when disabled, or when the window is empty.
    pub fn draw_overlay<H>(&self, host: Option<&H>) -> Vec<DrawCommand<H::Key, P::Content>>
    where
        H: ListHost,
        H::Key: PartialEq + Clone,
        P: HeaderProvider<H::Key>,
    {
        let Some(host) = host else {
            return Vec::new();
        };
        if !self.options.enabled {
            return Vec::new();
        }
        let window = materialized_window(host);
        self.draw_overlay_items(&window, host.envelope())
    }

    /// Paints the host's headers through `renderer`. Returns the number of headers painted.
    pub fn paint_overlay<H, R>(&self, host: Option<&H>, renderer: &mut R) -> usize
    where
        H: ListHost,
        H::Key: PartialEq + Clone,
        P: HeaderProvider<H::Key>,
        R: Renderer<P::Content>,
    {
        let commands = self.draw_overlay(host);
        for cmd in &commands {
            renderer.paint_header(&cmd.header, cmd.placement.offset);
        }
        commands.len()
    }

    /// Backdrop bounds for every section of `window` whose key passes `accept`.
    ///
    /// Empty when backdrops are not configured.
    pub fn backdrops_items<K: PartialEq>(
        &self,
        window: &[Item<K>],
        mut key_at: impl FnMut(usize) -> K,
        total: usize,
        envelope: Size,
        mut accept: impl FnMut(&K) -> bool,
    ) -> Vec<Bounds> {
        let Some(backdrop) = self.options.backdrop else {
            return Vec::new();
        };
        if !self.options.enabled {
            return Vec::new();
        }
        scan(window, self.options.open_run_end)
            .iter()
            .filter(|section| accept(section.key))
            .filter_map(|section| {
                section_backdrop(section, window, &mut key_at, total, envelope, &backdrop)
            })
            .collect()
    }

    pub fn backdrops<H>(&self, host: Option<&H>, accept: impl FnMut(&H::Key) -> bool) -> Vec<Bounds>
    where
        H: ListHost,
        H::Key: PartialEq,
    {
        let Some(host) = host else {
            return Vec::new();
        };
        if self.options.backdrop.is_none() || !self.options.enabled {
            return Vec::new();
        }
        let window = materialized_window(host);
        self.backdrops_items(
            &window,
            |p| host.key_at(p),
            host.total_item_count(),
            host.envelope(),
            accept,
        )
    }

    /// Paints backdrops through `renderer`. Returns the number painted.
    pub fn paint_backdrops<H, R>(
        &self,
        host: Option<&H>,
        accept: impl FnMut(&H::Key) -> bool,
        renderer: &mut R,
    ) -> usize
    where
        H: ListHost,
        H::Key: PartialEq,
        P: HeaderProvider<H::Key>,
        R: Renderer<P::Content>,
    {
        let bounds = self.backdrops(host, accept);
        for b in &bounds {
            renderer.paint_backdrop(*b);
        }
        bounds.len()
    }
}
