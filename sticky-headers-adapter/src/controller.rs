use alloc::vec::Vec;
use core::fmt;

use sticky_headers::{
    DrawCommand, HeaderProvider, Item, KeySizeMap, ListHost, Renderer, SectionKey, Size,
    StickyHeaderOptions, StickyHeaders, materialized_window, reserve_top,
};

/// Cache hit/miss counters of an [`OverlayController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    pub draw_hits: u64,
    pub draw_misses: u64,
    pub height_hits: u64,
    pub height_misses: u64,
}

struct CachedPass<K, C> {
    window: Vec<Item<K>>,
    envelope: Size,
    revision: u64,
    commands: Vec<DrawCommand<K, C>>,
}

impl<K: PartialEq, C> CachedPass<K, C> {
    fn is_valid_for(&self, window: &[Item<K>], envelope: Size, revision: u64) -> bool {
        self.revision == revision && self.envelope == envelope && self.window == window
    }
}

/// Wraps [`StickyHeaders`] with memoization across frames.
///
/// Results are identical to calling `StickyHeaders` directly. A cached draw pass is reused only
/// while the materialized window (keys, positions and bounds), the envelope and the header
/// revision are unchanged; reserved heights are reused per key while the envelope and revision
/// are unchanged.
///
/// Call [`OverlayController::invalidate_headers`] whenever header content or size changes
/// outside of `provider_mut`.
pub struct OverlayController<K, P: HeaderProvider<K>> {
    headers: StickyHeaders<P>,
    revision: u64,
    pass: Option<CachedPass<K, P::Content>>,
    heights: KeySizeMap<K>,
    heights_for: Option<(Size, u64)>,
    stats: CacheStats,
}

impl<K, P> OverlayController<K, P>
where
    K: SectionKey + Clone,
    P: HeaderProvider<K>,
{
    pub fn new(headers: StickyHeaders<P>) -> Self {
        Self {
            headers,
            revision: 0,
            pass: None,
            heights: KeySizeMap::<K>::new(),
            heights_for: None,
            stats: CacheStats::default(),
        }
    }

    pub fn with_options(options: StickyHeaderOptions, provider: P) -> Self {
        Self::new(StickyHeaders::with_options(options, provider))
    }

    pub fn headers(&self) -> &StickyHeaders<P> {
        &self.headers
    }

    pub fn into_headers(self) -> StickyHeaders<P> {
        self.headers
    }

    pub fn options(&self) -> &StickyHeaderOptions {
        self.headers.options()
    }

    pub fn set_options(&mut self, options: StickyHeaderOptions) {
        self.headers.set_options(options);
        self.invalidate();
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut StickyHeaderOptions)) {
        self.headers.update_options(f);
        self.invalidate();
    }

    pub fn provider(&self) -> &P {
        self.headers.provider()
    }

    /// Mutable access to the provider. Treated as a header change.
    pub fn provider_mut(&mut self) -> &mut P {
        self.invalidate_headers();
        self.headers.provider_mut()
    }

    /// Marks header content and sizes as changed.
    pub fn invalidate_headers(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        sh_trace!(revision = self.revision, "OverlayController::invalidate_headers");
    }

    /// Drops every cached result.
    pub fn invalidate(&mut self) {
        self.invalidate_headers();
        self.pass = None;
        self.heights.clear();
        self.heights_for = None;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    fn cached_height(&mut self, key: &K, envelope: Size) -> u32 {
        let stamp = (envelope, self.revision);
        if self.heights_for != Some(stamp) {
            self.heights.clear();
            self.heights_for = Some(stamp);
        }
        if let Some(&height) = self.heights.get(key) {
            self.stats.height_hits += 1;
            return height;
        }
        self.stats.height_misses += 1;
        let height = self.headers.header_height(key, envelope);
        self.heights.insert(key.clone(), height);
        height
    }

    /// Cached equivalent of [`StickyHeaders::reserve_top_offset`].
    ///
    /// # Panics
    ///
    /// Panics if `position >= host.total_item_count()`.
    pub fn reserve_top_offset<H>(&mut self, host: Option<&H>, position: usize) -> u32
    where
        H: ListHost<Key = K>,
    {
        let Some(host) = host else {
            return 0;
        };
        if !self.headers.enabled() {
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
            |key| self.cached_height(key, envelope),
        )
    }

    /// Cached equivalent of [`StickyHeaders::draw_overlay_items`].
    pub fn draw_items(
        &mut self,
        window: &[Item<K>],
        envelope: Size,
    ) -> &[DrawCommand<K, P::Content>] {
        let revision = self.revision;
        let hit = self
            .pass
            .as_ref()
            .is_some_and(|pass| pass.is_valid_for(window, envelope, revision));
        if hit {
            self.stats.draw_hits += 1;
        } else {
            self.stats.draw_misses += 1;
            let commands = self.headers.draw_overlay_items(window, envelope);
            sh_trace!(
                items = window.len(),
                commands = commands.len(),
                "OverlayController: draw pass recomputed"
            );
            self.pass = Some(CachedPass {
                window: window.to_vec(),
                envelope,
                revision,
                commands,
            });
        }
        self.pass
            .as_ref()
            .map(|pass| pass.commands.as_slice())
            .unwrap_or(&[])
    }

    /// Cached equivalent of [`StickyHeaders::draw_overlay`].
    pub fn draw<H>(&mut self, host: Option<&H>) -> &[DrawCommand<K, P::Content>]
    where
        H: ListHost<Key = K>,
    {
        let Some(host) = host else {
            return &[];
        };
        let window = materialized_window(host);
        self.draw_items(&window, host.envelope())
    }

    /// Paints the host's headers through `renderer`. Returns the number of headers painted.
    pub fn paint<H, R>(&mut self, host: Option<&H>, renderer: &mut R) -> usize
    where
        H: ListHost<Key = K>,
        R: Renderer<P::Content>,
    {
        let commands = self.draw(host);
        for cmd in commands {
            renderer.paint_header(&cmd.header, cmd.placement.offset);
        }
        commands.len()
    }
}

impl<K, P> fmt::Debug for OverlayController<K, P>
where
    P: HeaderProvider<K> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayController")
            .field("headers", &self.headers)
            .field("revision", &self.revision)
            .field("cached_pass", &self.pass.is_some())
            .field("cached_heights", &self.heights.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
