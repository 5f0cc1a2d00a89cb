use crate::{Bounds, HeaderBox, HeaderConstraints, ItemBounds, Size};

/// Read-only access to the virtualized list that owns the materialized window.
///
/// Indexes passed to `item_at`/`adapter_position_of` are window indexes in visual order
/// (`0..materialized_item_count()`); positions passed to `key_at` are absolute data positions
/// (`0..total_item_count()`).
pub trait ListHost {
    type Key;

    fn materialized_item_count(&self) -> usize;

    fn item_at(&self, index: usize) -> ItemBounds;

    fn adapter_position_of(&self, index: usize) -> usize;

    fn key_at(&self, position: usize) -> Self::Key;

    fn total_item_count(&self) -> usize;

    /// The envelope headers are measured against (the viewport size).
    fn envelope(&self) -> Size;
}

impl<H: ListHost + ?Sized> ListHost for &H {
    type Key = H::Key;

    fn materialized_item_count(&self) -> usize {
        (**self).materialized_item_count()
    }

    fn item_at(&self, index: usize) -> ItemBounds {
        (**self).item_at(index)
    }

    fn adapter_position_of(&self, index: usize) -> usize {
        (**self).adapter_position_of(index)
    }

    fn key_at(&self, position: usize) -> Self::Key {
        (**self).key_at(position)
    }

    fn total_item_count(&self) -> usize {
        (**self).total_item_count()
    }

    fn envelope(&self) -> Size {
        (**self).envelope()
    }
}

/// Header content for a key, plus the size it measures to when unconstrained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderContent<C> {
    pub content: C,
    pub intrinsic: Size,
}

impl<C> HeaderContent<C> {
    pub fn new(content: C, intrinsic: Size) -> Self {
        Self { content, intrinsic }
    }

    /// Resolves this content into a sized header box.
    pub fn into_box(self, constraints: &HeaderConstraints) -> HeaderBox<C> {
        let size = constraints.resolve(self.intrinsic);
        HeaderBox {
            width: size.width,
            height: size.height,
            content: self.content,
        }
    }
}

/// Supplies header content for a section key.
///
/// Implementations must be deterministic for a given key and constraints; reservation and
/// placement call this independently and expect the same size.
pub trait HeaderProvider<K> {
    type Content;

    fn header_for(&self, key: &K, constraints: &HeaderConstraints) -> HeaderContent<Self::Content>;
}

impl<K, C, F> HeaderProvider<K> for F
where
    F: Fn(&K, &HeaderConstraints) -> HeaderContent<C>,
{
    type Content = C;

    fn header_for(&self, key: &K, constraints: &HeaderConstraints) -> HeaderContent<C> {
        self(key, constraints)
    }
}

/// Paints what the overlay computes. The overlay never draws by itself.
pub trait Renderer<C> {
    /// Paints `header` with its top edge at `offset` (draw-over, above item content).
    fn paint_header(&mut self, header: &HeaderBox<C>, offset: i32);

    /// Paints a section backdrop (draw-under, below item content).
    fn paint_backdrop(&mut self, _bounds: Bounds) {}
}
