/// Returns `true` when the item at `position` opens a new section in the data set.
pub fn starts_section<K: PartialEq>(position: usize, mut key_at: impl FnMut(usize) -> K) -> bool {
    if position == 0 {
        return true;
    }
    key_at(position) != key_at(position - 1)
}

/// Leading space to insert above the item at `position`.
///
/// Items that open a section get the resolved header height for their key; all others get 0.
/// `key_at` must accept any absolute position of the data set, not only materialized ones.
pub fn reserve_top<K: PartialEq>(
    position: usize,
    mut key_at: impl FnMut(usize) -> K,
    header_height: impl FnOnce(&K) -> u32,
) -> u32 {
    if !starts_section(position, &mut key_at) {
        return 0;
    }
    header_height(&key_at(position))
}
