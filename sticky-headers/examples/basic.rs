// Example: place headers for a hand-built materialized window.
use sticky_headers::{
    HeaderConstraints, HeaderContent, Item, ItemBounds, Size, StickyHeaderOptions, StickyHeaders,
};

fn main() {
    let headers = StickyHeaders::with_options(
        StickyHeaderOptions::fixed_height(50),
        |key: &char, _: &HeaderConstraints| HeaderContent::new(*key, Size::new(0, 50)),
    );

    // Rows are 100px tall; B's first row sits below 50px of reserved header space.
    let window = vec![
        Item::new('A', 0, ItemBounds::new(-170, -70)),
        Item::new('A', 1, ItemBounds::new(-70, 30)),
        Item::new('B', 2, ItemBounds::new(80, 180)),
        Item::new('B', 3, ItemBounds::new(180, 280)),
    ];

    for cmd in headers.draw_overlay_items(&window, Size::new(300, 400)) {
        println!(
            "header {} phase={:?} offset={} size={}x{}",
            cmd.header.content,
            cmd.phase(),
            cmd.offset(),
            cmd.header.width,
            cmd.header.height
        );
    }
}
