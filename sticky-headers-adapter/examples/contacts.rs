// Example: an alphabetical contact list scrolled frame by frame with a cached overlay.
use sticky_headers::{
    HeaderBox, HeaderConstraints, HeaderContent, ListHost, OpenRunEnd, Renderer, Size,
    StickyHeaderOptions,
};
use sticky_headers_adapter::{LinearListHost, OverlayController};

struct TextRenderer {
    lines: Vec<String>,
}

impl Renderer<String> for TextRenderer {
    fn paint_header(&mut self, header: &HeaderBox<String>, offset: i32) {
        self.lines
            .push(format!("  [{:>4}] {} ({}px)", offset, header.content, header.height));
    }
}

fn main() {
    let mut names = vec![
        "Alice", "Amir", "Anna", "Bea", "Bruno", "Carla", "Chen", "Cosmo", "Dario", "Dora",
        "Elena", "Emil", "Fatima", "Felix", "Giada", "Gus", "Hana",
    ];
    names.sort_unstable();
    let keys: Vec<char> = names.iter().filter_map(|n| n.chars().next()).collect();

    let mut controller = OverlayController::with_options(
        // The window is overscanned, so the trailing run must end at the last materialized item.
        StickyHeaderOptions::new().with_open_run_end(OpenRunEnd::LastMaterialized),
        |key: &char, _: &HeaderConstraints| HeaderContent::new(key.to_string(), Size::new(120, 32)),
    );

    let mut host = LinearListHost::new(keys, |_| 48, Size::new(360, 240)).with_overscan(1);
    host.layout(|h, p| controller.reserve_top_offset(Some(h), p));

    let mut renderer = TextRenderer { lines: Vec::new() };
    for _ in 0..12 {
        renderer.lines.clear();
        controller.paint(Some(&host), &mut renderer);
        println!(
            "scroll={} window={:?} items={}",
            host.scroll_offset(),
            host.window(),
            host.materialized_item_count()
        );
        for line in &renderer.lines {
            println!("{line}");
        }
        host.scroll_by(37);
    }
    println!("{:?}", controller.stats());
}
