use crate::*;

use std::collections::HashMap;
use std::vec::Vec;

use sticky_headers::{
    HeaderConstraints, HeaderContent, HeaderPhase, ListHost, OpenRunEnd, Size,
    StickyHeaderOptions, StickyHeaders,
};

fn letters(runs: &[(char, usize)]) -> Vec<char> {
    runs.iter()
        .flat_map(|&(key, n)| core::iter::repeat_n(key, n))
        .collect()
}

fn letter_header(key: &char, _: &HeaderConstraints) -> HeaderContent<char> {
    HeaderContent::new(*key, Size::new(200, 24))
}

type LetterProvider = fn(&char, &HeaderConstraints) -> HeaderContent<char>;

fn fixed_headers(height: i32, open_run_end: OpenRunEnd) -> StickyHeaders<LetterProvider> {
    StickyHeaders::with_options(
        StickyHeaderOptions::fixed_height(height).with_open_run_end(open_run_end),
        letter_header as LetterProvider,
    )
}

fn host_for(
    keys: Vec<char>,
    headers: &StickyHeaders<LetterProvider>,
    viewport: Size,
) -> LinearListHost<char> {
    let mut host = LinearListHost::new(keys, |_| 40, viewport);
    host.layout(|h, p| headers.reserve_top_offset(Some(h), p));
    host
}

#[test]
fn layout_reserves_space_above_section_starts() {
    let headers = fixed_headers(24, OpenRunEnd::StartItem);
    let host = host_for(
        letters(&[('A', 3), ('B', 2), ('C', 4)]),
        &headers,
        Size::new(300, 100),
    );

    let reserved: Vec<u32> = (0..host.len()).map(|p| host.reserved(p)).collect();
    assert_eq!(reserved, [24, 0, 0, 24, 0, 24, 0, 0, 0]);
    assert_eq!(host.total_size(), 9 * 40 + 3 * 24);
    assert_eq!(host.max_scroll_offset(), 432 - 100);
}

#[test]
fn window_follows_scroll_offset() {
    let headers = fixed_headers(24, OpenRunEnd::StartItem);
    let mut host = host_for(
        letters(&[('A', 3), ('B', 2), ('C', 4)]),
        &headers,
        Size::new(300, 100),
    );

    assert_eq!(host.window(), 0..2);
    host.set_scroll_offset(70);
    assert_eq!(host.window(), 1..4);
    assert_eq!(host.item_at(0).top, -6);
    assert_eq!(host.item_at(2).top, 98);

    host.set_scroll_offset(10_000);
    assert_eq!(host.scroll_offset(), 332);
    assert_eq!(host.window().end, 9);

    let mut wide = host.clone().with_overscan(2);
    wide.set_scroll_offset(70);
    assert_eq!(wide.window(), 0..6);

    let empty = LinearListHost::<char>::new(Vec::new(), |_| 40, Size::new(300, 100));
    assert!(empty.is_empty());
    assert_eq!(empty.materialized_item_count(), 0);
}

#[test]
fn header_docks_then_is_pushed_up() {
    let headers = fixed_headers(24, OpenRunEnd::StartItem);
    let mut host = host_for(
        letters(&[('A', 3), ('B', 2), ('C', 4)]),
        &headers,
        Size::new(300, 100),
    );

    host.set_scroll_offset(70);
    let commands = headers.draw_overlay(Some(&host));
    assert_eq!(commands.len(), 2);
    assert_eq!((commands[0].key, commands[0].phase()), ('A', HeaderPhase::Docked));
    assert_eq!(commands[0].offset(), 0);
    assert_eq!((commands[1].key, commands[1].phase()), ('B', HeaderPhase::Scrolling));
    assert_eq!(commands[1].offset(), 74);

    host.set_scroll_offset(130);
    let commands = headers.draw_overlay(Some(&host));
    assert_eq!((commands[0].key, commands[0].phase()), ('A', HeaderPhase::Overtaken));
    assert_eq!(commands[0].offset(), -10);
    assert_eq!(commands[1].offset(), 14);
    // The outgoing header's bottom edge meets the incoming header's top edge.
    assert_eq!(commands[0].offset() + 24, commands[1].offset());
}

#[test]
fn margins_are_part_of_section_extent() {
    let headers = fixed_headers(24, OpenRunEnd::StartItem);
    let mut host = LinearListHost::new(
        letters(&[('A', 2), ('B', 2)]),
        |_| 40,
        Size::new(300, 200),
    )
    .with_margins(5, 5);
    host.layout(|h, p| headers.reserve_top_offset(Some(h), p));

    // Slots: A0 [0,74) A1 [74,124) B0 [124,198) B1 [198,248).
    host.set_scroll_offset(0);
    let commands = headers.draw_overlay(Some(&host));
    assert_eq!(commands[0].offset(), 0);
    assert_eq!(commands[1].offset(), 124);
    assert_eq!(host.item_at(0).top, 29);
}

#[test]
fn scroll_sweep_keeps_offsets_continuous() {
    let keys = letters(&[('A', 4), ('B', 1), ('C', 3), ('D', 6), ('E', 2), ('F', 5)]);
    let headers = fixed_headers(24, OpenRunEnd::LastMaterialized);
    let mut host = host_for(keys, &headers, Size::new(320, 150));

    let mut previous: HashMap<char, i32> = HashMap::new();
    for offset in 0..=host.max_scroll_offset() {
        host.set_scroll_offset(offset);
        let commands = headers.draw_overlay(Some(&host));
        assert!(!commands.is_empty(), "offset {offset}");

        let pinned = commands
            .iter()
            .filter(|c| c.phase() != HeaderPhase::Scrolling)
            .count();
        assert!(pinned <= 1, "offset {offset}: {pinned} pinned headers");

        let mut current = HashMap::new();
        for cmd in &commands {
            if let Some(&before) = previous.get(&cmd.key) {
                assert!(
                    (cmd.offset() - before).abs() <= 1,
                    "offset {offset}: header {} jumped from {before} to {}",
                    cmd.key,
                    cmd.offset()
                );
            }
            current.insert(cmd.key, cmd.offset());
        }
        previous = current;
    }
}

#[test]
fn controller_matches_uncached_results() {
    let keys = letters(&[('A', 3), ('B', 5), ('C', 2), ('D', 4)]);
    let headers = fixed_headers(30, OpenRunEnd::StartItem);
    let mut host = host_for(keys, &headers, Size::new(240, 120));
    let mut controller = OverlayController::new(headers.clone());

    for offset in (0..=host.max_scroll_offset()).step_by(7) {
        host.set_scroll_offset(offset);
        let expected = headers.draw_overlay(Some(&host));
        assert_eq!(controller.draw(Some(&host)), expected.as_slice());
        assert_eq!(controller.draw(Some(&host)), expected.as_slice());
    }

    let stats = controller.stats();
    assert_eq!(stats.draw_hits, stats.draw_misses);
}

#[test]
fn controller_invalidates_on_changes() {
    let keys = letters(&[('A', 3), ('B', 3)]);
    let headers = fixed_headers(24, OpenRunEnd::StartItem);
    let mut host = host_for(keys, &headers, Size::new(300, 200));
    let mut controller = OverlayController::new(headers);

    controller.draw(Some(&host));
    controller.draw(Some(&host));
    assert_eq!(controller.stats().draw_misses, 1);
    assert_eq!(controller.stats().draw_hits, 1);

    host.scroll_by(3);
    controller.draw(Some(&host));
    assert_eq!(controller.stats().draw_misses, 2);

    controller.invalidate_headers();
    controller.draw(Some(&host));
    assert_eq!(controller.stats().draw_misses, 3);

    let _ = controller.provider_mut();
    controller.draw(Some(&host));
    assert_eq!(controller.stats().draw_misses, 4);

    controller.update_options(|o| o.open_run_end = OpenRunEnd::LastMaterialized);
    let commands = controller.draw(Some(&host)).len();
    assert_eq!(commands, 2);
    assert_eq!(controller.stats().draw_misses, 5);

    host.set_viewport(Size::new(280, 200));
    let commands = controller.draw(Some(&host));
    assert_eq!(commands[0].header.width, 280);
    assert_eq!(controller.stats().draw_misses, 6);

    assert!(controller.draw::<LinearListHost<char>>(None).is_empty());
}

#[test]
fn controller_caches_reserved_heights_per_key() {
    let keys = letters(&[('A', 3), ('B', 3), ('C', 3)]);
    let headers = fixed_headers(24, OpenRunEnd::StartItem);
    let mut controller = OverlayController::new(headers.clone());

    let mut host = LinearListHost::new(keys, |_| 40, Size::new(300, 100));
    host.layout(|h, p| controller.reserve_top_offset(Some(h), p));
    let cached: Vec<u32> = (0..host.len()).map(|p| host.reserved(p)).collect();

    let plain = host_for(
        letters(&[('A', 3), ('B', 3), ('C', 3)]),
        &headers,
        Size::new(300, 100),
    );
    let uncached: Vec<u32> = (0..plain.len()).map(|p| plain.reserved(p)).collect();
    assert_eq!(cached, uncached);
    assert_eq!(controller.stats().height_misses, 3);

    host.layout(|h, p| controller.reserve_top_offset(Some(h), p));
    assert_eq!(controller.stats().height_misses, 3);
    assert_eq!(controller.stats().height_hits, 3);

    host.set_viewport(Size::new(300, 120));
    host.layout(|h, p| controller.reserve_top_offset(Some(h), p));
    assert_eq!(controller.stats().height_misses, 6);

    controller.reset_stats();
    assert_eq!(controller.stats(), CacheStats::default());
}

#[test]
fn disabled_controller_reserves_nothing() {
    let mut controller = OverlayController::with_options(
        StickyHeaderOptions::fixed_height(24).with_enabled(false),
        letter_header as LetterProvider,
    );
    let keys = letters(&[('A', 2), ('B', 2)]);
    let mut host = LinearListHost::new(keys, |_| 40, Size::new(300, 100));
    host.layout(|h, p| controller.reserve_top_offset(Some(h), p));
    assert_eq!(host.total_size(), 160);
    assert!(controller.draw(Some(&host)).is_empty());
    assert_eq!(controller.reserve_top_offset::<LinearListHost<char>>(None, 0), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn controller_reserve_out_of_range_panics() {
    let mut controller = OverlayController::new(fixed_headers(24, OpenRunEnd::StartItem));
    let host = LinearListHost::new(letters(&[('A', 2)]), |_| 40, Size::new(300, 100));
    controller.reserve_top_offset(Some(&host), 2);
}

#[test]
fn start_item_policy_pushes_up_overscanned_trailing_run() {
    let headers = fixed_headers(24, OpenRunEnd::StartItem);
    let keys = letters(&[('A', 2), ('B', 4)]);
    let mut host = host_for(keys.clone(), &headers, Size::new(300, 100)).with_overscan(1);
    host.set_scroll_offset(150);
    // A's last item stays materialized above the viewport.
    assert_eq!(host.window(), 1..6);

    let commands = headers.draw_overlay(Some(&host));
    assert_eq!(commands.len(), 2);
    let b = &commands[1];
    assert_eq!((b.key, b.items.clone()), ('B', 1..5));
    // B provisionally ends at its first item, so its header slides up while B continues below.
    assert_eq!(b.phase(), HeaderPhase::Overtaken);
    assert_eq!(b.offset(), -6);
    assert_eq!(b.offset() + 24, host.item_at(1).bottom);
    let run_last_bottom = host.item_at(b.items.end - 1).bottom;
    assert_eq!(run_last_bottom, 138);
    assert_ne!(b.offset() + 24, run_last_bottom);

    // Once A leaves the window, B is the first run and loses its header.
    let mut tight = host_for(keys, &headers, Size::new(300, 100));
    tight.set_scroll_offset(150);
    assert_eq!(tight.window(), 2..6);
    assert!(headers.draw_overlay(Some(&tight)).is_empty());

    let closing = fixed_headers(24, OpenRunEnd::LastMaterialized);
    let commands = closing.draw_overlay(Some(&host));
    assert_eq!((commands[1].key, commands[1].phase()), ('B', HeaderPhase::Docked));
    assert_eq!(commands[1].offset(), 0);
}

#[test]
fn last_materialized_keeps_overscanned_sweep_consistent() {
    let headers = fixed_headers(24, OpenRunEnd::LastMaterialized);
    let keys = letters(&[('A', 4), ('B', 3), ('C', 3), ('D', 6)]);
    let mut host = host_for(keys, &headers, Size::new(300, 150)).with_overscan(1);

    for scroll in 0..=host.max_scroll_offset() {
        host.set_scroll_offset(scroll);
        for command in headers.draw_overlay(Some(&host)) {
            if command.phase() == HeaderPhase::Overtaken {
                let last = host.item_at(command.items.end - 1);
                assert_eq!(command.offset() + 24, last.bottom, "scroll={scroll}");
            }
        }
    }
}
