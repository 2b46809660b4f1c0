// Host-side tests for the reveal schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn three_cards_reveal_at_0_200_400() {
    assert_eq!(reveal_schedule(3), vec![0, 200, 400]);
}

#[test]
fn delay_grows_linearly_with_index() {
    for i in 0..20 {
        assert_eq!(reveal_delay_ms(i), i as u32 * REVEAL_STAGGER_MS);
    }
}

#[test]
fn first_card_reveals_immediately() {
    assert_eq!(reveal_delay_ms(0), 0);
}

#[test]
fn empty_collection_schedules_nothing() {
    assert!(reveal_schedule(0).is_empty());
}

#[test]
fn schedule_is_strictly_increasing() {
    let delays = reveal_schedule(8);
    for pair in delays.windows(2) {
        assert!(pair[1] > pair[0]);
        assert_eq!(pair[1] - pair[0], REVEAL_STAGGER_MS);
    }
}
