// Timing for the staggered feature reveal.

// Gap between consecutive reveals.
pub const REVEAL_STAGGER_MS: u32 = 200;

/// Delay before the element at `index` (document order) is revealed,
/// relative to the load signal.
#[inline]
pub fn reveal_delay_ms(index: usize) -> u32 {
    index as u32 * REVEAL_STAGGER_MS
}

/// Delays for a whole collection of `count` elements.
pub fn reveal_schedule(count: usize) -> Vec<u32> {
    (0..count).map(reveal_delay_ms).collect()
}
