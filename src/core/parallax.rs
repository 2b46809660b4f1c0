use glam::Vec2;

// Parallax tuning shared by the event wiring and the host-side tests.

// Speed added per depth layer; layer 0 moves at half a step.
pub const PARALLAX_SPEED_STEP: f32 = 0.5;
// Full travel range in CSS pixels at the viewport edges.
pub const PARALLAX_RANGE_PX: f32 = 20.0;

/// Normalized pointer position in `[0,1]` per axis. Returns `None` for a
/// degenerate viewport so callers can skip the update instead of writing
/// non-finite offsets.
#[inline]
pub fn pointer_ratio(client: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (client.x / viewport.x).clamp(0.0, 1.0),
        (client.y / viewport.y).clamp(0.0, 1.0),
    ))
}

/// Depth factor for the layer at `index` (document order). Later layers move
/// faster, which reads as being closer to the viewer.
#[inline]
pub fn layer_speed(index: usize) -> f32 {
    (index as f32 + 1.0) * PARALLAX_SPEED_STEP
}

/// Pixel offset for one layer given the normalized pointer position. Zero at
/// the exact viewport center for every layer.
#[inline]
pub fn parallax_offset(ratio: Vec2, index: usize) -> Vec2 {
    (ratio - Vec2::splat(0.5)) * layer_speed(index) * PARALLAX_RANGE_PX
}

/// Full CSS transform value for an offset. Replaces any previous transform;
/// offsets are never composed across events.
#[inline]
pub fn transform_for_offset(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
