//! Support resolution: which platform, if any, can the player land on.

use crate::core::level::Platform;

/// Find the elevation of the surface supporting a player whose feet would sit
/// at `candidate_y` this tick.
///
/// A platform qualifies when its horizontal span strictly overlaps
/// `[left, right)` and its surface lies within `tolerance` of `candidate_y`
/// (inclusive on both ends). When several qualify — overlapping platforms are
/// legal geometry — the highest surface wins and the player snaps to it.
///
/// Returns `None` when nothing qualifies. "No support" and "support at
/// elevation 0" are distinct outcomes; the baseline ground must not be
/// reported for a player with no horizontal overlap.
pub fn find_support(
    platforms: &[Platform],
    left: f32,
    right: f32,
    candidate_y: f32,
    tolerance: f32,
) -> Option<f32> {
    platforms
        .iter()
        .filter(|p| right > p.left && left < p.right())
        .filter(|p| (p.bottom - candidate_y).abs() <= tolerance)
        .map(|p| p.bottom)
        .max_by(f32::total_cmp)
}
