//! Dartboard placement for accuracy records.
//!
//! Each on-board ring gets an equal slice of the unit radius, so zone
//! boundaries line up with ring boundaries regardless of how wide the
//! percentage band behind them is.

use std::f64::consts::TAU;

use super::zone::{
    BULLSEYE_FLOOR, PERFECT, RING1_CEILING, RING1_FLOOR, RING2_FLOOR, RING3_FLOOR, RING4_FLOOR,
};

const RING_WIDTH: f64 = 1.0 / 6.0;

/// Where a bust starts, strictly outside the board edge.
pub const BUST_FLOOR: f64 = 1.05;
/// Outermost placement; zero-limit busts land here.
pub const MAX_POSITION: f64 = 1.3;
/// Percentage points of overspend that move a bust from floor to edge.
const BUST_SPREAD: f64 = 100.0;

/// Underspend bands as `(upper percentage, lower percentage)`, innermost first.
const UNDERSPEND_BANDS: [(f64, f64); 6] = [
    (PERFECT, BULLSEYE_FLOOR),
    (BULLSEYE_FLOOR, RING1_FLOOR),
    (RING1_FLOOR, RING2_FLOOR),
    (RING2_FLOOR, RING3_FLOOR),
    (RING3_FLOOR, RING4_FLOOR),
    (RING4_FLOOR, 0.0),
];

/// Maps a percentage to a radial distance: 100% is the centre, 0% is the
/// board edge (1.0), and anything over 105% lands in `(1.05, 1.3]`.
pub fn target_position(percentage: f64) -> f64 {
    if percentage > RING1_CEILING {
        let overshoot = (percentage - RING1_CEILING) / BUST_SPREAD;
        return (BUST_FLOOR + overshoot * (MAX_POSITION - BUST_FLOOR)).min(MAX_POSITION);
    }
    if percentage > PERFECT {
        let progress = (percentage - PERFECT) / (RING1_CEILING - PERFECT);
        return RING_WIDTH + progress * RING_WIDTH;
    }
    let percentage = percentage.max(0.0);
    for (ring, (upper, lower)) in UNDERSPEND_BANDS.iter().enumerate() {
        if percentage >= *lower {
            let progress = (upper - percentage) / (upper - lower);
            return (ring as f64 + progress) * RING_WIDTH;
        }
    }
    1.0
}

/// Deterministic marker angle in `[0, 2π)` derived from the category name
/// with 32-bit FNV-1a.
pub fn hit_angle(category: &str) -> f64 {
    let fraction = f64::from(fnv1a(category.as_bytes())) / (f64::from(u32::MAX) + 1.0);
    fraction * TAU
}

fn fnv1a(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(PRIME)
    })
}
