//! Float helpers for targets without `std` float intrinsics

use embassy_time::{Duration, Instant};
use libm::{fmodf, powf};

pub use core::f32::consts::{PI, TAU};
pub use libm::{cosf, sinf};

/// Floored modulo: the result always lies in `[0, modulus)`.
#[inline]
pub fn wrap(value: f32, modulus: f32) -> f32 {
    if modulus <= 0.0 {
        return 0.0;
    }
    let rem = fmodf(value, modulus);
    if rem < 0.0 { rem + modulus } else { rem }
}

/// Round half up to the nearest integer and clamp into `[min, max]`.
#[inline]
pub fn round_clamped(value: f32, min: u8, max: u8) -> u8 {
    let rounded = libm::floorf(value + 0.5);
    rounded.clamp(f32::from(min), f32::from(max.max(min))) as u8
}

/// `x^exponent` for non-negative `x`
#[inline]
pub fn ease(x: f32, exponent: f32) -> f32 {
    powf(x.max(0.0), exponent)
}

/// Elapsed time between `since` and `now` in fractional minutes.
///
/// A clock that appears to run backwards reads as zero elapsed time.
pub fn elapsed_minutes(since: Instant, now: Instant) -> f32 {
    let elapsed = now
        .checked_duration_since(since)
        .unwrap_or(Duration::from_ticks(0));
    elapsed.as_millis() as f32 / 60_000.0
}

/// Whether at least `interval` has passed since `last` (or `last` is unset)
pub fn interval_elapsed(last: Option<Instant>, now: Instant, interval: Duration) -> bool {
    match last {
        None => true,
        Some(last) => now
            .checked_duration_since(last)
            .is_some_and(|elapsed| elapsed >= interval),
    }
}
