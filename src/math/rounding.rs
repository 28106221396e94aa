//! Channel arithmetic shared by every operator
//!
//! Real-valued channel results are rounded half-up (towards positive infinity
//! on an exact `.5`) and then clamped into the 8-bit range.

use num_traits::{PrimInt, clamp};

/// Round to the nearest integer, resolving exact halves upwards
///
/// `-0.5` rounds to `0` and `2.5` rounds to `3`, unlike [`f64::round`]
/// which rounds halves away from zero.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Constrain an integer channel value into `[0, 255]`
pub fn clamp_channel<T: PrimInt>(value: T) -> u8 {
    let max = T::from(u8::MAX).unwrap_or_else(T::max_value);
    clamp(value, T::zero(), max).to_u8().unwrap_or(u8::MAX)
}

/// Round a real channel value and clamp it into `[0, 255]`
pub fn quantize_channel(value: f64) -> u8 {
    clamp_channel(round_half_up(value))
}

/// Share of a diffusion error, `round(error * numerator / 16)` in exact integers
pub const fn diffusion_share(error: i32, numerator: i32) -> i32 {
    (numerator * error + 8).div_euclid(16)
}

/// Integer mean of `count` samples summing to `sum`, rounded half-up
///
/// Returns zero for an empty sample.
pub const fn rounded_mean(sum: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (2 * sum + count) / (2 * count)
}
