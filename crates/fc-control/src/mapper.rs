//! Control-signal to duty-cycle mapping.

use fc_core::round_half_up;

/// Map a control signal (percentage in [0, 100]) to an integer duty cycle.
///
/// A signal at or below zero stops the fan outright: there is no
/// minimum-speed floor, by design. Any positive signal maps linearly onto
/// `[min_speed, max_speed]`, rounded half-up, so the fan starts at a speed
/// that can physically spin it. The result is bounded to `[0, max_speed]`
/// as a final safety bound, ceiling first so that a degenerate negative
/// `max_speed` (reachable through the config's atoi fallback) still
/// yields a stopped fan rather than a negative duty.
pub fn map_to_duty(signal: f64, min_speed: i64, max_speed: i64) -> i64 {
    if signal <= 0.0 {
        return 0;
    }
    let fraction = signal / 100.0;
    let duty = round_half_up(min_speed as f64 + fraction * (max_speed - min_speed) as f64);
    duty.min(max_speed).max(0)
}
