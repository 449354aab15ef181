//! PID controller with integral clamping and output clamping.
//!
//! The controller runs with a fixed `dt` of 1.0 per invocation regardless
//! of the actual wall-clock cadence (it is invoked once per `pid_interval`,
//! not once per second). This decouples the PID math from the sampling
//! cadence; the shipped gain defaults are tuned against it, so changing it
//! would change observable duty-cycle behavior.

use fc_core::{FcResult, clamp_percent, ensure_finite};
use serde::{Deserialize, Serialize};

/// Fixed timestep fed to the controller on every invocation.
pub const PID_DT: f64 = 1.0;

/// PID controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidController {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
    /// Setpoint: the target temperature in degrees Celsius.
    pub setpoint: f64,
}

impl PidController {
    /// Create a new PID controller.
    ///
    /// # Errors
    ///
    /// Returns error if any gain or the setpoint is non-finite.
    pub fn new(kp: f64, ki: f64, kd: f64, setpoint: f64) -> FcResult<Self> {
        ensure_finite(kp, "kp")?;
        ensure_finite(ki, "ki")?;
        ensure_finite(kd, "kd")?;
        ensure_finite(setpoint, "setpoint")?;
        Ok(Self { kp, ki, kd, setpoint })
    }

    /// Compute the control signal for a temperature reading.
    ///
    /// The error convention is `measured - setpoint`: positive when over
    /// target, pushing the fan faster. The integral accumulator is clamped
    /// to [0, 100], which both bounds windup and prevents a negative
    /// integral contribution. The returned signal is clamped to [0, 100]
    /// and interpreted as a percentage.
    ///
    /// # Returns
    ///
    /// Updated state and control signal.
    pub fn update(&self, state: &PidState, measured: f64, dt: f64) -> (PidState, f64) {
        let error = measured - self.setpoint;

        let integral = (state.integral + error * dt).clamp(0.0, 100.0);

        let derivative = (error - state.prev_error) / dt;

        let output = self.kp * error + self.ki * integral + self.kd * derivative;
        let signal = clamp_percent(output);

        let new_state = PidState {
            integral,
            prev_error: error,
        };
        (new_state, signal)
    }
}

/// PID controller state.
///
/// Created once at process start and carried across the whole process
/// lifetime; never reset between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidState {
    /// Integral accumulator, clamped to [0, 100].
    pub integral: f64,
    /// Error from the previous invocation (degrees Celsius).
    pub prev_error: f64,
}

impl Default for PidState {
    fn default() -> Self {
        Self {
            integral: 0.0,
            prev_error: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stock_controller() -> PidController {
        PidController::new(5.0, 1.0, 0.01, 55.0).unwrap()
    }

    #[test]
    fn below_setpoint_yields_zero_signal() {
        let pid = stock_controller();
        let (_, signal) = pid.update(&PidState::default(), 50.0, PID_DT);
        assert_eq!(signal, 0.0);
    }

    #[test]
    fn at_setpoint_yields_zero_signal() {
        let pid = stock_controller();
        let (_, signal) = pid.update(&PidState::default(), 55.0, PID_DT);
        assert_eq!(signal, 0.0);
    }

    #[test]
    fn over_setpoint_yields_positive_signal() {
        let pid = stock_controller();
        let (state, signal) = pid.update(&PidState::default(), 60.0, PID_DT);
        assert!(signal > 0.0);
        assert!(signal <= 100.0);
        assert_eq!(state.prev_error, 5.0);
    }

    #[test]
    fn persistent_error_accumulates_integral() {
        let pid = stock_controller();
        let mut state = PidState::default();
        for _ in 0..5 {
            let (new_state, _) = pid.update(&state, 60.0, PID_DT);
            state = new_state;
        }
        assert_eq!(state.integral, 25.0);
    }

    #[test]
    fn integral_never_goes_negative() {
        let pid = stock_controller();
        let mut state = PidState::default();
        for _ in 0..10 {
            let (new_state, _) = pid.update(&state, 30.0, PID_DT);
            state = new_state;
        }
        assert_eq!(state.integral, 0.0);
    }

    #[test]
    fn integral_clamps_at_one_hundred() {
        let pid = stock_controller();
        let mut state = PidState::default();
        for _ in 0..100 {
            let (new_state, _) = pid.update(&state, 120.0, PID_DT);
            state = new_state;
        }
        assert_eq!(state.integral, 100.0);
    }

    #[test]
    fn state_carries_across_invocations() {
        let pid = stock_controller();
        let (state, first) = pid.update(&PidState::default(), 60.0, PID_DT);
        let (_, second) = pid.update(&state, 60.0, PID_DT);
        // Same reading, larger integral: the signal must grow
        assert!(second > first);
    }

    #[test]
    fn sentinel_reading_flows_through() {
        // A failed sensor read feeds -1.0 into the controller as if real.
        // Far below setpoint, so the signal collapses to zero.
        let pid = stock_controller();
        let (state, signal) = pid.update(&PidState::default(), -1.0, PID_DT);
        assert_eq!(signal, 0.0);
        assert_eq!(state.prev_error, -56.0);
    }

    #[test]
    fn non_finite_params_rejected() {
        assert!(PidController::new(f64::NAN, 1.0, 0.01, 55.0).is_err());
        assert!(PidController::new(5.0, f64::INFINITY, 0.01, 55.0).is_err());
        assert!(PidController::new(5.0, 1.0, 0.01, f64::NAN).is_err());
    }

    proptest! {
        #[test]
        fn integral_stays_in_bounds(
            kp in -20.0_f64..20.0,
            ki in -20.0_f64..20.0,
            kd in -1.0_f64..1.0,
            setpoint in 0.0_f64..120.0,
            readings in prop::collection::vec(-50.0_f64..150.0, 1..200),
        ) {
            let pid = PidController::new(kp, ki, kd, setpoint).unwrap();
            let mut state = PidState::default();
            for reading in readings {
                let (new_state, signal) = pid.update(&state, reading, PID_DT);
                prop_assert!((0.0..=100.0).contains(&new_state.integral));
                prop_assert!((0.0..=100.0).contains(&signal));
                state = new_state;
            }
        }
    }
}
