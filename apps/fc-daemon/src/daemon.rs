//! The control loop and its lifecycle.
//!
//! Lifecycle is strictly linear: Starting -> Running -> ShuttingDown ->
//! Terminated. There is no pause/resume and no reconfiguration without a
//! restart. Shutdown is cooperative: the signal handler only sets a flag,
//! and the duty-to-zero write happens on this thread once the flag is
//! observed, so the last actuator write before exit is always zero.

use crate::error::AppResult;
use chrono::{DateTime, Local};
use fc_config::{LOG_FILE, RunConfig};
use fc_control::{IntervalClock, PID_DT, PidController, PidState, map_to_duty};
use fc_store::{LogEntry, TempLogStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lifecycle stage, for observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonState {
    Starting,
    Running,
    ShuttingDown,
    Terminated,
}

impl DaemonState {
    pub fn label(&self) -> &'static str {
        match self {
            DaemonState::Starting => "starting",
            DaemonState::Running => "running",
            DaemonState::ShuttingDown => "shutting down",
            DaemonState::Terminated => "terminated",
        }
    }
}

/// What one tick did, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Temperature reading fed into this tick (may be the -1.0 sentinel).
    pub temperature: f64,
    /// Duty cycle written to the actuator, if the PID interval fired.
    pub duty_written: Option<i64>,
}

/// The assembled daemon: immutable config plus the loop's mutable state.
pub struct Daemon {
    config: RunConfig,
    pid: PidController,
    state: PidState,
    store: TempLogStore,
    log_clock: IntervalClock,
    pid_clock: IntervalClock,
    duty: i64,
}

impl Daemon {
    /// Build the daemon and run the Starting stage: construct the
    /// controller from the resolved config and reset the history file.
    ///
    /// Device presence must already have been checked by the caller; it
    /// happens before config-file resolution in the startup order.
    pub fn start(config: RunConfig) -> AppResult<Self> {
        info!(state = DaemonState::Starting.label(), ?config, "startup");
        let pid = PidController::new(config.kp, config.ki, config.kd, config.target_temp as f64)?;
        let store = TempLogStore::new(LOG_FILE, config.log_interval);
        store.reset()?;
        Ok(Self::assemble(config, pid, store))
    }

    /// As [`Daemon::start`], but with the history file at a caller-chosen
    /// path instead of the fixed well-known one.
    pub fn start_with_log_path(
        config: RunConfig,
        log_path: impl Into<std::path::PathBuf>,
    ) -> AppResult<Self> {
        let pid = PidController::new(config.kp, config.ki, config.kd, config.target_temp as f64)?;
        let store = TempLogStore::new(log_path, config.log_interval);
        store.reset()?;
        Ok(Self::assemble(config, pid, store))
    }

    fn assemble(config: RunConfig, pid: PidController, store: TempLogStore) -> Self {
        let log_clock = IntervalClock::new(config.log_interval);
        let pid_clock = IntervalClock::new(config.pid_interval);
        let duty = config.start_speed;
        Self {
            config,
            pid,
            state: PidState::default(),
            store,
            log_clock,
            pid_clock,
            duty,
        }
    }

    /// The Running stage: tick once per second until the shutdown flag is
    /// observed, then run the ShuttingDown stage.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        info!(state = DaemonState::Running.label(), "control loop entered");
        while !shutdown.load(Ordering::SeqCst) {
            let now = Local::now();
            self.tick(now.timestamp(), now);
            thread::sleep(Duration::from_secs(1));
        }
        self.shut_down();
    }

    /// One iteration of the control loop at time `now`.
    ///
    /// Reads the temperature, appends to the history when the log interval
    /// has elapsed, and recomputes and writes the duty cycle when the PID
    /// interval has elapsed. A sentinel temperature from a failed read
    /// flows into both stages unfiltered.
    pub fn tick(&mut self, now_unix: i64, now_wall: DateTime<Local>) -> Tick {
        let temperature = fc_device::temperature(&self.config.thermal_file, self.config.temp_div);

        if self.log_clock.due(now_unix) {
            let entry = LogEntry::new(now_wall, temperature);
            if let Err(err) = self.store.append(&entry) {
                warn!(%err, "temperature log append failed");
            }
            self.log_clock.mark(now_unix);
        }

        let mut duty_written = None;
        if self.pid_clock.due(now_unix) {
            let (state, signal) = self.pid.update(&self.state, temperature, PID_DT);
            self.state = state;
            self.duty = map_to_duty(signal, self.config.start_speed, self.config.max_speed);
            fc_device::write_raw(&self.config.fan_pwm_file, self.duty);
            duty_written = Some(self.duty);
            self.pid_clock.mark(now_unix);
        }

        if self.config.debug != 0 {
            let rpm = fc_device::fan_speed(&self.config.fan_speed_file);
            debug!(temperature, duty = self.duty, rpm, "tick");
        }

        Tick {
            temperature,
            duty_written,
        }
    }

    /// The ShuttingDown stage: one best-effort duty-to-zero write. The
    /// process exits with success right after.
    pub fn shut_down(&mut self) {
        info!(state = DaemonState::ShuttingDown.label(), "stopping fan");
        fc_device::write_raw(&self.config.fan_pwm_file, 0);
        self.duty = 0;
        info!(state = DaemonState::Terminated.label(), "bye");
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The duty cycle most recently written (or the startup value before
    /// the first PID interval fires).
    pub fn duty(&self) -> i64 {
        self.duty
    }
}
