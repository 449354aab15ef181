use clap::Parser;
use fc_config::{CONFIG_FILE, CliOverrides, RunConfig};
use fc_daemon::{AppResult, Daemon};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// PID fan-speed controller for sysfs thermal zones and hwmon PWM fans.
#[derive(Parser)]
#[command(name = "fancontrol")]
struct Cli {
    /// Temperature sysfs file
    #[arg(short = 'T', value_name = "sysfs")]
    thermal_file: Option<PathBuf>,

    /// Fan PWM sysfs file
    #[arg(short = 'F', value_name = "sysfs")]
    fan_pwm_file: Option<PathBuf>,

    /// Fan speed (tachometer) sysfs file
    #[arg(short = 'S', value_name = "sysfs")]
    fan_speed_file: Option<PathBuf>,

    /// Initial speed for fan startup
    #[arg(short = 's', value_name = "speed")]
    start_speed: Option<i64>,

    /// Target temperature for PID control, in degrees Celsius
    #[arg(short = 't', value_name = "temperature")]
    target_temp: Option<i64>,

    /// Fan maximum speed
    #[arg(short = 'm', value_name = "speed")]
    max_speed: Option<i64>,

    /// Temperature divisor (raw sensor value to degrees)
    #[arg(short = 'd', value_name = "div")]
    temp_div: Option<i64>,

    /// Debug level; nonzero logs every tick
    #[arg(short = 'D', value_name = "level")]
    debug: Option<i64>,

    /// Verbose (accepted for compatibility, no effect)
    #[arg(short = 'v')]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            thermal_file: self.thermal_file.clone(),
            fan_pwm_file: self.fan_pwm_file.clone(),
            fan_speed_file: self.fan_speed_file.clone(),
            start_speed: self.start_speed,
            target_temp: self.target_temp,
            max_speed: self.max_speed,
            temp_div: self.temp_div,
            debug: self.debug,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fancontrol: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    // -v is accepted for interface compatibility; verbosity is driven by
    // the tracing env filter instead
    let _ = cli.verbose;

    let overrides = cli.overrides();

    // The device presence check precedes the config-file overlay: only
    // defaults and flags determine the probed paths. Historical startup
    // order, relied on by service scripts that pass paths via flags.
    let mut probe = RunConfig::default();
    overrides.apply(&mut probe);
    fc_device::devices_present(&probe.thermal_file, &probe.fan_pwm_file)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let config = fc_config::resolve(Path::new(CONFIG_FILE), &overrides);
    let mut daemon = Daemon::start(config)?;
    daemon.run(&shutdown);
    Ok(())
}
