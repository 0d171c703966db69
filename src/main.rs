//! gaslift-bhp - Gas-Lift Bottomhole Pressure Calculator
//!
//! Computes bottomhole pressure from wellhead pressure, fluid density (or a
//! field gradient) and well depth, and prints the pressure-vs-depth profile
//! for plotting.
//!
//! # Usage
//!
//! ```bash
//! # Built-in defaults (hydrostatic, 100 psi, 5000 ft, 52 lb/ft³)
//! gaslift-bhp
//!
//! # Field gradient, with the formula explanation
//! gaslift-bhp --method field-gradient --density 0.15 --explain
//!
//! # CSV profile for a chart tool
//! gaslift-bhp --method fixed-factor --density 9.5 --format csv > profile.csv
//! ```
//!
//! # Environment Variables
//!
//! - `GASLIFT_CONFIG`: Path to a calculator config TOML
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

use gaslift_bhp::config::{self, CalculatorConfig};
use gaslift_bhp::report::{describe_inputs, CalculationReport, ProfileFormat};
use gaslift_bhp::types::{InputFloors, PressureMethod, WellInputs};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "gaslift-bhp")]
#[command(about = "Gas Lift - Bottomhole Pressure Calculator")]
#[command(version)]
struct CliArgs {
    /// Calculation method (default from config: hydrostatic)
    #[arg(short, long, value_enum)]
    method: Option<PressureMethod>,

    /// Wellhead pressure (psi)
    #[arg(short = 'p', long, value_name = "PSI", allow_negative_numbers = true)]
    wellhead_pressure: Option<f64>,

    /// Well depth (ft)
    #[arg(short, long, value_name = "FT", allow_negative_numbers = true)]
    depth: Option<f64>,

    /// Fluid density or gradient, in the method's unit:
    /// lb/ft³ (hydrostatic), psi/ft (field-gradient), lb/gal (fixed-factor)
    #[arg(short = 'r', long, value_name = "VALUE", allow_negative_numbers = true)]
    density: Option<f64>,

    /// Number of depth samples in the profile (default from config: 50)
    #[arg(short, long)]
    samples: Option<usize>,

    /// Profile output format
    #[arg(short, long, value_enum, default_value_t = ProfileFormat::Table)]
    format: ProfileFormat,

    /// Print the formula used by the selected method
    #[arg(long)]
    explain: bool,

    /// Read config from this TOML file instead of the standard search order
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

// ============================================================================
// Input Collection
// ============================================================================

/// Merge CLI values over config defaults.
///
/// The density default follows the chosen method since each method reads
/// the parameter in a different unit.
fn collect_inputs(args: &CliArgs, cfg: &CalculatorConfig) -> WellInputs {
    let method = args.method.unwrap_or(cfg.defaults.method);
    let defaults = cfg.defaults.inputs_for(method);

    WellInputs {
        method,
        wellhead_pressure_psi: args.wellhead_pressure.unwrap_or(defaults.wellhead_pressure_psi),
        depth_ft: args.depth.unwrap_or(defaults.depth_ft),
        density_param: args.density.unwrap_or(defaults.density_param),
    }
}

/// Clamp to the configured floors, logging every value that was raised.
fn apply_floors(raw: &WellInputs, floors: &InputFloors) -> WellInputs {
    let clamped = floors.clamp(raw);

    if clamped.wellhead_pressure_psi != raw.wellhead_pressure_psi {
        warn!(
            given = raw.wellhead_pressure_psi,
            used = clamped.wellhead_pressure_psi,
            "Wellhead pressure below minimum, clamped"
        );
    }
    if clamped.depth_ft != raw.depth_ft {
        warn!(given = raw.depth_ft, used = clamped.depth_ft, "Well depth below minimum, clamped");
    }
    if clamped.density_param != raw.density_param {
        warn!(
            given = raw.density_param,
            used = clamped.density_param,
            unit = raw.method.density_unit(),
            "{} below minimum, clamped",
            raw.method.density_name()
        );
    }

    clamped
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Logs on stderr so stdout stays clean for CSV/JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let loaded = match &args.config {
        Some(path) => CalculatorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CalculatorConfig::load(),
    };
    config::init(loaded);
    let cfg = config::get();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.dump_config {
        write!(out, "{}", cfg.to_toml().context("Failed to serialize config")?)?;
        return Ok(());
    }

    let inputs = apply_floors(&collect_inputs(&args, cfg), &cfg.floors);
    let sample_count = args.samples.unwrap_or(cfg.profile.sample_count);
    info!("{}", describe_inputs(&inputs));

    let report = CalculationReport::compute(&inputs, sample_count)
        .context("Bottomhole pressure calculation failed")?;

    match args.format {
        ProfileFormat::Table => {
            writeln!(out, "{}\n", report.summary())?;
            if args.explain {
                writeln!(out, "{}", inputs.method.formula_explanation())?;
            }
        }
        ProfileFormat::Csv | ProfileFormat::Json => {
            info!("{}", report.summary().replace('\n', " "));
            if args.explain {
                info!("{}", inputs.method.formula_explanation());
            }
        }
    }

    report
        .write(args.format, &mut out)
        .context("Failed to write pressure profile")?;
    out.flush()?;

    Ok(())
}
