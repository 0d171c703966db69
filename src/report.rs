//! Result formatting for front ends
//!
//! Turns a computed bottomhole pressure and profile into the text a user
//! reads (two-decimal psi summary, formula explanation) and the tables a
//! chart renderer consumes (aligned text, CSV, JSON).

use crate::physics_engine::{self, PressureModelError};
use crate::types::{PressureProfile, WellInputs};
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Column headers shared by the text and CSV profile tables.
pub const DEPTH_COLUMN: &str = "Depth (ft)";
pub const PRESSURE_COLUMN: &str = "Pressure (psi)";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output layout for a pressure profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ProfileFormat {
    /// Aligned columns for a terminal
    #[default]
    Table,
    /// `Depth (ft),Pressure (psi)` rows for spreadsheet/chart tools
    Csv,
    /// Full calculation report as JSON
    Json,
}

/// Inputs, scalar result and profile of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub inputs: WellInputs,
    pub bottomhole_pressure_psi: f64,
    pub profile: PressureProfile,
}

impl CalculationReport {
    /// Run the pressure model and collect everything a front end shows.
    pub fn compute(inputs: &WellInputs, sample_count: usize) -> Result<Self, PressureModelError> {
        let (bottomhole_pressure_psi, profile) = physics_engine::compute_all(inputs, sample_count)?;
        Ok(Self {
            inputs: *inputs,
            bottomhole_pressure_psi,
            profile,
        })
    }

    /// `Result (...)` heading followed by the bottomhole pressure line.
    pub fn summary(&self) -> String {
        format!(
            "{}:\nBottomhole Pressure: {}",
            self.inputs.method.result_heading(),
            format_psi(self.bottomhole_pressure_psi)
        )
    }

    /// Write the report in `format`.
    ///
    /// Table and CSV carry the profile only; JSON carries the whole report.
    pub fn write<W: Write>(&self, format: ProfileFormat, writer: &mut W) -> Result<(), ReportError> {
        match format {
            ProfileFormat::Table => write_table(&self.profile, writer),
            ProfileFormat::Csv => write_csv(&self.profile, writer),
            ProfileFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }
}

/// Pressure with two decimals and unit, e.g. `850.00 psi`.
pub fn format_psi(value: f64) -> String {
    format!("{value:.2} psi")
}

/// One-line description of the inputs that produced a result.
pub fn describe_inputs(inputs: &WellInputs) -> String {
    format!(
        "{}: wellhead {}, depth {:.2} ft, {} {} {}",
        inputs.method.label(),
        format_psi(inputs.wellhead_pressure_psi),
        inputs.depth_ft,
        inputs.method.density_name(),
        inputs.density_param,
        inputs.method.density_unit()
    )
}

/// Profile as CSV with a header row.
pub fn write_csv<W: Write>(profile: &PressureProfile, writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "{DEPTH_COLUMN},{PRESSURE_COLUMN}")?;
    for s in profile {
        writeln!(writer, "{},{}", s.depth_ft, s.pressure_psi)?;
    }
    Ok(())
}

/// Profile as right-aligned columns with two decimals.
pub fn write_table<W: Write>(profile: &PressureProfile, writer: &mut W) -> Result<(), ReportError> {
    writeln!(writer, "{DEPTH_COLUMN:>14}  {PRESSURE_COLUMN:>16}")?;
    for s in profile {
        writeln!(writer, "{:>14.2}  {:>16.2}", s.depth_ft, s.pressure_psi)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PressureMethod;

    fn field_report() -> CalculationReport {
        CalculationReport::compute(&WellInputs::field_gradient(100.0, 5000.0, 0.15), 50).unwrap()
    }

    #[test]
    fn test_format_psi_two_decimals() {
        assert_eq!(format_psi(850.0), "850.00 psi");
        assert_eq!(format_psi(58191.944_444), "58191.94 psi");
    }

    #[test]
    fn test_summary_uses_method_heading() {
        let summary = field_report().summary();
        assert_eq!(
            summary,
            "Result (Field Gradient Method):\nBottomhole Pressure: 850.00 psi"
        );
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_sample() {
        let report = field_report();
        let mut buf = Vec::new();
        report.write(ProfileFormat::Csv, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], "Depth (ft),Pressure (psi)");
        assert_eq!(lines[1], "0,100");
        assert!(lines[50].starts_with("5000,"));
    }

    #[test]
    fn test_table_rows_are_two_decimal() {
        let report = field_report();
        let mut buf = Vec::new();
        report.write(ProfileFormat::Table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 51);
        assert!(text.lines().last().unwrap().trim_end().ends_with("850.00"));
    }

    #[test]
    fn test_json_contains_inputs_and_profile() {
        let report = field_report();
        let mut buf = Vec::new();
        report.write(ProfileFormat::Json, &mut buf).unwrap();
        let parsed: CalculationReport = serde_json::from_slice(&buf).unwrap();

        assert_eq!(parsed.inputs.method, PressureMethod::FieldGradient);
        assert_eq!(parsed.profile.len(), 50);
        assert!((parsed.bottomhole_pressure_psi - report.bottomhole_pressure_psi).abs() < 1e-9);
    }

    #[test]
    fn test_describe_inputs_mentions_unit() {
        let text = describe_inputs(&WellInputs::fixed_factor(100.0, 5000.0, 9.5));
        assert!(text.starts_with("Fixed Factor (lb/gal)"));
        assert!(text.ends_with("9.5 lb/gal"));
    }
}
