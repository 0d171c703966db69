//! Bottomhole pressure models for gas-lift wells
//!
//! Pressure at depth is wellhead pressure plus the contribution of the
//! fluid column above it:
//! - Hydrostatic: density (lb/ft³) with gravity and the lb/ft² → psi factor
//! - Field gradient: empirical psi/ft gradient
//! - Fixed factor: density (lb/gal) with a fixed 0.433 psi/ft factor

use crate::types::{PressureMethod, PressureProfile, ProfileSample, WellInputs};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Gravitational acceleration (ft/s²)
pub const GRAVITY_FT_S2: f64 = 32.174;

/// Square inches per square foot (lb/ft² → psi)
pub const LBFT2_PER_PSI: f64 = 144.0;

/// psi/ft per lb/gal used by the fixed-factor model
pub const FIXED_FACTOR_PSI_FT_PER_PPG: f64 = 0.433;

/// Number of depth samples in a profile unless the caller asks otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Upper bound on profile resolution; anything above is a typo, not a chart.
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PressureModelError {
    #[error("Invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl PressureModelError {
    fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        PressureModelError::InvalidParameter { name, value, reason }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check that `inputs` lie in the domain where the models are total.
///
/// Wellhead pressure and depth must be finite and non-negative. The
/// density/gradient must be finite and positive, except for the fixed-factor
/// model whose input floor is zero. The pressure at total depth must also be
/// finite; inputs near `f64::MAX` overflow and are rejected.
pub fn validate_inputs(inputs: &WellInputs) -> Result<(), PressureModelError> {
    if !inputs.wellhead_pressure_psi.is_finite() {
        return Err(PressureModelError::invalid(
            "wellhead pressure",
            inputs.wellhead_pressure_psi,
            "must be finite",
        ));
    }
    if inputs.wellhead_pressure_psi < 0.0 {
        return Err(PressureModelError::invalid(
            "wellhead pressure",
            inputs.wellhead_pressure_psi,
            "must be >= 0 psi",
        ));
    }

    if !inputs.depth_ft.is_finite() {
        return Err(PressureModelError::invalid("well depth", inputs.depth_ft, "must be finite"));
    }
    if inputs.depth_ft < 0.0 {
        return Err(PressureModelError::invalid("well depth", inputs.depth_ft, "must be >= 0 ft"));
    }

    let name = inputs.method.density_name();
    if !inputs.density_param.is_finite() {
        return Err(PressureModelError::invalid(name, inputs.density_param, "must be finite"));
    }
    match inputs.method {
        PressureMethod::Hydrostatic | PressureMethod::FieldGradient => {
            if inputs.density_param <= 0.0 {
                return Err(PressureModelError::invalid(name, inputs.density_param, "must be > 0"));
            }
        }
        PressureMethod::FixedFactor => {
            if inputs.density_param < 0.0 {
                return Err(PressureModelError::invalid(name, inputs.density_param, "must be >= 0"));
            }
        }
    }

    // Pressure is monotonic in depth, so a finite bottom bounds every sample above it
    if !pressure_at_depth(inputs, inputs.depth_ft).is_finite() {
        return Err(PressureModelError::invalid(
            "well depth",
            inputs.depth_ft,
            "bottomhole pressure overflows",
        ));
    }

    Ok(())
}

// ============================================================================
// Pressure Calculations
// ============================================================================

/// Pressure (psi) at `depth_ft` for the method and fluid in `inputs`.
///
/// `inputs.depth_ft` is ignored; the caller supplies the depth. No
/// validation is done here.
///
/// Formulas:
/// - Hydrostatic: P = P_top + (ρ × 32.174 × h) / 144
/// - Field gradient: P = P_top + G × h
/// - Fixed factor: P = P_top + 0.433 × ρ × h
pub fn pressure_at_depth(inputs: &WellInputs, depth_ft: f64) -> f64 {
    let p_top = inputs.wellhead_pressure_psi;
    let d = inputs.density_param;

    match inputs.method {
        PressureMethod::Hydrostatic => p_top + (d * GRAVITY_FT_S2 * depth_ft) / LBFT2_PER_PSI,
        PressureMethod::FieldGradient => p_top + d * depth_ft,
        PressureMethod::FixedFactor => p_top + FIXED_FACTOR_PSI_FT_PER_PPG * d * depth_ft,
    }
}

/// Calculate bottomhole pressure (psi) at the well's total depth.
pub fn compute_bottomhole_pressure(inputs: &WellInputs) -> Result<f64, PressureModelError> {
    validate_inputs(inputs)?;
    Ok(pressure_at_depth(inputs, inputs.depth_ft))
}

/// `n` evenly spaced values from `start` to `end`, both ends included.
///
/// The last value is exactly `end`. `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample pressure at `sample_count` evenly spaced depths from surface to
/// total depth.
///
/// The deepest sample is evaluated at exactly `inputs.depth_ft`, so its
/// pressure equals `compute_bottomhole_pressure(inputs)`.
pub fn compute_profile(
    inputs: &WellInputs,
    sample_count: usize,
) -> Result<PressureProfile, PressureModelError> {
    validate_inputs(inputs)?;
    if sample_count < 2 {
        return Err(PressureModelError::invalid(
            "sample count",
            sample_count as f64,
            "a profile needs at least 2 samples",
        ));
    }
    if sample_count > MAX_SAMPLE_COUNT {
        return Err(PressureModelError::invalid(
            "sample count",
            sample_count as f64,
            "exceeds maximum profile resolution",
        ));
    }

    let samples = linspace(0.0, inputs.depth_ft, sample_count)
        .into_iter()
        .map(|depth_ft| ProfileSample {
            depth_ft,
            pressure_psi: pressure_at_depth(inputs, depth_ft),
        })
        .collect();

    Ok(PressureProfile {
        method: inputs.method,
        samples,
    })
}

/// `compute_profile` with `DEFAULT_SAMPLE_COUNT` samples.
pub fn compute_default_profile(inputs: &WellInputs) -> Result<PressureProfile, PressureModelError> {
    compute_profile(inputs, DEFAULT_SAMPLE_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    #[test]
    fn test_hydrostatic_reference_case() {
        let inputs = WellInputs::hydrostatic(100.0, 5000.0, 52.0);
        let p = compute_bottomhole_pressure(&inputs).unwrap();

        let expected = 100.0 + (52.0 * 32.174 * 5000.0) / 144.0;
        assert!((p - expected).abs() < TOL);
        assert_eq!(format!("{p:.2}"), "58191.94");
    }

    #[test]
    fn test_field_gradient_reference_case() {
        let inputs = WellInputs::field_gradient(100.0, 5000.0, 0.15);
        let p = compute_bottomhole_pressure(&inputs).unwrap();

        assert!((p - 850.0).abs() < TOL);
        assert_eq!(format!("{p:.2}"), "850.00");
    }

    #[test]
    fn test_fixed_factor_reference_case() {
        let inputs = WellInputs::fixed_factor(100.0, 5000.0, 9.5);
        let p = compute_bottomhole_pressure(&inputs).unwrap();

        let expected = 100.0 + 0.433 * 9.5 * 5000.0;
        assert!((p - expected).abs() < TOL);
        assert_eq!(format!("{p:.2}"), "20667.50");
    }

    #[test]
    fn test_zero_depth_returns_wellhead_pressure() {
        for method in PressureMethod::ALL {
            let inputs = WellInputs::new(method, 250.0, 0.0, 10.0);
            assert_eq!(compute_bottomhole_pressure(&inputs).unwrap(), 250.0);
        }
    }

    #[test]
    fn test_fixed_factor_accepts_zero_density() {
        let inputs = WellInputs::fixed_factor(100.0, 5000.0, 0.0);
        assert_eq!(compute_bottomhole_pressure(&inputs).unwrap(), 100.0);
    }

    #[test]
    fn test_rejects_out_of_domain_inputs() {
        let bad = [
            WellInputs::hydrostatic(-1.0, 5000.0, 52.0),
            WellInputs::hydrostatic(100.0, -1.0, 52.0),
            WellInputs::hydrostatic(100.0, 5000.0, 0.0),
            WellInputs::field_gradient(100.0, 5000.0, -0.15),
            WellInputs::fixed_factor(100.0, 5000.0, -0.1),
            WellInputs::field_gradient(f64::NAN, 5000.0, 0.15),
            WellInputs::field_gradient(100.0, f64::INFINITY, 0.15),
            WellInputs::hydrostatic(100.0, 5000.0, f64::NAN),
        ];
        for inputs in bad {
            let err = compute_bottomhole_pressure(&inputs).unwrap_err();
            assert!(
                matches!(err, PressureModelError::InvalidParameter { .. }),
                "expected InvalidParameter for {inputs:?}"
            );
        }
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = compute_bottomhole_pressure(&WellInputs::field_gradient(100.0, 5000.0, 0.0))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid pressure gradient: 0 (must be > 0)");
    }

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(0.0, 5000.0, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[49], 5000.0);
        assert!(((xs[1] - xs[0]) - 5000.0 / 49.0).abs() < TOL);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 10.0, 0).is_empty());
        assert_eq!(linspace(0.0, 10.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 10.0, 2), vec![0.0, 10.0]);
    }

    #[test]
    fn test_profile_last_sample_matches_bottomhole_exactly() {
        for method in PressureMethod::ALL {
            let inputs = WellInputs::new(method, 137.5, 7321.3, 0.37);
            let profile = compute_default_profile(&inputs).unwrap();
            let last = profile.last().unwrap();

            assert_eq!(last.depth_ft, 7321.3);
            assert_eq!(last.pressure_psi, compute_bottomhole_pressure(&inputs).unwrap());
        }
    }

    #[test]
    fn test_profile_rejects_oversized_sample_count() {
        let inputs = WellInputs::field_gradient(100.0, 5000.0, 0.15);
        for count in [MAX_SAMPLE_COUNT + 1, usize::MAX] {
            assert!(matches!(
                compute_profile(&inputs, count),
                Err(PressureModelError::InvalidParameter { name: "sample count", .. })
            ));
        }
        assert_eq!(compute_profile(&inputs, MAX_SAMPLE_COUNT).unwrap().len(), MAX_SAMPLE_COUNT);
    }

    #[test]
    fn test_overflowing_pressure_is_rejected() {
        let inputs = WellInputs::hydrostatic(100.0, 1e308, 52.0);
        assert!(matches!(
            compute_bottomhole_pressure(&inputs),
            Err(PressureModelError::InvalidParameter { name: "well depth", .. })
        ));
        assert!(compute_profile(&inputs, DEFAULT_SAMPLE_COUNT).is_err());
    }

    #[test]
    fn test_profile_rejects_single_sample() {
        let inputs = WellInputs::hydrostatic(100.0, 5000.0, 52.0);
        assert!(compute_profile(&inputs, 1).is_err());
        assert!(compute_profile(&inputs, 0).is_err());
        assert_eq!(compute_profile(&inputs, 2).unwrap().len(), 2);
    }
}
