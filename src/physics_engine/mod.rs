//! Physics Engine Module
//!
//! Deterministic pressure calculations for gas-lift wells.
//! Every function here is pure: same inputs, same result, no side effects.
//!
//! ## Functions
//! - `compute_bottomhole_pressure()` - Pressure at total depth
//! - `compute_profile()` - Pressure sampled from surface to total depth
//! - `pressure_at_depth()` - Unchecked pointwise formula shared by both

pub mod pressure_models;

pub use pressure_models::{
    compute_bottomhole_pressure, compute_default_profile, compute_profile, linspace,
    pressure_at_depth, validate_inputs, PressureModelError, DEFAULT_SAMPLE_COUNT,
    FIXED_FACTOR_PSI_FT_PER_PPG, GRAVITY_FT_S2, LBFT2_PER_PSI, MAX_SAMPLE_COUNT,
};

use crate::types::{PressureProfile, WellInputs};

/// Bottomhole pressure and profile computed together.
///
/// Validates once, then samples; the returned pressure is the profile's
/// deepest sample.
pub fn compute_all(
    inputs: &WellInputs,
    sample_count: usize,
) -> Result<(f64, PressureProfile), PressureModelError> {
    let p_bottom = compute_bottomhole_pressure(inputs)?;
    let profile = compute_profile(inputs, sample_count)?;

    tracing::debug!(
        method = %inputs.method,
        p_bottom,
        samples = profile.len(),
        "Computed pressure profile"
    );

    Ok((p_bottom, profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PressureMethod;

    #[test]
    fn test_compute_all_agrees_with_individual_calls() {
        let inputs = WellInputs::hydrostatic(100.0, 5000.0, 52.0);
        let (p_bottom, profile) = compute_all(&inputs, DEFAULT_SAMPLE_COUNT).unwrap();

        assert_eq!(p_bottom, compute_bottomhole_pressure(&inputs).unwrap());
        assert_eq!(profile, compute_default_profile(&inputs).unwrap());
        assert_eq!(profile.method, PressureMethod::Hydrostatic);
    }

    #[test]
    fn test_compute_all_propagates_invalid_parameter() {
        let inputs = WellInputs::field_gradient(100.0, -5.0, 0.15);
        assert!(matches!(
            compute_all(&inputs, DEFAULT_SAMPLE_COUNT),
            Err(PressureModelError::InvalidParameter { name: "well depth", .. })
        ));
    }
}
