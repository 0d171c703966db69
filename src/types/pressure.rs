//! Pressure model input/output types
//!
//! `WellInputs` is the explicit, immutable snapshot of everything the
//! calculator needs. Front ends build one (after clamping with
//! `InputFloors`) and hand it to the physics engine.

use serde::{Deserialize, Serialize};

// ============================================================================
// Method Selector
// ============================================================================

/// Formula used to turn a fluid column into a pressure increment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PressureMethod {
    /// `P_top + (ρ · g · h) / 144`, density in lb/ft³
    #[default]
    Hydrostatic,
    /// `P_top + G · h`, gradient in psi/ft
    FieldGradient,
    /// `P_top + 0.433 · ρ · h`, density in lb/gal
    FixedFactor,
}

impl PressureMethod {
    pub const ALL: [PressureMethod; 3] = [
        PressureMethod::Hydrostatic,
        PressureMethod::FieldGradient,
        PressureMethod::FixedFactor,
    ];

    /// Human-readable name shown next to the method selector.
    pub fn label(&self) -> &'static str {
        match self {
            PressureMethod::Hydrostatic => "Hydrostatic (Physics-based)",
            PressureMethod::FieldGradient => "Practical Gradient (Field-based)",
            PressureMethod::FixedFactor => "Fixed Factor (lb/gal)",
        }
    }

    /// Heading printed above the computed result.
    pub fn result_heading(&self) -> &'static str {
        match self {
            PressureMethod::Hydrostatic => "Result (Hydrostatic Method)",
            PressureMethod::FieldGradient => "Result (Field Gradient Method)",
            PressureMethod::FixedFactor => "Result (Fixed Factor Method)",
        }
    }

    /// Unit of the density/gradient parameter for this method.
    pub fn density_unit(&self) -> &'static str {
        match self {
            PressureMethod::Hydrostatic => "lb/ft³",
            PressureMethod::FieldGradient => "psi/ft",
            PressureMethod::FixedFactor => "lb/gal",
        }
    }

    /// Name of the density/gradient parameter, used in prompts and errors.
    pub fn density_name(&self) -> &'static str {
        match self {
            PressureMethod::Hydrostatic | PressureMethod::FixedFactor => "fluid density",
            PressureMethod::FieldGradient => "pressure gradient",
        }
    }

    /// Static explanation of the active formula, one symbol per line.
    pub fn formula_explanation(&self) -> &'static str {
        match self {
            PressureMethod::Hydrostatic => {
                "Hydrostatic (Physics-based) Calculation\n\
                 \n\
                 P_bottom = P_top + (rho * g * h) / 144\n\
                 \n\
                 Where:\n\
                 - P_top: Wellhead Pressure (psi)\n\
                 - rho:   Fluid Density (lb/ft³)\n\
                 - g:     Gravity = 32.174 ft/s²\n\
                 - h:     Depth (ft)\n\
                 - 144:   Conversion from lb/ft² to psi\n"
            }
            PressureMethod::FieldGradient => {
                "Practical Gradient (Field-based) Calculation\n\
                 \n\
                 P_bottom = P_top + G * h\n\
                 \n\
                 Where:\n\
                 - P_top: Wellhead Pressure (psi)\n\
                 - G:     Pressure Gradient (psi/ft)\n\
                 - h:     Depth (ft)\n"
            }
            PressureMethod::FixedFactor => {
                "Fixed Factor (lb/gal) Calculation\n\
                 \n\
                 P_bottom = P_top + 0.433 * rho * h\n\
                 \n\
                 Where:\n\
                 - P_top: Wellhead Pressure (psi)\n\
                 - rho:   Fluid Density (lb/gal)\n\
                 - 0.433: Fixed psi/ft conversion factor\n\
                 - h:     Depth (ft)\n"
            }
        }
    }
}

impl std::fmt::Display for PressureMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PressureMethod::Hydrostatic => "hydrostatic",
            PressureMethod::FieldGradient => "field-gradient",
            PressureMethod::FixedFactor => "fixed-factor",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// One complete set of calculator inputs.
///
/// `density_param` is interpreted per `method`: lb/ft³ for Hydrostatic,
/// psi/ft for FieldGradient, lb/gal for FixedFactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellInputs {
    pub method: PressureMethod,
    pub wellhead_pressure_psi: f64,
    pub depth_ft: f64,
    pub density_param: f64,
}

impl WellInputs {
    pub fn new(
        method: PressureMethod,
        wellhead_pressure_psi: f64,
        depth_ft: f64,
        density_param: f64,
    ) -> Self {
        Self {
            method,
            wellhead_pressure_psi,
            depth_ft,
            density_param,
        }
    }

    pub fn hydrostatic(wellhead_pressure_psi: f64, depth_ft: f64, density_lbft3: f64) -> Self {
        Self::new(PressureMethod::Hydrostatic, wellhead_pressure_psi, depth_ft, density_lbft3)
    }

    pub fn field_gradient(wellhead_pressure_psi: f64, depth_ft: f64, gradient_psi_ft: f64) -> Self {
        Self::new(PressureMethod::FieldGradient, wellhead_pressure_psi, depth_ft, gradient_psi_ft)
    }

    pub fn fixed_factor(wellhead_pressure_psi: f64, depth_ft: f64, density_lbgal: f64) -> Self {
        Self::new(PressureMethod::FixedFactor, wellhead_pressure_psi, depth_ft, density_lbgal)
    }
}

// ============================================================================
// Input Floors
// ============================================================================

/// Minimum values applied by the input collector before computing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputFloors {
    #[serde(default)]
    pub wellhead_pressure_psi: f64,

    #[serde(default)]
    pub depth_ft: f64,

    #[serde(default = "default_hydrostatic_density_floor")]
    pub hydrostatic_density_lbft3: f64,

    #[serde(default = "default_field_gradient_floor")]
    pub field_gradient_psi_ft: f64,

    #[serde(default)]
    pub fixed_factor_density_lbgal: f64,
}

fn default_hydrostatic_density_floor() -> f64 { 1.0 }
fn default_field_gradient_floor() -> f64 { 0.01 }

impl Default for InputFloors {
    fn default() -> Self {
        Self {
            wellhead_pressure_psi: 0.0,
            depth_ft: 0.0,
            hydrostatic_density_lbft3: default_hydrostatic_density_floor(),
            field_gradient_psi_ft: default_field_gradient_floor(),
            fixed_factor_density_lbgal: 0.0,
        }
    }
}

impl InputFloors {
    /// Floor for the density/gradient parameter of `method`.
    pub fn density_floor(&self, method: PressureMethod) -> f64 {
        match method {
            PressureMethod::Hydrostatic => self.hydrostatic_density_lbft3,
            PressureMethod::FieldGradient => self.field_gradient_psi_ft,
            PressureMethod::FixedFactor => self.fixed_factor_density_lbgal,
        }
    }

    /// Raise every field of `inputs` to at least its floor.
    ///
    /// NaN inputs are left as-is so the physics engine can reject them.
    pub fn clamp(&self, inputs: &WellInputs) -> WellInputs {
        WellInputs {
            method: inputs.method,
            wellhead_pressure_psi: raise_to(inputs.wellhead_pressure_psi, self.wellhead_pressure_psi),
            depth_ft: raise_to(inputs.depth_ft, self.depth_ft),
            density_param: raise_to(inputs.density_param, self.density_floor(inputs.method)),
        }
    }
}

fn raise_to(value: f64, floor: f64) -> f64 {
    if value < floor { floor } else { value }
}

// ============================================================================
// Profile
// ============================================================================

/// One (depth, pressure) point of a pressure profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub depth_ft: f64,
    pub pressure_psi: f64,
}

/// Pressure sampled at evenly spaced depths from surface to total depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureProfile {
    pub method: PressureMethod,
    pub samples: Vec<ProfileSample>,
}

impl PressureProfile {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfileSample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&ProfileSample> {
        self.samples.first()
    }

    /// Deepest sample; its pressure is the bottomhole pressure.
    pub fn last(&self) -> Option<&ProfileSample> {
        self.samples.last()
    }

    pub fn max_pressure_psi(&self) -> Option<f64> {
        self.iter()
            .map(|s| s.pressure_psi)
            .fold(None, |acc, p| Some(acc.map_or(p, |a: f64| a.max(p))))
    }
}

impl<'a> IntoIterator for &'a PressureProfile {
    type Item = &'a ProfileSample;
    type IntoIter = std::slice::Iter<'a, ProfileSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_raises_values_below_floor() {
        let floors = InputFloors::default();
        let inputs = WellInputs::hydrostatic(-5.0, -10.0, 0.2);
        let clamped = floors.clamp(&inputs);

        assert_eq!(clamped.wellhead_pressure_psi, 0.0);
        assert_eq!(clamped.depth_ft, 0.0);
        assert_eq!(clamped.density_param, 1.0);
        assert_eq!(clamped.method, PressureMethod::Hydrostatic);
    }

    #[test]
    fn clamp_uses_method_specific_density_floor() {
        let floors = InputFloors::default();

        let field = floors.clamp(&WellInputs::field_gradient(100.0, 5000.0, 0.001));
        assert_eq!(field.density_param, 0.01);

        let fixed = floors.clamp(&WellInputs::fixed_factor(100.0, 5000.0, -1.0));
        assert_eq!(fixed.density_param, 0.0);
    }

    #[test]
    fn clamp_leaves_valid_inputs_untouched() {
        let inputs = WellInputs::field_gradient(100.0, 5000.0, 0.15);
        assert_eq!(InputFloors::default().clamp(&inputs), inputs);
    }

    #[test]
    fn method_serializes_kebab_case() {
        let json = serde_json::to_string(&PressureMethod::FieldGradient).unwrap();
        assert_eq!(json, "\"field-gradient\"");
        assert_eq!(PressureMethod::FixedFactor.to_string(), "fixed-factor");
    }

    #[test]
    fn formula_explanation_lists_constants() {
        for method in PressureMethod::ALL {
            let text = method.formula_explanation();
            assert!(text.starts_with(method.label()), "{method}: missing label");
            assert!(text.contains("P_top"), "{method}: missing wellhead term");
            match method {
                PressureMethod::Hydrostatic => {
                    assert!(text.contains("32.174"));
                    assert!(text.contains("144"));
                }
                PressureMethod::FieldGradient => assert!(text.contains("G * h")),
                PressureMethod::FixedFactor => assert!(text.contains("0.433")),
            }
        }
    }

    #[test]
    fn max_pressure_of_empty_profile_is_none() {
        let profile = PressureProfile {
            method: PressureMethod::Hydrostatic,
            samples: Vec::new(),
        };
        assert!(profile.max_pressure_psi().is_none());
        assert!(profile.is_empty());
    }

    #[test]
    fn iter_walks_samples_surface_down() {
        let profile = PressureProfile {
            method: PressureMethod::FieldGradient,
            samples: vec![
                ProfileSample { depth_ft: 0.0, pressure_psi: 100.0 },
                ProfileSample { depth_ft: 2500.0, pressure_psi: 475.0 },
                ProfileSample { depth_ft: 5000.0, pressure_psi: 850.0 },
            ],
        };

        let depths: Vec<f64> = profile.iter().map(|s| s.depth_ft).collect();
        assert_eq!(depths, vec![0.0, 2500.0, 5000.0]);
        assert_eq!(profile.iter().count(), (&profile).into_iter().count());
        assert_eq!(profile.max_pressure_psi(), Some(850.0));
    }
}
