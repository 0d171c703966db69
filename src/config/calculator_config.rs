//! Calculator Configuration - Default inputs and floors as TOML values
//!
//! Every value the front end would otherwise hardcode (starting inputs,
//! profile resolution, minimum-value floors) lives here. Each struct
//! implements `Default` so a missing config file changes nothing.

use super::defaults;
use crate::types::{InputFloors, PressureMethod, WellInputs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the bottomhole pressure calculator.
///
/// Load with `CalculatorConfig::load()` which searches:
/// 1. `$GASLIFT_CONFIG` env var
/// 2. `./gaslift_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Starting values for each input
    #[serde(default)]
    pub defaults: DefaultInputs,

    /// Profile sampling
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Minimum values the input collector clamps to
    #[serde(default)]
    pub floors: InputFloors,
}

impl CalculatorConfig {
    /// Load configuration using the standard search order:
    /// 1. `$GASLIFT_CONFIG` environment variable
    /// 2. `./gaslift_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded calculator config from {}", defaults::CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", defaults::CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded calculator config from ./{}", defaults::LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::LOCAL_CONFIG_FILE);
                }
            }
        }

        info!("No {} found — using built-in defaults", defaults::LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings, never rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in &super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the effective configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Write the effective configuration to `path`.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Saved calculator config");
        Ok(())
    }

    /// Validate for internal consistency.
    ///
    /// Rules:
    /// - Profile needs at least 2 samples
    /// - Floors must be finite and non-negative
    /// - Default inputs must be finite and not below their floors
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.profile.sample_count < 2 {
            errors.push(format!(
                "profile.sample_count ({}) must be >= 2",
                self.profile.sample_count
            ));
        }

        let f = &self.floors;
        for (name, floor) in [
            ("floors.wellhead_pressure_psi", f.wellhead_pressure_psi),
            ("floors.depth_ft", f.depth_ft),
            ("floors.hydrostatic_density_lbft3", f.hydrostatic_density_lbft3),
            ("floors.field_gradient_psi_ft", f.field_gradient_psi_ft),
            ("floors.fixed_factor_density_lbgal", f.fixed_factor_density_lbgal),
        ] {
            if !floor.is_finite() || floor < 0.0 {
                errors.push(format!("{name} = {floor} must be a finite value >= 0"));
            }
        }

        let d = &self.defaults;
        Self::check_floor(d.wellhead_pressure_psi, f.wellhead_pressure_psi, "defaults.wellhead_pressure_psi", &mut errors);
        Self::check_floor(d.depth_ft, f.depth_ft, "defaults.depth_ft", &mut errors);
        Self::check_floor(d.hydrostatic_density_lbft3, f.hydrostatic_density_lbft3, "defaults.hydrostatic_density_lbft3", &mut errors);
        Self::check_floor(d.field_gradient_psi_ft, f.field_gradient_psi_ft, "defaults.field_gradient_psi_ft", &mut errors);
        Self::check_floor(d.fixed_factor_density_lbgal, f.fixed_factor_density_lbgal, "defaults.fixed_factor_density_lbgal", &mut errors);

        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_floor(value: f64, floor: f64, name: &str, errors: &mut Vec<String>) {
        // NaN comparisons silently pass
        if !value.is_finite() {
            errors.push(format!("{name}: value must be finite (got {value})"));
            return;
        }
        if value < floor {
            errors.push(format!("{name} ({value}) must be >= floor ({floor})"));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Default Inputs
// ============================================================================

/// Starting values shown to the user before they change anything.
///
/// Each method keeps its own density/gradient default because the unit
/// differs per method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultInputs {
    #[serde(default)]
    pub method: PressureMethod,

    /// Wellhead pressure (psi)
    #[serde(default = "default_wellhead_pressure")]
    pub wellhead_pressure_psi: f64,

    /// Well depth (ft)
    #[serde(default = "default_depth")]
    pub depth_ft: f64,

    /// Fluid density for the hydrostatic method (lb/ft³)
    #[serde(default = "default_hydrostatic_density")]
    pub hydrostatic_density_lbft3: f64,

    /// Pressure gradient for the field method (psi/ft)
    #[serde(default = "default_field_gradient")]
    pub field_gradient_psi_ft: f64,

    /// Fluid density for the fixed-factor method (lb/gal)
    #[serde(default = "default_fixed_factor_density")]
    pub fixed_factor_density_lbgal: f64,
}

fn default_wellhead_pressure() -> f64 { defaults::DEFAULT_WELLHEAD_PRESSURE_PSI }
fn default_depth() -> f64 { defaults::DEFAULT_DEPTH_FT }
fn default_hydrostatic_density() -> f64 { defaults::DEFAULT_HYDROSTATIC_DENSITY_LBFT3 }
fn default_field_gradient() -> f64 { defaults::DEFAULT_FIELD_GRADIENT_PSI_FT }
fn default_fixed_factor_density() -> f64 { defaults::DEFAULT_FIXED_FACTOR_DENSITY_LBGAL }

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            method: PressureMethod::default(),
            wellhead_pressure_psi: default_wellhead_pressure(),
            depth_ft: default_depth(),
            hydrostatic_density_lbft3: default_hydrostatic_density(),
            field_gradient_psi_ft: default_field_gradient(),
            fixed_factor_density_lbgal: default_fixed_factor_density(),
        }
    }
}

impl DefaultInputs {
    /// Default density/gradient in the unit `method` expects.
    pub fn density_for(&self, method: PressureMethod) -> f64 {
        match method {
            PressureMethod::Hydrostatic => self.hydrostatic_density_lbft3,
            PressureMethod::FieldGradient => self.field_gradient_psi_ft,
            PressureMethod::FixedFactor => self.fixed_factor_density_lbgal,
        }
    }

    /// Full default input set for `method`.
    pub fn inputs_for(&self, method: PressureMethod) -> WellInputs {
        WellInputs::new(
            method,
            self.wellhead_pressure_psi,
            self.depth_ft,
            self.density_for(method),
        )
    }
}

// ============================================================================
// Profile Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Number of depth samples from surface to total depth
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_sample_count() -> usize { crate::physics_engine::DEFAULT_SAMPLE_COUNT }

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
        }
    }
}
