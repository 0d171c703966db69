//! System-wide default constants.
//!
//! Starting values for the calculator inputs and the config file lookup.

// ============================================================================
// Config Lookup
// ============================================================================

/// Environment variable holding the path to a calculator config file.
pub const CONFIG_ENV_VAR: &str = "GASLIFT_CONFIG";

/// Config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "gaslift_config.toml";

// ============================================================================
// Default Inputs
// ============================================================================

/// Wellhead pressure (psi).
pub const DEFAULT_WELLHEAD_PRESSURE_PSI: f64 = 100.0;

/// Well depth (ft).
pub const DEFAULT_DEPTH_FT: f64 = 5000.0;

/// Fluid density for the hydrostatic method (lb/ft³).
pub const DEFAULT_HYDROSTATIC_DENSITY_LBFT3: f64 = 52.0;

/// Pressure gradient for the field method (psi/ft).
pub const DEFAULT_FIELD_GRADIENT_PSI_FT: f64 = 0.15;

/// Fluid density for the fixed-factor method (lb/gal).
pub const DEFAULT_FIXED_FACTOR_DENSITY_LBGAL: f64 = 9.5;

// ============================================================================
// Typical Ranges (warnings only)
// ============================================================================

/// Deepest well considered typical (ft).
pub const TYPICAL_MAX_DEPTH_FT: f64 = 40_000.0;

/// Heaviest wellbore fluid considered typical (lb/ft³). ~25 ppg.
pub const TYPICAL_MAX_DENSITY_LBFT3: f64 = 190.0;

/// Steepest field gradient considered typical (psi/ft).
pub const TYPICAL_MAX_GRADIENT_PSI_FT: f64 = 1.3;

/// Heaviest wellbore fluid considered typical (lb/gal).
pub const TYPICAL_MAX_DENSITY_LBGAL: f64 = 25.0;
