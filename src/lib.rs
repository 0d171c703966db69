//! gaslift-bhp: Gas-Lift Bottomhole Pressure
//!
//! Pressure at the bottom of a gas-lift well from wellhead pressure, fluid
//! density (or a field gradient) and depth, plus the pressure-vs-depth
//! profile used to chart it.
//!
//! ## Architecture
//!
//! - **Physics Engine**: Pure pressure formulas (hydrostatic, field gradient, fixed factor)
//! - **Types**: Immutable inputs, method selector, profile samples, input floors
//! - **Config**: TOML-backed defaults and floors, loaded once at startup
//! - **Report**: Summary text, formula explanation, and profile tables

pub mod config;
pub mod physics_engine;
pub mod report;
pub mod types;

// Re-export configuration
pub use config::CalculatorConfig;

// Re-export commonly used types
pub use types::{InputFloors, PressureMethod, PressureProfile, ProfileSample, WellInputs};

// Re-export the pressure model
pub use physics_engine::{
    compute_bottomhole_pressure, compute_default_profile, compute_profile, PressureModelError,
    DEFAULT_SAMPLE_COUNT,
};

// Re-export report components
pub use report::{CalculationReport, ProfileFormat, ReportError};
