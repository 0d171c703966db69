//! Calculator Configuration Module
//!
//! Provides default inputs, profile resolution and input floors loaded from
//! TOML files.
//!
//! ## Loading Order
//!
//! 1. `GASLIFT_CONFIG` environment variable (path to TOML file)
//! 2. `gaslift_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(CalculatorConfig::load());
//!
//! // Anywhere in the codebase:
//! let samples = config::get().profile.sample_count;
//! ```

mod calculator_config;
pub mod defaults;
pub mod validation;

pub use calculator_config::*;

use std::sync::OnceLock;

/// Global calculator configuration, initialized once at startup.
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Initialize the global calculator configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: CalculatorConfig) {
    if CALCULATOR_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global calculator configuration.
///
/// Panics if `init()` has not been called; a missing config is a startup bug.
pub fn get() -> &'static CalculatorConfig {
    CALCULATOR_CONFIG
        .get()
        .expect("config::get() called before config::init() — this is a startup bug")
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    CALCULATOR_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ensure_config() {
        if !is_initialized() {
            init(CalculatorConfig::default());
        }
    }

    #[test]
    fn test_get_after_init() {
        ensure_config();
        assert!(is_initialized());
        assert!(get().profile.sample_count >= 2);
    }

    #[test]
    fn test_second_init_is_ignored() {
        ensure_config();
        let before = get().profile.sample_count;

        let mut other = CalculatorConfig::default();
        other.profile.sample_count = before + 7;
        init(other);

        assert_eq!(get().profile.sample_count, before);
    }
}
