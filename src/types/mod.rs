//! Shared data structures for the pressure calculator
//!
//! - `WellInputs`: one immutable set of calculator inputs
//! - `PressureMethod`: formula selector
//! - `InputFloors`: minimum values applied by the input collector
//! - `PressureProfile` / `ProfileSample`: pressure sampled over depth

mod pressure;

pub use pressure::*;
