//! Builder API for step machines.
//!
//! This module provides the options type, a fluent builder and a macro for
//! declaring step enums. Construction is the only place a step machine can
//! fail: an empty state list or an initial index past the end is rejected
//! here instead of producing a machine without a current value.

pub mod error;
pub mod macros;
pub mod options;
pub mod steps;

pub use error::BuildError;
pub use options::StepOptions;
pub use steps::StepsBuilder;
