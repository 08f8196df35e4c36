//! Build errors for step machine construction.

use thiserror::Error;

/// Errors that can occur when building a step machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No states given. A step machine needs at least one state")]
    EmptyStates,

    #[error("Initial index {init} is out of range for {len} states")]
    InitOutOfRange { init: usize, len: usize },
}
