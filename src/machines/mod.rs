//! Machines layered on the observable cell.
//!
//! Each machine owns exactly one [`ObservableCell`](crate::core::ObservableCell)
//! and exposes `subscribe`, `current` and `set` plus its own mutators:
//! - `StepMachine`: `next`, `prev`, `reset`
//! - `ToggleMachine`: `toggle`, `on`, `off`
//! - `ToggleGroupMachine`: keyed `toggle`, `on`, `off`
//!
//! Mutators run to completion, subscribers included, before returning.

mod steps;
mod toggle;
mod toggle_group;

pub use steps::{steps, StepMachine};
pub use toggle::{toggle, ToggleMachine};
pub use toggle_group::{toggle_group, ToggleGroupInit, ToggleGroupMachine, Toggles};
