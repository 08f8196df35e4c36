//! The surface shared by cells and machines.

use super::subscription::Subscription;

/// Something holding a current value that can be observed and replaced.
///
/// Implemented by [`ObservableCell`](super::ObservableCell) and by every
/// machine, so code that only needs to watch or overwrite a value can be
/// written once.
///
/// # Example
///
/// ```rust
/// use switchboard::core::Observable;
/// use switchboard::{steps, toggle, StepOptions};
///
/// fn log_changes<O: Observable>(source: &O, label: &'static str)
/// where
///     O::Value: std::fmt::Debug,
/// {
///     let _ = source.subscribe(move |v| println!("{label}: {v:?}"));
/// }
///
/// log_changes(&toggle(true), "toggle");
/// log_changes(&steps(vec![1, 2, 3], StepOptions::default()).unwrap(), "steps");
/// ```
pub trait Observable {
    /// Type of the observed value.
    type Value;

    /// Register `callback`, calling it at once with the current value.
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Self::Value) + 'static;

    /// The current value.
    fn current(&self) -> Self::Value;

    /// Replace the current value and notify subscribers.
    fn set(&self, value: Self::Value);
}
