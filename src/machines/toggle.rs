//! Toggle machine: one observable boolean.

use crate::core::{Observable, ObservableCell, Subscription};
use tracing::debug;

/// A single on/off flag.
///
/// # Example
///
/// ```rust
/// use switchboard::toggle;
///
/// let menu = toggle(false);
/// menu.toggle();
/// assert!(menu.current());
/// menu.off();
/// assert!(!menu.current());
/// ```
#[derive(Debug)]
pub struct ToggleMachine {
    cell: ObservableCell<bool>,
}

impl ToggleMachine {
    /// Create a toggle starting at `init`.
    pub fn new(init: bool) -> Self {
        debug!(init, "toggle created");
        Self {
            cell: ObservableCell::new(init),
        }
    }

    /// Register `callback`, calling it at once with the current value.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&bool) + 'static,
    {
        self.cell.subscribe(callback)
    }

    /// The current flag.
    pub fn current(&self) -> bool {
        self.cell.get()
    }

    /// Replace the flag.
    pub fn set(&self, value: bool) {
        self.cell.set(value);
    }

    /// Flip the flag.
    pub fn toggle(&self) {
        self.cell.update(|value| !value);
    }

    /// Switch the flag on.
    pub fn on(&self) {
        self.cell.set(true);
    }

    /// Switch the flag off.
    pub fn off(&self) {
        self.cell.set(false);
    }
}

impl Default for ToggleMachine {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Build a toggle starting at `init`.
pub fn toggle(init: bool) -> ToggleMachine {
    ToggleMachine::new(init)
}

impl Observable for ToggleMachine {
    type Value = bool;

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&bool) + 'static,
    {
        ToggleMachine::subscribe(self, callback)
    }

    fn current(&self) -> bool {
        ToggleMachine::current(self)
    }

    fn set(&self, value: bool) {
        ToggleMachine::set(self, value)
    }
}
