//! Switchboard: observable values and the small state machines built on them
//!
//! Everything sits on one primitive, an observable value cell: it holds the
//! current value and pushes every replacement to its subscribers
//! synchronously. Three machines wrap a cell each and add transition logic.
//!
//! # Core Concepts
//!
//! - **ObservableCell**: A value with subscribe/notify semantics
//! - **StepMachine**: A cursor over a fixed sequence that clamps or wraps at the ends
//! - **ToggleMachine**: A single boolean flag
//! - **ToggleGroupMachine**: Keyed boolean flags observed as one map
//!
//! All of it is single-threaded. Subscribers run on the caller's stack
//! before the mutating call returns; nothing is batched or deduplicated.
//!
//! # Example
//!
//! ```rust
//! use switchboard::{steps, toggle, toggle_group, StepOptions};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let wizard = steps(vec!["a", "b", "c"], StepOptions::at(1)).unwrap();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let _subscription = wizard.subscribe(move |step: &&'static str| sink.borrow_mut().push(*step));
//!
//! wizard.next();
//! wizard.next();
//! assert_eq!(*seen.borrow(), vec!["b", "c", "c"]);
//!
//! let looping = steps(vec!["a", "b", "c"], StepOptions::at(2).looped()).unwrap();
//! looping.next();
//! assert_eq!(looping.current(), "a");
//!
//! let flag = toggle(false);
//! flag.toggle();
//! assert!(flag.current());
//!
//! let group = toggle_group(["foo", "bar"]);
//! group.on("bar");
//! assert!(group.is_on(&"bar"));
//! ```

pub mod builder;
pub mod core;
pub mod machines;

// Re-export commonly used types
pub use builder::{BuildError, StepOptions, StepsBuilder};
pub use core::{Observable, ObservableCell, SubscriberId, Subscription};
pub use machines::{
    steps, toggle, toggle_group, StepMachine, ToggleGroupInit, ToggleGroupMachine,
    ToggleMachine, Toggles,
};
