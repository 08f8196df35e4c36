//! Observable value primitive.
//!
//! This module contains the building block every machine sits on:
//! - `ObservableCell`, a value with synchronous change notification
//! - `Subscription`, the handle that ends one subscription
//! - the `Observable` trait shared by cells and machines
//!
//! Everything here is single-threaded. Notification happens on the caller's
//! stack before the mutating call returns.

mod cell;
mod observable;
mod subscription;

pub use cell::ObservableCell;
pub use observable::Observable;
pub use subscription::{SubscriberId, Subscription};
