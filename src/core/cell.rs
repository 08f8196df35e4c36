//! Observable value cell.
//!
//! A cell holds exactly one current value and an ordered list of subscriber
//! callbacks. Every replacement of the value is pushed to all active
//! subscribers synchronously, on the caller's stack, before `set` returns.

use super::observable::Observable;
use super::subscription::{SubscriberId, Subscription, Unsubscribe};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscriber<T> {
    id: SubscriberId,
    callback: Callback<T>,
}

/// One queued call of one subscriber with one value.
struct Delivery<T> {
    id: SubscriberId,
    callback: Callback<T>,
    value: Rc<T>,
}

pub(crate) struct Shared<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_id: Cell<u64>,
    pending: RefCell<VecDeque<Delivery<T>>>,
    draining: Cell<bool>,
}

impl<T> Shared<T> {
    fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.subscribers.borrow().iter().any(|s| s.id == id)
    }
}

impl<T: 'static> Unsubscribe for Shared<T> {
    fn remove(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() != before;
        if removed {
            debug!(
                subscriber = id.get(),
                subscribers = subscribers.len(),
                "unsubscribed"
            );
        }
        removed
    }

    fn contains(&self, id: SubscriberId) -> bool {
        self.is_subscribed(id)
    }
}

/// A value with synchronous change notification.
///
/// Cloning a cell yields another handle to the same value and subscriber
/// list, which lets a callback capture the cell it observes.
///
/// # Re-entrancy
///
/// A callback may call [`set`](Self::set), [`update`](Self::update) or
/// [`subscribe`](Self::subscribe) on the cell that is notifying it. A `set`
/// made during a round is queued behind the deliveries still pending, so
/// every subscriber sees values in replacement order and the last value it
/// receives is the cell's current one. A subscription made during a round gets
/// its replay and only the values set after it subscribed.
///
/// # Example
///
/// ```rust
/// use switchboard::core::ObservableCell;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let cell = ObservableCell::new(1);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// let subscription = cell.subscribe(move |v: &i32| sink.borrow_mut().push(*v));
///
/// cell.set(2);
/// cell.update(|v| v * 10);
/// subscription.unsubscribe();
/// cell.set(99);
///
/// assert_eq!(*seen.borrow(), vec![1, 2, 20]);
/// assert_eq!(cell.get(), 99);
/// ```
pub struct ObservableCell<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: Clone + 'static> ObservableCell<T> {
    /// Create a cell holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
            }),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.shared.value.borrow().clone()
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f` calls `set` or `update` on this cell, since the value is
    /// still borrowed.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.borrow())
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    /// Register `callback` and call it once with the current value.
    ///
    /// Each call creates an independent subscription, even when the same
    /// callback is passed twice. The returned handle removes exactly this
    /// subscription; dropping it leaves the subscription in place.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriberId::new(self.shared.next_id.get());
        self.shared.next_id.set(id.get() + 1);

        let callback: Callback<T> = Rc::new(callback);
        {
            let mut subscribers = self.shared.subscribers.borrow_mut();
            subscribers.push(Subscriber {
                id,
                callback: Rc::clone(&callback),
            });
            debug!(
                subscriber = id.get(),
                subscribers = subscribers.len(),
                "subscribed"
            );
        }

        let current = self.get();
        callback(&current);

        let weak: Weak<Shared<T>> = Rc::downgrade(&self.shared);
        let weak: Weak<dyn Unsubscribe> = weak;
        Subscription::new(id, weak)
    }

    /// Replace the value and notify every active subscriber in order.
    ///
    /// There is no equality check: setting the same value again still
    /// notifies. Called from inside a callback, the deliveries are queued and
    /// run once the current round has finished.
    pub fn set(&self, value: T) {
        let snapshot = Rc::new(value.clone());
        self.shared.value.replace(value);
        self.notify(snapshot);
    }

    /// Replace the value with `transform(&current)`.
    ///
    /// `transform` runs exactly once and may read this cell.
    pub fn update<F>(&self, transform: F)
    where
        F: FnOnce(&T) -> T,
    {
        let current = self.get();
        self.set(transform(&current));
    }

    fn notify(&self, value: Rc<T>) {
        {
            let subscribers = self.shared.subscribers.borrow();
            let mut pending = self.shared.pending.borrow_mut();
            pending.extend(subscribers.iter().map(|s| Delivery {
                id: s.id,
                callback: Rc::clone(&s.callback),
                value: Rc::clone(&value),
            }));
            trace!(
                subscribers = subscribers.len(),
                queued = pending.len(),
                "notifying"
            );
        }

        // An outer call is already draining; it will reach these deliveries.
        if self.shared.draining.replace(true) {
            return;
        }
        let _drain = DrainGuard(&self.shared);

        loop {
            let next = self.shared.pending.borrow_mut().pop_front();
            let Some(delivery) = next else {
                break;
            };
            if self.shared.is_subscribed(delivery.id) {
                (delivery.callback)(&*delivery.value);
            }
        }
    }
}

/// Clears the drain flag, and drops leftovers if a callback panicked.
struct DrainGuard<'a, T>(&'a Shared<T>);

impl<T> Drop for DrainGuard<'_, T> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.draining.set(false);
    }
}

impl<T: Clone + 'static> Observable for ObservableCell<T> {
    type Value = T;

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        ObservableCell::subscribe(self, callback)
    }

    fn current(&self) -> T {
        self.get()
    }

    fn set(&self, value: T) {
        ObservableCell::set(self, value)
    }
}

impl<T: Clone + std::fmt::Debug + 'static> std::fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableCell")
            .field("value", &*self.shared.value.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
