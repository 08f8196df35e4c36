//! Unsubscribe handles returned by `subscribe`.

use std::fmt;
use std::rc::Weak;

/// Identifier of one subscription within one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric id, unique per cell.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Subscriber list that can drop an entry by id.
pub(crate) trait Unsubscribe {
    /// Remove `id`; returns whether it was still registered.
    fn remove(&self, id: SubscriberId) -> bool;

    fn contains(&self, id: SubscriberId) -> bool;
}

/// Handle for one active subscription.
///
/// Call [`unsubscribe`](Self::unsubscribe) to stop receiving values. The
/// handle only holds a weak reference to the cell, so it never keeps the
/// cell alive, and dropping it does not end the subscription.
///
/// # Example
///
/// ```rust
/// use switchboard::toggle;
///
/// let light = toggle(false);
/// let sub = light.subscribe(|on: &bool| println!("light on: {on}"));
///
/// light.on();
/// sub.unsubscribe();
/// sub.unsubscribe(); // no-op
/// assert!(!sub.is_active());
/// ```
pub struct Subscription {
    id: SubscriberId,
    source: Weak<dyn Unsubscribe>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriberId, source: Weak<dyn Unsubscribe>) -> Self {
        Self { id, source }
    }

    /// The id of this subscription.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove this subscription from its cell.
    ///
    /// Calling it again, or after the cell is gone, does nothing.
    pub fn unsubscribe(&self) {
        if let Some(source) = self.source.upgrade() {
            source.remove(self.id);
        }
    }

    /// Whether the subscription is still registered with a live cell.
    pub fn is_active(&self) -> bool {
        self.source
            .upgrade()
            .is_some_and(|source| source.contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
