//! Toggle group machine: keyed flags sharing one observable map.

use crate::core::{Observable, ObservableCell, Subscription};
use std::collections::BTreeMap;
use tracing::debug;

/// Snapshot of a toggle group.
pub type Toggles<K> = BTreeMap<K, bool>;

/// Initial contents of a toggle group.
///
/// Usually built through `From`: a map keeps its values, a list of keys
/// starts every key off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleGroupInit<K> {
    Map(Toggles<K>),
    Keys(Vec<K>),
}

impl<K: Ord> ToggleGroupInit<K> {
    fn into_toggles(self) -> Toggles<K> {
        match self {
            Self::Map(map) => map,
            Self::Keys(keys) => keys.into_iter().map(|key| (key, false)).collect(),
        }
    }
}

impl<K> From<Toggles<K>> for ToggleGroupInit<K> {
    fn from(map: Toggles<K>) -> Self {
        Self::Map(map)
    }
}

impl<K> From<Vec<K>> for ToggleGroupInit<K> {
    fn from(keys: Vec<K>) -> Self {
        Self::Keys(keys)
    }
}

impl<K: Clone> From<&[K]> for ToggleGroupInit<K> {
    fn from(keys: &[K]) -> Self {
        Self::Keys(keys.to_vec())
    }
}

impl<K, const N: usize> From<[K; N]> for ToggleGroupInit<K> {
    fn from(keys: [K; N]) -> Self {
        Self::Keys(Vec::from(keys))
    }
}

/// A set of named flags observed as one map.
///
/// Every per-key change builds a fresh map, so a snapshot a subscriber kept
/// from an earlier notification never changes afterwards.
///
/// Keys that were not part of the initial set are accepted by
/// [`toggle`](Self::toggle), [`on`](Self::on) and [`off`](Self::off) and
/// simply join the map.
///
/// # Example
///
/// ```rust
/// use switchboard::toggle_group;
/// use std::collections::BTreeMap;
///
/// let panels = toggle_group(BTreeMap::from([("foo", true), ("bar", false)]));
///
/// panels.toggle("foo");
/// panels.on("bar");
/// assert_eq!(panels.current(), BTreeMap::from([("foo", false), ("bar", true)]));
///
/// let fresh = toggle_group(["foo", "bar"]);
/// assert_eq!(fresh.current(), BTreeMap::from([("foo", false), ("bar", false)]));
/// ```
pub struct ToggleGroupMachine<K> {
    cell: ObservableCell<Toggles<K>>,
}

impl<K: Ord + Clone + 'static> ToggleGroupMachine<K> {
    /// Create a group from a map or from a list of keys.
    pub fn new(init: impl Into<ToggleGroupInit<K>>) -> Self {
        let toggles = init.into().into_toggles();
        debug!(keys = toggles.len(), "toggle group created");
        Self {
            cell: ObservableCell::new(toggles),
        }
    }

    /// Register `callback`, calling it at once with the current map.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Toggles<K>) + 'static,
    {
        self.cell.subscribe(callback)
    }

    /// Snapshot of every flag.
    pub fn current(&self) -> Toggles<K> {
        self.cell.get()
    }

    /// Replace the whole map.
    pub fn set(&self, value: Toggles<K>) {
        self.cell.set(value);
    }

    /// Flip `key`. A key not in the map counts as off, so it turns on.
    pub fn toggle(&self, key: K) {
        self.cell.update(|toggles| {
            let flipped = !toggles.get(&key).copied().unwrap_or(false);
            with_flag(toggles, key, flipped)
        });
    }

    /// Switch `key` on, adding it if absent.
    pub fn on(&self, key: K) {
        self.cell.update(|toggles| with_flag(toggles, key, true));
    }

    /// Switch `key` off, adding it if absent.
    pub fn off(&self, key: K) {
        self.cell.update(|toggles| with_flag(toggles, key, false));
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &K) -> Option<bool> {
        self.cell.with(|toggles| toggles.get(key).copied())
    }

    /// Whether `key` is present and on.
    pub fn is_on(&self, key: &K) -> bool {
        self.get(key).unwrap_or(false)
    }

    /// Keys in order.
    pub fn keys(&self) -> Vec<K> {
        self.cell.with(|toggles| toggles.keys().cloned().collect())
    }
}

fn with_flag<K: Ord + Clone>(toggles: &Toggles<K>, key: K, value: bool) -> Toggles<K> {
    let mut next = toggles.clone();
    next.insert(key, value);
    next
}

/// Build a toggle group from a map or from a list of keys.
pub fn toggle_group<K>(init: impl Into<ToggleGroupInit<K>>) -> ToggleGroupMachine<K>
where
    K: Ord + Clone + 'static,
{
    ToggleGroupMachine::new(init)
}

impl<K: Ord + Clone + 'static> Observable for ToggleGroupMachine<K> {
    type Value = Toggles<K>;

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Toggles<K>) + 'static,
    {
        ToggleGroupMachine::subscribe(self, callback)
    }

    fn current(&self) -> Toggles<K> {
        ToggleGroupMachine::current(self)
    }

    fn set(&self, value: Toggles<K>) {
        ToggleGroupMachine::set(self, value)
    }
}

impl<K: Ord + Clone + std::fmt::Debug + 'static> std::fmt::Debug for ToggleGroupMachine<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleGroupMachine")
            .field("toggles", &self.cell.get())
            .finish()
    }
}
