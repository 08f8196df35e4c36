//! Step machine: a cursor over a fixed ordered sequence.

use crate::builder::{BuildError, StepOptions, StepsBuilder};
use crate::core::{Observable, ObservableCell, Subscription};
use tracing::debug;

/// Direction of a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Cursor over a fixed sequence of states.
///
/// The current position is never stored; it is recovered by looking the
/// current value up in the sequence (first equal element wins). Moving past
/// either end stops there, or wraps around when the machine loops.
///
/// # Example
///
/// ```rust
/// use switchboard::{steps, StepOptions};
///
/// let wizard = steps(vec!["a", "b", "c"], StepOptions::at(1)).unwrap();
/// assert_eq!(wizard.current(), "b");
///
/// wizard.next();
/// wizard.next();
/// assert_eq!(wizard.current(), "c");
///
/// wizard.reset();
/// assert_eq!(wizard.current(), "b");
/// ```
pub struct StepMachine<T> {
    states: Vec<T>,
    init: usize,
    looping: bool,
    cell: ObservableCell<T>,
}

impl<T: Clone + PartialEq + 'static> StepMachine<T> {
    /// Start a builder over `states`.
    pub fn builder(states: Vec<T>) -> StepsBuilder<T> {
        StepsBuilder::new(states)
    }

    /// Caller guarantees `init < states.len()`.
    pub(crate) fn from_parts(states: Vec<T>, init: usize, looping: bool) -> Self {
        debug!(states = states.len(), init, looping, "step machine created");
        let cell = ObservableCell::new(states[init].clone());
        Self {
            states,
            init,
            looping,
            cell,
        }
    }

    /// Register `callback`, calling it at once with the current state.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.cell.subscribe(callback)
    }

    /// The current state.
    pub fn current(&self) -> T {
        self.cell.get()
    }

    /// Replace the current state.
    ///
    /// `value` is not checked against the sequence. While the current value
    /// is not part of it, `next` and `prev` leave it unchanged.
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }

    /// Move one state forward.
    pub fn next(&self) {
        self.step(Direction::Forward);
    }

    /// Move one state backward.
    pub fn prev(&self) {
        self.step(Direction::Backward);
    }

    /// Return to the initial state.
    pub fn reset(&self) {
        self.cell.set(self.states[self.init].clone());
    }

    /// Position of the current state, if it is part of the sequence.
    pub fn index(&self) -> Option<usize> {
        self.cell.with(|current| self.position(current))
    }

    /// The full sequence.
    pub fn states(&self) -> &[T] {
        &self.states
    }

    /// Index of the initial state.
    pub fn init(&self) -> usize {
        self.init
    }

    /// Whether moves wrap around at the ends.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether the current state is the first in the sequence.
    pub fn is_first(&self) -> bool {
        self.index() == Some(0)
    }

    /// Whether the current state is the last in the sequence.
    pub fn is_last(&self) -> bool {
        self.index() == Some(self.states.len() - 1)
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.states.iter().position(|state| state == value)
    }

    fn step(&self, direction: Direction) {
        self.cell.update(|current| {
            let Some(from) = self.position(current) else {
                debug!(?direction, "current state not in sequence, staying put");
                return current.clone();
            };

            match self.target(from, direction) {
                Some(to) => {
                    debug!(from, to, ?direction, "step");
                    self.states[to].clone()
                }
                None => current.clone(),
            }
        });
    }

    /// Index reached from `from`, or `None` when clamped at an end.
    fn target(&self, from: usize, direction: Direction) -> Option<usize> {
        let last = self.states.len() - 1;
        match direction {
            Direction::Forward if from == last => self.looping.then_some(0),
            Direction::Forward => Some(from + 1),
            Direction::Backward if from == 0 => self.looping.then_some(last),
            Direction::Backward => Some(from - 1),
        }
    }
}

/// Build a step machine over `states`.
///
/// Fails when `states` is empty or `options.init` is past the end.
pub fn steps<T>(states: Vec<T>, options: StepOptions) -> Result<StepMachine<T>, BuildError>
where
    T: Clone + PartialEq + 'static,
{
    StepMachine::builder(states).options(options).build()
}

impl<T: Clone + PartialEq + 'static> Observable for StepMachine<T> {
    type Value = T;

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        StepMachine::subscribe(self, callback)
    }

    fn current(&self) -> T {
        StepMachine::current(self)
    }

    fn set(&self, value: T) {
        StepMachine::set(self, value)
    }
}

impl<T: Clone + std::fmt::Debug + 'static> std::fmt::Debug for StepMachine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepMachine")
            .field("states", &self.states)
            .field("init", &self.init)
            .field("looping", &self.looping)
            .field("current", &self.cell.get())
            .finish()
    }
}
