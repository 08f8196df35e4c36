//! Builder for constructing step machines.

use crate::builder::error::BuildError;
use crate::builder::options::StepOptions;
use crate::machines::StepMachine;

/// Builder for [`StepMachine`] with a fluent API.
///
/// ```rust
/// use switchboard::StepMachine;
///
/// let pages = StepMachine::builder(vec!["intro", "details", "confirm"])
///     .init(1)
///     .looping(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(pages.current(), "details");
/// ```
#[derive(Clone, Debug)]
pub struct StepsBuilder<T> {
    states: Vec<T>,
    options: StepOptions,
}

impl<T: Clone + PartialEq + 'static> StepsBuilder<T> {
    /// Start a builder over `states`.
    pub fn new(states: Vec<T>) -> Self {
        Self {
            states,
            options: StepOptions::default(),
        }
    }

    /// Set the initial index (defaults to 0).
    pub fn init(mut self, init: usize) -> Self {
        self.options.init = init;
        self
    }

    /// Wrap around at both ends (defaults to false).
    pub fn looping(mut self, looping: bool) -> Self {
        self.options.looping = looping;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: StepOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the machine.
    /// Returns an error if there are no states or `init` is out of range.
    pub fn build(self) -> Result<StepMachine<T>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::EmptyStates);
        }

        let len = self.states.len();
        if self.options.init >= len {
            return Err(BuildError::InitOutOfRange {
                init: self.options.init,
                len,
            });
        }

        Ok(StepMachine::from_parts(
            self.states,
            self.options.init,
            self.options.looping,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_empty_states() {
        let result = StepsBuilder::<u8>::new(Vec::new()).build();

        assert!(matches!(result, Err(BuildError::EmptyStates)));
    }

    #[test]
    fn builder_rejects_init_out_of_range() {
        let result = StepsBuilder::new(vec!['a', 'b']).init(2).build();

        assert!(matches!(
            result,
            Err(BuildError::InitOutOfRange { init: 2, len: 2 })
        ));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StepsBuilder::new(vec![10, 20, 30])
            .init(2)
            .looping(true)
            .build()
            .unwrap();

        assert_eq!(machine.current(), 30);
        assert_eq!(machine.init(), 2);
        assert!(machine.is_looping());
    }

    #[test]
    fn options_replace_individual_settings() {
        let machine = StepsBuilder::new(vec![1, 2])
            .init(1)
            .options(StepOptions::default())
            .build()
            .unwrap();

        assert_eq!(machine.current(), 1);
        assert!(!machine.is_looping());
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = BuildError::InitOutOfRange { init: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Initial index 5 is out of range for 3 states"
        );
    }
}
