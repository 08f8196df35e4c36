//! Step machine options.

use serde::{Deserialize, Serialize};

/// Options for [`steps`](crate::steps).
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// ```rust
/// use switchboard::StepOptions;
///
/// let options: StepOptions = serde_json::from_str(r#"{ "loop": true }"#).unwrap();
/// assert_eq!(options, StepOptions { init: 0, looping: true });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOptions {
    /// Index into the states of the starting value.
    pub init: usize,

    /// Wrap around at both ends instead of stopping.
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl StepOptions {
    /// Start at `init` without looping.
    pub fn at(init: usize) -> Self {
        Self {
            init,
            looping: false,
        }
    }

    /// Same options with looping switched on.
    pub fn looped(self) -> Self {
        Self {
            looping: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_at_zero_without_loop() {
        let options = StepOptions::default();
        assert_eq!(options.init, 0);
        assert!(!options.looping);
    }

    #[test]
    fn deserializes_partial_json() {
        let options: StepOptions = serde_json::from_str(r#"{ "init": 2 }"#).unwrap();
        assert_eq!(options, StepOptions::at(2));

        let options: StepOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, StepOptions::default());
    }

    #[test]
    fn serializes_loop_field_name() {
        let json = serde_json::to_string(&StepOptions::at(1).looped()).unwrap();
        assert_eq!(json, r#"{"init":1,"loop":true}"#);
    }
}
