//! Macros for declaring step sequences.

/// Declare a fieldless enum usable as a step sequence.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`,
/// `Serialize` and `Deserialize`, and gets two helpers:
/// - `name()` returning the variant name
/// - `all()` returning every variant in declaration order
///
/// # Example
///
/// ```
/// use switchboard::{step_enum, steps, StepOptions};
///
/// step_enum! {
///     pub enum Checkout {
///         Cart,
///         Shipping,
///         Payment,
///     }
/// }
///
/// let flow = steps(Checkout::all(), StepOptions::default()).unwrap();
/// flow.next();
/// assert_eq!(flow.current(), Checkout::Shipping);
/// assert_eq!(flow.current().name(), "Shipping");
/// ```
#[macro_export]
macro_rules! step_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Variant name.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub fn all() -> ::std::vec::Vec<Self> {
                ::std::vec![$(Self::$variant),+]
            }
        }
    };
}
