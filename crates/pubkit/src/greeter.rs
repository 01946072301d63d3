//! The greeting.
//!
//! [`hello`] is pure and infallible; it may be called from any thread or task
//! without coordination.

use std::fmt;

/// The text returned by [`hello`].
pub const GREETING: &str = "Hello from pubkit!";

/// Return the greeting message.
///
/// ```
/// assert_eq!(pubkit::hello(), "Hello from pubkit!");
/// ```
pub fn hello() -> String {
    GREETING.to_string()
}

/// Zero-sized handle for code that wants a value to pass around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greeter;

impl Greeter {
    /// Same as [`GREETING`].
    pub const GREETING: &'static str = GREETING;

    /// Create a greeter.
    pub fn new() -> Self {
        Self
    }

    /// Return the greeting message. Delegates to [`hello`].
    pub fn greet(&self) -> String {
        hello()
    }
}

impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GREETING)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_returns_greeting() {
        assert_eq!(hello(), "Hello from pubkit!");
    }

    #[test]
    fn test_hello_is_not_empty() {
        assert!(!hello().is_empty());
    }

    #[test]
    fn test_hello_repeated_calls() {
        for n in [1, 100, 10_000] {
            assert!((0..n).map(|_| hello()).all(|g| g == GREETING));
        }
    }

    #[test]
    fn test_greeter_matches_hello() {
        let greeter = Greeter::new();
        assert_eq!(greeter.greet(), hello());
        assert_eq!(greeter.to_string(), hello());
        assert_eq!(Greeter::GREETING, GREETING);
    }

    #[test]
    fn test_greeter_default_is_new() {
        assert_eq!(Greeter::default(), Greeter::new());
        assert_eq!(std::mem::size_of::<Greeter>(), 0);
    }

    #[test]
    fn test_greeter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Greeter>();
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_hello_has_no_state_drift(calls in 1usize..512) {
            let first = hello();
            for _ in 0..calls {
                prop_assert_eq!(hello(), first.clone());
            }
            prop_assert_eq!(first, GREETING);
        }
    }
}
