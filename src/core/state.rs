//! Opaque identifiers for states and events.
//!
//! Configurations name states and events with plain strings. These newtypes
//! keep the two apart at the type level while serializing transparently, so
//! a configuration round-trips through JSON unchanged.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a name.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the underlying name.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// An empty name never identifies anything.
            pub fn is_blank(&self) -> bool {
                self.0.is_empty()
            }

            /// Unwrap into the owned name.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

identifier! {
    /// Name of a condition the machine can occupy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::StateId;
    ///
    /// let state = StateId::from("idle");
    /// assert_eq!(state.as_str(), "idle");
    /// assert_eq!(state, "idle");
    /// assert!(!state.is_blank());
    /// ```
    StateId
}

identifier! {
    /// Name of a trigger that may move the machine out of its current state.
    EventId
}
