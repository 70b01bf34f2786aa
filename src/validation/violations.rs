//! Configuration violations and validation policies.

use thiserror::Error;

/// Problems found while checking a configuration for referential integrity
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Configuration declares no states")]
    NoStates,

    #[error("Initial state '{initial}' is not specified in config states")]
    UnknownInitialState { initial: String },

    #[error("State names must not be empty")]
    EmptyStateName,

    #[error("State '{state}' declares a transition with an empty event name")]
    EmptyEventName { state: String },

    #[error("Transition '{event}' from '{state}' targets unknown state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// When configurations are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Accept the configuration as given; bad references surface when used
    #[default]
    Lazy,

    /// Check at construction and refuse the configuration on any violation
    Strict,
}
