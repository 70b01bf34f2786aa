//! Errors returned by state machine operations.

use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when constructing or driving a state machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    /// No usable configuration was supplied
    #[error("Configuration is required: {reason}")]
    Configuration { reason: String },

    /// The configuration was refused by strict validation
    #[error("Configuration failed validation: {}", format_violations(.violations))]
    InvalidConfiguration { violations: Vec<ConfigViolation> },

    /// A required argument was empty
    #[error("A non-empty {argument} is required")]
    InvalidArgument { argument: &'static str },

    #[error("State '{state}' is not specified in config states")]
    UnknownState { state: String },

    #[error("Event '{event}' is not specified for state '{state}'")]
    UnknownEvent { event: String, state: String },
}

impl MachineError {
    /// True for either flavour of configuration failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MachineError::Configuration { .. } | MachineError::InvalidConfiguration { .. }
        )
    }
}

impl From<serde_json::Error> for MachineError {
    fn from(err: serde_json::Error) -> Self {
        MachineError::Configuration {
            reason: err.to_string(),
        }
    }
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
