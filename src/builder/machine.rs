//! Builder for constructing state machines.

use crate::core::MachineConfig;
use crate::machine::{MachineError, MachineOptions, ResetTarget, StateMachine};
use crate::validation::{ConfigRules, ValidationPolicy};

/// Builder for constructing state machines with a fluent API.
#[derive(Default)]
pub struct StateMachineBuilder {
    config: Option<MachineConfig>,
    options: MachineOptions,
    rules: Option<ConfigRules>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Choose where `reset` sends the machine.
    pub fn reset_target(mut self, target: ResetTarget) -> Self {
        self.options.reset_target = target;
        self
    }

    /// Choose when the configuration is validated.
    pub fn validation(mut self, policy: ValidationPolicy) -> Self {
        self.options.validation = policy;
        self
    }

    /// Validate eagerly against custom rules.
    pub fn rules(mut self, rules: ConfigRules) -> Self {
        self.options.validation = ValidationPolicy::Strict;
        self.rules = Some(rules);
        self
    }

    /// Build the state machine.
    /// Returns an error if the configuration is missing or fails validation.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        let config = self.config.ok_or_else(|| MachineError::Configuration {
            reason: "config is required".to_string(),
        })?;

        let rules = match (self.options.validation, self.rules) {
            (ValidationPolicy::Strict, Some(rules)) => Some(rules),
            (ValidationPolicy::Strict, None) => Some(ConfigRules::default()),
            (ValidationPolicy::Lazy, _) => None,
        };

        StateMachine::assemble(config, self.options, rules.as_ref())
    }
}
