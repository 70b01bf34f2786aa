//! Builder API for creating configuration rules.

use crate::core::MachineConfig;
use crate::validation::rules::{ConfigCheck, ConfigRules};
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating configuration rules
pub struct RulesBuilder {
    require_initial: bool,
    require_targets: bool,
    required_checks: Vec<ConfigCheck>,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self {
            require_initial: true,
            require_targets: true,
            required_checks: Vec::new(),
        }
    }

    /// Require `initial` to name a configured state
    pub fn require_initial(mut self, enabled: bool) -> Self {
        self.require_initial = enabled;
        self
    }

    /// Require every transition target to name a configured state
    pub fn require_targets(mut self, enabled: bool) -> Self {
        self.require_targets = enabled;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&MachineConfig) -> Validation<(), NonEmptyVec<ConfigViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&MachineConfig) -> bool + Send + Sync + 'static,
    {
        let check = move |config: &MachineConfig| {
            if predicate(config) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the rules
    pub fn build(self) -> ConfigRules {
        ConfigRules {
            require_initial: self.require_initial,
            require_targets: self.require_targets,
            required_checks: self.required_checks,
        }
    }
}

impl Default for RulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
