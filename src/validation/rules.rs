//! Configuration rules checked with Validation.

use crate::core::MachineConfig;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ConfigCheck =
    Box<dyn Fn(&MachineConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> + Send + Sync>;

/// Rules a configuration must satisfy.
/// Uses Validation to accumulate ALL violations.
pub struct ConfigRules {
    pub(crate) require_initial: bool,
    pub(crate) require_targets: bool,
    pub(crate) required_checks: Vec<ConfigCheck>,
}

impl Default for ConfigRules {
    fn default() -> Self {
        Self {
            require_initial: true,
            require_targets: true,
            required_checks: Vec::new(),
        }
    }
}

impl ConfigRules {
    /// Check every rule, accumulating ALL violations.
    pub fn enforce(&self, config: &MachineConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if config.states.is_empty() {
            checks.push(Validation::fail(ConfigViolation::NoStates));
        }

        if self.require_initial && !config.has_state(config.initial.as_str()) {
            checks.push(Validation::fail(ConfigViolation::UnknownInitialState {
                initial: config.initial.to_string(),
            }));
        }

        for (state, definition) in config.states.iter() {
            if state.is_blank() {
                checks.push(Validation::fail(ConfigViolation::EmptyStateName));
            }

            for (event, target) in definition.transitions.iter() {
                if event.is_blank() {
                    checks.push(Validation::fail(ConfigViolation::EmptyEventName {
                        state: state.to_string(),
                    }));
                }

                if self.require_targets && !config.has_state(target.as_str()) {
                    checks.push(Validation::fail(ConfigViolation::UnknownTarget {
                        state: state.to_string(),
                        event: event.to_string(),
                        target: target.to_string(),
                    }));
                }
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(config));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Run [`enforce`](Self::enforce) and flatten the outcome into a `Result`.
    pub fn check(&self, config: &MachineConfig) -> Result<(), Vec<ConfigViolation>> {
        match self.enforce(config) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

/// Check `config` against the default rules.
///
/// # Example
///
/// ```rust
/// use rewind::core::{MachineConfig, StateDefinition};
/// use rewind::validation::{validate_config, ConfigViolation};
///
/// let config = MachineConfig::new("idle")
///     .with_state("idle", StateDefinition::new().on("start", "running"));
///
/// let violations = validate_config(&config).unwrap_err();
/// assert_eq!(violations.len(), 1);
/// assert!(matches!(violations[0], ConfigViolation::UnknownTarget { .. }));
/// ```
pub fn validate_config(config: &MachineConfig) -> Result<(), Vec<ConfigViolation>> {
    ConfigRules::default().check(config)
}
