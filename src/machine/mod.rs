//! The state machine engine.
//!
//! A [`StateMachine`] owns its configuration, the current state and an
//! [`UndoHistory`]. Every operation is synchronous and completes in the
//! calling context; mutation takes `&mut self`, so callers sharing one
//! machine across threads wrap it in their own lock.

pub mod error;
pub mod options;

pub use error::MachineError;
pub use options::{MachineOptions, ResetTarget, LEGACY_RESET_STATE};

use crate::core::{ChangeCause, EventId, HistoryEntry, MachineConfig, StateId, UndoHistory};
use crate::validation::{ConfigRules, ValidationPolicy};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Configured finite state machine with linear undo/redo.
///
/// # Example
///
/// ```rust
/// use rewind::StateMachine;
///
/// let mut machine = StateMachine::from_json(r#"{
///     "initial": "off",
///     "states": {
///         "off": { "transitions": { "turnOn": "on" } },
///         "on": { "transitions": { "turnOff": "off" } }
///     }
/// }"#).unwrap();
///
/// machine.trigger("turnOn").unwrap();
/// assert_eq!(machine.state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "off");
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    options: MachineOptions,
    current: StateId,
    history: UndoHistory,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is taken as given; `initial` is not checked
    /// against the declared states.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial.clone();
        debug!(initial = %current, states = config.states.len(), "state machine created");
        Self {
            config,
            options: MachineOptions::default(),
            current,
            history: UndoHistory::new(),
        }
    }

    /// Create a machine, failing when no configuration is supplied.
    pub fn try_new(config: Option<MachineConfig>) -> Result<Self, MachineError> {
        config.map(Self::new).ok_or_else(config_required)
    }

    /// Create a machine with explicit options.
    ///
    /// Under [`ValidationPolicy::Strict`] the configuration is checked
    /// against the default [`ConfigRules`] first.
    pub fn with_options(
        config: MachineConfig,
        options: MachineOptions,
    ) -> Result<Self, MachineError> {
        let rules = match options.validation {
            ValidationPolicy::Strict => Some(ConfigRules::default()),
            ValidationPolicy::Lazy => None,
        };
        Self::assemble(config, options, rules.as_ref())
    }

    pub(crate) fn assemble(
        config: MachineConfig,
        options: MachineOptions,
        rules: Option<&ConfigRules>,
    ) -> Result<Self, MachineError> {
        if let Some(rules) = rules {
            rules
                .check(&config)
                .map_err(|violations| MachineError::InvalidConfiguration { violations })?;
        }

        let mut machine = Self::new(config);
        machine.options = options;
        Ok(machine)
    }

    /// Create a machine from an already-parsed JSON configuration.
    ///
    /// `null`, `false`, `0` and `""` count as a missing configuration.
    pub fn from_value(value: Value) -> Result<Self, MachineError> {
        if is_falsy(&value) {
            return Err(config_required());
        }
        let config = MachineConfig::from_value(value)?;
        Ok(Self::new(config))
    }

    /// Parse a JSON configuration and create a machine from it.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Active state.
    pub fn state(&self) -> &StateId {
        &self.current
    }

    /// Configured state names in declared order, or only those that handle
    /// `event` when one is given.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            None => self.config.state_names().collect(),
            Some(event) => self.config.states_handling(event),
        }
    }

    /// Events the current state declares, in declared order.
    pub fn available_events(&self) -> Vec<&EventId> {
        self.config
            .state(self.current.as_str())
            .map(|definition| definition.transitions.keys().collect())
            .unwrap_or_default()
    }

    /// True if `event` would move the machine from its current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.target_for(event).is_some()
    }

    /// Jump straight to `state`, bypassing transition rules.
    ///
    /// # Errors
    ///
    /// - [`MachineError::InvalidArgument`] if `state` is empty
    /// - [`MachineError::UnknownState`] if `state` is not configured
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if state.is_empty() {
            return Err(MachineError::InvalidArgument { argument: "state" });
        }
        if !self.config.has_state(state) {
            return Err(MachineError::UnknownState {
                state: state.to_string(),
            });
        }

        self.apply(StateId::from(state), ChangeCause::Direct);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// # Errors
    ///
    /// [`MachineError::UnknownEvent`] if the current state declares no
    /// transition for `event`, including when the current state is not
    /// configured at all.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .target_for(event)
            .cloned()
            .ok_or_else(|| MachineError::UnknownEvent {
                event: event.to_string(),
                state: self.current.to_string(),
            })?;

        self.apply(target, ChangeCause::Event(EventId::from(event)));
        Ok(())
    }

    /// Move to the reset target without touching history.
    pub fn reset(&mut self) {
        let target = self
            .options
            .reset_target
            .resolve(&self.config.initial)
            .clone();

        if !self.config.has_state(target.as_str()) {
            warn!(target = %target, "resetting to a state that is not configured");
        }
        debug!(from = %self.current, to = %target, "state machine reset");
        self.current = target;
    }

    /// Step back to the state the change under the cursor left.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back() {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "undo");
                self.current = previous;
                true
            }
            None => {
                trace!(cursor = ?self.history.cursor(), "nothing to undo");
                false
            }
        }
    }

    /// Step forward to the state the next recorded change entered.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(next) => {
                debug!(from = %self.current, to = %next, "redo");
                self.current = next;
                true
            }
            None => {
                trace!(cursor = ?self.history.cursor(), "nothing to redo");
                false
            }
        }
    }

    /// Forget every recorded change. The current state stays put.
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.entries().len(), "history cleared");
        self.history.clear();
    }

    /// True if the next `undo` would restore a state (pure).
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if the next `redo` would restore a state (pure).
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Get change history (pure)
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Get the configuration the machine was built from (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get construction options (pure)
    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    fn target_for(&self, event: &str) -> Option<&StateId> {
        self.config
            .transition(self.current.as_str(), event)
            .filter(|target| !target.is_blank())
    }

    fn apply(&mut self, to: StateId, cause: ChangeCause) {
        let from = std::mem::replace(&mut self.current, to.clone());
        debug!(from = %from, to = %to, cause = ?cause, "state changed");
        self.history.record(HistoryEntry::new(from, to, cause));
    }
}

fn config_required() -> MachineError {
    MachineError::Configuration {
        reason: "config is required".to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
