//! Rewind: a configurable finite state machine with linear undo/redo
//!
//! A machine is described by a declarative configuration naming its states
//! and the events that move between them. The engine tracks the current
//! state, applies transitions, and keeps a history of every change that can
//! be walked backwards and forwards.
//!
//! # Core Concepts
//!
//! - **Configuration**: `initial` state plus a table of per-state transitions,
//!   read from JSON or assembled in code
//! - **Machine**: Synchronous, single-owner engine over one configuration
//! - **History**: Append-only record of changes addressed by a movable cursor
//! - **Validation**: Opt-in referential-integrity checks on configurations
//!
//! # Example
//!
//! ```rust
//! use rewind::{machine_config, StateMachine};
//!
//! let mut machine = StateMachine::new(machine_config! {
//!     initial: "off",
//!     states: {
//!         "off" => { "turnOn" => "on" },
//!         "on" => { "turnOff" => "off" },
//!     }
//! });
//!
//! machine.trigger("turnOn").unwrap();
//! machine.trigger("turnOff").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "on");
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "off");
//! assert!(!machine.undo());
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use crate::core::{EventId, MachineConfig, StateDefinition, StateId};
pub use machine::{MachineError, MachineOptions, ResetTarget, StateMachine};
pub use validation::ValidationPolicy;
