//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for assembling
//! configurations and machines with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
