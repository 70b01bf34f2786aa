//! Core configuration and history types.
//!
//! This module contains the data the engine is built from:
//! - Opaque state and event identifiers
//! - The declarative machine configuration
//! - Cursor-addressed undo/redo history
//!
//! Nothing here logs or fails at runtime; the engine in
//! [`crate::machine`] drives these types.

mod config;
mod history;
mod state;

pub use config::{MachineConfig, OrderedMap, StateDefinition};
pub use history::{ChangeCause, HistoryEntry, UndoHistory};
pub use state::{EventId, StateId};
