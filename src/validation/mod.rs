//! Referential-integrity checks for machine configurations.
//!
//! Configurations are accepted as given by default: `initial` and the
//! transition targets are opaque names that only matter once the machine
//! reaches them. [`ValidationPolicy::Strict`] checks them up front instead.
//!
//! Checks use Stillwater's `Validation` type so that every violation is
//! reported in one pass rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use rewind::core::{MachineConfig, StateDefinition};
//! use rewind::validation::RulesBuilder;
//!
//! let config = MachineConfig::new("draft")
//!     .with_state("draft", StateDefinition::new().on("publish", "live"))
//!     .with_state("live", StateDefinition::new());
//!
//! let rules = RulesBuilder::new()
//!     .require_pred(|cfg| cfg.has_state("live"), "live state required".to_string())
//!     .build();
//!
//! assert!(rules.check(&config).is_ok());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::RulesBuilder;
pub use rules::{validate_config, ConfigCheck, ConfigRules};
pub use violations::{ConfigViolation, ValidationPolicy};
