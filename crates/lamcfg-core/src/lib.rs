//! lamcfg-core: preferences store for an LDAP account manager
//!
//! This library owns the line-oriented `lam.conf` preferences file:
//! parsing it into a typed [`config::Config`] record, validating
//! mutations through field accessors, and rewriting the file while
//! preserving comments and unrecognized lines. It is used by the CLI
//! and by any embedding frontend.
//!
//! # Main Entry Points
//!
//! - [`config::ConfigStore`] - Open, read, mutate, save one config file
//! - [`errors`] - Shared error trait and result alias
//! - [`logging`] - Structured logging initialization

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::{Config, ConfigError, ConfigKey, ConfigStore};

// Re-export logging initialization
pub use logging::init_logging;
