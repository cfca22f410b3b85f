//! # Preferences Store
//!
//! Line-oriented preferences file handling for the LDAP account
//! manager. One [`ConfigStore`] owns one `lam.conf` file and provides
//! the load / mutate / save round trip over it.
//!
//! ## File Format
//!
//! ```text
//! # comment line (ignored)
//! ssl: True
//! host: ldap.example.org
//! port: 389
//! passwd: secret
//! admins: cn=admin,dc=example,dc=org;cn=root,dc=example,dc=org
//! ```
//!
//! Comments, blank lines and unrecognized lines survive a save
//! verbatim; only recognized setting lines are rewritten. When a key
//! occurs more than once the last occurrence wins on load.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use lamcfg_core::config::ConfigStore;
//!
//! fn example() -> Result<(), lamcfg_core::config::ConfigError> {
//!     let mut store = ConfigStore::open("lam.conf")?;
//!     store.set_host("ldap.example.org")?;
//!     store.save()?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod format;
pub mod store;
pub mod types;

// Public API exports
pub use errors::ConfigError;
pub use format::{ADMIN_SEPARATOR, ConfigKey};
pub use store::ConfigStore;
pub use types::Config;
