//! Configuration record type.
//!
//! [`Config`] is the in-memory image of one preferences file. It is a
//! plain data record: fields are populated by the store's parser and
//! mutated through the validating accessors on
//! [`ConfigStore`](crate::config::ConfigStore). The admin list is the
//! source of truth; the joined `admin_string` view is computed on
//! demand so the two can never diverge.

use std::fmt;

use serde::Serialize;

use crate::config::format::{ADMIN_SEPARATOR, ConfigKey};

/// In-memory image of one preferences file.
///
/// All values are kept as the raw strings found in the file. Values
/// read from disk are not validated; validation applies to mutations
/// through the store's setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// "True" or "False": use an SSL connection to the LDAP server
    ssl: String,
    /// Hostname or address of the LDAP server
    host: String,
    /// Port number of the LDAP server, as a numeric string
    port: String,
    /// Password required to edit these preferences. Never rendered.
    #[serde(skip_serializing)]
    passwd: String,
    /// Users with admin rights, in file order
    admins: Vec<String>,
}

impl Config {
    pub fn ssl(&self) -> &str {
        &self.ssl
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn passwd(&self) -> &str {
        &self.passwd
    }

    pub fn admins(&self) -> &[String] {
        &self.admins
    }

    /// The admin list as a single `;`-joined line, as stored on disk.
    pub fn admin_string(&self) -> String {
        self.admins.join(&ADMIN_SEPARATOR.to_string())
    }

    /// Assign a raw value parsed from the file, without validation.
    pub(crate) fn assign_raw(&mut self, key: ConfigKey, value: &str) {
        match key {
            ConfigKey::Ssl => self.ssl = value.to_string(),
            ConfigKey::Host => self.host = value.to_string(),
            ConfigKey::Port => self.port = value.to_string(),
            ConfigKey::Passwd => self.passwd = value.to_string(),
            ConfigKey::Admins => {
                // An empty value means no admins, not one empty admin.
                self.admins = if value.is_empty() {
                    Vec::new()
                } else {
                    value.split(ADMIN_SEPARATOR).map(str::to_string).collect()
                };
            }
        }
    }

    pub(crate) fn set_ssl_unchecked(&mut self, value: String) {
        self.ssl = value;
    }

    pub(crate) fn set_host_unchecked(&mut self, value: String) {
        self.host = value;
    }

    pub(crate) fn set_port_unchecked(&mut self, value: String) {
        self.port = value;
    }

    pub(crate) fn set_passwd_unchecked(&mut self, value: String) {
        self.passwd = value;
    }

    pub(crate) fn set_admins_unchecked(&mut self, values: Vec<String>) {
        self.admins = values;
    }

    /// Current on-disk form of one field's value.
    pub(crate) fn value_for(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Ssl => self.ssl.clone(),
            ConfigKey::Host => self.host.clone(),
            ConfigKey::Port => self.port.clone(),
            ConfigKey::Passwd => self.passwd.clone(),
            ConfigKey::Admins => self.admin_string(),
        }
    }
}

/// Human-readable settings summary. The password is deliberately
/// omitted, matching what the preferences page has always shown.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SSL: {}", self.ssl)?;
        writeln!(f, "Host: {}", self.host)?;
        writeln!(f, "Port: {}", self.port)?;
        write!(f, "Admins: {}", self.admin_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert_eq!(config.ssl(), "");
        assert_eq!(config.host(), "");
        assert_eq!(config.port(), "");
        assert_eq!(config.passwd(), "");
        assert!(config.admins().is_empty());
        assert_eq!(config.admin_string(), "");
    }

    #[test]
    fn test_assign_raw_admins_splits() {
        let mut config = Config::default();
        config.assign_raw(ConfigKey::Admins, "cn=admin,dc=org;cn=root,dc=org");
        assert_eq!(
            config.admins(),
            &["cn=admin,dc=org".to_string(), "cn=root,dc=org".to_string()]
        );
        assert_eq!(config.admin_string(), "cn=admin,dc=org;cn=root,dc=org");
    }

    #[test]
    fn test_assign_raw_empty_admins_is_empty_list() {
        let mut config = Config::default();
        config.assign_raw(ConfigKey::Admins, "cn=admin");
        config.assign_raw(ConfigKey::Admins, "");
        assert!(config.admins().is_empty());
        assert_eq!(config.admin_string(), "");
    }

    #[test]
    fn test_display_omits_password() {
        let mut config = Config::default();
        config.assign_raw(ConfigKey::Ssl, "True");
        config.assign_raw(ConfigKey::Host, "ldap.example.org");
        config.assign_raw(ConfigKey::Port, "636");
        config.assign_raw(ConfigKey::Passwd, "secret");
        config.assign_raw(ConfigKey::Admins, "cn=admin");

        let rendered = config.to_string();
        assert_eq!(
            rendered,
            "SSL: True\nHost: ldap.example.org\nPort: 636\nAdmins: cn=admin"
        );
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_serialize_skips_password() {
        let mut config = Config::default();
        config.assign_raw(ConfigKey::Passwd, "secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("passwd"));
    }
}
