//! On-disk line format for the preferences file.
//!
//! The file is plain line-oriented text. A setting line is a
//! case-sensitive key followed by exactly `": "` and the raw value:
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
//! Blank lines and lines starting with `#` are comments. Anything else
//! that matches no recognized key is ignored on load and preserved
//! verbatim on save.

/// Separator between entries in the `admins:` value. No escaping.
pub const ADMIN_SEPARATOR: char = ';';

/// The fixed set of settings the store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Ssl,
    Host,
    Port,
    Passwd,
    Admins,
}

impl ConfigKey {
    /// All recognized keys, in canonical file order.
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::Ssl,
        ConfigKey::Host,
        ConfigKey::Port,
        ConfigKey::Passwd,
        ConfigKey::Admins,
    ];

    /// Bare key name as it appears before the `": "` separator.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::Ssl => "ssl",
            ConfigKey::Host => "host",
            ConfigKey::Port => "port",
            ConfigKey::Passwd => "passwd",
            ConfigKey::Admins => "admins",
        }
    }

    /// Full line prefix a setting line must start with.
    pub fn prefix(&self) -> &'static str {
        match self {
            ConfigKey::Ssl => "ssl: ",
            ConfigKey::Host => "host: ",
            ConfigKey::Port => "port: ",
            ConfigKey::Passwd => "passwd: ",
            ConfigKey::Admins => "admins: ",
        }
    }

    /// Explanatory comment lines written above a key that `save`
    /// appends because the file never mentioned it.
    pub fn append_comment(&self) -> &'static [&'static str] {
        match self {
            ConfigKey::Ssl => &["# use SSL to connect, can be True or False"],
            ConfigKey::Host => &["# hostname of LDAP server (e.g localhost)"],
            ConfigKey::Port => &["# portnumber of LDAP server (default 389)"],
            ConfigKey::Passwd => &["# password to change these preferences via webfrontend"],
            ConfigKey::Admins => &[
                "# list of users who are allowed to use LDAP Account Manager",
                "# names have to be separated by semicolons",
                "# e.g. admins: cn=admin,dc=yourdomain,dc=org;cn=root,dc=yourdomain,dc=org",
            ],
        }
    }
}

/// Strip a single trailing line terminator (`\n` or `\r\n`).
pub fn chomp(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Whether a line is a comment for parsing purposes: blank, or first
/// character `#`. Comment lines pass through `save` untouched.
pub fn is_comment(line: &str) -> bool {
    let line = chomp(line);
    line.is_empty() || line.starts_with('#')
}

/// Split a raw line into its recognized key and value, if it is a
/// setting line. The value has a single trailing terminator stripped;
/// interior and trailing spaces are kept as-is.
pub fn split_setting(line: &str) -> Option<(ConfigKey, &str)> {
    for key in ConfigKey::ALL {
        if let Some(rest) = line.strip_prefix(key.prefix()) {
            return Some((key, chomp(rest)));
        }
    }
    None
}

/// Canonical newline-terminated form of a setting line.
pub fn render_setting(key: ConfigKey, value: &str) -> String {
    format!("{}{}\n", key.prefix(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_setting_recognized_keys() {
        assert_eq!(
            split_setting("ssl: True\n"),
            Some((ConfigKey::Ssl, "True"))
        );
        assert_eq!(
            split_setting("host: ldap.example.org"),
            Some((ConfigKey::Host, "ldap.example.org"))
        );
        assert_eq!(split_setting("port: 389\r\n"), Some((ConfigKey::Port, "389")));
        assert_eq!(
            split_setting("passwd: s3cret"),
            Some((ConfigKey::Passwd, "s3cret"))
        );
        assert_eq!(
            split_setting("admins: cn=admin;cn=root\n"),
            Some((ConfigKey::Admins, "cn=admin;cn=root"))
        );
    }

    #[test]
    fn test_split_setting_is_case_sensitive() {
        assert_eq!(split_setting("SSL: True"), None);
        assert_eq!(split_setting("Host: x"), None);
    }

    #[test]
    fn test_split_setting_requires_space_after_colon() {
        assert_eq!(split_setting("ssl:True"), None);
        assert_eq!(split_setting("port:389"), None);
    }

    #[test]
    fn test_split_setting_unrecognized() {
        assert_eq!(split_setting("timeout: 30"), None);
        assert_eq!(split_setting("random text"), None);
    }

    #[test]
    fn test_is_comment() {
        assert!(is_comment(""));
        assert!(is_comment("\n"));
        assert!(is_comment("\r\n"));
        assert!(is_comment("# a comment\n"));
        assert!(is_comment("#no space"));
        assert!(!is_comment("ssl: True\n"));
        assert!(!is_comment("  # indented is not a comment"));
    }

    #[test]
    fn test_render_setting() {
        assert_eq!(render_setting(ConfigKey::Ssl, "False"), "ssl: False\n");
        assert_eq!(
            render_setting(ConfigKey::Admins, "a;b"),
            "admins: a;b\n"
        );
    }

    #[test]
    fn test_chomp_strips_one_terminator() {
        assert_eq!(chomp("x\n"), "x");
        assert_eq!(chomp("x\r\n"), "x");
        assert_eq!(chomp("x\n\n"), "x\n");
        assert_eq!(chomp("x"), "x");
    }
}
