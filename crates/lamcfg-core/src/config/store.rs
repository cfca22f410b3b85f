//! The configuration store: load / mutate / save round trip.
//!
//! One [`ConfigStore`] owns one preferences file. `load` parses the
//! file into the in-memory [`Config`]; the setters validate mutations;
//! `save` rewrites the file, replacing recognized setting lines in
//! place and preserving everything else verbatim.
//!
//! The store is synchronous and single-owner. Embedders that serve
//! concurrent requests against one file must wrap the store in their
//! own mutual exclusion; two overlapping saves are last-writer-wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::errors::ConfigError;
use crate::config::format::{self, ConfigKey};
use crate::config::types::Config;

/// Owns one preferences file and its in-memory [`Config`] image.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Open the preferences file at `path` and load it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if the file does not exist,
    /// or `ConfigError::Io` if it cannot be read. Callers that want to
    /// proceed with empty settings on a missing file can fall back to
    /// [`ConfigStore::empty`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut store = Self::empty(path);
        store.load()?;
        Ok(store)
    }

    /// A store for `path` with all settings empty and nothing read
    /// from disk.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Config::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the file and replace the in-memory settings.
    ///
    /// Parsing is line by line: blank and `#` lines are skipped,
    /// recognized setting lines assign their field, anything else is
    /// ignored. When a key appears more than once the last occurrence
    /// wins. On failure the in-memory settings are left untouched.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let content = self.read_file()?;

        let mut config = Config::default();
        for line in content.split_inclusive('\n') {
            if format::is_comment(line) {
                continue;
            }
            if let Some((key, value)) = format::split_setting(line) {
                config.assign_raw(key, value);
            }
        }

        tracing::debug!(
            event = "core.config.loaded",
            path = %self.path.display(),
            admins = config.admins().len()
        );
        self.config = config;
        Ok(())
    }

    /// Discard unsaved mutations and re-read the file.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        self.load()
    }

    /// Rewrite the preferences file from the in-memory settings.
    ///
    /// Every line that is not a recognized setting (comments, blank
    /// lines, unknown keys) is preserved verbatim and in order. Each
    /// recognized setting line is replaced by the canonical
    /// `key: value` form. Keys the file never mentioned are appended
    /// at the end, each with a short explanatory comment.
    ///
    /// The new content is written to a sibling temp file and renamed
    /// into place, so the original file is untouched if anything
    /// fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = self.read_file()?;

        let mut written = [false; ConfigKey::ALL.len()];
        let mut out = String::with_capacity(content.len() + 256);
        for line in content.split_inclusive('\n') {
            if format::is_comment(line) {
                out.push_str(line);
                continue;
            }
            match format::split_setting(line) {
                Some((key, _)) => {
                    out.push_str(&format::render_setting(key, &self.config.value_for(key)));
                    written[key as usize] = true;
                }
                None => out.push_str(line),
            }
        }

        let missing: Vec<ConfigKey> = ConfigKey::ALL
            .into_iter()
            .filter(|key| !written[*key as usize])
            .collect();
        if !missing.is_empty() {
            // Appended entries must start on a fresh line even when the
            // file did not end with a terminator.
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            for key in &missing {
                for comment in key.append_comment() {
                    out.push_str(comment);
                    out.push('\n');
                }
                out.push_str(&format::render_setting(*key, &self.config.value_for(*key)));
            }
        }

        self.write_file(&out)?;

        tracing::info!(
            event = "core.config.saved",
            path = %self.path.display(),
            appended_keys = missing.len()
        );
        Ok(())
    }

    fn read_file(&self) -> Result<String, ConfigError> {
        fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::MissingFile {
                    path: self.path.display().to_string(),
                }
            } else {
                ConfigError::Io { source: e }
            }
        })
    }

    fn write_file(&self, content: &str) -> Result<(), ConfigError> {
        let mut temp_os = self.path.as_os_str().to_os_string();
        temp_os.push(".tmp");
        let temp_file = PathBuf::from(temp_os);

        // Write to temp file
        if let Err(e) = fs::write(&temp_file, content) {
            cleanup_temp_file(&temp_file, &e);
            return Err(ConfigError::Io { source: e });
        }

        // Rename temp file to final location
        if let Err(e) = fs::rename(&temp_file, &self.path) {
            cleanup_temp_file(&temp_file, &e);
            return Err(ConfigError::Io { source: e });
        }

        Ok(())
    }

    /// Set whether SSL is used, as the token "True" or "False".
    pub fn set_ssl(&mut self, value: &str) -> Result<(), ConfigError> {
        if value != "True" && value != "False" {
            return Err(ConfigError::Validation {
                field: "ssl",
                value: value.to_string(),
                message: "must be \"True\" or \"False\"",
            });
        }
        self.config.set_ssl_unchecked(value.to_string());
        Ok(())
    }

    /// Set the LDAP server hostname or address.
    pub fn set_host(&mut self, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::Validation {
                field: "host",
                value: value.to_string(),
                message: "must not be empty",
            });
        }
        self.config.set_host_unchecked(value.to_string());
        Ok(())
    }

    /// Set the LDAP server port, as a non-negative integer string.
    pub fn set_port(&mut self, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::Validation {
                field: "port",
                value: value.to_string(),
                message: "must be a non-negative integer",
            });
        }
        self.config.set_port_unchecked(value.to_string());
        Ok(())
    }

    /// Set the password required to edit these preferences.
    pub fn set_passwd(&mut self, value: &str) {
        self.config.set_passwd_unchecked(value.to_string());
    }

    /// Replace the admin list. Rejected as a whole if any entry is
    /// empty; on failure the current list is left untouched.
    pub fn set_admins(&mut self, values: Vec<String>) -> Result<(), ConfigError> {
        if values.iter().any(|v| v.is_empty()) {
            return Err(ConfigError::Validation {
                field: "admins",
                value: values.join(";"),
                message: "every admin entry must be non-empty",
            });
        }
        self.config.set_admins_unchecked(values);
        Ok(())
    }

    /// Replace the admin list from its `;`-joined line form.
    pub fn set_admin_string(&mut self, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::Validation {
                field: "admins",
                value: value.to_string(),
                message: "must name at least one admin",
            });
        }
        self.config
            .set_admins_unchecked(value.split(format::ADMIN_SEPARATOR).map(str::to_string).collect());
        Ok(())
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.config.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after save error"
        );
    }
}
