// SPDX-License-Identifier: Apache-2.0

//! Credential storage for the two API keys.
//!
//! The keys live in a single JSON file at `~/.linear-ai-cli/api-keys.json`,
//! written with 2-space indentation and camelCase field names. The file is
//! created or overwritten wholesale by `init` and read wholesale by
//! `process-text`; a file with either field missing or empty counts as
//! "not configured".

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// Directory under the user's home that holds the credential file.
pub const CONFIG_DIR_NAME: &str = ".linear-ai-cli";

/// File name of the credential file inside the config directory.
pub const CREDENTIALS_FILE_NAME: &str = "api-keys.json";

/// The two stored API keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeys {
    /// OpenAI API key.
    pub open_ai_key: String,
    /// Linear API key.
    pub linear_key: String,
}

/// Lenient on-disk shape: reading never fails on a missing field, the
/// store decides afterwards whether the record is usable.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKeys {
    #[serde(default)]
    open_ai_key: Option<String>,
    #[serde(default)]
    linear_key: Option<String>,
}

/// Repository for the credential file with explicit `load`/`save` contracts.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store bound to the fixed path under the user's home directory.
    #[must_use]
    pub fn new() -> Self {
        let home = dirs::home_dir().expect("Could not determine home directory - is HOME set?");
        Self {
            path: home.join(CONFIG_DIR_NAME).join(CREDENTIALS_FILE_NAME),
        }
    }

    /// Creates a store bound to an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the credential file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored API keys.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NotConfigured`] when the file is absent,
    /// unreadable, not valid JSON, or either key is missing or empty.
    pub fn load(&self) -> Result<ApiKeys, CliError> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            debug!(path = %self.path.display(), "Credential file not readable");
            return Err(CliError::NotConfigured);
        };

        let raw: RawKeys =
            serde_json::from_str(&contents).map_err(|_| CliError::NotConfigured)?;

        match (raw.open_ai_key, raw.linear_key) {
            (Some(open_ai_key), Some(linear_key))
                if !open_ai_key.is_empty() && !linear_key.is_empty() =>
            {
                debug!("Loaded API keys from credential file");
                Ok(ApiKeys {
                    open_ai_key,
                    linear_key,
                })
            }
            _ => Err(CliError::NotConfigured),
        }
    }

    /// Save the API keys, overwriting any existing file.
    ///
    /// Creates the parent directory if it does not exist.
    pub fn save(&self, keys: &ApiKeys) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(keys).context("Failed to serialize API keys")?;

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write credential file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "API keys stored");
        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> ApiKeys {
        ApiKeys {
            open_ai_key: "sk-test-openai".to_string(),
            linear_key: "lin_api_test".to_string(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::at(dir.path().join(CONFIG_DIR_NAME).join(CREDENTIALS_FILE_NAME))
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.save(&test_keys()).expect("save");
        let loaded = store.load().expect("load");

        assert_eq!(loaded, test_keys());
    }

    #[test]
    fn test_save_writes_pretty_camel_case_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.save(&test_keys()).expect("save");
        let contents = fs::read_to_string(store.path()).expect("read");

        assert!(contents.contains("  \"openAiKey\": \"sk-test-openai\""));
        assert!(contents.contains("  \"linearKey\": \"lin_api_test\""));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        store.save(&test_keys()).expect("save");
        let replacement = ApiKeys {
            open_ai_key: "sk-other".to_string(),
            linear_key: "lin_api_other".to_string(),
        };
        store.save(&replacement).expect("save again");

        assert_eq!(store.load().expect("load"), replacement);
    }

    #[test]
    fn test_load_missing_file_is_not_configured() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        assert!(matches!(store.load(), Err(CliError::NotConfigured)));
    }

    #[test]
    fn test_load_invalid_json_is_not_configured() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CREDENTIALS_FILE_NAME);
        fs::write(&path, "not json").expect("write");

        let store = CredentialStore::at(&path);
        assert!(matches!(store.load(), Err(CliError::NotConfigured)));
    }

    #[test]
    fn test_load_missing_field_is_not_configured() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CREDENTIALS_FILE_NAME);
        fs::write(&path, r#"{"openAiKey": "sk-test"}"#).expect("write");

        let store = CredentialStore::at(&path);
        assert!(matches!(store.load(), Err(CliError::NotConfigured)));
    }

    #[test]
    fn test_load_empty_field_is_not_configured() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CREDENTIALS_FILE_NAME);
        fs::write(&path, r#"{"openAiKey": "sk-test", "linearKey": ""}"#).expect("write");

        let store = CredentialStore::at(&path);
        assert!(matches!(store.load(), Err(CliError::NotConfigured)));
    }

    #[test]
    fn test_default_path_components() {
        let store = CredentialStore::new();
        assert!(store.path().ends_with(
            Path::new(CONFIG_DIR_NAME).join(CREDENTIALS_FILE_NAME)
        ));
    }
}
