use crate::{
    api::{ApiClient, ApiConfig},
    store::{FileStore, LocalState},
};
use anyhow::{Context, Result};
use std::{path::PathBuf, sync::Arc};

/// Connection settings shared by every subcommand.
#[derive(Clone, Debug)]
pub struct GlobalArgs {
    pub api: ApiConfig,
    pub state_file: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api: ApiConfig, state_file: PathBuf) -> Self {
        Self { api, state_file }
    }

    /// Opens the persisted state file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn state(&self) -> Result<LocalState> {
        let store = FileStore::open(&self.state_file).with_context(|| {
            format!("failed to open state file {}", self.state_file.display())
        })?;
        Ok(LocalState::new(Arc::new(store)))
    }

    /// # Errors
    /// Returns an error if the state file cannot be opened or the API base
    /// URL is invalid.
    pub fn client(&self) -> Result<ApiClient> {
        let state = self.state()?;
        Ok(ApiClient::new(&self.api, state)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::ApiEnvironment;

    #[test]
    fn test_global_args_open_missing_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = GlobalArgs::new(ApiConfig::default(), dir.path().join("state.json"));
        let client = args.client().unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api");
    }

    #[test]
    fn test_global_args_reject_bad_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let api = ApiConfig {
            environment: ApiEnvironment::Remote,
            remote_url: "ftp://fincounsel.app".to_string(),
            ..ApiConfig::default()
        };
        let args = GlobalArgs::new(api, dir.path().join("state.json"));
        assert!(args.client().is_err());
    }

    #[test]
    fn test_global_args_corrupt_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();
        let args = GlobalArgs::new(ApiConfig::default(), path);
        let err = args.state().unwrap_err();
        assert!(err.to_string().contains("failed to open state file"));
    }
}
