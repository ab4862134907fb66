//! Build-time configuration for the API base URL with runtime overrides. The
//! build selects between a local and a remote endpoint; CLI flags or
//! environment variables may replace either endpoint, switch the environment,
//! or supply an explicit full override. Configuration values are public; do not
//! store secrets here.

use super::ApiError;
use std::{fmt, str::FromStr};
use url::Url;

pub const DEFAULT_LOCAL_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_REMOTE_API_URL: &str = "https://api.fincounsel.app/api";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiEnvironment {
    #[default]
    Local,
    Remote,
}

impl ApiEnvironment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiEnvironment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "local" | "dev" | "development" => Ok(Self::Local),
            "remote" | "prod" | "production" => Ok(Self::Remote),
            other => Err(format!("unknown API environment: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub environment: ApiEnvironment,
    pub local_url: String,
    pub remote_url: String,
    pub override_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: ApiEnvironment::Local,
            local_url: DEFAULT_LOCAL_API_URL.to_string(),
            remote_url: DEFAULT_REMOTE_API_URL.to_string(),
            override_url: None,
        }
    }
}

/// Runtime values that replace build-time defaults when present.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub environment: Option<ApiEnvironment>,
    pub local_url: Option<String>,
    pub remote_url: Option<String>,
    pub override_url: Option<String>,
}

impl ApiConfig {
    /// Loads defaults baked in at build time.
    #[must_use]
    pub fn from_build() -> Self {
        let mut config = Self::default();

        let build = ConfigOverrides {
            environment: option_env!("FINCOUNSEL_API_ENV").and_then(|value| value.parse().ok()),
            local_url: option_env!("FINCOUNSEL_LOCAL_API_URL").and_then(normalize_value),
            remote_url: option_env!("FINCOUNSEL_REMOTE_API_URL").and_then(normalize_value),
            override_url: option_env!("FINCOUNSEL_API_URL").and_then(normalize_value),
        };
        config.apply_overrides(build);

        config
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(environment) = overrides.environment {
            self.environment = environment;
        }
        if let Some(value) = overrides.local_url.as_deref().and_then(normalize_value) {
            self.local_url = value;
        }
        if let Some(value) = overrides.remote_url.as_deref().and_then(normalize_value) {
            self.remote_url = value;
        }
        if let Some(value) = overrides.override_url.as_deref().and_then(normalize_value) {
            self.override_url = Some(value);
        }
    }

    /// Resolves the base URL: the explicit override wins, otherwise the
    /// endpoint for the selected environment.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the URL does not parse or is not http(s).
    pub fn base_url(&self) -> Result<Url, ApiError> {
        let raw = self.override_url.as_deref().unwrap_or(match self.environment {
            ApiEnvironment::Local => self.local_url.as_str(),
            ApiEnvironment::Remote => self.remote_url.as_str(),
        });

        let url = Url::parse(raw.trim())
            .map_err(|_| ApiError::Config("API base URL is not a valid URL".to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ApiError::Config(
                "API base URL must use http or https".to_string(),
            )),
        }
    }
}

pub(crate) fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.fincounsel.app "),
            Some("https://api.fincounsel.app".to_string())
        );
    }

    #[test]
    fn base_url_follows_environment() {
        let mut config = ApiConfig::default();
        assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:5000/api");

        config.environment = ApiEnvironment::Remote;
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://api.fincounsel.app/api"
        );
    }

    #[test]
    fn override_url_wins_over_environment() {
        let mut config = ApiConfig::default();
        config.apply_overrides(ConfigOverrides {
            environment: Some(ApiEnvironment::Remote),
            override_url: Some("https://staging.fincounsel.app/api".to_string()),
            ..ConfigOverrides::default()
        });
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://staging.fincounsel.app/api"
        );
    }

    #[test]
    fn apply_overrides_ignores_blank_values() {
        let mut config = ApiConfig::default();
        config.apply_overrides(ConfigOverrides {
            environment: None,
            local_url: Some("  ".to_string()),
            remote_url: Some(String::new()),
            override_url: Some(" ".to_string()),
        });
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn base_url_rejects_unsupported_scheme() {
        let config = ApiConfig {
            override_url: Some("ftp://files.fincounsel.app".to_string()),
            ..ApiConfig::default()
        };
        let err = config.base_url().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(!err.to_string().contains("files.fincounsel.app"));
    }

    #[test]
    fn environment_parses_aliases() {
        assert_eq!("production".parse(), Ok(ApiEnvironment::Remote));
        assert_eq!("DEV".parse(), Ok(ApiEnvironment::Local));
        assert!("staging".parse::<ApiEnvironment>().is_err());
    }
}
