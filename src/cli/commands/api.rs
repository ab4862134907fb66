use crate::api::{ApiEnvironment, ConfigOverrides};
use clap::{Arg, ArgMatches, Command};
use std::{env, path::PathBuf};

pub const ARG_API_ENV: &str = "api-env";
pub const ARG_API_URL: &str = "api-url";
pub const ARG_LOCAL_API_URL: &str = "local-api-url";
pub const ARG_REMOTE_API_URL: &str = "remote-api-url";
pub const ARG_STATE_FILE: &str = "state-file";

const STATE_DIR: &str = ".fincounsel";
const STATE_FILE_NAME: &str = "state.json";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_ENV)
                .long(ARG_API_ENV)
                .help("API environment: local or remote")
                .env("FINCOUNSEL_API_ENV")
                .global(true)
                .value_parser(|value: &str| value.parse::<ApiEnvironment>()),
        )
        .arg(
            Arg::new(ARG_LOCAL_API_URL)
                .long(ARG_LOCAL_API_URL)
                .help("Base URL used when the environment is local")
                .env("FINCOUNSEL_LOCAL_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_REMOTE_API_URL)
                .long(ARG_REMOTE_API_URL)
                .help("Base URL used when the environment is remote")
                .env("FINCOUNSEL_REMOTE_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Full API base URL, overrides the environment selection")
                .env("FINCOUNSEL_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_STATE_FILE)
                .long(ARG_STATE_FILE)
                .help("File holding the session token, liked items and cookie consent")
                .long_help(
                    "File holding the session token, liked items and cookie consent. Defaults to $HOME/.fincounsel/state.json.",
                )
                .env("FINCOUNSEL_STATE_FILE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub overrides: ConfigOverrides,
    pub state_file: PathBuf,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let overrides = ConfigOverrides {
            environment: matches.get_one::<ApiEnvironment>(ARG_API_ENV).copied(),
            local_url: matches.get_one::<String>(ARG_LOCAL_API_URL).cloned(),
            remote_url: matches.get_one::<String>(ARG_REMOTE_API_URL).cloned(),
            override_url: matches.get_one::<String>(ARG_API_URL).cloned(),
        };

        let state_file = matches
            .get_one::<PathBuf>(ARG_STATE_FILE)
            .cloned()
            .unwrap_or_else(default_state_file);

        Self {
            overrides,
            state_file,
        }
    }
}

/// `$HOME/.fincounsel/state.json`, or the working directory without a home.
#[must_use]
pub fn default_state_file() -> PathBuf {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map_or_else(|| PathBuf::from(STATE_DIR), |home| PathBuf::from(home).join(STATE_DIR))
        .join(STATE_FILE_NAME)
}
