use crate::api::ApiConfig;
use crate::cli::{actions::Action, commands, dispatch, globals::GlobalArgs, telemetry};
use anyhow::Result;

/// Main entry point for the CLI - builds the Action and the shared settings
///
/// # Errors
///
/// Returns an error if argument parsing, telemetry initialization, or action dispatch fails
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    telemetry::init(commands::logging::level(&matches))?;

    let options = commands::api::Options::parse(&matches);
    let mut api = ApiConfig::from_build();
    api.apply_overrides(options.overrides);
    let globals = GlobalArgs::new(api, options.state_file);

    let action = dispatch::handler(&matches)?;

    Ok((action, globals))
}
