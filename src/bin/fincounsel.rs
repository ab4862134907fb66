use anyhow::Result;
use fincounsel::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let (action, globals) = cli::start()?;

    let outcome = action.execute(&globals).await;

    cli::telemetry::shutdown_tracer();

    outcome
}
