use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, resolve_api_key};
use commands::{CommandContext, CommandError};
use dispatch::{LocalCommand, LocalDispatch, RemoteCommand, RemoteDispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("{error_json}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Sends logs to stderr. `-v` and `-q` override `RUST_LOG`.
fn init_logging(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let mut ctx = CommandContext::from_cli(cli);

    // Unreadable config only disables the color override; `config set` must still run.
    match load_config() {
        Ok(config) if config.output.color == Some(false) => ctx.use_colors = false,
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "ignoring config for output settings"),
    }

    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    if let Some(dispatch) = RemoteDispatch::from_cli(cli) {
        let api_key = resolve_api_key(cli.api_key.as_deref())?;
        return dispatch.execute(&ctx, &api_key).await;
    }

    Ok(())
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "STORE_ERROR",
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Api(_) => "API_ERROR",
        CommandError::NotFound(_) => "NOT_FOUND",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Store(_) => ExitCode::from(5),
        CommandError::Filter(_) => ExitCode::from(1),
        CommandError::NotFound(_) => ExitCode::from(1),
        CommandError::Api(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventscout_core::filter::FilterError;

    #[test]
    fn test_error_codes() {
        let err = CommandError::NotFound("Event 'x' not found".to_string());
        assert_eq!(error_code(&err), "NOT_FOUND");

        let err = CommandError::Config("bad".to_string());
        assert_eq!(error_code(&err), "CONFIG_ERROR");
    }

    #[test]
    fn test_filter_error_code() {
        let err = CommandError::from(FilterError::InvalidPriceRange { min: 5.0, max: 1.0 });
        assert_eq!(error_code(&err), "FILTER_ERROR");
    }
}
