//! Command dispatch logic for taskhint

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::debug;

use taskhint_core::config::ServiceConfig;
use taskhint_core::error::{Result, SuggestError};

use crate::cli::{Cli, Commands};
use crate::commands;

mod macros;

use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = ServiceConfig::discover(cli.config.as_deref())?;
    trace_command!(cli, start, "load_config");

    let result = match &cli.command {
        Commands::Serve { bind } => block_on(commands::serve::execute(config, bind.as_deref())),

        Commands::Rank { text, tasks, top_k } => {
            commands::rank::execute(cli, config, text, tasks.as_deref(), *top_k)
        }

        Commands::Category { title, description } => {
            commands::category::execute(cli, config, title, description)
        }

        Commands::Suggest {
            text,
            tasks,
            server,
        } => block_on(commands::suggest::execute(
            cli,
            &config,
            text,
            tasks.as_deref(),
            server,
        )),

        Commands::Watch {
            tasks,
            server,
            delay_ms,
        } => block_on(commands::watch::execute(
            cli,
            &config,
            tasks.as_deref(),
            server,
            Duration::from_millis(*delay_ms),
        )),
    };

    debug!(elapsed = ?start.elapsed(), "command");
    result
}

/// Run an async command to completion on a fresh multi-threaded runtime
fn block_on<F>(future: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| SuggestError::failed("start async runtime", e))?;
    runtime.block_on(future)
}
