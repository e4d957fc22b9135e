//! Application entry point.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse the command line.
//! 3. Load [`AppConfig`] (defaults on first run) and apply CLI overrides.
//! 4. Build the HTTP spell service and the [`SpellChecker`].
//! 5. Run one submission, or one per stdin line, on a single-threaded
//!    tokio runtime.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use spell_fixer::{
    app::SpellApp,
    cli::Cli,
    config::AppConfig,
    pipeline::SpellChecker,
    service::HttpSpellService,
};

async fn run(cli: Cli, config: AppConfig) -> Result<bool> {
    let service = Arc::new(HttpSpellService::from_config(&config.service));
    let app = SpellApp::new(SpellChecker::from_config(&config, service));

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    match cli.phrase() {
        Some(phrase) => app.run_once(&phrase, &mut out, &mut err).await,
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let failures = app.run_lines(stdin, &mut out, &mut err).await?;
            Ok(failures == 0)
        }
    }
}

fn main() -> Result<ExitCode> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2-3. CLI + configuration
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    log::info!(
        "spellchecker at {} (fold order: {})",
        config.service.base_url,
        config.pipeline.fold_order
    );
    cli.persist(&config)?;

    // 4-5. Single-threaded runtime; lookups interleave on one thread.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let ok = rt.block_on(run(cli, config))?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
