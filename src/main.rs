// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Campus - university portal assistant for your terminal
//!
//! Entry point for the Campus CLI application.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use campus::backend::HttpBackend;
use campus::cli::{Cli, Commands};
use campus::commands;
use campus::config::Settings;
use campus::error::Result;
use campus::tui::{self, TuiConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables client diagnostics without
    // requiring users to know target names up front. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        for directive in ["campus=debug"] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let base_url = cli
        .backend_url
        .clone()
        .unwrap_or_else(|| settings.backend.base_url.clone());
    let timeout = Duration::from_secs(settings.backend.timeout_secs);
    let backend = Arc::new(HttpBackend::new(&base_url, timeout)?);

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = TuiConfig {
                backend_url: backend.base_url().to_string(),
                bot_name: settings.ui.bot_name.clone(),
            };
            tui::run_tui(config, backend).await
        }
        Some(Commands::Ask(args)) => commands::run_ask(backend.as_ref(), &args.text.join(" ")).await,
        Some(Commands::Search(args)) => {
            commands::run_search(backend.as_ref(), &args.query.join(" ")).await
        }
        Some(Commands::News) => commands::run_news(backend.as_ref()).await,
    }
}
