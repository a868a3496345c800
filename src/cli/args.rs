// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Campus.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Campus - university portal assistant for your terminal
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(version, about = "University portal assistant for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Portal address override (takes precedence over settings)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive terminal client (default when no command given)
    Tui,

    /// Ask the portal assistant a single question (non-interactive)
    Ask(AskArgs),

    /// Search the portal and print the results
    Search(SearchArgs),

    /// Print the portal news list
    News,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question, taken as the rest of the command line
    #[arg(trailing_var_arg = true, required = true)]
    pub text: Vec<String>,
}

/// Arguments for the search subcommand
#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// The query, taken as the rest of the command line
    #[arg(trailing_var_arg = true, required = true)]
    pub query: Vec<String>,
}
