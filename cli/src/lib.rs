// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

mod calendar;
mod cli;
mod command;
mod config;
mod store;
mod timeline_formatter;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

pub use crate::{
    cli::{Cli, Commands},
    config::Config,
};

/// Run the roteiro command-line interface.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New(args) => command::command_new(cli.config, args),
        Commands::Show(args) => command::command_show(cli.config, args),
        Commands::Activities => command::command_activities(cli.config),
        Commands::AddActivity(args) => command::command_add_activity(cli.config, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{} {}", "Erro:".red(), e);
            ExitCode::FAILURE
        }
    }
}
