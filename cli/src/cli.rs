// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = "roteiro")]
#[command(about = "Plan a trip: pick the dates, invite the guests, fill the days", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan a new trip and make it the active one
    New(NewArgs),

    /// Show the active trip, optionally previewing a new date range
    Show(ShowArgs),

    /// List the activity timeline of the active trip
    Activities,

    /// Add an activity to the active trip
    AddActivity(AddActivityArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Where the trip goes
    pub destination: String,

    /// Calendar days tapped to pick the range, in any order (YYYY-MM-DD)
    #[arg(long = "tap", value_name = "DATE", required = true)]
    pub taps: Vec<NaiveDate>,

    /// Guest e-mail to invite; repeat for more guests
    #[arg(long = "invite", value_name = "EMAIL")]
    pub invites: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Preview a reselection by tapping days without saving anything
    #[arg(long = "tap", value_name = "DATE")]
    pub taps: Vec<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct AddActivityArgs {
    /// What the activity is
    pub title: String,

    /// The chosen calendar day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub day: NaiveDate,

    /// Hour of the day, free text as typed ("9", "14", "9,5")
    #[arg(long, value_name = "HOUR")]
    pub hour: String,
}
