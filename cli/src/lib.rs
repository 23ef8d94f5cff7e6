// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for Slotbook: a user surface for listing and
//! booking slots, and an admin surface for windows and appointments.

mod appointment_formatter;
mod cli;
mod cmd_appointment;
mod cmd_book;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_slots;
mod cmd_window;
mod config;
mod table;
mod util;

use std::error::Error;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub use crate::cli::{Cli, Commands};

/// Run the Slotbook command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}
