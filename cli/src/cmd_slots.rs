// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use slotbook_core::{Slotbook, format_clock, format_day};

use crate::util::parse_day_arg;

/// List the bookable slots for a date.
#[derive(Debug, Clone)]
pub struct CmdSlots {
    pub date: String,
}

impl CmdSlots {
    pub const NAME: &str = "slots";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List bookable slots for a date")
            .arg(arg!([DATE] "Date (dd-MM-yyyy, today, or tomorrow)").default_value("today"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let date = matches
            .get_one::<String>("DATE")
            .cloned()
            .unwrap_or_else(|| "today".to_string());
        Self { date }
    }

    pub async fn run(self, book: &Slotbook) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing open slots...");
        let date = parse_day_arg(&self.date)?;

        let slots = book.open_slots(date).await?;
        if slots.is_empty() {
            println!("No open slots on {}.", format_day(date));
            return Ok(());
        }

        let labels: Vec<String> = slots.iter().map(|t| format_clock(*t)).collect();
        println!("{}", labels.join("  "));
        Ok(())
    }
}
