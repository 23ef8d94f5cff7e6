// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use slotbook_core::{Slotbook, format_clock, format_day};

use crate::util::{parse_clock_arg, parse_day_arg};

/// Set the availability window for a date, replacing any existing one.
#[derive(Debug, Clone)]
pub struct CmdWindowSet {
    pub date: String,
    pub from: String,
    pub to: String,
}

impl CmdWindowSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set the availability window for a date")
            .arg(arg!(<DATE> "Date (dd-MM-yyyy, today, or tomorrow)"))
            .arg(arg!(--from <TIME> "Opening time (24-hour HH:mm)"))
            .arg(arg!(--to <TIME> "Closing time, exclusive (24-hour HH:mm)"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let date = matches
            .get_one::<String>("DATE")
            .cloned()
            .ok_or("DATE is required")?;
        let from = matches
            .get_one::<String>("from")
            .cloned()
            .ok_or("--from is required")?;
        let to = matches
            .get_one::<String>("to")
            .cloned()
            .ok_or("--to is required")?;
        Ok(Self { date, from, to })
    }

    pub async fn run(self, book: &Slotbook) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting availability window...");
        let window = book
            .set_window(
                parse_day_arg(&self.date)?,
                parse_clock_arg(&self.from)?,
                parse_clock_arg(&self.to)?,
            )
            .await?;

        println!(
            "Window on {}: {}-{}",
            format_day(window.date),
            format_clock(window.start),
            format_clock(window.end),
        );
        Ok(())
    }
}

/// Show the availability window for a date.
#[derive(Debug, Clone)]
pub struct CmdWindowShow {
    pub date: String,
}

impl CmdWindowShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the availability window for a date")
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
        tracing::debug!(?self, "showing availability window...");
        let date = parse_day_arg(&self.date)?;

        match book.window(date).await? {
            Some(window) => println!(
                "Window on {}: {}-{}",
                format_day(window.date),
                format_clock(window.start),
                format_clock(window.end),
            ),
            None => println!("No availability window on {}.", format_day(date)),
        }
        Ok(())
    }
}
