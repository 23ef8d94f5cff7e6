// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use slotbook_core::{AppointmentDraft, Slotbook, format_clock, format_day};

use crate::util::{arg_date, arg_time, get_date, get_time, parse_clock_arg, parse_day_arg};

/// Book a slot by name.
#[derive(Debug, Clone)]
pub struct CmdBook {
    pub name: String,
    pub date: String,
    pub time: String,
}

impl CmdBook {
    pub const NAME: &str = "book";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Book a slot")
            .arg(arg!(<NAME> "Who the appointment is for"))
            .arg(arg_date())
            .arg(arg_time())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let name = matches
            .get_one::<String>("NAME")
            .cloned()
            .ok_or("NAME is required")?;
        let date = get_date(matches).ok_or("--date is required")?;
        let time = get_time(matches).ok_or("--time is required")?;
        Ok(Self { name, date, time })
    }

    pub async fn run(self, book: &Slotbook) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "booking a slot...");
        let draft = AppointmentDraft {
            name: self.name,
            date: parse_day_arg(&self.date)?,
            time: parse_clock_arg(&self.time)?,
        };

        let appointment = book.book(draft).await?;
        println!(
            "Booked appointment #{} for {} at {} on {}.",
            appointment.id,
            appointment.name.bold(),
            format_clock(appointment.time),
            format_day(appointment.date),
        );
        Ok(())
    }
}
