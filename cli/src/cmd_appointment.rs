// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg, value_parser};
use slotbook_core::{
    AppointmentConditions, AppointmentDraft, Slotbook, format_clock, format_day,
};

use crate::appointment_formatter::AppointmentFormatter;
use crate::util::{arg_date, arg_time, get_date, get_time, parse_clock_arg, parse_day_arg};

/// List appointments, optionally restricted to one date.
#[derive(Debug, Clone)]
pub struct CmdAppointmentList {
    pub date: Option<String>,
}

impl CmdAppointmentList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List appointments, chronologically")
            .arg(arg_date().required(false))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
        }
    }

    pub async fn run(self, book: &Slotbook) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing appointments...");
        let date = match &self.date {
            Some(s) => Some(parse_day_arg(s)?),
            None => None,
        };

        let appointments = book.appointments(&AppointmentConditions { date }).await?;
        if appointments.is_empty() {
            println!("No appointments found.");
            return Ok(());
        }

        let formatter = AppointmentFormatter::new();
        formatter.write(&mut io::stdout(), &appointments)?;
        Ok(())
    }
}

/// Edit an appointment; omitted fields keep their current values.
#[derive(Debug, Clone)]
pub struct CmdAppointmentEdit {
    pub id: i64,
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl CmdAppointmentEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an appointment")
            .arg(arg!(<ID> "Appointment id").value_parser(value_parser!(i64)))
            .arg(arg!(-n --name <NAME> "New name").required(false))
            .arg(arg_date().required(false))
            .arg(arg_time().required(false))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let id = matches
            .get_one::<i64>("ID")
            .copied()
            .ok_or("ID is required")?;
        Ok(Self {
            id,
            name: matches.get_one::<String>("name").cloned(),
            date: get_date(matches),
            time: get_time(matches),
        })
    }

    pub async fn run(self, book: &Slotbook) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing appointment...");
        let current = book.appointment(self.id).await?;

        // The store replaces the whole row; fill the gaps from the
        // current values first.
        let draft = AppointmentDraft {
            name: self.name.unwrap_or(current.name),
            date: match &self.date {
                Some(s) => parse_day_arg(s)?,
                None => current.date,
            },
            time: match &self.time {
                Some(s) => parse_clock_arg(s)?,
                None => current.time,
            },
        };

        let updated = book.update_appointment(self.id, draft).await?;
        println!(
            "Updated appointment #{}: {} at {} on {}.",
            updated.id,
            updated.name,
            format_clock(updated.time),
            format_day(updated.date),
        );
        Ok(())
    }
}

/// Cancel an appointment, freeing its slot.
#[derive(Debug, Clone)]
pub struct CmdAppointmentCancel {
    pub id: i64,
}

impl CmdAppointmentCancel {
    pub const NAME: &str = "cancel";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Cancel an appointment")
            .arg(arg!(<ID> "Appointment id").value_parser(value_parser!(i64)))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let id = matches
            .get_one::<i64>("ID")
            .copied()
            .ok_or("ID is required")?;
        Ok(Self { id })
    }

    pub async fn run(self, book: &Slotbook) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "cancelling appointment...");
        book.cancel_appointment(self.id).await?;
        println!("Cancelled appointment #{}.", self.id);
        Ok(())
    }
}
