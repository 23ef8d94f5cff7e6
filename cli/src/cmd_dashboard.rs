// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use colored::Colorize;
use slotbook_core::{AppointmentConditions, Slotbook, format_clock, format_day};

use crate::appointment_formatter::AppointmentFormatter;
use crate::util::today;

/// Today's window, open slots, and appointments at a glance.
#[derive(Debug, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show today's window, open slots, and appointments")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, book: &Slotbook) -> Result<(), Box<dyn Error>> {
        tracing::debug!("generating dashboard...");
        let day = today();

        println!("🗓️ {}", format_day(day).bold());
        match book.window(day).await? {
            Some(window) => {
                println!(
                    "Window: {}-{}",
                    format_clock(window.start),
                    format_clock(window.end)
                );
                let slots = book.open_slots(day).await?;
                if slots.is_empty() {
                    println!("No open slots.");
                } else {
                    let labels: Vec<String> = slots.iter().map(|t| format_clock(*t)).collect();
                    println!("Open slots: {}", labels.join("  "));
                }
            }
            None => println!("No availability window set."),
        }
        println!();

        println!("📒 {}", "Appointments".bold());
        let appointments = book
            .appointments(&AppointmentConditions { date: Some(day) })
            .await?;
        if appointments.is_empty() {
            println!("None booked.");
        } else {
            let formatter = AppointmentFormatter::new();
            formatter.write(&mut io::stdout(), &appointments)?;
        }

        Ok(())
    }
}
