// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Argument helpers shared by the commands.

use std::error::Error;

use clap::{Arg, ArgMatches, arg};
use jiff::Zoned;
use jiff::civil::{Date, Time};
use slotbook_core::{parse_clock, parse_day};

/// The `--date` option. Callers mark it optional where a default applies.
pub fn arg_date() -> Arg {
    arg!(-d --date <DATE> "Date (dd-MM-yyyy, today, or tomorrow)")
}

pub fn get_date(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("date").cloned()
}

/// The `--time` option.
pub fn arg_time() -> Arg {
    arg!(-t --time <TIME> "Time (24-hour HH:mm)")
}

pub fn get_time(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("time").cloned()
}

/// The current date in the local timezone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Parses a date argument: `dd-MM-yyyy`, `today`, or `tomorrow`.
pub fn parse_day_arg(s: &str) -> Result<Date, Box<dyn Error>> {
    match s {
        "today" => Ok(today()),
        "tomorrow" => Ok(today().tomorrow()?),
        _ => Ok(parse_day(s)?),
    }
}

/// Parses a 24-hour `HH:mm` time argument.
pub fn parse_clock_arg(s: &str) -> Result<Time, Box<dyn Error>> {
    Ok(parse_clock(s)?)
}
