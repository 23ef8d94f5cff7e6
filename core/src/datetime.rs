// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical text formats for stored dates and times.
//!
//! Dates are stored and rendered as `dd-MM-yyyy`, times as zero-padded
//! 24-hour `HH:mm`. Everything crossing the storage boundary goes through
//! these helpers, so a slot label always compares equal to the text the
//! store wrote for it.

use jiff::civil::{Date, Time};

use crate::Error;

/// Storage format for calendar days, e.g. `03-01-2026`.
pub(crate) const DAY_FORMAT: &str = "%d-%m-%Y";

/// Storage format for clock times, e.g. `09:05`.
pub(crate) const CLOCK_FORMAT: &str = "%H:%M";

/// Parses a `dd-MM-yyyy` day key.
pub fn parse_day(s: &str) -> Result<Date, Error> {
    Date::strptime(DAY_FORMAT, s).map_err(|_| Error::InvalidDay(s.to_string()))
}

/// Renders a day as `dd-MM-yyyy`.
pub fn format_day(day: Date) -> String {
    day.strftime(DAY_FORMAT).to_string()
}

/// Parses a 24-hour `HH:mm` clock time.
pub fn parse_clock(s: &str) -> Result<Time, Error> {
    Time::strptime(CLOCK_FORMAT, s).map_err(|_| Error::InvalidClock(s.to_string()))
}

/// Renders a clock time as zero-padded `HH:mm`.
pub fn format_clock(time: Time) -> String {
    time.strftime(CLOCK_FORMAT).to_string()
}
