// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};

use crate::Error;
use crate::datetime::{parse_clock, parse_day};
use crate::localdb::WindowRecord;

/// The admin-configured open/close range for one date.
///
/// There is at most one window per date; writing a new one replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub date: Date,

    /// Opening time; the first slot starts here.
    pub start: Time,

    /// Closing time, exclusive: no slot starts at or after it.
    pub end: Time,
}

impl TryFrom<WindowRecord> for AvailabilityWindow {
    type Error = Error;

    fn try_from(record: WindowRecord) -> Result<Self, Error> {
        Ok(Self {
            date: parse_day(&record.date)?,
            start: parse_clock(&record.start_time)?,
            end: parse_clock(&record.end_time)?,
        })
    }
}
