// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};

use crate::Error;
use crate::datetime::{parse_clock, parse_day};
use crate::localdb::AppointmentRecord;

/// A confirmed reservation of one slot on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Row id assigned by the store.
    pub id: i64,
    pub name: String,
    pub date: Date,
    pub time: Time,
}

/// Input for booking a new appointment or fully replacing an existing one.
#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub name: String,
    pub date: Date,
    pub time: Time,
}

/// Filters for listing appointments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentConditions {
    /// Restrict to a single date.
    pub date: Option<Date>,
}

impl TryFrom<AppointmentRecord> for Appointment {
    type Error = Error;

    fn try_from(record: AppointmentRecord) -> Result<Self, Error> {
        Ok(Self {
            id: record.id,
            name: record.name,
            date: parse_day(&record.date)?,
            time: parse_clock(&record.time)?,
        })
    }
}
