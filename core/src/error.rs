// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Slotbook core errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Storage layer failure.
    Storage(sqlx::Error),

    /// Database migration failure while opening.
    Migrate(sqlx::migrate::MigrateError),

    /// A day key that is not `dd-MM-yyyy`.
    InvalidDay(String),

    /// A clock time that is not 24-hour `HH:mm`.
    InvalidClock(String),

    /// An availability window whose start is not before its end.
    InvalidWindow { start: String, end: String },

    /// A booking with an empty or whitespace-only name.
    BlankName,

    /// The slot already has a confirmed appointment.
    SlotTaken { date: String, time: String },

    /// No appointment with the given id.
    AppointmentNotFound(i64),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "storage error: {e}"),
            Self::Migrate(e) => write!(f, "migration error: {e}"),
            Self::InvalidDay(s) => write!(f, "invalid date '{s}', expected dd-MM-yyyy"),
            Self::InvalidClock(s) => write!(f, "invalid time '{s}', expected HH:mm"),
            Self::InvalidWindow { start, end } => {
                write!(f, "window start {start} is not before end {end}")
            }
            Self::BlankName => write!(f, "appointment name must not be blank"),
            Self::SlotTaken { date, time } => {
                write!(f, "slot {time} on {date} is already booked")
            }
            Self::AppointmentNotFound(id) => write!(f, "no appointment with id {id}"),
            Self::Config(e) => write!(f, "configuration error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e)
    }
}

impl From<sqlx::migrate::MigrateError> for Error {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migrate(e)
    }
}
