// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Slotbook core: appointment-slot booking against per-date availability
//! windows, persisted in a local SQLite database.
//!
//! The entry point is [`Slotbook`], which owns the database handle and
//! exposes every operation: window management, slot resolution, and
//! booking CRUD.

mod appointment;
mod availability;
mod config;
mod datetime;
mod error;
mod localdb;
mod slotbook;
mod slots;

pub use crate::appointment::{Appointment, AppointmentConditions, AppointmentDraft};
pub use crate::availability::AvailabilityWindow;
pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{format_clock, format_day, parse_clock, parse_day};
pub use crate::error::Error;
pub use crate::slotbook::Slotbook;
pub use crate::slots::{DEFAULT_SLOT_INTERVAL_MINUTES, slot_starts, without_booked};
