// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use jiff::civil::{Date, Time};
use tokio::fs;

use crate::appointment::{Appointment, AppointmentConditions, AppointmentDraft};
use crate::availability::AvailabilityWindow;
use crate::datetime::{format_clock, format_day};
use crate::localdb::LocalDb;
use crate::slots::{slot_starts, without_booked};
use crate::{Config, Error};

/// Slotbook application core.
///
/// Owns the configuration and the database handle; every operation on
/// windows, slots, and appointments goes through here.
#[derive(Debug, Clone)]
pub struct Slotbook {
    config: Config,
    db: LocalDb,
}

impl Slotbook {
    /// Creates a new Slotbook instance with the given configuration.
    pub async fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;
        prepare(&config).await?;

        let db = LocalDb::open(&config.state_dir).await?;
        Ok(Self { config, db })
    }

    /// The configured spacing between slot starts, in minutes.
    pub fn slot_interval_minutes(&self) -> u32 {
        self.config.slot_interval_minutes
    }

    /// Replaces the availability window for `date`.
    ///
    /// Appointments that the new window leaves outside of it are kept
    /// as-is; they stay listed and editable.
    pub async fn set_window(
        &self,
        date: Date,
        start: Time,
        end: Time,
    ) -> Result<AvailabilityWindow, Error> {
        if start >= end {
            return Err(Error::InvalidWindow {
                start: format_clock(start),
                end: format_clock(end),
            });
        }

        self.db
            .windows
            .upsert(&format_day(date), &format_clock(start), &format_clock(end))
            .await?;
        Ok(AvailabilityWindow { date, start, end })
    }

    /// The availability window for `date`, if one has been configured.
    pub async fn window(&self, date: Date) -> Result<Option<AvailabilityWindow>, Error> {
        match self.db.windows.get(&format_day(date)).await? {
            Some(record) => Ok(Some(record.try_into()?)),
            None => Ok(None),
        }
    }

    /// The bookable slots for `date`, chronologically: the window's slot
    /// grid minus already-booked times. No window means nothing is
    /// offered, whatever appointments exist.
    pub async fn open_slots(&self, date: Date) -> Result<Vec<Time>, Error> {
        let Some(window) = self.window(date).await? else {
            return Ok(Vec::new());
        };

        let candidates = slot_starts(window.start, window.end, self.config.slot_interval_minutes);
        let booked: HashSet<String> = self
            .db
            .appointments
            .booked_times(&format_day(date))
            .await?
            .into_iter()
            .collect();
        Ok(without_booked(candidates, &booked))
    }

    /// Books a slot. Fails with [`Error::SlotTaken`] when `(date, time)`
    /// already has an appointment.
    pub async fn book(&self, draft: AppointmentDraft) -> Result<Appointment, Error> {
        let name = valid_name(&draft.name)?;
        tracing::debug!(
            name,
            date = %format_day(draft.date),
            time = %format_clock(draft.time),
            "booking appointment"
        );

        let record = self
            .db
            .appointments
            .insert(name, &format_day(draft.date), &format_clock(draft.time))
            .await?;
        record.try_into()
    }

    /// One appointment by id.
    pub async fn appointment(&self, id: i64) -> Result<Appointment, Error> {
        match self.db.appointments.get(id).await? {
            Some(record) => record.try_into(),
            None => Err(Error::AppointmentNotFound(id)),
        }
    }

    /// Appointments matching `conds`, chronologically.
    pub async fn appointments(
        &self,
        conds: &AppointmentConditions,
    ) -> Result<Vec<Appointment>, Error> {
        let date = conds.date.map(format_day);
        let records = self.db.appointments.list(date.as_deref()).await?;
        records.into_iter().map(Appointment::try_from).collect()
    }

    /// Fully replaces an appointment's name, date, and time.
    pub async fn update_appointment(
        &self,
        id: i64,
        draft: AppointmentDraft,
    ) -> Result<Appointment, Error> {
        let name = valid_name(&draft.name)?;
        tracing::debug!(id, "updating appointment");

        let replaced = self
            .db
            .appointments
            .update(id, name, &format_day(draft.date), &format_clock(draft.time))
            .await?;
        if !replaced {
            return Err(Error::AppointmentNotFound(id));
        }

        Ok(Appointment {
            id,
            name: name.to_string(),
            date: draft.date,
            time: draft.time,
        })
    }

    /// Cancels an appointment, freeing its slot.
    pub async fn cancel_appointment(&self, id: i64) -> Result<(), Error> {
        tracing::debug!(id, "cancelling appointment");
        if !self.db.appointments.delete(id).await? {
            return Err(Error::AppointmentNotFound(id));
        }
        Ok(())
    }

    /// Closes the Slotbook instance, releasing the database.
    pub async fn close(self) -> Result<(), Error> {
        self.db.close().await
    }
}

fn valid_name(name: &str) -> Result<&str, Error> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::BlankName);
    }
    Ok(name)
}

async fn prepare(config: &Config) -> Result<(), Error> {
    if let Some(dir) = &config.state_dir {
        tracing::debug!(path = %dir.display(), "ensuring state directory exists");
        fs::create_dir_all(dir)
            .await
            .map_err(|e| Error::Config(format!("failed to create state directory: {e}")))?;
    }
    Ok(())
}
