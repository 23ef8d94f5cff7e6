// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use slotbook_core::{Appointment, format_clock, format_day};

use crate::table::{Table, TableColumn};

/// Renders appointments as an aligned table.
#[derive(Debug)]
pub struct AppointmentFormatter {
    columns: Vec<AppointmentColumn>,
}

impl AppointmentFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                AppointmentColumn::Id,
                AppointmentColumn::Date,
                AppointmentColumn::Time,
                AppointmentColumn::Name,
            ],
        }
    }

    pub fn write(
        &self,
        w: &mut impl io::Write,
        appointments: &[Appointment],
    ) -> io::Result<()> {
        Table::new(&self.columns, appointments).write_to(w)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AppointmentColumn {
    Id,
    Date,
    Time,
    Name,
}

impl TableColumn<Appointment> for AppointmentColumn {
    fn name(&self) -> &str {
        match self {
            AppointmentColumn::Id => "ID",
            AppointmentColumn::Date => "DATE",
            AppointmentColumn::Time => "TIME",
            AppointmentColumn::Name => "NAME",
        }
    }

    fn format(&self, appointment: &Appointment) -> String {
        match self {
            AppointmentColumn::Id => format!("#{}", appointment.id),
            AppointmentColumn::Date => format_day(appointment.date),
            AppointmentColumn::Time => format_clock(appointment.time),
            AppointmentColumn::Name => appointment.name.clone(),
        }
    }
}
