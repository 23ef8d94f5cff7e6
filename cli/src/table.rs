// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Column of a text table.
pub trait TableColumn<T> {
    fn name(&self) -> &str;
    fn format(&self, data: &T) -> String;
}

/// Left-aligned text table with a bold header row.
///
/// Padding is computed from display width, not byte length, so wide
/// characters in names line up.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self { columns, data }
    }

    pub fn write_to(&self, w: &mut impl io::Write) -> io::Result<()> {
        let rows: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|item| self.columns.iter().map(|col| col.format(item)).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|col| col.name().width()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let last = self.columns.len().saturating_sub(1);
        for (i, column) in self.columns.iter().enumerate() {
            let name = column.name();
            write_cell(w, &name.bold().to_string(), name.width(), widths[i], i == last)?;
        }
        writeln!(w)?;

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                write_cell(w, cell, cell.width(), widths[i], i == last)?;
            }
            writeln!(w)?;
        }

        Ok(())
    }
}

fn write_cell(
    w: &mut impl io::Write,
    text: &str,
    text_width: usize,
    column_width: usize,
    last: bool,
) -> io::Result<()> {
    write!(w, "{text}")?;
    if !last {
        let pad = column_width.saturating_sub(text_width) + 2;
        write!(w, "{:pad$}", "")?;
    }
    Ok(())
}
