// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::Error;

/// Store for the `timeslots` table: one availability window per date.
#[derive(Debug, Clone)]
pub struct Windows {
    pool: SqlitePool,
}

impl Windows {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Replaces any window for `date` in a single statement, so a
    /// concurrent read sees the old row or the new one, never neither.
    pub async fn upsert(
        &self,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<(), Error> {
        const SQL: &str = "\
INSERT INTO timeslots (date, start_time, end_time)
VALUES (?, ?, ?)
ON CONFLICT(date) DO UPDATE SET
    start_time = excluded.start_time,
    end_time   = excluded.end_time;
";

        sqlx::query(SQL)
            .bind(date)
            .bind(start_time)
            .bind(end_time)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, date: &str) -> Result<Option<WindowRecord>, Error> {
        const SQL: &str = "\
SELECT date, start_time, end_time
FROM timeslots
WHERE date = ?;
";

        sqlx::query_as(SQL)
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct WindowRecord {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}
