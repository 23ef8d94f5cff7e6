// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::Error;

/// Store for the `appointments` table.
#[derive(Debug, Clone)]
pub struct Appointments {
    pool: SqlitePool,
}

impl Appointments {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new appointment and returns the stored row.
    ///
    /// The `(date, time)` unique index turns a double booking into
    /// [`Error::SlotTaken`], even for writers that bypassed the resolver.
    pub async fn insert(
        &self,
        name: &str,
        date: &str,
        time: &str,
    ) -> Result<AppointmentRecord, Error> {
        const SQL: &str = "\
INSERT INTO appointments (name, date, time)
VALUES (?, ?, ?)
RETURNING id, name, date, time;
";

        sqlx::query_as(SQL)
            .bind(name)
            .bind(date)
            .bind(time)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| slot_taken_or_storage(e, date, time))
    }

    pub async fn get(&self, id: i64) -> Result<Option<AppointmentRecord>, Error> {
        const SQL: &str = "\
SELECT id, name, date, time
FROM appointments
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::from)
    }

    /// Lists appointments chronologically: by date then time without a
    /// filter, by time within one date.
    ///
    /// `dd-MM-yyyy` does not sort chronologically as text, so the
    /// unfiltered ORDER BY rebuilds a `yyyyMMdd` key.
    pub async fn list(&self, date: Option<&str>) -> Result<Vec<AppointmentRecord>, Error> {
        match date {
            Some(date) => {
                const SQL: &str = "\
SELECT id, name, date, time
FROM appointments
WHERE date = ?
ORDER BY time ASC;
";
                sqlx::query_as(SQL).bind(date).fetch_all(&self.pool).await
            }
            None => {
                const SQL: &str = "\
SELECT id, name, date, time
FROM appointments
ORDER BY substr(date, 7, 4) || substr(date, 4, 2) || substr(date, 1, 2) ASC, time ASC;
";
                sqlx::query_as(SQL).fetch_all(&self.pool).await
            }
        }
        .map_err(Error::from)
    }

    /// The time labels already booked on `date`, for the slot resolver.
    pub async fn booked_times(&self, date: &str) -> Result<Vec<String>, Error> {
        const SQL: &str = "SELECT time FROM appointments WHERE date = ?;";

        let rows: Vec<(String,)> = sqlx::query_as(SQL).bind(date).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|(time,)| time).collect())
    }

    /// Fully replaces name, date, and time. Returns `false` when no row
    /// has `id`.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        date: &str,
        time: &str,
    ) -> Result<bool, Error> {
        const SQL: &str = "\
UPDATE appointments
SET name = ?, date = ?, time = ?
WHERE id = ?;
";

        let result = sqlx::query(SQL)
            .bind(name)
            .bind(date)
            .bind(time)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| slot_taken_or_storage(e, date, time))?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when no row has `id`.
    pub async fn delete(&self, id: i64) -> Result<bool, Error> {
        const SQL: &str = "DELETE FROM appointments WHERE id = ?;";

        let result = sqlx::query(SQL).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

fn slot_taken_or_storage(e: sqlx::Error, date: &str, time: &str) -> Error {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => Error::SlotTaken {
            date: date.to_string(),
            time: time.to_string(),
        },
        _ => Error::Storage(e),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AppointmentRecord {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: String,
}
