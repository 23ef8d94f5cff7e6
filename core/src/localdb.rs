// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

mod appointments;
mod windows;

use std::path::PathBuf;

use sqlx::migrate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::Error;
pub(crate) use crate::localdb::appointments::{AppointmentRecord, Appointments};
pub(crate) use crate::localdb::windows::{WindowRecord, Windows};

/// Handle to the local SQLite database and its per-table stores.
#[derive(Debug, Clone)]
pub(crate) struct LocalDb {
    pool: SqlitePool,

    pub appointments: Appointments,
    pub windows: Windows,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `state_dir` is `None`, it opens an in-memory database.
    pub async fn open(state_dir: &Option<PathBuf>) -> Result<Self, Error> {
        const NAME: &str = "slotbook.db";

        let options = match state_dir {
            Some(dir) => {
                tracing::info!(path = %dir.display(), "connecting to SQLite database");
                SqliteConnectOptions::new()
                    .filename(dir.join(NAME))
                    .create_if_missing(true)
            }
            None => {
                tracing::info!("connecting to in-memory SQLite database");
                SqliteConnectOptions::new().in_memory(true)
            }
        };

        // One writer at a time is the access model; a single connection
        // also keeps every store handle on the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        let appointments = Appointments::new(pool.clone());
        let windows = Windows::new(pool.clone());
        Ok(LocalDb {
            pool,
            appointments,
            windows,
        })
    }

    /// Closes the underlying connection pool.
    pub async fn close(self) -> Result<(), Error> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}
