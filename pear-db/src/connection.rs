//! The MySQL connection handle
//!
//! One connect attempt, no timeout, no retry. The outcome is logged and a
//! failure is kept inside the handle instead of being returned: callers find
//! out on first use, when [`Database::connection`] hands back the original
//! driver error as [`DbError::Unavailable`].

use std::fmt;

use sqlx::mysql::MySqlConnection;
use sqlx::{ConnectOptions, Connection};
use tokio::sync::{Mutex, MutexGuard, OnceCell};
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::error::{DbError, Result};

/// Process-wide handle, created by the first [`Database::shared`] call
static SHARED: OnceCell<Database> = OnceCell::const_new();

/// A single MySQL connection, or the reason it could not be opened
pub struct Database {
    state: State,
    target: String,
}

enum State {
    /// One connection; statements take turns through the mutex
    Connected(Mutex<MySqlConnection>),
    Failed(String),
}

impl Database {
    /// Open one connection and log the outcome.
    ///
    /// Never fails: an unreachable server, bad credentials or an invalid URL
    /// all produce a handle whose first use returns the error.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let target = config.display_url();

        let options = match config.connect_options() {
            Ok(options) => options,
            Err(e) => return Self::failed(target, e.to_string()),
        };

        match options.connect().await {
            Ok(conn) => {
                info!(url = %target, "Connected to MySQL database");
                Self {
                    state: State::Connected(Mutex::new(conn)),
                    target,
                }
            }
            Err(e) => Self::failed(target, e.to_string()),
        }
    }

    fn failed(target: String, reason: String) -> Self {
        error!(url = %target, error = %reason, "Database connection failed");
        Self {
            state: State::Failed(reason),
            target,
        }
    }

    /// The process-wide handle.
    ///
    /// The first call connects with `config`; every later call returns the
    /// same handle and ignores its argument. Concurrent first callers wait on
    /// a single connect.
    pub async fn shared(config: &DatabaseConfig) -> &'static Database {
        SHARED.get_or_init(|| Self::connect(config)).await
    }

    /// The process-wide handle, if [`Database::shared`] has run
    pub fn global() -> Option<&'static Database> {
        SHARED.get()
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, State::Connected(_))
    }

    /// Masked URL this handle was opened against
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Exclusive access to the driver connection.
    ///
    /// `&mut *guard` is an `Executor`, so any sqlx query can run against it.
    pub async fn connection(&self) -> Result<MutexGuard<'_, MySqlConnection>> {
        match &self.state {
            State::Connected(conn) => Ok(conn.lock().await),
            State::Failed(reason) => Err(DbError::unavailable(reason.clone())),
        }
    }

    /// Round-trip to the server
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.ping().await?;
        Ok(())
    }

    /// Run one statement and return the number of rows it affected
    pub async fn execute(&self, sql: &str) -> Result<u64> {
        let mut conn = self.connection().await?;
        let result = sqlx::query(sql).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            State::Connected(_) => "connected",
            State::Failed(_) => "failed",
        };
        f.debug_struct("Database")
            .field("target", &self.target)
            .field("state", &state)
            .finish()
    }
}
