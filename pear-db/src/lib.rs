//! pear-db: the single MySQL connection shared by a pear process
//!
//! ```ignore
//! let config = DatabaseConfig::load(None)?;
//! let db = Database::shared(&config).await;
//! db.execute("UPDATE pears SET ripe = 1").await?;
//! ```

pub mod config;
pub mod connection;
pub mod error;

pub use config::{load_dotenv, DatabaseConfig};
pub use connection::Database;
pub use error::{DbError, Result};
