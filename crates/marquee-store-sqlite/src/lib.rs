//! SQLite backend for the Marquee booking store.
//!
//! Built on [`tokio_rusqlite`], which pins all database access to a dedicated
//! thread so the async runtime never blocks on I/O.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
