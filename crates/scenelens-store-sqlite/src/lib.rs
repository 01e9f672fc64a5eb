//! SQLite backend for the Scenelens scene store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. Each operation is a single
//! short-lived unit of work; no lock is ever held across an await point
//! visible to callers.

mod encode;
mod query;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use query::FilterParams;
pub use store::{SceneDocument, SceneStore};

#[cfg(test)]
mod tests;
