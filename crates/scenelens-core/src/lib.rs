//! Core types for the Scenelens scene-analysis store.
//!
//! This crate holds the taxonomy model, the concrete social-event
//! catalog, and the validation engine. It is deliberately free of
//! database and network dependencies; the backend and CLI crates depend
//! on it, it depends on nothing but serde.

pub mod catalog;
pub mod error;
pub mod record;
pub mod schema;
pub mod validate;

pub use error::{Error, Result};
