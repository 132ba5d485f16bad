//! carepath-storage
//!
//! Key-based document storage. A [`store::DocumentStore`] trait with an S3
//! backend for deployments and an in-memory backend for local runs and tests.

pub mod client;
pub mod error;
pub mod json;
pub mod memory;
pub mod objects;
pub mod store;
