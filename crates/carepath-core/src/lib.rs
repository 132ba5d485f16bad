//! carepath-core
//!
//! Pure domain types and storage key conventions.
//! No storage or HTTP dependency — this is the shared vocabulary of the CarePath system.

pub mod error;
pub mod models;
pub mod store_keys;
