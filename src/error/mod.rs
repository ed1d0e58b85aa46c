// src/error/mod.rs
//
// Application-level errors: wraps domain violations with the failures
// that only exist above the domain (lookups, serialization).

pub mod types;

pub use types::{AppError, AppResult};
