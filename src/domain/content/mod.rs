//! Content Item Invariants:
//!
//! 1. Name cannot be empty or whitespace-only
//! 2. Duration is expressed in minutes and is always > 0
//! 3. An omitted duration defaults to 60 minutes, before validation
//! 4. Immutable after construction

pub mod entity;

pub use entity::{ContentItem, ContentItemRecord, DURACAO_PADRAO};
