//! Critical Program Invariants:
//!
//! 1. Program name cannot be empty
//! 2. Content order is the curriculum order and never changes
//! 3. Duplicate content items are allowed
//! 4. A user appears at most once in the enrolled set
//! 5. Re-enrolling a user is an explicit error, never a silent no-op
//! 6. A rejected batch enrolls nobody
//! 7. Enrollment only grows (no unenroll)

pub mod entity;

pub use entity::{Program, ProgramRecord};
