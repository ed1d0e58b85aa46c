// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod content;
pub mod level;
pub mod program;
pub mod user;
pub mod validacoes;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Content Domain
pub use content::{ContentItem, ContentItemRecord, DURACAO_PADRAO};

// Level
pub use level::Level;

// Program Domain
pub use program::{Program, ProgramRecord};

// User Domain
pub use user::User;

// Validation rules
pub use validacoes::{validate_duracao, validate_enrollment, validate_nome};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Content duration must be greater than zero, got {0} min")]
    InvalidDuration(i32),

    #[error("User {0} is already enrolled")]
    DuplicateEnrollment(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
