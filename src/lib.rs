// src/lib.rs
// Formacao - training programs with validated enrollment
//
// Architecture:
// - Domain-centric: validation rules and entities live in `domain`
// - Explicit: every rule violation is a typed `DomainError`
// - Event-driven: the catalog publishes facts through the event bus
// - In-memory only: nothing is persisted

pub mod domain;
pub mod error;
pub mod events;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_duracao,
    validate_enrollment,
    validate_nome,
    // Content
    ContentItem,
    DomainError,
    DomainResult,
    // Level
    Level,
    // Program
    Program,
    // User
    User,
    DURACAO_PADRAO,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EnrollmentRejected, EventBus, EventLogEntry,
    ProgramRegistered, UsersEnrolled,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogConfig, CatalogService, CreateProgramRequest, EnrollRequest};
