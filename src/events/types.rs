// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Level;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// PROGRAM EVENTS
// ============================================================================

/// Emitted when a program is added to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub program_id: Uuid,
    pub nome: String,
    pub nivel: Level,
}

impl ProgramRegistered {
    pub fn new(program_id: Uuid, nome: String, nivel: Level) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            program_id,
            nome,
            nivel,
        }
    }
}

impl DomainEvent for ProgramRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProgramRegistered" }
}

// ============================================================================
// ENROLLMENT EVENTS
// ============================================================================

/// Emitted when a whole batch of users was enrolled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersEnrolled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub program_id: Uuid,
    /// Names in the order they were submitted
    pub usuarios: Vec<String>,
}

impl UsersEnrolled {
    pub fn new(program_id: Uuid, usuarios: Vec<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            program_id,
            usuarios,
        }
    }
}

impl DomainEvent for UsersEnrolled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UsersEnrolled" }
}

/// Emitted when a batch was refused; nobody from it was enrolled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRejected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub program_id: Uuid,
    pub motivo: String,
}

impl EnrollmentRejected {
    pub fn new(program_id: Uuid, motivo: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            program_id,
            motivo,
        }
    }
}

impl DomainEvent for EnrollmentRejected {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "EnrollmentRejected" }
}
