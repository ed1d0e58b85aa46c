// src/services/catalog_service.rs
use crate::domain::{ContentItem, Level, Program, User};
use crate::error::{AppError, AppResult};
use crate::events::{EnrollmentRejected, EventBus, ProgramRegistered, UsersEnrolled};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use uuid::Uuid;

/// Catalog tunables
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Publish program and enrollment events on the bus
    pub emit_events: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { emit_events: true }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProgramRequest {
    pub nome: String,
    pub nivel: Level,
    pub conteudos: Vec<ContentItem>,
}

#[derive(Debug, Clone)]
pub struct EnrollRequest {
    pub program_id: Uuid,
    /// Batch in submission order
    pub usuarios: Vec<User>,
}

/// In-memory catalog of programs
///
/// Each program sits behind its own mutex, so concurrent batches for the
/// same program are checked and applied one at a time.
pub struct CatalogService {
    programs: RwLock<HashMap<Uuid, Arc<Mutex<Program>>>>,
    event_bus: Arc<EventBus>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(event_bus: Arc<EventBus>, config: CatalogConfig) -> Self {
        Self {
            programs: RwLock::new(HashMap::new()),
            event_bus,
            config,
        }
    }

    pub fn register_program(&self, request: CreateProgramRequest) -> AppResult<Uuid> {
        let program = Program::new(request.nome, request.nivel, request.conteudos)
            .map_err(AppError::Domain)?;

        let id = Uuid::new_v4();
        let nome = program.nome().to_string();
        let nivel = program.nivel();

        self.programs
            .write()
            .map_err(|_| AppError::Other("catalog lock poisoned".to_string()))?
            .insert(id, Arc::new(Mutex::new(program)));

        log::info!("Registered program '{}' ({}) as {}", nome, nivel, id);

        if self.config.emit_events {
            self.event_bus.emit(ProgramRegistered::new(id, nome, nivel));
        }

        Ok(id)
    }

    /// Enroll a batch into one program; nobody is enrolled if any candidate
    /// already is.
    pub fn enroll(&self, request: EnrollRequest) -> AppResult<()> {
        let program = self.find(request.program_id)?.ok_or(AppError::NotFound)?;

        // Check and insert under the same lock
        let outcome = {
            let mut guard = lock_program(&program)?;
            guard.enroll(&request.usuarios)
        };

        match outcome {
            Ok(()) => {
                let usuarios: Vec<String> =
                    request.usuarios.iter().map(|u| u.nome().to_string()).collect();
                log::info!(
                    "Enrolled {} user(s) into {}: {}",
                    usuarios.len(),
                    request.program_id,
                    usuarios.join(", ")
                );
                if self.config.emit_events {
                    self.event_bus
                        .emit(UsersEnrolled::new(request.program_id, usuarios));
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("Enrollment into {} rejected: {}", request.program_id, err);
                if self.config.emit_events {
                    self.event_bus
                        .emit(EnrollmentRejected::new(request.program_id, err.to_string()));
                }
                Err(AppError::Domain(err))
            }
        }
    }

    /// Snapshot of a program's current state
    pub fn get_program(&self, program_id: Uuid) -> AppResult<Option<Program>> {
        let Some(program) = self.find(program_id)? else {
            return Ok(None);
        };
        let snapshot = lock_program(&program)?.clone();
        Ok(Some(snapshot))
    }

    /// Snapshots of every program, in no particular order
    pub fn list_programs(&self) -> AppResult<Vec<(Uuid, Program)>> {
        let programs = self
            .programs
            .read()
            .map_err(|_| AppError::Other("catalog lock poisoned".to_string()))?;

        let snapshots: AppResult<Vec<(Uuid, Program)>> = programs
            .iter()
            .map(|(id, program)| Ok((*id, lock_program(program)?.clone())))
            .collect();
        snapshots
    }

    pub fn export_program_json(&self, program_id: Uuid) -> AppResult<String> {
        let program = self.get_program(program_id)?.ok_or(AppError::NotFound)?;
        Ok(serde_json::to_string_pretty(&program)?)
    }

    fn find(&self, program_id: Uuid) -> AppResult<Option<Arc<Mutex<Program>>>> {
        let programs = self
            .programs
            .read()
            .map_err(|_| AppError::Other("catalog lock poisoned".to_string()))?;
        Ok(programs.get(&program_id).cloned())
    }
}

fn lock_program(program: &Mutex<Program>) -> AppResult<MutexGuard<'_, Program>> {
    program
        .lock()
        .map_err(|_| AppError::Other("program lock poisoned".to_string()))
}
