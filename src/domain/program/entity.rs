use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::{
    validate_enrollment, validate_nome, ContentItem, DomainError, DomainResult, Level, User,
};

/// A named curriculum at a difficulty level
/// Users enroll into it; the curriculum itself is fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProgramRecord")]
pub struct Program {
    /// Program name, stored as given
    nome: String,

    /// Difficulty level
    nivel: Level,

    /// Curriculum in teaching order
    conteudos: Vec<ContentItem>,

    /// Enrolled users (grows only through `enroll`)
    #[serde(serialize_with = "serialize_inscritos")]
    inscritos: HashSet<User>,
}

/// Unvalidated wire shape used when reading a program back
#[derive(Debug, Deserialize)]
pub struct ProgramRecord {
    pub nome: String,
    pub nivel: Level,
    pub conteudos: Vec<ContentItem>,
    #[serde(default)]
    pub inscritos: Vec<User>,
}

impl Program {
    /// Create a new Program with nobody enrolled
    /// Content items are already valid entities and are not re-checked
    pub fn new(
        nome: impl Into<String>,
        nivel: Level,
        conteudos: Vec<ContentItem>,
    ) -> DomainResult<Self> {
        let nome = nome.into();
        validate_nome("Program", &nome)?;
        Ok(Self {
            nome,
            nivel,
            conteudos,
            inscritos: HashSet::new(),
        })
    }

    /// Enroll a batch of users
    ///
    /// All or nothing: if any candidate is already enrolled the whole batch
    /// is rejected and the enrolled set is left untouched.
    pub fn enroll(&mut self, candidatos: &[User]) -> DomainResult<()> {
        validate_enrollment(candidatos, &self.inscritos)?;
        self.inscritos.extend(candidatos.iter().cloned());
        Ok(())
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn nivel(&self) -> Level {
        self.nivel
    }

    pub fn conteudos(&self) -> &[ContentItem] {
        &self.conteudos
    }

    pub fn inscritos(&self) -> &HashSet<User> {
        &self.inscritos
    }

    pub fn is_enrolled(&self, user: &User) -> bool {
        self.inscritos.contains(user)
    }

    /// Total curriculum length in minutes
    pub fn duracao_total(&self) -> i64 {
        self.conteudos.iter().map(|c| i64::from(c.duracao())).sum()
    }
}

impl TryFrom<ProgramRecord> for Program {
    type Error = DomainError;

    fn try_from(record: ProgramRecord) -> Result<Self, Self::Error> {
        let mut program = Program::new(record.nome, record.nivel, record.conteudos)?;
        program.enroll(&record.inscritos)?;
        Ok(program)
    }
}

// Sorted so exported snapshots are stable
fn serialize_inscritos<S>(inscritos: &HashSet<User>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut ordenados: Vec<&User> = inscritos.iter().collect();
    ordenados.sort();
    serializer.collect_seq(ordenados)
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nome)
    }
}
