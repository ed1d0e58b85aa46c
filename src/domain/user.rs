// src/domain/user.rs
//
// User Entity
//
// A person who can enroll into programs. Identified by name alone:
// two users built from the same name are the same user.

use serde::{Deserialize, Serialize};

use crate::domain::{validate_nome, DomainError, DomainResult};

/// Represents a user
///
/// CRITICAL INVARIANTS:
/// - Name is never blank
/// - Immutable after construction
/// - Equality and hashing use the name only
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct User {
    nome: String,
}

impl User {
    /// Create a new User
    /// The name is stored exactly as given (no trimming)
    pub fn new(nome: impl Into<String>) -> DomainResult<Self> {
        let nome = nome.into();
        validate_nome("User", &nome)?;
        Ok(Self { nome })
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }
}

impl TryFrom<String> for User {
    type Error = DomainError;

    fn try_from(nome: String) -> Result<Self, Self::Error> {
        User::new(nome)
    }
}

impl From<User> for String {
    fn from(user: User) -> Self {
        user.nome
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_user() {
        let user = User::new("Hugo Lacerda").unwrap();
        assert_eq!(user.nome(), "Hugo Lacerda");
    }

    #[test]
    fn test_name_is_not_trimmed() {
        let user = User::new("  Ana Maia ").unwrap();
        assert_eq!(user.nome(), "  Ana Maia ");
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(matches!(User::new(""), Err(DomainError::InvalidName(_))));
        assert!(matches!(User::new("   "), Err(DomainError::InvalidName(_))));
    }

    #[test]
    fn test_equal_names_are_same_user() {
        let a = User::new("Emilia").unwrap();
        let b = User::new("Emilia").unwrap();
        assert_eq!(a, b);

        let set: HashSet<User> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let user = User::new("Hugo").unwrap();
        assert_eq!(serde_json::to_string(&user).unwrap(), "\"Hugo\"");
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let ok: User = serde_json::from_str("\"Ana\"").unwrap();
        assert_eq!(ok.nome(), "Ana");
        assert!(serde_json::from_str::<User>("\"  \"").is_err());
    }
}
