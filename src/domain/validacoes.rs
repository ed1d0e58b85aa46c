// src/domain/validacoes.rs
//
// Validation rules shared by every entity constructor.
// Pure functions: no state, no I/O, failure is the only side effect.

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, User};

/// Name cannot be empty or whitespace-only.
/// `campo` identifies which entity the name belongs to.
pub fn validate_nome(campo: &str, nome: &str) -> DomainResult<()> {
    if nome.trim().is_empty() {
        return Err(DomainError::InvalidName(format!(
            "{} name cannot be empty",
            campo
        )));
    }
    Ok(())
}

/// Duration (minutes) must be strictly positive
pub fn validate_duracao(duracao: i32) -> DomainResult<()> {
    if duracao <= 0 {
        return Err(DomainError::InvalidDuration(duracao));
    }
    Ok(())
}

/// Checks candidates in order against the current enrollment and stops at
/// the first one already present. `inscritos` is never modified.
///
/// Candidates repeated inside the same batch are not checked against each
/// other; they collapse when inserted into the set.
pub fn validate_enrollment(candidatos: &[User], inscritos: &HashSet<User>) -> DomainResult<()> {
    if let Some(repetido) = candidatos.iter().find(|u| inscritos.contains(*u)) {
        return Err(DomainError::DuplicateEnrollment(repetido.nome().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(nome: &str) -> User {
        User::new(nome).unwrap()
    }

    #[test]
    fn test_blank_names_rejected() {
        for nome in ["", " ", "   ", "\t", "\n \t"] {
            assert!(matches!(
                validate_nome("User", nome),
                Err(DomainError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn test_name_error_mentions_field() {
        let err = validate_nome("Program", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid name: Program name cannot be empty");
    }

    #[test]
    fn test_non_blank_name_accepted() {
        assert!(validate_nome("User", " Hugo ").is_ok());
        assert!(validate_nome("User", "x").is_ok());
    }

    #[test]
    fn test_duration_threshold_is_strict() {
        assert_eq!(validate_duracao(0), Err(DomainError::InvalidDuration(0)));
        assert_eq!(validate_duracao(-15), Err(DomainError::InvalidDuration(-15)));
        assert_eq!(validate_duracao(i32::MIN), Err(DomainError::InvalidDuration(i32::MIN)));
        assert!(validate_duracao(1).is_ok());
        assert!(validate_duracao(i32::MAX).is_ok());
    }

    #[test]
    fn test_enrollment_reports_first_duplicate_in_order() {
        let inscritos: HashSet<User> = [user("Ana"), user("Emilia")].into_iter().collect();
        let candidatos = [user("Hugo"), user("Emilia"), user("Ana")];

        let err = validate_enrollment(&candidatos, &inscritos).unwrap_err();
        assert_eq!(err, DomainError::DuplicateEnrollment("Emilia".to_string()));
    }

    #[test]
    fn test_enrollment_does_not_touch_set() {
        let inscritos: HashSet<User> = [user("Ana")].into_iter().collect();
        let before = inscritos.clone();

        assert!(validate_enrollment(&[user("Hugo")], &inscritos).is_ok());
        assert!(validate_enrollment(&[user("Ana")], &inscritos).is_err());
        assert_eq!(inscritos, before);
    }

    #[test]
    fn test_repeated_candidate_in_batch_is_not_an_error() {
        let inscritos = HashSet::new();
        let hugo = user("Hugo");
        assert!(validate_enrollment(&[hugo.clone(), hugo], &inscritos).is_ok());
    }

    #[test]
    fn test_empty_batch_passes() {
        assert!(validate_enrollment(&[], &HashSet::new()).is_ok());
    }
}
