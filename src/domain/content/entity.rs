use serde::{Deserialize, Serialize};

use crate::domain::{validate_duracao, validate_nome, DomainError, DomainResult};

/// Duration (minutes) applied when none is given
pub const DURACAO_PADRAO: i32 = 60;

/// A named unit of educational material
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ContentItemRecord")]
pub struct ContentItem {
    /// Display name, stored as given
    nome: String,

    /// Duration in minutes
    duracao: i32,
}

/// Unvalidated wire shape; `duracao` may be omitted
#[derive(Debug, Deserialize)]
pub struct ContentItemRecord {
    pub nome: String,
    #[serde(default = "default_duracao")]
    pub duracao: i32,
}

fn default_duracao() -> i32 {
    DURACAO_PADRAO
}

impl ContentItem {
    /// Create a content item with the default duration
    pub fn new(nome: impl Into<String>) -> DomainResult<Self> {
        Self::with_duration(nome, DURACAO_PADRAO)
    }

    /// Create a content item with an explicit duration in minutes
    pub fn with_duration(nome: impl Into<String>, duracao: i32) -> DomainResult<Self> {
        let nome = nome.into();
        validate_nome("Content item", &nome)?;
        validate_duracao(duracao)?;
        Ok(Self { nome, duracao })
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn duracao(&self) -> i32 {
        self.duracao
    }
}

impl TryFrom<ContentItemRecord> for ContentItem {
    type Error = DomainError;

    fn try_from(record: ContentItemRecord) -> Result<Self, Self::Error> {
        ContentItem::with_duration(record.nome, record.duracao)
    }
}

impl std::fmt::Display for ContentItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} min)", self.nome, self.duracao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duration() {
        let item = ContentItem::new("Kotlin").unwrap();
        assert_eq!(item.nome(), "Kotlin");
        assert_eq!(item.duracao(), 60);
    }

    #[test]
    fn test_explicit_duration_is_kept() {
        let item = ContentItem::with_duration("Programação Orientada a Objetos", 240).unwrap();
        assert_eq!(item.duracao(), 240);

        let item = ContentItem::with_duration("Quiz", 1).unwrap();
        assert_eq!(item.duracao(), 1);
    }

    #[test]
    fn test_non_positive_duration_fails() {
        for d in [0, -1, -60] {
            assert_eq!(
                ContentItem::with_duration("Kotlin", d),
                Err(DomainError::InvalidDuration(d))
            );
        }
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(matches!(
            ContentItem::new("     "),
            Err(DomainError::InvalidName(_))
        ));
    }

    #[test]
    fn test_name_checked_before_duration() {
        assert!(matches!(
            ContentItem::with_duration("", 0),
            Err(DomainError::InvalidName(_))
        ));
    }

    #[test]
    fn test_display() {
        let item = ContentItem::with_duration("Jetpack Compose", 120).unwrap();
        assert_eq!(item.to_string(), "Jetpack Compose (120 min)");
    }

    #[test]
    fn test_deserialize_applies_default_and_validates() {
        let item: ContentItem = serde_json::from_str(r#"{"nome":"Kotlin"}"#).unwrap();
        assert_eq!(item.duracao(), DURACAO_PADRAO);

        assert!(serde_json::from_str::<ContentItem>(r#"{"nome":"Kotlin","duracao":0}"#).is_err());
        assert!(serde_json::from_str::<ContentItem>(r#"{"nome":" "}"#).is_err());
    }
}
