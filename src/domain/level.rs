use serde::{Deserialize, Serialize};

/// Difficulty level of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Basic => write!(f, "BASIC"),
            Level::Intermediate => write!(f, "INTERMEDIATE"),
            Level::Advanced => write!(f, "ADVANCED"),
        }
    }
}
