use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::icon::Icon;

/// Identifier of a top-level catalog category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    SystemDesign,
    Linux,
    Dsa,
    Databases,
    BackendApis,
}

impl CategoryKey {
    pub const COUNT: usize = 5;

    pub const ALL: [CategoryKey; Self::COUNT] = [
        CategoryKey::SystemDesign,
        CategoryKey::Linux,
        CategoryKey::Dsa,
        CategoryKey::Databases,
        CategoryKey::BackendApis,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::SystemDesign => "system-design",
            CategoryKey::Linux => "linux",
            CategoryKey::Dsa => "dsa",
            CategoryKey::Databases => "databases",
            CategoryKey::BackendApis => "backend-apis",
        }
    }

    /// Position of this key in `ALL`.
    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryKey {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub key: CategoryKey,
    pub title: String,
    pub icon: Icon,
    pub description: String,
    pub concepts: Vec<Concept>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ConceptDetails>,
}

impl Concept {
    /// A concept opens in the detail viewer only when it carries details.
    pub fn is_explorable(&self) -> bool {
        self.details.is_some()
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptDetails {
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_complexity: Option<String>,
    pub key_techniques: Vec<Technique>,
    pub common_problems: Vec<Problem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technique {
    pub name: String,
    pub explanation: String,
    /// Documentation snippet. Never parsed or executed.
    pub code_example: String,
    pub use_cases: Vec<UseCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCase {
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub link: String,
}

/// Lowercase ASCII alphanumeric runs joined by `-`.
/// "File System & Permissions" → "file-system-permissions".
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
