//! Technical concepts catalog: a read-only registry of categories and concepts.
//!
//! The content ships as embedded JSON, is parsed and validated once at startup,
//! and is never mutated afterwards. `AppState` carries it as `Arc<Catalog>`.

pub mod browser;
pub mod handlers;
pub mod navigator;
pub mod viewer;

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::models::catalog::{Category, CategoryKey, Concept};
use crate::models::icon::Icon;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Category '{0}' appears more than once")]
    DuplicateCategory(CategoryKey),

    #[error("Category '{0}' is missing from the catalog")]
    MissingCategory(CategoryKey),

    #[error("Category '{0}' has no concepts")]
    EmptyCategory(CategoryKey),

    #[error("Concept '{name}' appears more than once in '{category}'")]
    DuplicateConcept { category: CategoryKey, name: String },

    #[error("Concepts in '{category}' share the slug '{slug}'")]
    DuplicateSlug { category: CategoryKey, slug: String },

    #[error("Concept '{concept}' has a non-absolute link '{link}'")]
    InvalidLink { concept: String, link: String },

    #[error("Blank {field} in '{category}'")]
    BlankField {
        category: CategoryKey,
        field: &'static str,
    },
}

/// Sidebar-level view of a category.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary<'a> {
    pub key: CategoryKey,
    pub title: &'a str,
    pub icon: Icon,
    pub description: &'a str,
    pub concept_count: usize,
}

impl<'a> CategorySummary<'a> {
    fn of(category: &'a Category) -> Self {
        Self {
            key: category.key,
            title: &category.title,
            icon: category.icon,
            description: &category.description,
            concept_count: category.concepts.len(),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    categories: Vec<Category>,
    /// `index[key.ordinal()]` is the position of that key in `categories`.
    index: [usize; CategoryKey::COUNT],
}

impl Catalog {
    /// Loads the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(raw)?;
        Self::new(categories)
    }

    /// Validates `categories` and builds the key index.
    /// Document order is kept as sidebar order.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut index = [usize::MAX; CategoryKey::COUNT];

        for (position, category) in categories.iter().enumerate() {
            let slot = &mut index[category.key.ordinal()];
            if *slot != usize::MAX {
                return Err(CatalogError::DuplicateCategory(category.key));
            }
            *slot = position;
            validate_category(category)?;
        }

        if let Some(missing) = CategoryKey::ALL
            .into_iter()
            .find(|key| index[key.ordinal()] == usize::MAX)
        {
            return Err(CatalogError::MissingCategory(missing));
        }

        Ok(Self { categories, index })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: CategoryKey) -> &Category {
        &self.categories[self.index[key.ordinal()]]
    }

    /// The category selected when a browsing session starts: the first one.
    pub fn default_key(&self) -> CategoryKey {
        self.categories[0].key
    }

    pub fn summaries(&self) -> Vec<CategorySummary<'_>> {
        self.categories.iter().map(CategorySummary::of).collect()
    }

    /// Looks up a concept by slug within a category.
    pub fn concept(&self, key: CategoryKey, slug: &str) -> Option<&Concept> {
        self.category(key)
            .concepts
            .iter()
            .find(|concept| concept.slug() == slug)
    }

    pub fn concept_count(&self) -> usize {
        self.categories.iter().map(|c| c.concepts.len()).sum()
    }

    pub fn explorable_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.concepts.iter())
            .filter(|concept| concept.is_explorable())
            .count()
    }
}

fn validate_category(category: &Category) -> Result<(), CatalogError> {
    let key = category.key;
    if category.title.trim().is_empty() {
        return Err(CatalogError::BlankField {
            category: key,
            field: "category title",
        });
    }
    if category.concepts.is_empty() {
        return Err(CatalogError::EmptyCategory(key));
    }

    let mut names = HashSet::new();
    let mut slugs = HashSet::new();

    for concept in &category.concepts {
        if concept.name.trim().is_empty() {
            return Err(CatalogError::BlankField {
                category: key,
                field: "concept name",
            });
        }
        if !names.insert(concept.name.as_str()) {
            return Err(CatalogError::DuplicateConcept {
                category: key,
                name: concept.name.clone(),
            });
        }
        let slug = concept.slug();
        if !slugs.insert(slug.clone()) {
            return Err(CatalogError::DuplicateSlug {
                category: key,
                slug,
            });
        }
        validate_details(key, concept)?;
    }

    Ok(())
}

fn validate_details(key: CategoryKey, concept: &Concept) -> Result<(), CatalogError> {
    let Some(details) = &concept.details else {
        return Ok(());
    };

    if details.overview.trim().is_empty() {
        return Err(CatalogError::BlankField {
            category: key,
            field: "concept overview",
        });
    }

    let links = details
        .key_techniques
        .iter()
        .flat_map(|t| t.use_cases.iter().map(|u| u.link.as_str()))
        .chain(details.common_problems.iter().map(|p| p.link.as_str()));

    for link in links {
        if !is_absolute_url(link) {
            return Err(CatalogError::InvalidLink {
                concept: concept.name.clone(),
                link: link.to_string(),
            });
        }
    }

    Ok(())
}

fn is_absolute_url(link: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| link.len() > scheme.len() && link.starts_with(scheme))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::catalog::{
        Category, CategoryKey, Concept, ConceptDetails, Difficulty, Problem, Technique, UseCase,
    };
    use crate::models::icon::Icon;

    pub fn concept(name: &str, with_details: bool) -> Concept {
        Concept {
            name: name.to_string(),
            description: format!("{name} description"),
            difficulty: Difficulty::Beginner,
            topics: vec!["Topic A".to_string(), "Topic B".to_string()],
            details: with_details.then(|| ConceptDetails {
                overview: format!("{name} overview"),
                time_complexity: Some("O(n)".to_string()),
                space_complexity: Some("O(1)".to_string()),
                key_techniques: vec![Technique {
                    name: "Technique".to_string(),
                    explanation: "Explanation".to_string(),
                    code_example: "ps aux | grep python".to_string(),
                    use_cases: vec![UseCase {
                        label: "Use case".to_string(),
                        link: "https://example.com/use-case".to_string(),
                    }],
                }],
                common_problems: vec![Problem {
                    name: "Problem".to_string(),
                    link: "https://example.com/problem".to_string(),
                }],
            }),
        }
    }

    pub fn category(key: CategoryKey, concepts: Vec<Concept>) -> Category {
        Category {
            key,
            title: format!("{key} title"),
            icon: Icon::Server,
            description: format!("{key} description"),
            concepts,
        }
    }

    /// One category per key; each has an inert concept and an explorable one.
    pub fn categories() -> Vec<Category> {
        CategoryKey::ALL
            .into_iter()
            .map(|key| {
                category(
                    key,
                    vec![
                        concept(&format!("{key} Inert"), false),
                        concept(&format!("{key} Deep Dive"), true),
                    ],
                )
            })
            .collect()
    }
}
