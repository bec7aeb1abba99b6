use serde::Serialize;

use crate::catalog::{Catalog, CategorySummary};
use crate::models::catalog::{Category, CategoryKey, Concept, Difficulty};
use crate::models::icon::Icon;

/// Sidebar entry with its selection state.
#[derive(Debug, Clone, Serialize)]
pub struct SidebarEntry<'a> {
    #[serde(flatten)]
    pub summary: CategorySummary<'a>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryHeader<'a> {
    pub key: CategoryKey,
    pub title: &'a str,
    pub icon: Icon,
    pub description: &'a str,
}

/// A concept as listed under the selected category.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptCard<'a> {
    pub name: &'a str,
    pub slug: String,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub topics: &'a [String],
    /// Set when the concept can be opened in the detail viewer.
    pub explorable: bool,
}

impl<'a> ConceptCard<'a> {
    fn of(concept: &'a Concept) -> Self {
        Self {
            name: &concept.name,
            slug: concept.slug(),
            description: &concept.description,
            difficulty: concept.difficulty,
            topics: &concept.topics,
            explorable: concept.is_explorable(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage<'a> {
    pub sidebar: Vec<SidebarEntry<'a>>,
    pub category: CategoryHeader<'a>,
    pub concepts: Vec<ConceptCard<'a>>,
}

/// Holds the currently selected category. Exactly one category is selected
/// at any time; a fresh navigator selects the catalog's first category.
#[derive(Debug, Clone)]
pub struct CatalogNavigator<'a> {
    catalog: &'a Catalog,
    selected: CategoryKey,
}

impl<'a> CatalogNavigator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selected: catalog.default_key(),
        }
    }

    pub fn select_category(&mut self, key: CategoryKey) {
        self.selected = key;
    }

    pub fn selected_key(&self) -> CategoryKey {
        self.selected
    }

    pub fn current_category(&self) -> &'a Category {
        self.catalog.category(self.selected)
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry<'a>> {
        self.catalog
            .summaries()
            .into_iter()
            .map(|summary| SidebarEntry {
                active: summary.key == self.selected,
                summary,
            })
            .collect()
    }

    pub fn visible_concepts(&self) -> Vec<ConceptCard<'a>> {
        self.current_category()
            .concepts
            .iter()
            .map(ConceptCard::of)
            .collect()
    }

    pub fn page(&self) -> CategoryPage<'a> {
        let category = self.current_category();
        CategoryPage {
            sidebar: self.sidebar(),
            category: CategoryHeader {
                key: category.key,
                title: &category.title,
                icon: category.icon,
                description: &category.description,
            },
            concepts: self.visible_concepts(),
        }
    }
}
