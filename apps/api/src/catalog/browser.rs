use crate::catalog::navigator::CatalogNavigator;
use crate::catalog::viewer::{ConceptViewer, DetailView};
use crate::catalog::Catalog;
use crate::models::catalog::CategoryKey;

/// One browsing session over the catalog: category selection plus the
/// detail modal. Created when the concepts page is entered and dropped when
/// it is left; nothing about it outlives the session.
#[derive(Debug, Clone)]
pub struct ConceptBrowser<'a> {
    navigator: CatalogNavigator<'a>,
    viewer: ConceptViewer<'a>,
}

impl<'a> ConceptBrowser<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            navigator: CatalogNavigator::new(catalog),
            viewer: ConceptViewer::new(),
        }
    }

    pub fn navigator(&self) -> &CatalogNavigator<'a> {
        &self.navigator
    }

    pub fn viewer(&self) -> &ConceptViewer<'a> {
        &self.viewer
    }

    /// Changes the listed category. The modal is left as it is.
    pub fn select_category(&mut self, key: CategoryKey) {
        self.navigator.select_category(key);
    }

    /// Opens the concept with `slug` from the selected category.
    /// Returns false when no such concept exists or it has no details.
    pub fn open_concept(&mut self, slug: &str) -> bool {
        self.navigator
            .current_category()
            .concepts
            .iter()
            .find(|concept| concept.slug() == slug)
            .is_some_and(|concept| self.viewer.open(concept))
    }

    pub fn close_detail(&mut self) {
        self.viewer.close();
    }

    /// Leaving the concepts page closes any open modal.
    pub fn navigate_away(&mut self) {
        self.viewer.close();
    }

    pub fn detail(&self) -> Option<DetailView<'a>> {
        self.viewer.detail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    fn catalog() -> Catalog {
        Catalog::new(fixtures::categories()).unwrap()
    }

    #[test]
    fn test_open_concept_in_selected_category() {
        let catalog = catalog();
        let mut browser = ConceptBrowser::new(&catalog);
        browser.select_category(CategoryKey::Dsa);

        assert!(browser.open_concept("dsa-deep-dive"));
        assert!(browser.viewer().is_open());
        assert_eq!(browser.detail().unwrap().name, "dsa Deep Dive");
    }

    #[test]
    fn test_open_concept_from_other_category_fails() {
        let catalog = catalog();
        let mut browser = ConceptBrowser::new(&catalog);
        assert!(!browser.open_concept("dsa-deep-dive"));
        assert!(!browser.viewer().is_open());
    }

    #[test]
    fn test_open_inert_concept_stays_closed() {
        let catalog = catalog();
        let mut browser = ConceptBrowser::new(&catalog);
        assert!(!browser.open_concept("system-design-inert"));
        assert!(browser.detail().is_none());
    }

    #[test]
    fn test_open_modal_always_has_details() {
        let catalog = catalog();
        let mut browser = ConceptBrowser::new(&catalog);
        for key in CategoryKey::ALL {
            browser.select_category(key);
            for card in browser.navigator().visible_concepts() {
                browser.open_concept(&card.slug);
                if let Some(concept) = browser.viewer().selected() {
                    assert!(concept.details.is_some());
                }
            }
        }
    }

    #[test]
    fn test_category_change_keeps_modal_and_navigate_away_closes_it() {
        let catalog = catalog();
        let mut browser = ConceptBrowser::new(&catalog);
        browser.select_category(CategoryKey::Linux);
        assert!(browser.open_concept("linux-deep-dive"));

        browser.select_category(CategoryKey::Databases);
        assert!(browser.viewer().is_open());

        browser.navigate_away();
        assert!(!browser.viewer().is_open());
    }

    #[test]
    fn test_close_detail() {
        let catalog = catalog();
        let mut browser = ConceptBrowser::new(&catalog);
        browser.select_category(CategoryKey::BackendApis);
        browser.open_concept("backend-apis-deep-dive");
        browser.close_detail();
        assert!(browser.viewer().selected().is_none());
    }
}
