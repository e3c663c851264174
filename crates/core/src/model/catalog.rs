use std::collections::HashSet;
use thiserror::Error;

use crate::model::item::{Item, ItemCode};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog contains no items")]
    Empty,

    #[error("duplicate item code: {0}")]
    DuplicateCode(ItemCode),

    #[error("duplicate item name: {0}")]
    DuplicateName(String),
}

/// The full, static, ordered collection of quiz items.
///
/// Source order is preserved and acts as the tie-break order for item
/// selection. A catalog is never empty and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from items in source order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty item list, and
    /// `DuplicateCode`/`DuplicateName` when uniqueness is violated.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        for item in &items {
            if !codes.insert(item.code().clone()) {
                return Err(CatalogError::DuplicateCode(item.code().clone()));
            }
            if !names.insert(item.name().to_owned()) {
                return Err(CatalogError::DuplicateName(item.name().to_owned()));
            }
        }

        Ok(Self { items })
    }

    /// Items in source order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false after construction; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn by_code(&self, code: &ItemCode) -> Option<&Item> {
        self.items.iter().find(|item| item.code() == code)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Display name for a code, when the catalog knows it.
    #[must_use]
    pub fn name_of(&self, code: &ItemCode) -> Option<&str> {
        self.by_code(code).map(Item::name)
    }

    /// All display names, sorted for stable presentation (answer dropdowns).
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.iter().map(Item::name).collect();
        names.sort_unstable();
        names
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str, name: &str) -> Item {
        Item::new(ItemCode::new(code).unwrap(), name).unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let err = Catalog::new(vec![item("US", "United States"), item("US", "Union State")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode(code) if code.as_str() == "US"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Catalog::new(vec![item("US", "United States"), item("UM", "United States")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "United States"));
    }

    #[test]
    fn preserves_source_order() {
        let catalog = Catalog::new(vec![item("US", "United States"), item("FR", "France")])
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].code().as_str(), "US");
        assert_eq!(catalog.items()[1].code().as_str(), "FR");
    }

    #[test]
    fn lookups_by_code_and_name() {
        let catalog = Catalog::new(vec![item("US", "United States"), item("FR", "France")])
            .unwrap();
        let code = ItemCode::new("FR").unwrap();
        assert_eq!(catalog.by_code(&code).unwrap().name(), "France");
        assert_eq!(catalog.by_name("France").unwrap().code(), &code);
        assert_eq!(catalog.name_of(&code), Some("France"));
        assert!(catalog.by_name("Atlantis").is_none());
    }

    #[test]
    fn sorted_names_are_alphabetical() {
        let catalog = Catalog::new(vec![
            item("US", "United States"),
            item("DE", "Germany"),
            item("FR", "France"),
        ])
        .unwrap();
        assert_eq!(
            catalog.sorted_names(),
            vec!["France", "Germany", "United States"]
        );
    }
}
