use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while building items.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("item code must not be blank")]
    BlankCode,
    #[error("item name must not be blank")]
    BlankName,
}

//
// ─── ITEM CODE ─────────────────────────────────────────────────────────────────
//

/// Unique short identifier for a quiz item (e.g. `"US"`).
///
/// Serializes as a bare string so it can key a JSON object directly.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemCode(String);

impl ItemCode {
    /// Creates a new `ItemCode`.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::BlankCode` if the code is empty or whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, ItemError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ItemError::BlankCode);
        }
        Ok(Self(code))
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form, used when addressing flag images by code.
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Debug for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemCode({:?})", self.0)
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemCode {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemCode::new(s)
    }
}

//
// ─── ITEM ──────────────────────────────────────────────────────────────────────
//

/// One quiz entry: a unique code plus its human-readable display name.
///
/// Items are immutable once loaded from the catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    code: ItemCode,
    name: String,
}

impl Item {
    /// Creates a new `Item`.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::BlankName` if the name is empty or whitespace.
    pub fn new(code: ItemCode, name: impl Into<String>) -> Result<Self, ItemError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ItemError::BlankName);
        }
        Ok(Self { code, name })
    }

    #[must_use]
    pub fn code(&self) -> &ItemCode {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_display_round_trips() {
        let code: ItemCode = "US".parse().unwrap();
        assert_eq!(code.to_string(), "US");
        assert_eq!(code.as_str(), "US");
    }

    #[test]
    fn blank_code_is_rejected() {
        assert_eq!(ItemCode::new("").unwrap_err(), ItemError::BlankCode);
        assert_eq!(ItemCode::new("   ").unwrap_err(), ItemError::BlankCode);
    }

    #[test]
    fn lowercase_form_for_image_urls() {
        let code = ItemCode::new("FR").unwrap();
        assert_eq!(code.to_lowercase(), "fr");
    }

    #[test]
    fn item_requires_a_name() {
        let code = ItemCode::new("DE").unwrap();
        assert_eq!(Item::new(code, " ").unwrap_err(), ItemError::BlankName);
    }

    #[test]
    fn item_exposes_code_and_name() {
        let item = Item::new(ItemCode::new("DE").unwrap(), "Germany").unwrap();
        assert_eq!(item.code().as_str(), "DE");
        assert_eq!(item.name(), "Germany");
    }
}
