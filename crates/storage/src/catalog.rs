//! CSV catalog loading.
//!
//! The catalog source is a CSV file with `Code` and `Name` headers, read once
//! at process start. Every failure here is fatal for the session: the quiz
//! cannot run without a valid catalog.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use quiz_core::model::{Catalog, CatalogError, Item, ItemCode};

/// Errors raised while loading the catalog at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog data: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog row {row} has a blank {field}")]
    BlankField { row: usize, field: &'static str },

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Name")]
    name: String,
}

/// Loads the catalog from a CSV file with `Code` and `Name` headers.
///
/// Row order becomes catalog order, which the selector uses as its tie-break.
///
/// # Errors
///
/// Returns `CatalogLoadError::Io` for a missing or unreadable file,
/// `Csv` for rows that do not parse, `BlankField` for empty cells, and
/// `Invalid` for an empty catalog or duplicate codes/names.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::Reader::from_reader(file);

    let mut items = Vec::new();
    for (index, row) in reader.deserialize::<CatalogRow>().enumerate() {
        let row = row?;
        let data_row = index + 1;

        let code = ItemCode::new(row.code).map_err(|_| CatalogLoadError::BlankField {
            row: data_row,
            field: "Code",
        })?;
        let item = Item::new(code, row.name).map_err(|_| CatalogLoadError::BlankField {
            row: data_row,
            field: "Name",
        })?;
        items.push(item);
    }

    Ok(Catalog::new(items)?)
}
