use thiserror::Error;

use crate::model::{CatalogError, ItemError};
use crate::selector::SelectorError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error(transparent)]
    Selector(#[from] SelectorError),
}
