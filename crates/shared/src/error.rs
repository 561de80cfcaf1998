use thiserror::Error;

use crate::domain::{CategoryKey, DishId};

/// Reasons a catalog document is rejected at load time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("dish at position {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate dish id '{0}'")]
    DuplicateId(DishId),
    #[error("duplicate category key '{0}'")]
    DuplicateCategory(CategoryKey),
    #[error("dish '{dish}' references undeclared category '{category}'")]
    UnknownCategory { dish: DishId, category: CategoryKey },
    #[error("dish '{dish}' has invalid price {price}")]
    InvalidPrice { dish: DishId, price: f64 },
    #[error("category key '{0}' is reserved")]
    ReservedCategory(CategoryKey),
}
