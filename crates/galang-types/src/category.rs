//! Category lookup types

use serde::{Deserialize, Serialize};

/// Campaign category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    pub id: String,
    /// Display name
    pub name: String,
}

/// Sub-category, always scoped to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    /// Sub-category id
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}
