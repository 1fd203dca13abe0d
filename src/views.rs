// 🪟 View Shapes - read-only DTOs derived from AccountRecord

use serde::{Deserialize, Serialize};

use crate::entities::AccountCategory;

/// Name plus an optionally visible description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    pub name: String,

    /// `None` when the caller is not allowed to see descriptions
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCategoryView {
    pub description: Option<String>,
    pub category: Option<AccountCategory>,
}
