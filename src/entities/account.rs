// 💳 Account Record - the stored shape that views are derived from
//
// Records are plain value snapshots: built by the caller, read by the mapper,
// never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MapperError;

// ============================================================================
// ACCOUNT CATEGORY
// ============================================================================

/// Privilege tier of an account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountCategory {
    /// System administrator (first variant, also the default)
    #[default]
    SystemAdmin,

    /// Business administrator
    BusinessAdmin,
}

impl AccountCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountCategory::SystemAdmin => "SystemAdmin",
            AccountCategory::BusinessAdmin => "BusinessAdmin",
        }
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountCategory {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "systemadmin" => Ok(AccountCategory::SystemAdmin),
            "businessadmin" => Ok(AccountCategory::BusinessAdmin),
            _ => Err(MapperError::UnknownCategory(s.to_string())),
        }
    }
}

// ============================================================================
// ACCOUNT RECORD
// ============================================================================

/// An already-loaded account
///
/// `key` is conventionally colon-delimited, e.g. `"2:Account2Key"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: i32,

    /// Display name (required)
    pub name: String,

    pub description: Option<String>,

    pub category: AccountCategory,

    pub key: Option<String>,
}

impl AccountRecord {
    /// Create a record with no description and no key
    pub fn new(id: i32, name: impl Into<String>, category: AccountCategory) -> Self {
        AccountRecord {
            id,
            name: name.into(),
            description: None,
            category,
            key: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
