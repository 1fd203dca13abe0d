// 🗺️ Account Mapper - records → views, plus a few key/id utilities
//
// Stateless apart from the injected NameProvider. Every failure is returned
// to the caller; nothing here logs or swallows errors.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::entities::AccountRecord;
use crate::error::{MapperError, Result};
use crate::views::{AccountCategoryView, AccountView};

/// Separator between key segments (`"2:Account2Key"`)
pub const KEY_DELIMITER: char = ':';

/// Index of the segment returned by `second_key_segment`
pub const KEY_SEGMENT_INDEX: usize = 1;

// ============================================================================
// NAME PROVIDER
// ============================================================================

/// External source of the application's display name
pub trait NameProvider: Send + Sync {
    fn application_name(&self) -> String;
}

impl<P: NameProvider + ?Sized> NameProvider for &P {
    fn application_name(&self) -> String {
        (**self).application_name()
    }
}

impl<P: NameProvider + ?Sized> NameProvider for Box<P> {
    fn application_name(&self) -> String {
        (**self).application_name()
    }
}

impl<P: NameProvider + ?Sized> NameProvider for Arc<P> {
    fn application_name(&self) -> String {
        (**self).application_name()
    }
}

/// Adapts a closure into a NameProvider, so the name is only computed on demand
pub struct FnProvider<F>(pub F);

impl<F> NameProvider for FnProvider<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn application_name(&self) -> String {
        (self.0)()
    }
}

pub fn provider_fn<F>(f: F) -> FnProvider<F>
where
    F: Fn() -> String + Send + Sync,
{
    FnProvider(f)
}

// ============================================================================
// ACCOUNT MAPPER
// ============================================================================

pub struct AccountMapper<P> {
    provider: P,
}

impl<P: NameProvider> AccountMapper<P> {
    pub fn new(provider: P) -> Self {
        AccountMapper { provider }
    }

    /// One view per account, in order. Descriptions are blanked unless
    /// `can_show_description` is set.
    pub fn list_visible_descriptions(
        &self,
        accounts: &[AccountRecord],
        can_show_description: bool,
    ) -> Vec<AccountView> {
        debug!(
            count = accounts.len(),
            can_show_description, "mapping account views"
        );

        accounts
            .iter()
            .map(|account| AccountView {
                name: account.name.clone(),
                description: if can_show_description {
                    account.description.clone()
                } else {
                    None
                },
            })
            .collect()
    }

    pub fn list_category_views(&self, accounts: &[AccountRecord]) -> Vec<AccountCategoryView> {
        debug!(count = accounts.len(), "mapping account category views");

        accounts
            .iter()
            .map(|account| AccountCategoryView {
                description: account.description.clone(),
                category: Some(account.category),
            })
            .collect()
    }

    /// Second colon-delimited segment of `key`
    ///
    /// A missing key yields `Ok(None)`, but a present key without a second
    /// segment (including `""`) is an `InvalidOperation` error.
    pub fn second_key_segment<'k>(&self, key: Option<&'k str>) -> Result<Option<&'k str>> {
        let Some(key) = key else {
            return Ok(None);
        };

        key.split(KEY_DELIMITER)
            .nth(KEY_SEGMENT_INDEX)
            .map(Some)
            .ok_or_else(|| {
                MapperError::invalid_operation(format!(
                    "key '{}' has no segment at index {}",
                    key, KEY_SEGMENT_INDEX
                ))
            })
    }

    /// Fresh random UUID, issued only when all three inputs are non-blank.
    ///
    /// The inputs are not hashed into the id.
    pub fn synthesize_account_id(
        &self,
        name: Option<&str>,
        description: Option<&str>,
        key: Option<&str>,
    ) -> Result<String> {
        require_text("name", name)?;
        require_text("description", description)?;
        require_text("key", key)?;

        let id = Uuid::new_v4().to_string();
        debug!(%id, "synthesized account id");
        Ok(id)
    }

    /// Returns the given collection as-is (same allocation), or an empty one
    pub fn passthrough_or_empty(&self, accounts: Option<Vec<AccountRecord>>) -> Vec<AccountRecord> {
        debug!(present = accounts.is_some(), "passing accounts through");
        accounts.unwrap_or_default()
    }

    /// Ids below 1 short-circuit to `""` without touching the provider.
    pub fn lookup_application_name(&self, application_id: i32) -> String {
        if application_id < 1 {
            debug!(application_id, "skipping name lookup for invalid id");
            return String::new();
        }

        debug!(application_id, "looking up application name");
        self.provider.application_name()
    }
}

fn require_text(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        Some(_) => Err(MapperError::validation(field, "must not be empty or whitespace")),
        None => Err(MapperError::validation(field, "is required")),
    }
}

// ============================================================================
// TESTS
// ============================================================================
