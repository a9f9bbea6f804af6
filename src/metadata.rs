use mosaic_primitives::constants::LOCATOR_SUFFIX;
use crate::types::TokenId;

/// Locators are computed from the current prefix on every read; nothing is stored
/// per identifier, so a prefix change applies to identifiers issued earlier too.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataResolver {
    base_prefix: String,
}

impl MetadataResolver {
    #[must_use]
    pub fn new(base_prefix: impl Into<String>) -> Self {
        Self { base_prefix: base_prefix.into() }
    }

    #[must_use]
    pub fn base_prefix(&self) -> &str {
        &self.base_prefix
    }

    /// Returns the previous prefix.
    pub fn set_base_prefix(&mut self, prefix: impl Into<String>) -> String {
        core::mem::replace(&mut self.base_prefix, prefix.into())
    }

    /// `prefix || decimal(id) || ".json"` for any identifier, issued or not.
    #[must_use]
    pub fn resolve(&self, id: TokenId) -> String {
        format!("{}{id}{LOCATOR_SUFFIX}", self.base_prefix)
    }
}
