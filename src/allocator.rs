use std::collections::BTreeSet;
use crate::{
    errors::MintError,
    types::{IdentifierTriple, RedemptionCode, TokenId},
};

/// Claimed-state guard for identifiers. Entries are only ever added.
#[derive(Clone, Debug, Default)]
pub struct IdentifierAllocator {
    claimed: BTreeSet<TokenId>,
}

/// Range-check `code` and derive its triple without touching any state.
///
/// # Errors
///
/// Returns `MintError::CodeOutOfRange` outside `1..=999`.
pub fn derive_triple(code: u64) -> Result<IdentifierTriple, MintError> {
    RedemptionCode::new(code).map(RedemptionCode::triple)
}

impl IdentifierAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_claimed(&self, id: TokenId) -> bool {
        self.claimed.contains(&id)
    }

    /// Number of claimed identifiers (three per redeemed code).
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    /// Validate `code` and check that none of its identifiers is claimed.
    ///
    /// # Errors
    ///
    /// Returns `CodeOutOfRange` or `AlreadyMinted` naming the first claimed identifier.
    pub fn plan(&self, code: u64) -> Result<IdentifierTriple, MintError> {
        let triple = derive_triple(code)?;
        if let Some(id) = triple.ids().into_iter().find(|id| self.claimed.contains(id)) {
            return Err(MintError::AlreadyMinted(id));
        }
        Ok(triple)
    }

    /// Mark a planned triple as claimed. Must follow a successful `plan` with no
    /// intervening commit.
    pub fn commit(&mut self, triple: IdentifierTriple) {
        for id in triple.ids() {
            let fresh = self.claimed.insert(id);
            debug_assert!(fresh, "identifier {id} committed twice");
        }
    }
}
