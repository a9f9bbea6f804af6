use std::collections::{BTreeMap, BTreeSet};
use crate::{
    errors::RegistryError,
    types::{Address, TokenId},
};

/// One identifier to be issued: its first owner and, optionally, an approved transferer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grant {
    pub token: TokenId,
    pub owner: Address,
    pub approved: Option<Address>,
}

/// Ownership ledger the engine issues into.
///
/// The engine never stores ownership itself; it only hands complete batches to
/// `issue` and reads back through the query methods.
pub trait OwnershipRegistry {
    fn exists(&self, token: TokenId) -> bool;
    fn owner_of(&self, token: TokenId) -> Option<Address>;
    fn get_approved(&self, token: TokenId) -> Option<Address>;
    fn balance_of(&self, owner: &Address) -> u64;

    /// Record `owner` for a token that has none.
    fn assign(&mut self, token: TokenId, owner: Address) -> Result<(), RegistryError>;
    /// Record the approved transferer of an existing token.
    fn approve(&mut self, token: TokenId, approved: Address) -> Result<(), RegistryError>;

    /// Apply every grant or none.
    ///
    /// The provided implementation validates the whole batch against `exists`
    /// before the first `assign`; registries whose `assign`/`approve` can fail for
    /// other reasons must override it.
    fn issue(&mut self, grants: &[Grant]) -> Result<(), RegistryError> {
        validate_batch(&*self, grants)?;
        for g in grants {
            self.assign(g.token, g.owner)?;
            if let Some(approved) = g.approved {
                self.approve(g.token, approved)?;
            }
        }
        Ok(())
    }
}

/// Reject batches that would fail part-way: reused tokens, existing tokens, zero owners.
///
/// # Errors
///
/// Returns the first offending grant as a `RegistryError`.
pub fn validate_batch<R: OwnershipRegistry + ?Sized>(registry: &R, grants: &[Grant]) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for g in grants {
        if !seen.insert(g.token) {
            return Err(RegistryError::DuplicateToken(g.token));
        }
        if g.owner.is_zero() {
            return Err(RegistryError::ZeroOwner(g.token));
        }
        if registry.exists(g.token) {
            return Err(RegistryError::TokenExists(g.token));
        }
    }
    Ok(())
}

/// In-process registry backed by ordered maps.
#[derive(Clone, Debug, Default)]
pub struct MemoryRegistry {
    owners: BTreeMap<TokenId, Address>,
    approvals: BTreeMap<TokenId, Address>,
    balances: BTreeMap<Address, u64>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of tokens with an owner.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Tokens held by `owner`, ascending.
    pub fn tokens_of<'a>(&'a self, owner: &'a Address) -> impl Iterator<Item = TokenId> + 'a {
        self.owners.iter().filter(move |(_, o)| *o == owner).map(|(t, _)| *t)
    }
}

impl OwnershipRegistry for MemoryRegistry {
    fn exists(&self, token: TokenId) -> bool {
        self.owners.contains_key(&token)
    }

    fn owner_of(&self, token: TokenId) -> Option<Address> {
        self.owners.get(&token).copied()
    }

    fn get_approved(&self, token: TokenId) -> Option<Address> {
        self.approvals.get(&token).copied()
    }

    fn balance_of(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn assign(&mut self, token: TokenId, owner: Address) -> Result<(), RegistryError> {
        if owner.is_zero() {
            return Err(RegistryError::ZeroOwner(token));
        }
        if self.owners.contains_key(&token) {
            return Err(RegistryError::TokenExists(token));
        }
        self.owners.insert(token, owner);
        *self.balances.entry(owner).or_insert(0) += 1;
        Ok(())
    }

    fn approve(&mut self, token: TokenId, approved: Address) -> Result<(), RegistryError> {
        if !self.owners.contains_key(&token) {
            return Err(RegistryError::NonexistentToken(token));
        }
        self.approvals.insert(token, approved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Address = Address([0xa; 20]);
    const B: Address = Address([0xb; 20]);

    fn grant(token: TokenId, owner: Address) -> Grant {
        Grant { token, owner, approved: Some(B) }
    }

    #[test]
    fn issue_assigns_and_approves() {
        let mut r = MemoryRegistry::new();
        r.issue(&[grant(10, A), grant(11, A), grant(12, B)]).unwrap();
        assert_eq!(r.owner_of(10), Some(A));
        assert_eq!(r.owner_of(12), Some(B));
        assert_eq!(r.get_approved(11), Some(B));
        assert_eq!(r.balance_of(&A), 2);
        assert_eq!(r.tokens_of(&A).collect::<Vec<_>>(), vec![10, 11]);
        assert!(!r.exists(13));
    }

    #[test]
    fn conflicting_batch_changes_nothing() {
        let mut r = MemoryRegistry::new();
        r.assign(12, B).unwrap();
        let err = r.issue(&[grant(10, A), grant(11, A), grant(12, A)]);
        assert_eq!(err, Err(RegistryError::TokenExists(12)));
        assert!(!r.exists(10));
        assert_eq!(r.balance_of(&A), 0);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn batch_shape_is_validated() {
        let mut r = MemoryRegistry::new();
        assert_eq!(r.issue(&[grant(1, A), grant(1, A)]), Err(RegistryError::DuplicateToken(1)));
        assert_eq!(r.issue(&[grant(1, Address::ZERO)]), Err(RegistryError::ZeroOwner(1)));
        assert!(r.is_empty());
    }

    #[test]
    fn approve_requires_owner() {
        let mut r = MemoryRegistry::new();
        assert_eq!(r.approve(5, A), Err(RegistryError::NonexistentToken(5)));
    }
}
