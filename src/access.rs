use mosaic_primitives::ct_eq_address;
use crate::{errors::MintError, types::Address};

/// Administrator, authorized signer and default approval.
///
/// The administrator is fixed at construction. The other two start unset and can
/// only be changed through the administrator-checked setters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessControl {
    administrator: Address,
    authorized_signer: Option<Address>,
    default_approval: Option<Address>,
}

impl AccessControl {
    #[must_use]
    pub const fn new(administrator: Address) -> Self {
        Self { administrator, authorized_signer: None, default_approval: None }
    }

    #[must_use]
    pub const fn administrator(&self) -> Address {
        self.administrator
    }

    #[must_use]
    pub const fn authorized_signer(&self) -> Option<Address> {
        self.authorized_signer
    }

    #[must_use]
    pub const fn default_approval(&self) -> Option<Address> {
        self.default_approval
    }

    #[must_use]
    pub fn is_admin(&self, caller: &Address) -> bool {
        ct_eq_address(caller, &self.administrator)
    }

    /// # Errors
    ///
    /// Returns `MintError::NotAuthorized` for anyone but the administrator.
    pub fn ensure_admin(&self, caller: &Address) -> Result<(), MintError> {
        if !self.is_admin(caller) {
            return Err(MintError::NotAuthorized { caller: *caller });
        }
        Ok(())
    }

    /// Returns the previous signer.
    ///
    /// # Errors
    ///
    /// Returns `MintError::NotAuthorized` for anyone but the administrator.
    pub fn set_authorized_signer(&mut self, caller: &Address, signer: Address) -> Result<Option<Address>, MintError> {
        self.ensure_admin(caller)?;
        Ok(self.authorized_signer.replace(signer))
    }

    /// `None` clears the default approval. Returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns `MintError::NotAuthorized` for anyone but the administrator.
    pub fn set_default_approval(
        &mut self,
        caller: &Address,
        approved: Option<Address>,
    ) -> Result<Option<Address>, MintError> {
        self.ensure_admin(caller)?;
        Ok(core::mem::replace(&mut self.default_approval, approved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Address = Address([1u8; 20]);
    const OTHER: Address = Address([2u8; 20]);

    #[test]
    fn only_admin_mutates() {
        let mut ac = AccessControl::new(ADMIN);
        assert_eq!(
            ac.set_authorized_signer(&OTHER, OTHER),
            Err(MintError::NotAuthorized { caller: OTHER })
        );
        assert_eq!(ac.authorized_signer(), None);
        assert_eq!(
            ac.set_default_approval(&OTHER, Some(OTHER)),
            Err(MintError::NotAuthorized { caller: OTHER })
        );
        assert_eq!(ac.default_approval(), None);

        assert_eq!(ac.set_authorized_signer(&ADMIN, OTHER), Ok(None));
        assert_eq!(ac.set_authorized_signer(&ADMIN, ADMIN), Ok(Some(OTHER)));
        assert_eq!(ac.set_default_approval(&ADMIN, Some(OTHER)), Ok(None));
        assert_eq!(ac.set_default_approval(&ADMIN, None), Ok(Some(OTHER)));
        assert_eq!(ac.administrator(), ADMIN);
    }
}
