use tracing::{debug, info, warn};
use crate::{
    access::AccessControl,
    allocator::IdentifierAllocator,
    config::EngineConfig,
    errors::{MintError, PayoutError},
    events::EngineEvent,
    metadata::MetadataResolver,
    pause::PauseGate,
    registry::{Grant, MemoryRegistry, OwnershipRegistry},
    signature::{recover_signer, redemption_digest},
    treasury::Treasury,
    types::{Address, Amount, IdentifierTriple, TokenId},
};
use mosaic_primitives::ct_eq_address;

/// Stages a redeem call passes through, in order. A call stops at the first
/// failing check and reports that check's error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RedeemStage {
    Start,
    PauseChecked,
    SignatureChecked,
    Allocated,
    Delivered,
    Approved,
    PaymentSettled,
    Done,
}

/// Issuance engine for one mosaic collection.
///
/// Every method takes `&self` or `&mut self` and runs to completion, so the
/// engine is a single writer; callers sharing it across threads supply the lock.
#[derive(Debug)]
pub struct MosaicEngine<R: OwnershipRegistry = MemoryRegistry> {
    name: String,
    symbol: String,
    system: Address,
    access: AccessControl,
    pause: PauseGate,
    allocator: IdentifierAllocator,
    treasury: Treasury,
    metadata: MetadataResolver,
    registry: R,
    events: Vec<EngineEvent>,
}

impl MosaicEngine<MemoryRegistry> {
    /// Engine backed by an in-memory registry.
    ///
    /// `administrator` is fixed for the engine's lifetime; `system` is the account
    /// that keeps the reserved identifier of every triple.
    #[must_use]
    pub fn new(administrator: Address, system: Address, config: EngineConfig) -> Self {
        Self::with_registry(administrator, system, config, MemoryRegistry::new())
    }
}

impl<R: OwnershipRegistry> MosaicEngine<R> {
    #[must_use]
    pub fn with_registry(administrator: Address, system: Address, config: EngineConfig, registry: R) -> Self {
        debug!(%administrator, %system, paused = config.start_paused, "engine created");
        Self {
            name: config.name,
            symbol: config.symbol,
            system,
            access: AccessControl::new(administrator),
            pause: PauseGate::new(config.start_paused),
            allocator: IdentifierAllocator::new(),
            treasury: Treasury::default(),
            metadata: MetadataResolver::new(config.base_prefix),
            registry,
            events: Vec::new(),
        }
    }

    /// Issue the triple for `code` to `caller`, authorized by `signature` from the
    /// recorded signer. `payment` goes to the treasury.
    ///
    /// Checks run in a fixed order (pause, signature, range and reuse, treasury
    /// capacity) before anything is written; a failure at any point leaves the
    /// engine and the registry unchanged.
    ///
    /// # Errors
    ///
    /// `SystemPaused`, `UnauthorizedSignature`, `CodeOutOfRange`, `AlreadyMinted`,
    /// `TreasuryOverflow`, or `Registry` if the ledger refuses the batch.
    pub fn redeem(
        &mut self,
        caller: Address,
        code: u64,
        signature: &[u8],
        payment: Amount,
    ) -> Result<IdentifierTriple, MintError> {
        let _span = tracing::debug_span!("redeem", %caller, code, payment).entered();
        self.try_redeem(caller, code, signature, payment)
            .inspect_err(|err| warn!(%err, "redemption rejected"))
    }

    fn try_redeem(
        &mut self,
        caller: Address,
        code: u64,
        signature: &[u8],
        payment: Amount,
    ) -> Result<IdentifierTriple, MintError> {
        debug!(stage = ?RedeemStage::Start);
        self.pause.ensure_open()?;
        debug!(stage = ?RedeemStage::PauseChecked);

        self.check_signature(code, &caller, signature)?;
        debug!(stage = ?RedeemStage::SignatureChecked);

        let triple = self.allocator.plan(code)?;
        let settled = self.treasury.preview_deposit(payment)?;
        debug!(stage = ?RedeemStage::Allocated, ids = ?triple.ids());

        // Everything below is a write; the only fallible step is the registry batch,
        // which applies all grants or none.
        let approved = self.access.default_approval();
        let grants = [
            Grant { token: triple.primary, owner: caller, approved },
            Grant { token: triple.secondary, owner: caller, approved },
            Grant { token: triple.reserved, owner: self.system, approved },
        ];
        self.registry.issue(&grants)?;
        self.allocator.commit(triple);
        debug!(stage = ?RedeemStage::Delivered, owner = %caller, reserved_to = %self.system);
        debug!(stage = ?RedeemStage::Approved, approved = ?approved);

        self.treasury.deposit(payment)?;
        debug_assert_eq!(self.treasury.balance(), settled);
        debug!(stage = ?RedeemStage::PaymentSettled, balance = settled);

        info!(stage = ?RedeemStage::Done, primary = triple.primary, "redeemed");
        self.events.push(EngineEvent::Redeemed { code, to: caller, triple, payment });
        Ok(triple)
    }

    fn check_signature(&self, code: u64, caller: &Address, signature: &[u8]) -> Result<(), MintError> {
        let Some(signer) = self.access.authorized_signer() else {
            debug!("no authorized signer recorded");
            return Err(MintError::UnauthorizedSignature);
        };
        match recover_signer(&redemption_digest(code, caller), signature) {
            Ok(recovered) if ct_eq_address(&recovered, &signer) => Ok(()),
            Ok(recovered) => {
                debug!(%recovered, expected = %signer, "signer mismatch");
                Err(MintError::UnauthorizedSignature)
            }
            Err(cause) => {
                debug!(%cause, "signature not recoverable");
                Err(MintError::UnauthorizedSignature)
            }
        }
    }

    /// # Errors
    ///
    /// `NotAuthorized` unless `caller` is the administrator.
    pub fn set_authorized_signer(&mut self, caller: Address, signer: Address) -> Result<(), MintError> {
        let previous = self.access.set_authorized_signer(&caller, signer)?;
        info!(%signer, "authorized signer set");
        self.events.push(EngineEvent::SignerChanged { previous, current: signer });
        Ok(())
    }

    /// `None` stops applying an approval to newly issued identifiers.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` unless `caller` is the administrator.
    pub fn set_default_approval(&mut self, caller: Address, approved: Option<Address>) -> Result<(), MintError> {
        let previous = self.access.set_default_approval(&caller, approved)?;
        info!(approved = ?approved, "default approval set");
        self.events.push(EngineEvent::DefaultApprovalChanged { previous, current: approved });
        Ok(())
    }

    /// # Errors
    ///
    /// `NotAuthorized` unless `caller` is the administrator.
    pub fn set_base_prefix(&mut self, caller: Address, prefix: impl Into<String>) -> Result<(), MintError> {
        self.access.ensure_admin(&caller)?;
        let current = prefix.into();
        let previous = self.metadata.set_base_prefix(current.clone());
        info!(%previous, %current, "base prefix set");
        self.events.push(EngineEvent::BasePrefixChanged { previous, current });
        Ok(())
    }

    /// # Errors
    ///
    /// `NotAuthorized` unless `caller` is the administrator.
    pub fn set_paused(&mut self, caller: Address, paused: bool) -> Result<(), MintError> {
        self.access.ensure_admin(&caller)?;
        self.pause.set(paused);
        info!(paused, "pause state set");
        self.events.push(EngineEvent::PauseChanged { paused });
        Ok(())
    }

    /// Pay the whole treasury to the administrator through `payout`.
    ///
    /// The balance is zero before `payout` is invoked and is restored if it fails.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` unless `caller` is the administrator; `PayoutFailed` if the
    /// transfer is refused.
    pub fn sweep<F>(&mut self, caller: Address, payout: F) -> Result<Amount, MintError>
    where
        F: FnOnce(Address, Amount) -> Result<(), PayoutError>,
    {
        self.access.ensure_admin(&caller)?;
        let to = self.access.administrator();
        let amount = self
            .treasury
            .sweep(to, payout)
            .inspect_err(|err| warn!(%err, "sweep failed"))?;
        info!(%to, amount, "treasury swept");
        self.events.push(EngineEvent::Swept { to, amount });
        Ok(amount)
    }

    #[must_use]
    pub fn is_claimed(&self, id: TokenId) -> bool {
        self.allocator.is_claimed(id)
    }

    #[must_use]
    pub fn resolve_locator(&self, id: TokenId) -> String {
        self.metadata.resolve(id)
    }

    #[must_use]
    pub const fn treasury_balance(&self) -> Amount {
        self.treasury.balance()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub const fn administrator(&self) -> Address {
        self.access.administrator()
    }

    /// Account that holds every reserved identifier.
    #[must_use]
    pub const fn system_account(&self) -> Address {
        self.system
    }

    #[must_use]
    pub const fn authorized_signer(&self) -> Option<Address> {
        self.access.authorized_signer()
    }

    #[must_use]
    pub const fn default_approval(&self) -> Option<Address> {
        self.access.default_approval()
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    #[must_use]
    pub fn base_prefix(&self) -> &str {
        self.metadata.base_prefix()
    }

    #[must_use]
    pub fn owner_of(&self, id: TokenId) -> Option<Address> {
        self.registry.owner_of(id)
    }

    #[must_use]
    pub fn get_approved(&self, id: TokenId) -> Option<Address> {
        self.registry.get_approved(id)
    }

    #[must_use]
    pub fn exists(&self, id: TokenId) -> bool {
        self.registry.exists(id)
    }

    #[must_use]
    pub fn balance_of(&self, owner: &Address) -> u64 {
        self.registry.balance_of(owner)
    }

    /// Identifiers issued so far, three per redeemed code.
    #[must_use]
    pub fn total_issued(&self) -> usize {
        self.allocator.claimed_count()
    }

    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Drain the event journal.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        core::mem::take(&mut self.events)
    }
}
