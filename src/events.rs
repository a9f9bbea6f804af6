use crate::types::{Address, Amount, IdentifierTriple};

/// State changes recorded by the engine, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    Redeemed { code: u64, to: Address, triple: IdentifierTriple, payment: Amount },
    Swept { to: Address, amount: Amount },
    SignerChanged { previous: Option<Address>, current: Address },
    DefaultApprovalChanged { previous: Option<Address>, current: Option<Address> },
    BasePrefixChanged { previous: String, current: String },
    PauseChanged { paused: bool },
}
