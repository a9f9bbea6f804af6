use crate::{
    errors::{MintError, PayoutError},
    types::{Address, Amount},
};

/// Payments collected by redeem calls, held until the administrator sweeps them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Treasury {
    balance: Amount,
}

impl Treasury {
    #[must_use]
    pub const fn balance(&self) -> Amount {
        self.balance
    }

    /// Balance after accepting `payment`, without accepting it.
    ///
    /// # Errors
    ///
    /// Returns `MintError::TreasuryOverflow` if the sum does not fit.
    pub const fn preview_deposit(&self, payment: Amount) -> Result<Amount, MintError> {
        match self.balance.checked_add(payment) {
            Some(next) => Ok(next),
            None => Err(MintError::TreasuryOverflow),
        }
    }

    /// # Errors
    ///
    /// Returns `MintError::TreasuryOverflow` and leaves the balance unchanged if the sum does not fit.
    pub fn deposit(&mut self, payment: Amount) -> Result<Amount, MintError> {
        self.balance = self.preview_deposit(payment)?;
        Ok(self.balance)
    }

    /// Move the whole balance to `destination` through `payout`.
    ///
    /// The balance is zero before `payout` runs. If `payout` fails the balance is
    /// restored and the error returned. An empty treasury pays nothing and does not
    /// call `payout`.
    ///
    /// # Errors
    ///
    /// Returns `MintError::PayoutFailed` with the destination's reason.
    pub fn sweep<F>(&mut self, destination: Address, payout: F) -> Result<Amount, MintError>
    where
        F: FnOnce(Address, Amount) -> Result<(), PayoutError>,
    {
        let amount = core::mem::take(&mut self.balance);
        if amount == 0 {
            return Ok(0);
        }
        if let Err(e) = payout(destination, amount) {
            self.balance = amount;
            return Err(MintError::PayoutFailed(e));
        }
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Address = Address([1u8; 20]);

    #[test]
    fn deposits_accumulate() {
        let mut t = Treasury::default();
        assert_eq!(t.deposit(0), Ok(0));
        assert_eq!(t.deposit(5), Ok(5));
        assert_eq!(t.deposit(7), Ok(12));
        assert_eq!(t.preview_deposit(1), Ok(13));
        assert_eq!(t.balance(), 12);
    }

    #[test]
    fn overflow_leaves_balance() {
        let mut t = Treasury::default();
        t.deposit(Amount::MAX).unwrap();
        assert_eq!(t.deposit(1), Err(MintError::TreasuryOverflow));
        assert_eq!(t.balance(), Amount::MAX);
    }

    #[test]
    fn sweep_zeroes_before_payout() {
        let mut t = Treasury::default();
        t.deposit(1_000).unwrap();
        let mut paid = None;
        let out = t.sweep(ADMIN, |to, amt| {
            paid = Some((to, amt));
            Ok(())
        });
        assert_eq!(out, Ok(1_000));
        assert_eq!(paid, Some((ADMIN, 1_000)));
        assert_eq!(t.balance(), 0);
    }

    #[test]
    fn failed_payout_restores_balance() {
        let mut t = Treasury::default();
        t.deposit(9).unwrap();
        let out = t.sweep(ADMIN, |_, _| Err(PayoutError("rejected".into())));
        assert_eq!(out, Err(MintError::PayoutFailed(PayoutError("rejected".into()))));
        assert_eq!(t.balance(), 9);
    }

    #[test]
    fn empty_sweep_skips_payout() {
        let mut t = Treasury::default();
        let out = t.sweep(ADMIN, |_, _| Err(PayoutError("must not be called".into())));
        assert_eq!(out, Ok(0));
    }
}
