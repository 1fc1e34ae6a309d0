//! Who may move funds out of a delegation, and how much.
//!
//! Authority is always derived from what the record stores, never from the
//! role the caller claims. Recurring settlements are permissionless because
//! their destination is fixed in the record.

use anchor_lang::prelude::*;

use crate::accrual;
use crate::errors::DelegatorError;
use crate::ledger::Ledger;
use crate::state::{Delegation, DelegationKind};

/// Capability a caller must hold for an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authority {
    /// The authority of the funding token account.
    AccountOwner(Pubkey),
    /// The delegate stored in the record.
    Delegate(Pubkey),
    /// Anyone, e.g. a crank.
    Anyone,
}

impl Authority {
    pub fn check(&self, caller: &Pubkey) -> Result<()> {
        match self {
            Authority::AccountOwner(expected) | Authority::Delegate(expected) => {
                require_keys_eq!(*caller, *expected, DelegatorError::Unauthorized);
                Ok(())
            }
            Authority::Anyone => Ok(()),
        }
    }
}

impl Delegation {
    /// Authority required to spend from this delegation.
    pub fn spend_authority(&self) -> Authority {
        match self.kind {
            DelegationKind::Simple(_) => Authority::Delegate(self.delegate),
            DelegationKind::Recurring(_) => Authority::Anyone,
        }
    }

    /// Spend `amount` of a simple allowance into `destination`.
    ///
    /// The allowance is only reduced after the ledger move succeeded.
    pub fn transfer_simple<L: Ledger>(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        destination: &Pubkey,
        ledger: &mut L,
    ) -> Result<u64> {
        let remaining = match self.kind {
            DelegationKind::Simple(remaining) => remaining,
            DelegationKind::Recurring(_) => return err!(DelegatorError::InvalidKind),
        };
        self.spend_authority().check(caller)?;
        require!(amount > 0, DelegatorError::InvalidAmount);
        require!(amount <= remaining, DelegatorError::InsufficientAllowance);

        ledger.move_funds(&self.owner_account, destination, amount)?;

        self.kind = DelegationKind::Simple(remaining - amount);
        Ok(amount)
    }

    /// Pay out everything accrued up to `now` into the stored destination.
    ///
    /// Callable by anyone. `last_claim` only advances together with a
    /// successful ledger move, so a failed transfer never forfeits accrual.
    pub fn transfer_recurring<L: Ledger>(&mut self, caller: &Pubkey, now: i64, ledger: &mut L) -> Result<u64> {
        let authority = self.spend_authority();
        let recurring = match &mut self.kind {
            DelegationKind::Recurring(recurring) => recurring,
            DelegationKind::Simple(_) => return err!(DelegatorError::InvalidKind),
        };
        authority.check(caller)?;

        let settlement = accrual::settle(recurring, now)?;
        require!(settlement.amount > 0, DelegatorError::NothingToClaim);

        ledger.move_funds(&self.owner_account, &recurring.destination, settlement.amount)?;

        recurring.last_claim = settlement.claimed_until;
        Ok(settlement.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pubkey(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    #[test]
    fn owner_and_delegate_require_exact_key() {
        let owner = test_pubkey(1);
        let stranger = test_pubkey(2);

        assert!(Authority::AccountOwner(owner).check(&owner).is_ok());
        assert!(Authority::Delegate(owner).check(&owner).is_ok());
        assert_eq!(
            Authority::AccountOwner(owner).check(&stranger).unwrap_err(),
            error!(DelegatorError::Unauthorized)
        );
        assert_eq!(
            Authority::Delegate(owner).check(&stranger).unwrap_err(),
            error!(DelegatorError::Unauthorized)
        );
    }

    #[test]
    fn anyone_accepts_every_caller() {
        for seed in 0..=255u8 {
            assert!(Authority::Anyone.check(&test_pubkey(seed)).is_ok());
        }
    }

    #[test]
    fn spend_authority_follows_record_kind() {
        let mut delegation = Delegation {
            owner_account: test_pubkey(1),
            delegate: test_pubkey(2),
            nonce: 0,
            bump: 255,
            kind: DelegationKind::Simple(10),
        };
        assert_eq!(delegation.spend_authority(), Authority::Delegate(test_pubkey(2)));

        delegation.kind = DelegationKind::Recurring(crate::state::RecurringDelegation {
            amount_per_period: 1,
            period: 1,
            start_date: 0,
            end_date: 10,
            last_claim: 0,
            destination: test_pubkey(3),
        });
        assert_eq!(delegation.spend_authority(), Authority::Anyone);
    }
}
