use anchor_lang::prelude::*;

pub mod accrual;
pub mod authorization;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

use instructions::*;
use state::DelegationKind;

declare_id!("9GjJt2mJXY9szY7TyfKqBpbb8Nc95vgjnRenXZWX17xH");

#[program]
pub mod multi_delegator {
    use super::*;

    /// Grant `delegate` a simple or recurring allowance over the signer's token account.
    /// Several delegations to the same delegate are told apart by `nonce`.
    pub fn add_delegate(context: Context<AddDelegateAccountConstraints>, nonce: u64, kind: DelegationKind) -> Result<()> {
        instructions::add_delegate::handle_add_delegate(context, nonce, kind)
    }

    /// Spend `amount` from a simple allowance. Signed by the delegate.
    pub fn transfer(context: Context<TransferAccountConstraints>, amount: u64) -> Result<()> {
        instructions::transfer::handle_transfer(context, amount)
    }

    /// Pay out what a recurring delegation has accrued. Anyone can call this.
    pub fn transfer_recurring(context: Context<TransferRecurringAccountConstraints>) -> Result<()> {
        instructions::transfer_recurring::handle_transfer_recurring(context)
    }
}
