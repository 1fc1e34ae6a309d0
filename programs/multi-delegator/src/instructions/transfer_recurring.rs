use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{DELEGATION_SEED, MULTI_DELEGATE_SEED};
use crate::errors::DelegatorError;
use crate::events::RecurringTransferExecuted;
use crate::ledger::TokenProgramLedger;
use crate::state::{Delegation, DelegationKind};

/// Settle everything a recurring delegation has accrued so far.
///
/// Permissionless: no signer besides the fee payer is required. Funds can only
/// go to the destination stored in the delegation.
pub fn handle_transfer_recurring(context: Context<TransferRecurringAccountConstraints>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = context.accounts;
    let mut ledger = TokenProgramLedger {
        source: &accounts.source,
        destination: &accounts.destination,
        mint: &accounts.mint,
        multi_delegate_authority: accounts.multi_delegate_authority.to_account_info(),
        multi_delegate_bump: context.bumps.multi_delegate_authority,
        token_program: accounts.token_program.to_account_info(),
    };

    let moved = accounts.delegation.transfer_recurring(&accounts.cranker.key(), now, &mut ledger)?;

    let last_claim = match &accounts.delegation.kind {
        DelegationKind::Recurring(recurring) => recurring.last_claim,
        DelegationKind::Simple(_) => return err!(DelegatorError::InvalidKind),
    };

    msg!("Settled {} to {} up to {}", moved, accounts.destination.key(), last_claim);
    emit!(RecurringTransferExecuted {
        delegation: accounts.delegation.key(),
        destination: accounts.destination.key(),
        amount: moved,
        last_claim,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferRecurringAccountConstraints<'info> {
    #[account(
        mut,
        seeds = [DELEGATION_SEED, source.key().as_ref(), delegation.delegate.as_ref(), delegation.nonce.to_le_bytes().as_ref()],
        bump = delegation.bump,
    )]
    pub delegation: Account<'info, Delegation>,

    /// Whoever submits the crank. Any signer is accepted.
    pub cranker: Signer<'info>,

    /// CHECK: PDA that signs the transfer as the source's SPL delegate.
    #[account(seeds = [MULTI_DELEGATE_SEED, source.key().as_ref()], bump)]
    pub multi_delegate_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = delegation.owner_account @ DelegatorError::InvalidSource,
        token::mint = mint,
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,

    /// Must be the destination stored in the delegation; checked by the ledger.
    #[account(mut, token::mint = mint)]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}
