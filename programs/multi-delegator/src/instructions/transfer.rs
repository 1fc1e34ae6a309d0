use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{DELEGATION_SEED, MULTI_DELEGATE_SEED};
use crate::errors::DelegatorError;
use crate::events::SimpleTransferExecuted;
use crate::ledger::TokenProgramLedger;
use crate::state::{Delegation, DelegationKind};

/// Spend part of a simple allowance.
///
/// The delegate signs and picks the destination at call time.
pub fn handle_transfer(context: Context<TransferAccountConstraints>, amount: u64) -> Result<()> {
    let accounts = context.accounts;
    let mut ledger = TokenProgramLedger {
        source: &accounts.source,
        destination: &accounts.destination,
        mint: &accounts.mint,
        multi_delegate_authority: accounts.multi_delegate_authority.to_account_info(),
        multi_delegate_bump: context.bumps.multi_delegate_authority,
        token_program: accounts.token_program.to_account_info(),
    };

    let moved = accounts.delegation.transfer_simple(
        &accounts.delegate.key(),
        amount,
        &accounts.destination.key(),
        &mut ledger,
    )?;

    let remaining = match accounts.delegation.kind {
        DelegationKind::Simple(remaining) => remaining,
        DelegationKind::Recurring(_) => return err!(DelegatorError::InvalidKind),
    };

    msg!("Transferred {} to {}, {} remaining", moved, accounts.destination.key(), remaining);
    emit!(SimpleTransferExecuted {
        delegation: accounts.delegation.key(),
        destination: accounts.destination.key(),
        amount: moved,
        remaining,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferAccountConstraints<'info> {
    #[account(
        mut,
        seeds = [DELEGATION_SEED, source.key().as_ref(), delegation.delegate.as_ref(), delegation.nonce.to_le_bytes().as_ref()],
        bump = delegation.bump,
    )]
    pub delegation: Account<'info, Delegation>,

    /// Checked against the record's delegate by `Delegation::transfer_simple`.
    pub delegate: Signer<'info>,

    /// CHECK: PDA that signs the transfer as the source's SPL delegate.
    #[account(seeds = [MULTI_DELEGATE_SEED, source.key().as_ref()], bump)]
    pub multi_delegate_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = delegation.owner_account @ DelegatorError::InvalidSource,
        token::mint = mint,
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,

    #[account(mut, token::mint = mint)]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}
