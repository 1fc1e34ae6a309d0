use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TransferChecked};

use crate::constants::MULTI_DELEGATE_SEED;
use crate::errors::DelegatorError;

/// Moves tokens between accounts on behalf of a delegation.
///
/// Implementations either move the full amount or fail without effect.
pub trait Ledger {
    fn move_funds(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Reject a move whose route differs from the loaded accounts or that the
/// source balance cannot cover.
pub fn check_move(
    from: &Pubkey,
    to: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    source_balance: u64,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(*from, *source, DelegatorError::InvalidSource);
    require_keys_eq!(*to, *destination, DelegatorError::InvalidDestination);
    require!(source_balance >= amount, DelegatorError::InsufficientFunds);
    Ok(())
}

/// Ledger backed by the SPL token program (Token or Token-2022).
///
/// Transfers are signed by the multi-delegate PDA of the source account, which
/// `add_delegate` approved as the source's SPL delegate.
pub struct TokenProgramLedger<'a, 'info> {
    pub source: &'a InterfaceAccount<'info, TokenAccount>,
    pub destination: &'a InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub multi_delegate_authority: AccountInfo<'info>,
    pub multi_delegate_bump: u8,
    pub token_program: AccountInfo<'info>,
}

impl Ledger for TokenProgramLedger<'_, '_> {
    fn move_funds(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let source_key = self.source.key();
        check_move(from, to, &source_key, &self.destination.key(), self.source.amount, amount)?;

        let seeds: &[&[u8]] = &[MULTI_DELEGATE_SEED, source_key.as_ref(), &[self.multi_delegate_bump]];
        let signer_seeds = &[seeds];

        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                TransferChecked {
                    from: self.source.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.multi_delegate_authority.clone(),
                },
                signer_seeds,
            ),
            amount,
            self.mint.decimals,
        )
    }
}
