use anchor_lang::{prelude::*, solana_program::program_option::COption};
use anchor_spl::token_interface::{self, Approve, TokenAccount, TokenInterface};

use crate::authorization::Authority;
use crate::constants::{DELEGATION_SEED, MULTI_DELEGATE_SEED};
use crate::events::DelegationCreated;
use crate::state::{Delegation, DelegationKind};

/// Create a delegation over the signer's token account.
///
/// Only the token account's authority can delegate. On first use the program's
/// multi-delegate PDA is approved as the SPL delegate of the token account so
/// later transfers can be signed without the owner.
pub fn handle_add_delegate(context: Context<AddDelegateAccountConstraints>, nonce: u64, kind: DelegationKind) -> Result<()> {
    let accounts = context.accounts;
    check_account_owner(&accounts.token_account.owner, &accounts.authority.key())?;

    let kind_tag = u8::from(&kind);
    accounts.delegation.initialize(
        accounts.token_account.key(),
        accounts.delegate.key(),
        nonce,
        kind,
        context.bumps.delegation,
    )?;

    approve_multi_delegate_if_needed(
        &accounts.token_account,
        accounts.authority.to_account_info(),
        accounts.multi_delegate_authority.to_account_info(),
        accounts.token_program.to_account_info(),
    )?;

    msg!(
        "Delegation {} created for delegate {} with nonce {}",
        accounts.delegation.key(),
        accounts.delegate.key(),
        nonce
    );
    emit!(DelegationCreated {
        delegation: accounts.delegation.key(),
        owner_account: accounts.token_account.key(),
        delegate: accounts.delegate.key(),
        nonce,
        kind: kind_tag,
    });

    Ok(())
}

/// Only the authority of the funding token account may delegate from it.
fn check_account_owner(account_owner: &Pubkey, signer: &Pubkey) -> Result<()> {
    Authority::AccountOwner(*account_owner).check(signer)
}

fn approve_multi_delegate_if_needed<'info>(
    token_account: &InterfaceAccount<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    multi_delegate_authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
) -> Result<()> {
    if let COption::Some(delegate) = token_account.delegate {
        if delegate == multi_delegate_authority.key() {
            return Ok(());
        }
    }

    token_interface::approve(
        CpiContext::new(
            token_program,
            Approve {
                to: token_account.to_account_info(),
                delegate: multi_delegate_authority,
                authority,
            },
        ),
        u64::MAX,
    )
}

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct AddDelegateAccountConstraints<'info> {
    /// `init_if_needed` so an existing record surfaces as `DuplicateDelegation`
    /// instead of a generic "account already in use".
    #[account(
        init_if_needed,
        payer = authority,
        space = Delegation::DISCRIMINATOR.len() + Delegation::INIT_SPACE,
        seeds = [DELEGATION_SEED, token_account.key().as_ref(), delegate.key().as_ref(), nonce.to_le_bytes().as_ref()],
        bump
    )]
    pub delegation: Account<'info, Delegation>,

    /// CHECK: only stored as the identity allowed to spend a simple allowance.
    pub delegate: UncheckedAccount<'info>,

    /// CHECK: PDA approved as the token account's SPL delegate; holds no data.
    #[account(seeds = [MULTI_DELEGATE_SEED, token_account.key().as_ref()], bump)]
    pub multi_delegate_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DelegatorError;

    #[test]
    fn only_the_token_account_authority_can_delegate() {
        let owner = Pubkey::new_from_array([1; 32]);
        let delegate = Pubkey::new_from_array([2; 32]);

        assert!(check_account_owner(&owner, &owner).is_ok());
        assert_eq!(
            check_account_owner(&owner, &delegate).unwrap_err(),
            error!(DelegatorError::Unauthorized)
        );
    }
}
