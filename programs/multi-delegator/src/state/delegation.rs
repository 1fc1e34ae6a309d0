use anchor_lang::prelude::*;

use crate::constants::DELEGATION_SEED;
use crate::errors::DelegatorError;

/// Spending rights granted over an owner's token account.
///
/// PDA seeds: ["delegation", owner_account, delegate, nonce.to_le_bytes()]
/// The nonce lets one owner grant several independent delegations to the same
/// delegate. Records are written once by `add_delegate` and afterwards only by
/// the transfer instructions.
#[derive(InitSpace)]
#[account]
pub struct Delegation {
    /// Token account the delegation draws from.
    pub owner_account: Pubkey,

    /// Identity allowed to spend a simple allowance.
    pub delegate: Pubkey,

    /// Disambiguates delegations between the same owner account and delegate.
    pub nonce: u64,

    /// PDA bump seed for re-derivation.
    pub bump: u8,

    pub kind: DelegationKind,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub enum DelegationKind {
    /// Remaining allowance. Only ever decreases.
    Simple(u64),
    Recurring(RecurringDelegation),
}

/// Allowance that accrues linearly over `[start_date, end_date]`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct RecurringDelegation {
    pub amount_per_period: u64,

    /// Period length in seconds.
    pub period: u64,

    /// Unix timestamp at which accrual starts.
    pub start_date: i64,

    /// Unix timestamp after which nothing more accrues.
    pub end_date: i64,

    /// Time up to which accrual has been paid out.
    /// Stays within `[start_date, end_date]` and never moves backwards.
    pub last_claim: i64,

    /// Token account every settlement pays into.
    pub destination: Pubkey,
}

impl From<&DelegationKind> for u8 {
    fn from(kind: &DelegationKind) -> Self {
        match kind {
            DelegationKind::Simple(_) => 1u8,
            DelegationKind::Recurring(_) => 2u8,
        }
    }
}

impl DelegationKind {
    pub fn validate(&self) -> Result<()> {
        match self {
            DelegationKind::Simple(amount) => {
                require!(*amount > 0, DelegatorError::InvalidSpec);
                Ok(())
            }
            DelegationKind::Recurring(recurring) => recurring.validate(),
        }
    }
}

impl RecurringDelegation {
    pub fn validate(&self) -> Result<()> {
        require!(self.period > 0, DelegatorError::InvalidSpec);
        require!(self.amount_per_period > 0, DelegatorError::InvalidSpec);
        require!(self.end_date > self.start_date, DelegatorError::InvalidSpec);
        // Accrual grows with elapsed time, so every claim fits once the full window does.
        self.window_entitlement()
            .map_err(|_| error!(DelegatorError::InvalidSpec))?;
        Ok(())
    }
}

impl Delegation {
    pub fn find_address(program_id: &Pubkey, owner_account: &Pubkey, delegate: &Pubkey, nonce: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DELEGATION_SEED, owner_account.as_ref(), delegate.as_ref(), nonce.to_le_bytes().as_ref()],
            program_id,
        )
    }

    /// A freshly allocated record has a zeroed owner account.
    pub fn is_initialized(&self) -> bool {
        self.owner_account != Pubkey::default()
    }

    /// Write the initial state of a new delegation.
    ///
    /// A recurring delegation always starts accruing from `start_date`: whatever
    /// `last_claim` the caller proposed is overwritten.
    pub fn initialize(
        &mut self,
        owner_account: Pubkey,
        delegate: Pubkey,
        nonce: u64,
        kind: DelegationKind,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), DelegatorError::DuplicateDelegation);
        kind.validate()?;

        self.owner_account = owner_account;
        self.delegate = delegate;
        self.nonce = nonce;
        self.bump = bump;
        self.kind = match kind {
            DelegationKind::Recurring(mut recurring) => {
                recurring.last_claim = recurring.start_date;
                DelegationKind::Recurring(recurring)
            }
            simple => simple,
        };

        Ok(())
    }

    /// A simple delegation with nothing left to spend. The record is kept.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, DelegationKind::Simple(0))
    }
}
