use anchor_lang::prelude::*;

#[error_code]
pub enum DelegatorError {
    #[msg("Signer does not hold the authority required for this delegation")]
    Unauthorized,

    #[msg("A delegation already exists for this owner, delegate and nonce")]
    DuplicateDelegation,

    #[msg("Requested amount exceeds the remaining allowance")]
    InsufficientAllowance,

    #[msg("Source token account balance is too low")]
    InsufficientFunds,

    #[msg("Nothing has accrued since the last claim")]
    NothingToClaim,

    #[msg("Delegation parameters are invalid (period must be positive and end_date after start_date)")]
    InvalidSpec,

    #[msg("Delegation kind does not support this transfer")]
    InvalidKind,

    #[msg("Transfer amount must be greater than zero")]
    InvalidAmount,

    #[msg("Source token account does not match the delegation")]
    InvalidSource,

    #[msg("Destination token account does not match the delegation")]
    InvalidDestination,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
