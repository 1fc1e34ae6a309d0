use anchor_lang::prelude::*;

#[event]
pub struct DelegationCreated {
    pub delegation: Pubkey,
    pub owner_account: Pubkey,
    pub delegate: Pubkey,
    pub nonce: u64,
    /// 1 = simple, 2 = recurring
    pub kind: u8,
}

#[event]
pub struct SimpleTransferExecuted {
    pub delegation: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}

#[event]
pub struct RecurringTransferExecuted {
    pub delegation: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub last_claim: i64,
}
