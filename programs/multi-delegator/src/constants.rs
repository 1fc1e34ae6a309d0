/// Seed prefix for delegation records.
///
/// PDA seeds: ["delegation", owner_token_account, delegate, nonce.to_le_bytes()]
pub const DELEGATION_SEED: &[u8] = b"delegation";

/// Seed prefix for the per-token-account transfer authority.
///
/// PDA seeds: ["multi_delegate", owner_token_account]
/// This PDA is approved as the SPL delegate of the owner's token account and
/// signs every transfer the program makes out of it.
pub const MULTI_DELEGATE_SEED: &[u8] = b"multi_delegate";
