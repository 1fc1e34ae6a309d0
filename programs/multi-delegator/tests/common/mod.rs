//! Shared fixtures for driving delegations without a validator.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use multi_delegator::errors::DelegatorError;
use multi_delegator::ledger::Ledger;
use multi_delegator::state::{Delegation, DelegationKind, RecurringDelegation};

pub const START: i64 = 1_700_000_000;

/// Deterministic key derived from a seed byte.
pub fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn owner_account() -> Pubkey {
    test_pubkey(1)
}

pub fn delegate() -> Pubkey {
    test_pubkey(2)
}

pub fn merchant_account() -> Pubkey {
    test_pubkey(3)
}

pub fn stranger() -> Pubkey {
    test_pubkey(4)
}

/// Token balances held in memory. A move either applies completely or not at all.
#[derive(Default)]
pub struct MemoryLedger {
    balances: HashMap<Pubkey, u64>,
    pub moves: Vec<(Pubkey, Pubkey, u64)>,
}

impl MemoryLedger {
    pub fn with_balance(account: Pubkey, amount: u64) -> Self {
        let mut ledger = Self::default();
        ledger.balances.insert(account, amount);
        ledger
    }

    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or_default()
    }
}

impl Ledger for MemoryLedger {
    fn move_funds(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let source_balance = self.balance(from);
        require!(source_balance >= amount, DelegatorError::InsufficientFunds);

        self.balances.insert(*from, source_balance - amount);
        *self.balances.entry(*to).or_default() += amount;
        self.moves.push((*from, *to, amount));
        Ok(())
    }
}

fn blank_delegation() -> Delegation {
    Delegation {
        owner_account: Pubkey::default(),
        delegate: Pubkey::default(),
        nonce: 0,
        bump: 0,
        kind: DelegationKind::Simple(0),
    }
}

pub fn simple_delegation(cap: u64) -> Delegation {
    let mut delegation = blank_delegation();
    delegation
        .initialize(owner_account(), delegate(), 1, DelegationKind::Simple(cap), 255)
        .unwrap();
    delegation
}

pub fn recurring_delegation(amount_per_period: u64, period: u64, window: i64) -> Delegation {
    let mut delegation = blank_delegation();
    delegation
        .initialize(
            owner_account(),
            delegate(),
            2,
            DelegationKind::Recurring(RecurringDelegation {
                amount_per_period,
                period,
                start_date: START,
                end_date: START + window,
                last_claim: 1,
                destination: merchant_account(),
            }),
            255,
        )
        .unwrap();
    delegation
}

pub fn recurring_state(delegation: &Delegation) -> &RecurringDelegation {
    match &delegation.kind {
        DelegationKind::Recurring(recurring) => recurring,
        other => panic!("expected a recurring delegation, found {other:?}"),
    }
}

pub fn remaining(delegation: &Delegation) -> u64 {
    match delegation.kind {
        DelegationKind::Simple(remaining) => remaining,
        ref other => panic!("expected a simple delegation, found {other:?}"),
    }
}
