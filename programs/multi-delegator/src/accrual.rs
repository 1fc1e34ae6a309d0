//! Linear accrual for recurring delegations.
//!
//! Accrual is continuous: any elapsed time, however short, is worth
//! `elapsed * amount_per_period / period` tokens, rounded down. Cranking often
//! therefore never pays out more than a single crank at `end_date` would; each
//! crank can only lose its own rounding remainder.

use anchor_lang::prelude::*;

use crate::errors::DelegatorError;
use crate::state::RecurringDelegation;

/// Outcome of settling a recurring delegation at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Tokens owed to the destination.
    pub amount: u64,
    /// New value for `last_claim` once the amount has been paid.
    pub claimed_until: i64,
}

/// `floor(elapsed * amount_per_period / period)` computed in 128 bits.
pub fn prorate(elapsed: u64, amount_per_period: u64, period: u64) -> Result<u64> {
    require!(period > 0, DelegatorError::InvalidSpec);

    let amount = u128::from(elapsed) * u128::from(amount_per_period) / u128::from(period);
    u64::try_from(amount).map_err(|_| error!(DelegatorError::ArithmeticOverflow))
}

fn elapsed_between(from: i64, to: i64) -> Result<u64> {
    let elapsed = to.checked_sub(from).ok_or(DelegatorError::ArithmeticOverflow)?;
    u64::try_from(elapsed).map_err(|_| error!(DelegatorError::ArithmeticOverflow))
}

/// Compute what a recurring delegation owes at `now` without touching it.
///
/// Fails with `NothingToClaim` when `now` (capped at `end_date`) is not past
/// `last_claim`. A zero amount is returned as-is; the caller decides whether
/// that is an error.
pub fn settle(recurring: &RecurringDelegation, now: i64) -> Result<Settlement> {
    let claimed_until = now.min(recurring.end_date);
    require!(claimed_until > recurring.last_claim, DelegatorError::NothingToClaim);

    let elapsed = elapsed_between(recurring.last_claim, claimed_until)?;
    let amount = prorate(elapsed, recurring.amount_per_period, recurring.period)?;

    Ok(Settlement { amount, claimed_until })
}

impl RecurringDelegation {
    /// Everything the delegation can ever pay out.
    pub fn window_entitlement(&self) -> Result<u64> {
        let window = elapsed_between(self.start_date, self.end_date)?;
        prorate(window, self.amount_per_period, self.period)
    }

    /// Upper bound on the cumulative amount paid out by `now`.
    pub fn accrued_since_start(&self, now: i64) -> Result<u64> {
        let until = now.min(self.end_date);
        if until <= self.start_date {
            return Ok(0);
        }
        prorate(elapsed_between(self.start_date, until)?, self.amount_per_period, self.period)
    }
}
