//! # Native Currency Ledger
//!
//! Account balances in the native currency — the currency an escrow
//! agreement locks at creation and pays out at settlement. An agreement
//! holds its deposit under its own [`AccountId`] like any other principal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pactum_core::{AccountId, Amount};

use crate::error::LedgerError;

/// The native currency ledger: a map of account balances.
///
/// Absent accounts hold zero. `credit` is the issuance path (used by test
/// and deployment setup); `transfer` is the only path that moves existing
/// funds between accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NativeLedger {
    balances: HashMap<AccountId, Amount>,
}

impl NativeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The balance of `account`. Absent accounts hold zero.
    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    /// Credit `amount` to `account`, creating the account if absent.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the credited balance
    /// would exceed the representable range.
    pub fn credit(&mut self, account: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let updated = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow {
                account,
                requested: amount,
            })?;
        self.balances.insert(account, updated);
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// Both new balances are computed before either is written, so a
    /// failed transfer leaves the ledger untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if `from` holds less
    /// than `amount`, and [`LedgerError::BalanceOverflow`] if `to` cannot
    /// absorb it.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self.balance_of(from);
        let debited = from_balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                account: from,
                balance: from_balance,
                requested: amount,
            })?;
        if from == to {
            // A self-transfer only has to be covered; balances are unchanged.
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow {
                account: to,
                requested: amount,
            })?;
        self.balances.insert(from, debited);
        self.balances.insert(to, credited);
        Ok(())
    }
}
