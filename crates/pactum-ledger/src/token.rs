//! # Fungible Token Ledger
//!
//! Token balances plus owner→spender allowances. Dispute fees are paid in
//! a token: the employer approves the escrow agreement's account as a
//! spender, and the agreement pulls the fee with `transfer_from` when a
//! dispute is filed. Without a sufficient prior approval the pull fails
//! and the dispute filing aborts with it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pactum_core::{AccountId, Amount, TokenId};

use crate::error::LedgerError;

/// A fungible token ledger with ERC-20-shaped allowance semantics.
///
/// An allowance of [`Amount::MAX`] is treated as unlimited and is not
/// decremented by transfers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLedger {
    id: TokenId,
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<AccountId, HashMap<AccountId, Amount>>,
}

impl TokenLedger {
    /// Create an empty ledger with a fresh token identity.
    pub fn new() -> Self {
        Self::with_id(TokenId::new())
    }

    /// Create an empty ledger for an existing token identity.
    pub fn with_id(id: TokenId) -> Self {
        Self {
            id,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// The identity of the token this ledger tracks.
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// The balance of `account`. Absent accounts hold zero.
    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    /// The amount `spender` may currently pull from `owner`.
    pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&owner)
            .and_then(|per_spender| per_spender.get(&spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Mint `amount` new tokens to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the credited balance
    /// would exceed the representable range.
    pub fn mint(&mut self, account: AccountId, amount: Amount) -> Result<(), LedgerError> {
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

    /// Set the allowance from `owner` to `spender`.
    ///
    /// Overwrites any prior approval; approving [`Amount::ZERO`] revokes.
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.entry(owner).or_default().insert(spender, amount);
    }

    /// Move `amount` from `from` to `to` as the owner.
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
        self.move_balance(from, to, amount)
    }

    /// Pull `amount` from `from` to `to` as `spender`.
    ///
    /// A spender pulling from its own account needs no allowance.
    /// Otherwise the allowance is checked first and, unless unlimited,
    /// decremented after the balances move.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientAllowance`] when the approval
    /// does not cover `amount`, plus the balance errors of
    /// [`transfer`](Self::transfer).
    pub fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if spender == from {
            return self.move_balance(from, to, amount);
        }
        let allowed = self.allowance(from, spender);
        if allowed < amount {
            return Err(LedgerError::InsufficientAllowance {
                owner: from,
                spender,
                allowance: allowed,
                requested: amount,
            });
        }
        self.move_balance(from, to, amount)?;
        if allowed != Amount::MAX {
            // Balances moved successfully; the checked subtraction is covered.
            let remaining = allowed.checked_sub(amount).unwrap_or(Amount::ZERO);
            self.allowances.entry(from).or_default().insert(spender, remaining);
        }
        Ok(())
    }

    fn move_balance(
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

impl Default for TokenLedger {
    fn default() -> Self {
        Self::new()
    }
}
