//! # Ledger Error Types
//!
//! Structured errors for balance and allowance operations. Each variant
//! carries the accounts and amounts involved so a failed transfer can be
//! diagnosed without replaying it.

use thiserror::Error;

use pactum_core::{AccountId, Amount};

/// Errors arising from ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The debited account does not hold the requested amount.
    #[error("account {account} holds {balance}, cannot move {requested}")]
    InsufficientBalance {
        /// The account being debited.
        account: AccountId,
        /// Its current balance.
        balance: Amount,
        /// The amount the operation tried to move.
        requested: Amount,
    },

    /// The spender's allowance from the owner does not cover the transfer.
    #[error("spender {spender} is allowed {allowance} from {owner}, cannot pull {requested}")]
    InsufficientAllowance {
        /// The account whose funds would be pulled.
        owner: AccountId,
        /// The account attempting the pull.
        spender: AccountId,
        /// The current approved allowance.
        allowance: Amount,
        /// The amount the operation tried to pull.
        requested: Amount,
    },

    /// Crediting the account would overflow its balance.
    #[error("crediting {requested} to account {account} would overflow its balance")]
    BalanceOverflow {
        /// The account being credited.
        account: AccountId,
        /// The amount that did not fit.
        requested: Amount,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_display_names_amounts() {
        let err = LedgerError::InsufficientBalance {
            account: AccountId::new(),
            balance: Amount::new(5),
            requested: Amount::new(9),
        };
        let msg = format!("{err}");
        assert!(msg.contains('5'));
        assert!(msg.contains('9'));
    }

    #[test]
    fn insufficient_allowance_display_names_parties() {
        let owner = AccountId::new();
        let spender = AccountId::new();
        let err = LedgerError::InsufficientAllowance {
            owner,
            spender,
            allowance: Amount::ZERO,
            requested: Amount::new(1),
        };
        let msg = format!("{err}");
        assert!(msg.contains(&owner.to_string()));
        assert!(msg.contains(&spender.to_string()));
    }
}
