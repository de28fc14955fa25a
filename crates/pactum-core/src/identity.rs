//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the two kinds of principals in the system:
//! accounts (parties, representatives, agreement instances, fee recipients)
//! and token ledgers. Each identifier is a distinct type — you cannot pass
//! a [`TokenId`] where an [`AccountId`] is expected.
//!
//! UUID-based identifiers are always valid by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for an account on the ledgers.
///
/// Accounts identify natural parties (employers, contractors,
/// representatives), escrow agreement instances, and arbitration fee
/// recipients alike. An agreement holds funds under its own `AccountId`
/// exactly as any other principal would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new random account identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an account identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "acct:{}", self.0)
    }
}

/// A unique identifier for a fungible token ledger.
///
/// Dispute fees are denominated in a specific token; carrying the ledger's
/// identity alongside the fee amount lets callers detect a mismatched
/// ledger before any funds move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(Uuid);

impl TokenId {
    /// Create a new random token identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a token identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "token:{}", self.0)
    }
}
