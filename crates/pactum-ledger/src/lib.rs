//! # pactum-ledger — Balances and Allowances
//!
//! Two ledgers back the escrow system:
//!
//! - **Native** ([`native`]): the currency escrow agreements hold and pay
//!   out. Plain account balances with checked transfers.
//!
//! - **Token** ([`token`]): the fungible token dispute fees are
//!   denominated in. Adds owner→spender allowances so a third party (the
//!   escrow agreement) can pull a pre-approved fee from the employer.
//!
//! Every mutation validates before it writes: a failed operation leaves
//! both sides of the transfer untouched. Balance arithmetic is checked —
//! there is no wrapping path.

pub mod error;
pub mod native;
pub mod token;

// Re-export primary types.
pub use error::LedgerError;
pub use native::NativeLedger;
pub use token::TokenLedger;
