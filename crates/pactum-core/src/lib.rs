#![deny(missing_docs)]

//! # pactum-core — Foundational Types for Pactum
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `chrono`,
//! `uuid`, and `sha2` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`TokenId`] where an [`AccountId`]
//!    is expected, and a monetary [`Amount`] is not a bare integer.
//!
//! 2. **Checked arithmetic only.** [`Amount`] exposes `checked_add` and
//!    `checked_sub`; there is no wrapping path for balances anywhere in the
//!    workspace.
//!
//! 3. **No ambient authority.** State-changing operations never read the
//!    system clock or infer a caller. Both travel in a [`CallContext`],
//!    so every deadline gate and permission check is deterministic under
//!    test.
//!
//! 4. **One digest pipeline.** All content-addressed values flow through
//!    [`sha256_bytes`] or [`Sha256Accumulator`]; there is no second hash
//!    function to diverge from.

pub mod amount;
pub mod context;
pub mod digest;
pub mod identity;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use amount::Amount;
pub use context::CallContext;
pub use digest::{sha256_bytes, ContentDigest, Sha256Accumulator};
pub use identity::{AccountId, TokenId};
pub use temporal::Timestamp;
