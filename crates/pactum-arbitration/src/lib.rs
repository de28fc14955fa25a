//! # pactum-arbitration — The Arbitrator Boundary
//!
//! Escrow agreements treat the arbitrator as a black box behind the
//! [`Arbitrator`] trait: it quotes dispute fees, opens cases, names each
//! case's subject, collects evidence, and eventually reports a ruling.
//!
//! - **Ruling** ([`ruling`]): the wire-stable ruling code enumeration.
//!   Codes travel as raw integers; [`Ruling::from_code`] is the single
//!   decode point, and consumers fail closed on codes it rejects.
//!
//! - **Arbitrator** ([`arbitrator`]): the trait surface plus
//!   [`DisputeId`] and [`DisputeFees`].
//!
//! - **In-memory** ([`in_memory`]): [`InMemoryArbitrator`], a reference
//!   implementation with an operator-controlled ruling step, used by the
//!   workspace's tests and suitable for local development.

pub mod arbitrator;
pub mod error;
pub mod in_memory;
pub mod ruling;

// Re-export primary types.
pub use arbitrator::{Arbitrator, DisputeFees, DisputeId};
pub use error::ArbitrationError;
pub use in_memory::{EvidenceRecord, InMemoryArbitrator};
pub use ruling::Ruling;
