//! # pactum-escrow — The Work-Agreement Escrow
//!
//! One [`EscrowAgreement`] covers one payment between one employer and one
//! contractor, and at most one dispute:
//!
//! ```text
//! [Active] --deadline passed, no dispute--> release_payment() --> [Settled]
//! [Active] --employer disputes before deadline------------------> [Disputed]
//! [Disputed] --arbitrator ruling available--> settle_dispute() --> [Settled]
//! ```
//!
//! The work description is committed by hash at creation
//! ([`Commitment`]) and revealed only if the employer disputes; the
//! dispute path pays the arbitrator's fee from the employer's approved
//! token balance, registers the parties with the shared
//! [`PartyRegistry`](pactum_registry::PartyRegistry), and settlement pays
//! out deterministically from the ruling — failing closed on any ruling
//! code it does not recognize.
//!
//! ## Atomicity
//!
//! Every operation validates all of its preconditions — including
//! collaborator queries — before its first mutation; once mutation starts
//! no remaining step can fail. Together with `&mut` exclusivity this makes
//! each call all-or-nothing.

pub mod agreement;
pub mod commitment;
pub mod error;

// Re-export primary types.
pub use agreement::{AgreementStatus, EscrowAgreement, EscrowEvent, SettlementOutcome};
pub use commitment::{Commitment, Salt};
pub use error::EscrowError;
