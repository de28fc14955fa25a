//! # The Arbitrator Trait
//!
//! The interface every arbitration service exposes to its subjects. An
//! escrow agreement consumes exactly this surface: quote the fee, open a
//! case naming the agreement as subject, forward evidence, poll for the
//! ruling. The registry consumes [`subject_of`](Arbitrator::subject_of) to
//! verify that only a dispute's subject binds its parties.

use serde::{Deserialize, Serialize};

use pactum_core::{AccountId, Amount, ContentDigest, TokenId};

use crate::error::ArbitrationError;

/// A unique identifier for an arbitration case.
///
/// Assigned sequentially by the arbitrator when a case is opened; subjects
/// store the identifier and use it for every later interaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DisputeId(u64);

impl DisputeId {
    /// Create a dispute identifier from its case index.
    pub const fn from_index(index: u64) -> Self {
        Self(index)
    }

    /// The underlying case index.
    pub const fn index(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DisputeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dispute:{}", self.0)
    }
}

/// The fee an arbitrator charges to open a dispute.
///
/// The token identity travels with the amount so a subject can detect a
/// mismatched fee ledger before moving funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeFees {
    /// The account the fee is paid to.
    pub recipient: AccountId,
    /// The token the fee is denominated in.
    pub token: TokenId,
    /// The fee amount.
    pub amount: Amount,
}

/// The operations an arbitration service exposes to its subjects.
///
/// `ruling_of` reports the raw wire code, not a decoded
/// [`Ruling`](crate::Ruling) — decoding and the fail-closed handling of
/// unrecognized codes belong to the consumer.
pub trait Arbitrator {
    /// The fee currently required to open a dispute.
    fn dispute_fees(&self) -> DisputeFees;

    /// Open a new case with `subject` as its immutable subject.
    ///
    /// The metadata is the subject's public description of what is being
    /// disputed; the arbitrator stores it verbatim.
    fn create_dispute(
        &mut self,
        subject: AccountId,
        metadata: Vec<u8>,
    ) -> Result<DisputeId, ArbitrationError>;

    /// The subject that opened `dispute_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ArbitrationError::UnknownDispute`] for an id this
    /// arbitrator never issued.
    fn subject_of(&self, dispute_id: DisputeId) -> Result<AccountId, ArbitrationError>;

    /// The final ruling code for `dispute_id`, or `None` while pending.
    ///
    /// # Errors
    ///
    /// Returns [`ArbitrationError::UnknownDispute`] for an id this
    /// arbitrator never issued.
    fn ruling_of(&self, dispute_id: DisputeId) -> Result<Option<u64>, ArbitrationError>;

    /// Record evidence for `dispute_id`, attributed to `on_behalf_of`.
    ///
    /// Callers are expected to have resolved standing already; the
    /// arbitrator records attribution, it does not adjudicate it.
    ///
    /// # Errors
    ///
    /// Returns [`ArbitrationError::UnknownDispute`] for an unknown id and
    /// [`ArbitrationError::EvidenceClosed`] once the case has been ruled.
    fn submit_evidence(
        &mut self,
        dispute_id: DisputeId,
        on_behalf_of: AccountId,
        evidence: ContentDigest,
    ) -> Result<(), ArbitrationError>;
}
