//! # Registry Error Types
//!
//! Structured errors for party binding and representation operations.

use thiserror::Error;

use pactum_arbitration::{ArbitrationError, DisputeId};
use pactum_core::AccountId;

/// Errors arising from registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller is not the subject the arbitrator names for the dispute.
    #[error("caller {caller} is not the subject of {dispute_id}")]
    NotSubject {
        /// The dispute whose parties were being bound.
        dispute_id: DisputeId,
        /// The rejected caller.
        caller: AccountId,
    },

    /// Defendant and challenger would be the same account.
    #[error("defendant and challenger of {dispute_id} must be distinct, got {account} twice")]
    PartyConflict {
        /// The dispute whose parties were being bound.
        dispute_id: DisputeId,
        /// The account that appeared on both sides.
        account: AccountId,
    },

    /// The representative has not consented to represent this client.
    #[error("representative {representative} has not consented to represent {client}")]
    MissingConsent {
        /// The client attempting the activation.
        client: AccountId,
        /// The unconsenting representative.
        representative: AccountId,
    },

    /// The dispute already carries a final ruling; its parties are fixed.
    #[error("parties of {dispute_id} cannot change after the final ruling")]
    CaseConcluded {
        /// The concluded dispute.
        dispute_id: DisputeId,
    },

    /// The arbitrator rejected a lookup made on the registry's behalf.
    #[error(transparent)]
    Arbitration(#[from] ArbitrationError),
}
