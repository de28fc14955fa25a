//! # Escrow Error Types
//!
//! Structured errors for the agreement lifecycle. Authorization failures
//! name the rejected caller; deadline failures carry both sides of the
//! comparison; collaborator failures (ledger, arbitrator, registry) pass
//! through verbatim. There is no fallback path — in particular, a ruling
//! code that does not decode aborts settlement rather than defaulting to
//! any payout.

use thiserror::Error;

use pactum_arbitration::{ArbitrationError, DisputeId};
use pactum_core::{AccountId, ContentDigest, Timestamp, TokenId};
use pactum_ledger::LedgerError;
use pactum_registry::RegistryError;

/// Errors arising from escrow agreement operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscrowError {
    /// Only the employer may perform this action.
    #[error("caller {caller} is not the employer")]
    NotEmployer {
        /// The rejected caller.
        caller: AccountId,
    },

    /// Only the contractor may perform this action.
    #[error("caller {caller} is not the contractor")]
    NotContractor {
        /// The rejected caller.
        caller: AccountId,
    },

    /// Employer and contractor would be the same account.
    #[error("employer and contractor must be distinct, got {account} twice")]
    IdenticalParties {
        /// The account that appeared on both sides.
        account: AccountId,
    },

    /// An agreement cannot be created with nothing in escrow.
    #[error("escrow deposit must be nonzero")]
    EmptyDeposit,

    /// A dispute has already been filed for this agreement.
    #[error("agreement already disputed as {dispute_id}")]
    AlreadyDisputed {
        /// The existing dispute.
        dispute_id: DisputeId,
    },

    /// The release deadline has passed; disputes are no longer possible.
    #[error("release time {release_time} has passed (now {now}), dispute window closed")]
    AlreadyUnlocked {
        /// The agreement's release deadline.
        release_time: Timestamp,
        /// The observed time of the call.
        now: Timestamp,
    },

    /// The release deadline has not yet passed.
    #[error("release time {release_time} not reached yet (now {now})")]
    NotYetUnlocked {
        /// The agreement's release deadline.
        release_time: Timestamp,
        /// The observed time of the call.
        now: Timestamp,
    },

    /// Release is blocked while a filed dispute awaits its ruling.
    #[error("payment is blocked while dispute {dispute_id} is unresolved")]
    BeingDisputed {
        /// The unresolved dispute.
        dispute_id: DisputeId,
    },

    /// No dispute has been filed for this agreement.
    #[error("agreement has no dispute to settle")]
    NotDisputed,

    /// The arbitrator has not issued a final ruling yet.
    #[error("dispute {dispute_id} has no ruling yet")]
    NoRulingYet {
        /// The pending dispute.
        dispute_id: DisputeId,
    },

    /// The arbitrator reported a ruling code outside the known set.
    #[error("dispute {dispute_id} returned unrecognized ruling code {code}; refusing to pay out")]
    UnrecognizedRuling {
        /// The dispute in question.
        dispute_id: DisputeId,
        /// The code that failed to decode.
        code: u64,
    },

    /// The agreement has already settled; funds moved exactly once.
    #[error("agreement is already settled")]
    AlreadySettled,

    /// The provided fee ledger is not the token the arbitrator charges in.
    #[error("arbitrator charges fees in {expected}, got ledger for {actual}")]
    FeeTokenMismatch {
        /// The token the arbitrator quoted.
        expected: TokenId,
        /// The token of the ledger supplied.
        actual: TokenId,
    },

    /// The revealed salt and payload do not reproduce the commitment.
    #[error("revealed description does not match commitment {expected} (got {actual})")]
    CommitmentMismatch {
        /// The digest committed at creation.
        expected: ContentDigest,
        /// The digest of the revealed salt ‖ payload.
        actual: ContentDigest,
    },

    /// The registry grants the caller no evidence-submission standing.
    #[error("{actor} has no standing to submit evidence for {dispute_id}")]
    NoEvidenceStanding {
        /// The dispute in question.
        dispute_id: DisputeId,
        /// The actor without standing.
        actor: AccountId,
    },

    /// A ledger operation failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// An arbitrator operation failed.
    #[error(transparent)]
    Arbitration(#[from] ArbitrationError),

    /// A registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_ruling_display_names_code() {
        let err = EscrowError::UnrecognizedRuling {
            dispute_id: DisputeId::from_index(0),
            code: 7,
        };
        let msg = format!("{err}");
        assert!(msg.contains('7'));
        assert!(msg.contains("refusing to pay out"));
    }

    #[test]
    fn deadline_errors_carry_both_instants() {
        let release_time = Timestamp::now();
        let now = release_time.plus_seconds(5);
        let err = EscrowError::AlreadyUnlocked { release_time, now };
        let msg = format!("{err}");
        assert!(msg.contains(&release_time.to_string()));
        assert!(msg.contains(&now.to_string()));
    }

    #[test]
    fn collaborator_errors_pass_through() {
        let inner = ArbitrationError::UnknownDispute {
            dispute_id: DisputeId::from_index(2),
        };
        let err = EscrowError::from(inner.clone());
        assert_eq!(format!("{err}"), format!("{inner}"));
    }
}
