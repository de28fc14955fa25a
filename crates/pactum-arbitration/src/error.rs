//! # Arbitration Error Types
//!
//! Structured errors for the arbitrator boundary. Unknown dispute
//! identifiers are always errors — no operation silently defaults when
//! asked about a case that does not exist.

use thiserror::Error;

use crate::arbitrator::DisputeId;

/// Errors arising from arbitrator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArbitrationError {
    /// The dispute identifier is not known to this arbitrator.
    #[error("dispute {dispute_id} is not known to the arbitrator")]
    UnknownDispute {
        /// The identifier that failed to resolve.
        dispute_id: DisputeId,
    },

    /// The dispute already carries a final ruling.
    #[error("dispute {dispute_id} has already been ruled")]
    AlreadyRuled {
        /// The dispute in question.
        dispute_id: DisputeId,
    },

    /// Evidence submission is closed because the dispute has been ruled.
    #[error("evidence for dispute {dispute_id} is closed after the final ruling")]
    EvidenceClosed {
        /// The dispute in question.
        dispute_id: DisputeId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_dispute_display_names_id() {
        let err = ArbitrationError::UnknownDispute {
            dispute_id: DisputeId::from_index(7),
        };
        assert!(format!("{err}").contains("dispute:7"));
    }

    #[test]
    fn already_ruled_display() {
        let err = ArbitrationError::AlreadyRuled {
            dispute_id: DisputeId::from_index(0),
        };
        assert!(format!("{err}").contains("already been ruled"));
    }
}
