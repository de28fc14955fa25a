//! # In-Memory Reference Arbitrator
//!
//! A minimal [`Arbitrator`] backed by a case map, with an operator-driven
//! [`rule`](InMemoryArbitrator::rule) step standing in for a real
//! adjudication process. The workspace's tests drive it; it is also a
//! reasonable arbitrator for local development setups.
//!
//! The ruling code is recorded verbatim — including codes that are not
//! valid final rulings — so consumers' fail-closed decoding can be
//! exercised against an arbitrary misbehaving arbitrator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pactum_core::{AccountId, ContentDigest};

use crate::arbitrator::{Arbitrator, DisputeFees, DisputeId};
use crate::error::ArbitrationError;

/// One recorded evidence submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// The party the evidence was submitted on behalf of.
    pub on_behalf_of: AccountId,
    /// Content digest of the submitted evidence.
    pub digest: ContentDigest,
}

/// A single case file held by the arbitrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CaseFile {
    subject: AccountId,
    metadata: Vec<u8>,
    ruling: Option<u64>,
    evidence: Vec<EvidenceRecord>,
}

/// An [`Arbitrator`] holding all state in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InMemoryArbitrator {
    fees: DisputeFees,
    next_index: u64,
    cases: BTreeMap<DisputeId, CaseFile>,
}

impl InMemoryArbitrator {
    /// Create an arbitrator charging `fees` per dispute.
    pub fn new(fees: DisputeFees) -> Self {
        Self {
            fees,
            next_index: 0,
            cases: BTreeMap::new(),
        }
    }

    /// Record the final ruling code for a case.
    ///
    /// The code is stored verbatim; it is the consumer's job to reject
    /// codes that do not decode to a [`Ruling`](crate::Ruling).
    ///
    /// # Errors
    ///
    /// Returns [`ArbitrationError::UnknownDispute`] for an unknown id and
    /// [`ArbitrationError::AlreadyRuled`] if a ruling was already recorded.
    pub fn rule(&mut self, dispute_id: DisputeId, code: u64) -> Result<(), ArbitrationError> {
        let case = self
            .cases
            .get_mut(&dispute_id)
            .ok_or(ArbitrationError::UnknownDispute { dispute_id })?;
        if case.ruling.is_some() {
            return Err(ArbitrationError::AlreadyRuled { dispute_id });
        }
        case.ruling = Some(code);
        Ok(())
    }

    /// The evidence recorded for a case, in submission order.
    ///
    /// # Errors
    ///
    /// Returns [`ArbitrationError::UnknownDispute`] for an unknown id.
    pub fn evidence_of(&self, dispute_id: DisputeId) -> Result<&[EvidenceRecord], ArbitrationError> {
        self.cases
            .get(&dispute_id)
            .map(|case| case.evidence.as_slice())
            .ok_or(ArbitrationError::UnknownDispute { dispute_id })
    }

    /// The metadata the subject attached when opening a case.
    ///
    /// # Errors
    ///
    /// Returns [`ArbitrationError::UnknownDispute`] for an unknown id.
    pub fn metadata_of(&self, dispute_id: DisputeId) -> Result<&[u8], ArbitrationError> {
        self.cases
            .get(&dispute_id)
            .map(|case| case.metadata.as_slice())
            .ok_or(ArbitrationError::UnknownDispute { dispute_id })
    }
}

impl Arbitrator for InMemoryArbitrator {
    fn dispute_fees(&self) -> DisputeFees {
        self.fees
    }

    fn create_dispute(
        &mut self,
        subject: AccountId,
        metadata: Vec<u8>,
    ) -> Result<DisputeId, ArbitrationError> {
        let id = DisputeId::from_index(self.next_index);
        self.next_index += 1;
        self.cases.insert(
            id,
            CaseFile {
                subject,
                metadata,
                ruling: None,
                evidence: Vec::new(),
            },
        );
        Ok(id)
    }

    fn subject_of(&self, dispute_id: DisputeId) -> Result<AccountId, ArbitrationError> {
        self.cases
            .get(&dispute_id)
            .map(|case| case.subject)
            .ok_or(ArbitrationError::UnknownDispute { dispute_id })
    }

    fn ruling_of(&self, dispute_id: DisputeId) -> Result<Option<u64>, ArbitrationError> {
        self.cases
            .get(&dispute_id)
            .map(|case| case.ruling)
            .ok_or(ArbitrationError::UnknownDispute { dispute_id })
    }

    fn submit_evidence(
        &mut self,
        dispute_id: DisputeId,
        on_behalf_of: AccountId,
        evidence: ContentDigest,
    ) -> Result<(), ArbitrationError> {
        let case = self
            .cases
            .get_mut(&dispute_id)
            .ok_or(ArbitrationError::UnknownDispute { dispute_id })?;
        if case.ruling.is_some() {
            return Err(ArbitrationError::EvidenceClosed { dispute_id });
        }
        case.evidence.push(EvidenceRecord {
            on_behalf_of,
            digest: evidence,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pactum_core::{sha256_bytes, Amount, TokenId};

    fn test_fees() -> DisputeFees {
        DisputeFees {
            recipient: AccountId::new(),
            token: TokenId::new(),
            amount: Amount::new(100),
        }
    }

    fn arbitrator() -> InMemoryArbitrator {
        InMemoryArbitrator::new(test_fees())
    }

    #[test]
    fn dispute_ids_are_sequential() {
        let mut arb = arbitrator();
        let subject = AccountId::new();
        let first = arb.create_dispute(subject, Vec::new()).unwrap();
        let second = arb.create_dispute(subject, Vec::new()).unwrap();
        assert_eq!(first, DisputeId::from_index(0));
        assert_eq!(second, DisputeId::from_index(1));
    }

    #[test]
    fn subject_is_recorded() {
        let mut arb = arbitrator();
        let subject = AccountId::new();
        let id = arb.create_dispute(subject, b"terms".to_vec()).unwrap();
        assert_eq!(arb.subject_of(id).unwrap(), subject);
        assert_eq!(arb.metadata_of(id).unwrap(), b"terms");
    }

    #[test]
    fn unknown_dispute_is_an_error_everywhere() {
        let arb = arbitrator();
        let id = DisputeId::from_index(9);
        assert!(matches!(
            arb.subject_of(id),
            Err(ArbitrationError::UnknownDispute { .. })
        ));
        assert!(matches!(
            arb.ruling_of(id),
            Err(ArbitrationError::UnknownDispute { .. })
        ));
        assert!(matches!(
            arb.evidence_of(id),
            Err(ArbitrationError::UnknownDispute { .. })
        ));
    }

    #[test]
    fn ruling_pending_then_final() {
        let mut arb = arbitrator();
        let id = arb.create_dispute(AccountId::new(), Vec::new()).unwrap();
        assert_eq!(arb.ruling_of(id).unwrap(), None);
        arb.rule(id, 4).unwrap();
        assert_eq!(arb.ruling_of(id).unwrap(), Some(4));
    }

    #[test]
    fn double_ruling_rejected() {
        let mut arb = arbitrator();
        let id = arb.create_dispute(AccountId::new(), Vec::new()).unwrap();
        arb.rule(id, 3).unwrap();
        assert!(matches!(
            arb.rule(id, 4),
            Err(ArbitrationError::AlreadyRuled { .. })
        ));
        assert_eq!(arb.ruling_of(id).unwrap(), Some(3));
    }

    #[test]
    fn unrecognized_codes_are_recorded_verbatim() {
        let mut arb = arbitrator();
        let id = arb.create_dispute(AccountId::new(), Vec::new()).unwrap();
        arb.rule(id, 7).unwrap();
        assert_eq!(arb.ruling_of(id).unwrap(), Some(7));
    }

    #[test]
    fn evidence_accumulates_in_order() {
        let mut arb = arbitrator();
        let id = arb.create_dispute(AccountId::new(), Vec::new()).unwrap();
        let party = AccountId::new();
        arb.submit_evidence(id, party, sha256_bytes(b"first")).unwrap();
        arb.submit_evidence(id, party, sha256_bytes(b"second")).unwrap();
        let evidence = arb.evidence_of(id).unwrap();
        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0].digest, sha256_bytes(b"first"));
        assert_eq!(evidence[1].digest, sha256_bytes(b"second"));
    }

    #[test]
    fn evidence_closed_after_ruling() {
        let mut arb = arbitrator();
        let id = arb.create_dispute(AccountId::new(), Vec::new()).unwrap();
        arb.rule(id, 2).unwrap();
        assert!(matches!(
            arb.submit_evidence(id, AccountId::new(), sha256_bytes(b"late")),
            Err(ArbitrationError::EvidenceClosed { .. })
        ));
    }

    #[test]
    fn fees_are_quoted_verbatim() {
        let fees = test_fees();
        let arb = InMemoryArbitrator::new(fees);
        assert_eq!(arb.dispute_fees(), fees);
    }

    #[test]
    fn serde_roundtrip_preserves_cases() {
        let mut arb = arbitrator();
        let subject = AccountId::new();
        let id = arb.create_dispute(subject, b"m".to_vec()).unwrap();
        arb.rule(id, 4).unwrap();
        let json = serde_json::to_string(&arb).unwrap();
        let back: InMemoryArbitrator = serde_json::from_str(&json).unwrap();
        assert_eq!(back.subject_of(id).unwrap(), subject);
        assert_eq!(back.ruling_of(id).unwrap(), Some(4));
    }
}
