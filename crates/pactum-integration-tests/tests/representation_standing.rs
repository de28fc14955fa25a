//! # Representation and Evidence Standing
//!
//! The registry and escrow working together: parties gain standing by
//! being registered through a dispute filing, representatives gain it by
//! mutual opt-in, and conflicts of interest lose it for everyone
//! involved — checked end-to-end through `submit_evidence`.

use pactum_arbitration::{ArbitrationError, DisputeFees, DisputeId, InMemoryArbitrator, Ruling};
use pactum_core::{sha256_bytes, AccountId, Amount, CallContext, Timestamp};
use pactum_escrow::{Commitment, EscrowAgreement, EscrowError, Salt};
use pactum_ledger::{NativeLedger, TokenLedger};
use pactum_registry::{PartyRegistry, RegistryError};

const DESCRIPTION: &[u8] = b"migrate the customer index to the sharded store";

struct Setup {
    native: NativeLedger,
    arbitrator: InMemoryArbitrator,
    registry: PartyRegistry,
    employer: AccountId,
    contractor: AccountId,
    release_time: Timestamp,
    agreement: EscrowAgreement,
    dispute_id: DisputeId,
}

fn disputed_setup() -> Setup {
    let employer = AccountId::new();
    let contractor = AccountId::new();

    let mut native = NativeLedger::new();
    native.credit(employer, Amount::new(1_000_000)).unwrap();

    let mut fee_token = TokenLedger::new();
    fee_token.mint(employer, Amount::new(500)).unwrap();

    let mut arbitrator = InMemoryArbitrator::new(DisputeFees {
        recipient: AccountId::new(),
        token: fee_token.id(),
        amount: Amount::new(50),
    });

    let salt = Salt::random();
    let created_at = Timestamp::now();
    let release_time = created_at.plus_days(31);
    let mut agreement = EscrowAgreement::create(
        &CallContext::new(employer, created_at),
        &mut native,
        contractor,
        Commitment::compute(&salt, DESCRIPTION),
        release_time,
        Amount::new(700_000),
    )
    .unwrap();
    fee_token.approve(employer, agreement.account(), Amount::MAX);

    let mut registry = PartyRegistry::new();
    let dispute_id = agreement
        .dispute(
            &CallContext::new(employer, release_time.plus_days(-1)),
            &salt,
            DESCRIPTION,
            &mut arbitrator,
            &mut fee_token,
            &mut registry,
        )
        .unwrap();

    Setup {
        native,
        arbitrator,
        registry,
        employer,
        contractor,
        release_time,
        agreement,
        dispute_id,
    }
}

fn ctx(s: &Setup, caller: AccountId) -> CallContext {
    CallContext::new(caller, s.release_time.plus_days(-1))
}

#[test]
fn both_parties_have_standing_after_filing() {
    let mut s = disputed_setup();
    for party in [s.employer, s.contractor] {
        let on_behalf_of = s
            .agreement
            .submit_evidence(
                &ctx(&s, party),
                &s.registry,
                &mut s.arbitrator,
                sha256_bytes(b"status report"),
            )
            .unwrap();
        assert_eq!(on_behalf_of, party);
    }
    assert_eq!(s.arbitrator.evidence_of(s.dispute_id).unwrap().len(), 2);
}

#[test]
fn representation_needs_both_sides() {
    let mut s = disputed_setup();
    let rep = AccountId::new();

    // Client activation before the representative consents is refused.
    let err = s
        .registry
        .set_representation_active(s.employer, rep, true)
        .unwrap_err();
    assert!(matches!(err, RegistryError::MissingConsent { .. }));

    // Consent alone grants nothing.
    s.registry.set_representative_consent(rep, s.employer, true);
    let err = s
        .agreement
        .submit_evidence(
            &ctx(&s, rep),
            &s.registry,
            &mut s.arbitrator,
            sha256_bytes(b"x"),
        )
        .unwrap_err();
    assert!(matches!(err, EscrowError::NoEvidenceStanding { .. }));

    // Both sides in force: the rep submits, attributed to the client.
    s.registry
        .set_representation_active(s.employer, rep, true)
        .unwrap();
    let on_behalf_of = s
        .agreement
        .submit_evidence(
            &ctx(&s, rep),
            &s.registry,
            &mut s.arbitrator,
            sha256_bytes(b"inspection photos"),
        )
        .unwrap();
    assert_eq!(on_behalf_of, s.employer);
}

#[test]
fn either_side_revokes_unilaterally() {
    let mut s = disputed_setup();
    let rep = AccountId::new();
    s.registry.set_representative_consent(rep, s.employer, true);
    s.registry
        .set_representation_active(s.employer, rep, true)
        .unwrap();

    // Client revokes.
    s.registry
        .set_representation_active(s.employer, rep, false)
        .unwrap();
    assert!(s
        .agreement
        .submit_evidence(&ctx(&s, rep), &s.registry, &mut s.arbitrator, sha256_bytes(b"x"))
        .is_err());

    // Restore, then the representative revokes; activation is forced off.
    s.registry
        .set_representation_active(s.employer, rep, true)
        .unwrap();
    s.registry.set_representative_consent(rep, s.employer, false);
    assert!(!s.registry.is_representing(s.employer, rep));
    assert!(s
        .agreement
        .submit_evidence(&ctx(&s, rep), &s.registry, &mut s.arbitrator, sha256_bytes(b"x"))
        .is_err());
}

#[test]
fn double_agent_is_denied_until_one_side_drops() {
    let mut s = disputed_setup();
    let rep = AccountId::new();
    for client in [s.employer, s.contractor] {
        s.registry.set_representative_consent(rep, client, true);
        s.registry.set_representation_active(client, rep, true).unwrap();
    }
    let err = s
        .agreement
        .submit_evidence(
            &ctx(&s, rep),
            &s.registry,
            &mut s.arbitrator,
            sha256_bytes(b"x"),
        )
        .unwrap_err();
    assert!(matches!(err, EscrowError::NoEvidenceStanding { .. }));

    s.registry
        .set_representation_active(s.contractor, rep, false)
        .unwrap();
    let on_behalf_of = s
        .agreement
        .submit_evidence(
            &ctx(&s, rep),
            &s.registry,
            &mut s.arbitrator,
            sha256_bytes(b"x"),
        )
        .unwrap();
    assert_eq!(on_behalf_of, s.employer);
}

#[test]
fn party_repping_the_opponent_loses_standing() {
    let mut s = disputed_setup();
    // The contractor consents to represent the employer, and the employer
    // activates: the contractor now nominally stands for both sides.
    s.registry
        .set_representative_consent(s.contractor, s.employer, true);
    s.registry
        .set_representation_active(s.employer, s.contractor, true)
        .unwrap();
    let err = s
        .agreement
        .submit_evidence(
            &ctx(&s, s.contractor),
            &s.registry,
            &mut s.arbitrator,
            sha256_bytes(b"x"),
        )
        .unwrap_err();
    assert!(matches!(err, EscrowError::NoEvidenceStanding { .. }));

    // Dropping the activation restores the contractor's own standing.
    s.registry
        .set_representation_active(s.employer, s.contractor, false)
        .unwrap();
    let on_behalf_of = s
        .agreement
        .submit_evidence(
            &ctx(&s, s.contractor),
            &s.registry,
            &mut s.arbitrator,
            sha256_bytes(b"x"),
        )
        .unwrap();
    assert_eq!(on_behalf_of, s.contractor);
}

#[test]
fn evidence_closes_with_the_ruling() {
    let mut s = disputed_setup();
    s.arbitrator
        .rule(s.dispute_id, Ruling::ForAction.code())
        .unwrap();
    let err = s
        .agreement
        .submit_evidence(
            &ctx(&s, s.employer),
            &s.registry,
            &mut s.arbitrator,
            sha256_bytes(b"too late"),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        EscrowError::Arbitration(ArbitrationError::EvidenceClosed { .. })
    ));
}

#[test]
fn outsiders_cannot_rebind_parties() {
    let mut s = disputed_setup();
    let attacker = AccountId::new();
    let err = s
        .registry
        .register_parties(&s.arbitrator, attacker, s.dispute_id, attacker, s.employer)
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotSubject { .. }));
    // Binding is unchanged.
    assert_eq!(s.registry.defendant_of(s.dispute_id), Some(s.employer));
    assert_eq!(s.registry.challenger_of(s.dispute_id), Some(s.contractor));
}

#[test]
fn settled_dispute_freezes_party_bindings() {
    let mut s = disputed_setup();
    s.arbitrator
        .rule(s.dispute_id, Ruling::Refused.code())
        .unwrap();
    s.agreement
        .settle_dispute(&s.arbitrator, &mut s.native)
        .unwrap();
    let err = s
        .registry
        .register_parties(
            &s.arbitrator,
            s.agreement.account(),
            s.dispute_id,
            s.contractor,
            s.employer,
        )
        .unwrap_err();
    assert!(matches!(err, RegistryError::CaseConcluded { .. }));
}

#[test]
fn registry_state_survives_serialization_mid_dispute() {
    let mut s = disputed_setup();
    let rep = AccountId::new();
    s.registry.set_representative_consent(rep, s.contractor, true);
    s.registry
        .set_representation_active(s.contractor, rep, true)
        .unwrap();

    let json = serde_json::to_string(&s.registry).unwrap();
    let restored: PartyRegistry = serde_json::from_str(&json).unwrap();
    assert_eq!(
        restored.can_submit_evidence_for(s.dispute_id, rep),
        Some(s.contractor)
    );
    assert_eq!(
        restored.can_submit_evidence_for(s.dispute_id, s.employer),
        Some(s.employer)
    );
}
