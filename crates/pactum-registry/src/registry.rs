//! # The Party Registry
//!
//! Party bindings, the representation-consent graph, and standing
//! resolution.
//!
//! ## Security Invariant
//!
//! Representation is active for (client, representative) iff *both* the
//! representative's consent and the client's activation are present. The
//! two flags live in separate sets written by separate principals; the
//! AND is taken at query time, never collapsed into one stored flag, so
//! unilateral revocation by either side is always representable.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use pactum_arbitration::{Arbitrator, DisputeId};
use pactum_core::AccountId;

use crate::error::RegistryError;

// ── Party Bindings ─────────────────────────────────────────────────────

/// The two formally recognized parties of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeParties {
    /// The party the dispute was raised against.
    pub defendant: AccountId,
    /// The party that raised the dispute.
    pub challenger: AccountId,
}

// ── Events ─────────────────────────────────────────────────────────────

/// An observable state change in the registry.
///
/// Events are appended in operation order and never rewritten; external
/// indexers replay them to mirror registry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A dispute's parties were bound (or re-bound before the ruling).
    PartiesSet {
        /// The dispute whose parties were bound.
        dispute_id: DisputeId,
        /// The bound defendant.
        defendant: AccountId,
        /// The bound challenger.
        challenger: AccountId,
    },
    /// A representative granted or withdrew consent for a client.
    AllowRepresentation {
        /// The representative whose consent changed.
        rep: AccountId,
        /// The client the consent applies to.
        client: AccountId,
        /// The new consent state.
        allowed: bool,
    },
    /// A client's representative-activation flag changed.
    ///
    /// Also emitted when a consent withdrawal forces an active
    /// representation off.
    RepStateSet {
        /// The client whose designation changed.
        client: AccountId,
        /// The representative in question.
        rep: AccountId,
        /// The new activation state.
        active: bool,
    },
}

// ── The Registry ───────────────────────────────────────────────────────

/// Party bindings and representation state shared by many disputable
/// subjects.
///
/// Only a dispute's subject (verified against the arbitrator) may bind
/// that dispute's parties; representation flags are written only by the
/// principal each flag belongs to. See the crate docs for the standing
/// rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartyRegistry {
    parties: HashMap<DisputeId, DisputeParties>,
    /// (representative, client) pairs where the representative consents.
    consent: HashSet<(AccountId, AccountId)>,
    /// (client, representative) pairs where the client activated the rep.
    active: HashSet<(AccountId, AccountId)>,
    events: Vec<RegistryEvent>,
}

impl PartyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the parties of `dispute_id`.
    ///
    /// `caller` must be the subject the arbitrator names for the dispute.
    /// Re-binding is permitted until the arbitrator reports a final
    /// ruling; a decided case's parties are fixed.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotSubject`] for any caller but the subject,
    /// [`RegistryError::PartyConflict`] when both sides are one account,
    /// [`RegistryError::CaseConcluded`] once the dispute is ruled, and
    /// arbitrator lookup failures verbatim.
    pub fn register_parties(
        &mut self,
        arbitrator: &dyn Arbitrator,
        caller: AccountId,
        dispute_id: DisputeId,
        defendant: AccountId,
        challenger: AccountId,
    ) -> Result<(), RegistryError> {
        let subject = arbitrator.subject_of(dispute_id)?;
        if caller != subject {
            return Err(RegistryError::NotSubject { dispute_id, caller });
        }
        if defendant == challenger {
            return Err(RegistryError::PartyConflict {
                dispute_id,
                account: defendant,
            });
        }
        if arbitrator.ruling_of(dispute_id)?.is_some() {
            return Err(RegistryError::CaseConcluded { dispute_id });
        }
        self.parties.insert(
            dispute_id,
            DisputeParties {
                defendant,
                challenger,
            },
        );
        self.events.push(RegistryEvent::PartiesSet {
            dispute_id,
            defendant,
            challenger,
        });
        tracing::info!(%dispute_id, %defendant, %challenger, "dispute parties bound");
        Ok(())
    }

    /// The full party binding for `dispute_id`, if set.
    pub fn parties_of(&self, dispute_id: DisputeId) -> Option<DisputeParties> {
        self.parties.get(&dispute_id).copied()
    }

    /// The defendant of `dispute_id`, if parties are bound.
    pub fn defendant_of(&self, dispute_id: DisputeId) -> Option<AccountId> {
        self.parties_of(dispute_id).map(|p| p.defendant)
    }

    /// The challenger of `dispute_id`, if parties are bound.
    pub fn challenger_of(&self, dispute_id: DisputeId) -> Option<AccountId> {
        self.parties_of(dispute_id).map(|p| p.challenger)
    }

    /// Record the caller's consent (or its withdrawal) to represent
    /// `client`. `caller` is the representative.
    ///
    /// Withdrawing consent while the client's activation flag is set
    /// forces the representation off, observable as a trailing
    /// [`RegistryEvent::RepStateSet`] with `active: false`.
    pub fn set_representative_consent(
        &mut self,
        caller: AccountId,
        client: AccountId,
        allowed: bool,
    ) {
        if allowed {
            self.consent.insert((caller, client));
        } else {
            self.consent.remove(&(caller, client));
        }
        self.events.push(RegistryEvent::AllowRepresentation {
            rep: caller,
            client,
            allowed,
        });
        tracing::debug!(rep = %caller, %client, allowed, "representation consent changed");
        if !allowed && self.active.remove(&(client, caller)) {
            self.events.push(RegistryEvent::RepStateSet {
                client,
                rep: caller,
                active: false,
            });
            tracing::debug!(%client, rep = %caller, "representation forced inactive");
        }
    }

    /// Set the caller's activation flag for `rep`. `caller` is the client.
    ///
    /// Activation requires the representative's standing consent;
    /// deactivation is always permitted.
    ///
    /// # Errors
    ///
    /// [`RegistryError::MissingConsent`] when activating a representative
    /// that has not opted in to this client.
    pub fn set_representation_active(
        &mut self,
        caller: AccountId,
        rep: AccountId,
        active: bool,
    ) -> Result<(), RegistryError> {
        if active {
            if !self.can_represent(rep, caller) {
                return Err(RegistryError::MissingConsent {
                    client: caller,
                    representative: rep,
                });
            }
            self.active.insert((caller, rep));
        } else {
            self.active.remove(&(caller, rep));
        }
        self.events.push(RegistryEvent::RepStateSet {
            client: caller,
            rep,
            active,
        });
        tracing::debug!(client = %caller, %rep, active, "representation state set");
        Ok(())
    }

    /// Whether `rep` has consented to represent `client`.
    pub fn can_represent(&self, rep: AccountId, client: AccountId) -> bool {
        self.consent.contains(&(rep, client))
    }

    /// Whether representation is currently in force for (client, rep):
    /// the client's activation AND the representative's consent.
    pub fn is_representing(&self, client: AccountId, rep: AccountId) -> bool {
        self.active.contains(&(client, rep)) && self.consent.contains(&(rep, client))
    }

    /// Resolve evidence-submission standing for `actor` on `dispute_id`.
    ///
    /// Returns the party the actor may submit on behalf of, or `None`
    /// when the actor has no standing. An actor with standing for a side
    /// is that side's party itself or a representative currently in force
    /// for it. Standing for both sides at once is a conflict of interest
    /// and resolves to `None` — this also denies a party who is
    /// simultaneously in force as the opposing side's representative.
    pub fn can_submit_evidence_for(
        &self,
        dispute_id: DisputeId,
        actor: AccountId,
    ) -> Option<AccountId> {
        let parties = self.parties_of(dispute_id)?;
        let for_defendant =
            actor == parties.defendant || self.is_representing(parties.defendant, actor);
        let for_challenger =
            actor == parties.challenger || self.is_representing(parties.challenger, actor);
        match (for_defendant, for_challenger) {
            (true, true) | (false, false) => None,
            (true, false) => Some(parties.defendant),
            (false, true) => Some(parties.challenger),
        }
    }

    /// The append-only event log, in operation order.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }
}
