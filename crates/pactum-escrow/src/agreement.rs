//! # The Escrow Agreement
//!
//! One agreement locks one payment between an employer and a contractor
//! against a committed work description, and carries at most one dispute.
//!
//! ## Security Invariant
//!
//! The escrowed amount is transferred exactly once, to exactly one
//! recipient: the contractor after an undisputed deadline, or the party
//! the ruling favors. Every fund-moving operation checks the settled flag
//! first and sets it in the same call that moves the funds.

use serde::{Deserialize, Serialize};

use pactum_arbitration::{Arbitrator, DisputeId, Ruling};
use pactum_core::{AccountId, Amount, CallContext, ContentDigest, Timestamp};
use pactum_ledger::{LedgerError, NativeLedger, TokenLedger};
use pactum_registry::PartyRegistry;

use crate::commitment::{Commitment, Salt};
use crate::error::EscrowError;

// ── Status ─────────────────────────────────────────────────────────────

/// The lifecycle status of an agreement, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementStatus {
    /// Funds locked; no dispute filed; deadline not yet consumed.
    Active,
    /// A dispute is filed and awaiting the arbitrator's ruling.
    Disputed,
    /// Funds have been paid out. Terminal status.
    Settled,
}

impl AgreementStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Disputed => "DISPUTED",
            Self::Settled => "SETTLED",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Settled)
    }
}

impl std::fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Events ─────────────────────────────────────────────────────────────

/// An observable lifecycle event on an agreement.
///
/// Appended in operation order and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowEvent {
    /// The employer filed a dispute and paid the arbitration fee.
    DisputeRaised {
        /// The case opened with the arbitrator.
        dispute_id: DisputeId,
        /// The fee pulled from the employer.
        fee: Amount,
    },
    /// The contractor collected the escrow after an undisputed deadline.
    PaymentReleased {
        /// The paid account (always the contractor).
        recipient: AccountId,
        /// The full escrowed amount.
        amount: Amount,
    },
    /// A ruling was enforced and the escrow paid out.
    DisputeSettled {
        /// The settled dispute.
        dispute_id: DisputeId,
        /// The decoded ruling.
        ruling: Ruling,
        /// The account the ruling favored.
        recipient: AccountId,
        /// The full escrowed amount.
        amount: Amount,
    },
}

// ── Settlement Outcome ─────────────────────────────────────────────────

/// The result of enforcing a ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementOutcome {
    /// The decoded ruling that was enforced.
    pub ruling: Ruling,
    /// The account the escrow was paid to.
    pub recipient: AccountId,
    /// The amount paid.
    pub amount: Amount,
}

// ── The Agreement ──────────────────────────────────────────────────────

/// An escrow agreement between one employer and one contractor.
///
/// Created via [`EscrowAgreement::create`], which moves the deposit from
/// the employer into the agreement's own ledger account. The work
/// description is committed by hash and revealed only through
/// [`dispute`](EscrowAgreement::dispute).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscrowAgreement {
    account: AccountId,
    employer: AccountId,
    contractor: AccountId,
    escrowed_amount: Amount,
    commitment: Commitment,
    release_time: Timestamp,
    dispute_id: Option<DisputeId>,
    revealed_description: Option<Vec<u8>>,
    settled: bool,
    events: Vec<EscrowEvent>,
}

impl EscrowAgreement {
    /// Create an agreement, locking `deposit` from the caller (the
    /// employer) in a fresh agreement account.
    ///
    /// # Errors
    ///
    /// [`EscrowError::IdenticalParties`] when the caller names itself as
    /// contractor, [`EscrowError::EmptyDeposit`] for a zero deposit, and
    /// [`LedgerError::InsufficientBalance`] when the caller cannot cover
    /// the deposit.
    pub fn create(
        ctx: &CallContext,
        native: &mut NativeLedger,
        contractor: AccountId,
        commitment: Commitment,
        release_time: Timestamp,
        deposit: Amount,
    ) -> Result<Self, EscrowError> {
        let employer = ctx.caller;
        if employer == contractor {
            return Err(EscrowError::IdenticalParties { account: employer });
        }
        if deposit.is_zero() {
            return Err(EscrowError::EmptyDeposit);
        }
        let account = AccountId::new();
        native.transfer(employer, account, deposit)?;
        tracing::info!(
            agreement = %account,
            %employer,
            %contractor,
            amount = %deposit,
            %release_time,
            "escrow agreement created"
        );
        Ok(Self {
            account,
            employer,
            contractor,
            escrowed_amount: deposit,
            commitment,
            release_time,
            dispute_id: None,
            revealed_description: None,
            settled: false,
            events: Vec::new(),
        })
    }

    /// File a dispute before the release deadline. Employer only.
    ///
    /// Reveals the committed work description, pays the arbitrator's fee
    /// from the employer's approved token balance, opens a case naming
    /// this agreement as subject, and binds `(employer, contractor)` as
    /// `(defendant, challenger)` in the registry.
    ///
    /// Fee availability is verified before the case is opened, so no step
    /// after `create_dispute` can fail and leave an orphaned case.
    ///
    /// # Errors
    ///
    /// [`EscrowError::NotEmployer`], [`EscrowError::AlreadyDisputed`],
    /// [`EscrowError::AlreadyUnlocked`] at or past the deadline,
    /// [`EscrowError::CommitmentMismatch`] when the reveal fails,
    /// [`EscrowError::FeeTokenMismatch`] for the wrong fee ledger, and
    /// the ledger's allowance/balance errors when the fee is not covered.
    pub fn dispute(
        &mut self,
        ctx: &CallContext,
        salt: &Salt,
        payload: &[u8],
        arbitrator: &mut dyn Arbitrator,
        fee_token: &mut TokenLedger,
        registry: &mut PartyRegistry,
    ) -> Result<DisputeId, EscrowError> {
        if self.settled {
            return Err(EscrowError::AlreadySettled);
        }
        if ctx.caller != self.employer {
            return Err(EscrowError::NotEmployer { caller: ctx.caller });
        }
        if let Some(dispute_id) = self.dispute_id {
            return Err(EscrowError::AlreadyDisputed { dispute_id });
        }
        if ctx.now >= self.release_time {
            return Err(EscrowError::AlreadyUnlocked {
                release_time: self.release_time,
                now: ctx.now,
            });
        }
        if !self.commitment.matches(salt, payload) {
            return Err(EscrowError::CommitmentMismatch {
                expected: *self.commitment.digest(),
                actual: *Commitment::compute(salt, payload).digest(),
            });
        }

        let fees = arbitrator.dispute_fees();
        if fee_token.id() != fees.token {
            return Err(EscrowError::FeeTokenMismatch {
                expected: fees.token,
                actual: fee_token.id(),
            });
        }
        let allowance = fee_token.allowance(self.employer, self.account);
        if allowance < fees.amount {
            return Err(EscrowError::Ledger(LedgerError::InsufficientAllowance {
                owner: self.employer,
                spender: self.account,
                allowance,
                requested: fees.amount,
            }));
        }
        let balance = fee_token.balance_of(self.employer);
        if balance < fees.amount {
            return Err(EscrowError::Ledger(LedgerError::InsufficientBalance {
                account: self.employer,
                balance,
                requested: fees.amount,
            }));
        }
        if fees.recipient != self.employer
            && fee_token
                .balance_of(fees.recipient)
                .checked_add(fees.amount)
                .is_none()
        {
            return Err(EscrowError::Ledger(LedgerError::BalanceOverflow {
                account: fees.recipient,
                requested: fees.amount,
            }));
        }

        let dispute_id = arbitrator.create_dispute(self.account, payload.to_vec())?;
        fee_token.transfer_from(self.account, self.employer, fees.recipient, fees.amount)?;
        registry.register_parties(
            &*arbitrator,
            self.account,
            dispute_id,
            self.employer,
            self.contractor,
        )?;

        self.dispute_id = Some(dispute_id);
        self.revealed_description = Some(payload.to_vec());
        self.events.push(EscrowEvent::DisputeRaised {
            dispute_id,
            fee: fees.amount,
        });
        tracing::info!(
            agreement = %self.account,
            %dispute_id,
            fee = %fees.amount,
            "dispute raised"
        );
        Ok(dispute_id)
    }

    /// Collect the escrow after an undisputed deadline. Contractor only.
    ///
    /// # Errors
    ///
    /// [`EscrowError::AlreadySettled`] after any settlement,
    /// [`EscrowError::NotContractor`] for any other caller,
    /// [`EscrowError::BeingDisputed`] while a dispute is unresolved, and
    /// [`EscrowError::NotYetUnlocked`] before the deadline.
    pub fn release_payment(
        &mut self,
        ctx: &CallContext,
        native: &mut NativeLedger,
    ) -> Result<(), EscrowError> {
        if self.settled {
            return Err(EscrowError::AlreadySettled);
        }
        if ctx.caller != self.contractor {
            return Err(EscrowError::NotContractor { caller: ctx.caller });
        }
        if let Some(dispute_id) = self.dispute_id {
            return Err(EscrowError::BeingDisputed { dispute_id });
        }
        if ctx.now < self.release_time {
            return Err(EscrowError::NotYetUnlocked {
                release_time: self.release_time,
                now: ctx.now,
            });
        }
        native.transfer(self.account, self.contractor, self.escrowed_amount)?;
        self.settled = true;
        self.events.push(EscrowEvent::PaymentReleased {
            recipient: self.contractor,
            amount: self.escrowed_amount,
        });
        tracing::info!(
            agreement = %self.account,
            recipient = %self.contractor,
            amount = %self.escrowed_amount,
            "payment released"
        );
        Ok(())
    }

    /// Enforce the arbitrator's ruling. Callable by anyone.
    ///
    /// Payout map: `FOR_ACTION` and `REFUSED` pay the contractor — a
    /// refusal to adjudicate leaves the committed payment standing;
    /// `AGAINST_ACTION` refunds the employer. Any other code aborts with
    /// no transfer.
    ///
    /// # Errors
    ///
    /// [`EscrowError::AlreadySettled`] after any settlement,
    /// [`EscrowError::NotDisputed`] when no dispute exists,
    /// [`EscrowError::NoRulingYet`] while the case is pending, and
    /// [`EscrowError::UnrecognizedRuling`] for a code outside the known
    /// set.
    pub fn settle_dispute(
        &mut self,
        arbitrator: &dyn Arbitrator,
        native: &mut NativeLedger,
    ) -> Result<SettlementOutcome, EscrowError> {
        if self.settled {
            return Err(EscrowError::AlreadySettled);
        }
        let dispute_id = self.dispute_id.ok_or(EscrowError::NotDisputed)?;
        let code = arbitrator
            .ruling_of(dispute_id)?
            .ok_or(EscrowError::NoRulingYet { dispute_id })?;
        let ruling =
            Ruling::from_code(code).ok_or(EscrowError::UnrecognizedRuling { dispute_id, code })?;
        let recipient = match ruling {
            Ruling::ForAction | Ruling::Refused => self.contractor,
            Ruling::AgainstAction => self.employer,
        };
        native.transfer(self.account, recipient, self.escrowed_amount)?;
        self.settled = true;
        let outcome = SettlementOutcome {
            ruling,
            recipient,
            amount: self.escrowed_amount,
        };
        self.events.push(EscrowEvent::DisputeSettled {
            dispute_id,
            ruling,
            recipient,
            amount: self.escrowed_amount,
        });
        tracing::info!(
            agreement = %self.account,
            %dispute_id,
            %ruling,
            %recipient,
            amount = %self.escrowed_amount,
            "dispute settled"
        );
        Ok(outcome)
    }

    /// Submit evidence for this agreement's dispute.
    ///
    /// Standing is resolved through the registry; the evidence digest is
    /// forwarded to the arbitrator attributed to the party the caller
    /// acts for, which is returned.
    ///
    /// # Errors
    ///
    /// [`EscrowError::NotDisputed`] when no dispute exists,
    /// [`EscrowError::NoEvidenceStanding`] when the registry resolves no
    /// party for the caller, and the arbitrator's errors once the case is
    /// closed.
    pub fn submit_evidence(
        &self,
        ctx: &CallContext,
        registry: &PartyRegistry,
        arbitrator: &mut dyn Arbitrator,
        evidence: ContentDigest,
    ) -> Result<AccountId, EscrowError> {
        let dispute_id = self.dispute_id.ok_or(EscrowError::NotDisputed)?;
        let on_behalf_of = registry
            .can_submit_evidence_for(dispute_id, ctx.caller)
            .ok_or(EscrowError::NoEvidenceStanding {
                dispute_id,
                actor: ctx.caller,
            })?;
        arbitrator.submit_evidence(dispute_id, on_behalf_of, evidence)?;
        tracing::debug!(
            agreement = %self.account,
            %dispute_id,
            submitter = %ctx.caller,
            %on_behalf_of,
            "evidence submitted"
        );
        Ok(on_behalf_of)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The agreement's own ledger account.
    pub fn account(&self) -> AccountId {
        self.account
    }

    /// The employer (depositor, sole dispute filer).
    pub fn employer(&self) -> AccountId {
        self.employer
    }

    /// The contractor (payee of the undisputed path).
    pub fn contractor(&self) -> AccountId {
        self.contractor
    }

    /// The amount locked at creation.
    pub fn escrowed_amount(&self) -> Amount {
        self.escrowed_amount
    }

    /// The commitment to the work description.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The release deadline.
    pub fn release_time(&self) -> Timestamp {
        self.release_time
    }

    /// The dispute filed against this agreement, if any.
    pub fn dispute_id(&self) -> Option<DisputeId> {
        self.dispute_id
    }

    /// The work description, public once a dispute revealed it.
    pub fn revealed_description(&self) -> Option<&[u8]> {
        self.revealed_description.as_deref()
    }

    /// Whether a filed dispute is still awaiting settlement.
    pub fn being_disputed(&self) -> bool {
        self.dispute_id.is_some() && !self.settled
    }

    /// The derived lifecycle status.
    pub fn status(&self) -> AgreementStatus {
        if self.settled {
            AgreementStatus::Settled
        } else if self.dispute_id.is_some() {
            AgreementStatus::Disputed
        } else {
            AgreementStatus::Active
        }
    }

    /// The append-only event log, in operation order.
    pub fn events(&self) -> &[EscrowEvent] {
        &self.events
    }
}
