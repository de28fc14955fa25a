//! # pactum-registry — Who May Act For a Dispute
//!
//! A [`PartyRegistry`] is shared by many disputable subjects. Per dispute
//! it records the two formally recognized parties (defendant and
//! challenger); across disputes it tracks a bidirectional
//! representation-consent graph; and it answers the one question the rest
//! of the system asks it: *can this actor submit evidence for this
//! dispute, and on whose behalf?*
//!
//! Access control is structural:
//!
//! - Party bindings are written only by the dispute's subject, verified
//!   against the arbitrator — no ambient trust between subjects sharing
//!   one registry.
//! - Representation requires both sides: the representative opts in to
//!   the client, and the client activates the representative. Either side
//!   revokes unilaterally.
//! - A conflicted actor — one with standing for both sides at once — has
//!   standing for neither.

pub mod error;
pub mod registry;

// Re-export primary types.
pub use error::RegistryError;
pub use registry::{DisputeParties, PartyRegistry, RegistryEvent};
