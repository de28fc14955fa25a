//! # Call Context
//!
//! The caller identity and observation time for one state-changing call.
//!
//! Every privileged or time-gated operation in the workspace receives a
//! [`CallContext`] instead of reading ambient state. The caller field is
//! what permission checks compare against; the `now` field is what
//! deadline gates compare against. Tests construct contexts directly to
//! exercise any caller at any instant.

use serde::{Deserialize, Serialize};

use crate::identity::AccountId;
use crate::temporal::Timestamp;

/// The identity and time attached to a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The account invoking the operation.
    pub caller: AccountId,
    /// The time at which the operation is observed to execute.
    pub now: Timestamp,
}

impl CallContext {
    /// Create a context for `caller` at time `now`.
    pub fn new(caller: AccountId, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Create a context for `caller` at the current UTC time.
    pub fn at_now(caller: AccountId) -> Self {
        Self {
            caller,
            now: Timestamp::now(),
        }
    }
}
