//! # Ruling Codes
//!
//! The arbitrator's final decision, as a wire-stable integer enumeration.
//! Codes are part of the protocol between the arbitrator service and every
//! subject contract; they never change meaning across deployments. The two
//! code points below [`Ruling::Refused`] are reserved by the wire protocol
//! and never denote a final ruling.
//!
//! Consumers receive raw codes from [`Arbitrator::ruling_of`][crate::Arbitrator::ruling_of]
//! and decode through [`Ruling::from_code`]. A code that fails to decode
//! must abort the consuming operation — payout logic never defaults on an
//! unrecognized ruling.

use serde::{Deserialize, Serialize};

/// A final ruling issued by the arbitrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ruling {
    /// The arbitrator declined to or could not decide the case.
    Refused,
    /// The arbitrator ruled against the disputed action.
    AgainstAction,
    /// The arbitrator ruled in favor of the disputed action.
    ForAction,
}

impl Ruling {
    /// All rulings as a slice.
    pub fn all() -> &'static [Ruling] {
        &[Self::Refused, Self::AgainstAction, Self::ForAction]
    }

    /// The wire code for this ruling.
    pub const fn code(self) -> u64 {
        match self {
            Self::Refused => 2,
            Self::AgainstAction => 3,
            Self::ForAction => 4,
        }
    }

    /// Decode a wire code. `None` for any code that is not a final ruling.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            2 => Some(Self::Refused),
            3 => Some(Self::AgainstAction),
            4 => Some(Self::ForAction),
            _ => None,
        }
    }

    /// The canonical string name of this ruling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refused => "REFUSED",
            Self::AgainstAction => "AGAINST_ACTION",
            Self::ForAction => "FOR_ACTION",
        }
    }
}

impl std::fmt::Display for Ruling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Ruling::Refused.code(), 2);
        assert_eq!(Ruling::AgainstAction.code(), 3);
        assert_eq!(Ruling::ForAction.code(), 4);
    }

    #[test]
    fn decode_roundtrips_every_ruling() {
        for ruling in Ruling::all() {
            assert_eq!(Ruling::from_code(ruling.code()), Some(*ruling));
        }
    }

    #[test]
    fn reserved_and_unknown_codes_do_not_decode() {
        assert_eq!(Ruling::from_code(0), None);
        assert_eq!(Ruling::from_code(1), None);
        assert_eq!(Ruling::from_code(5), None);
        assert_eq!(Ruling::from_code(u64::MAX), None);
    }

    #[test]
    fn display_matches_canonical_names() {
        assert_eq!(format!("{}", Ruling::Refused), "REFUSED");
        assert_eq!(format!("{}", Ruling::AgainstAction), "AGAINST_ACTION");
        assert_eq!(format!("{}", Ruling::ForAction), "FOR_ACTION");
    }
}
