//! Identifier newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated cinema account identifier.
///
/// Valid by construction: the wrapped value is always strictly positive.
/// Raw identifiers arriving at the boundary stay `Option<i64>` until the
/// rulebook promotes them through [`AccountId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Create a new validated account id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id is zero or negative.
    pub fn new(id: i64) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::validation(format!(
                "account id must be strictly positive, got {id}"
            )));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = DomainError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> i64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_ids() {
        let id = AccountId::new(1).unwrap();
        assert_eq!(id.get(), 1);
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn rejects_zero() {
        assert!(AccountId::new(0).is_err());
    }

    #[test]
    fn rejects_negative() {
        assert!(AccountId::new(-1).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let id = AccountId::new(42).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid_ids() {
        assert!(serde_json::from_str::<AccountId>("0").is_err());
    }
}
