//! Balance operations.
//!
//! An operation is a credit (`DEPOSIT`) or a debit (`WITHDRAW`) of a positive
//! amount against a single wallet.

use crate::{EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
        }
    }

    /// Signed balance change for `amount`.
    ///
    /// `amount` must be strictly positive.
    pub fn delta(self, amount: i64) -> ResultEngine<i64> {
        if amount <= 0 {
            return Err(EngineError::InvalidOperation(format!(
                "amount must be positive, got {amount}"
            )));
        }
        Ok(match self {
            Self::Deposit => amount,
            Self::Withdraw => -amount,
        })
    }
}

impl TryFrom<&str> for OperationKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAW" => Ok(Self::Withdraw),
            other => Err(EngineError::InvalidOperation(format!(
                "invalid operation type: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_kinds() {
        assert_eq!(OperationKind::try_from("DEPOSIT"), Ok(OperationKind::Deposit));
        assert_eq!(
            OperationKind::try_from("WITHDRAW"),
            Ok(OperationKind::Withdraw)
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(OperationKind::try_from("deposit").is_err());
    }

    #[test]
    fn reject_unknown_kind() {
        assert_eq!(
            OperationKind::try_from("TRANSFER"),
            Err(EngineError::InvalidOperation(
                "invalid operation type: TRANSFER".to_string()
            ))
        );
    }

    #[test]
    fn delta_sign_follows_kind() {
        assert_eq!(OperationKind::Deposit.delta(50), Ok(50));
        assert_eq!(OperationKind::Withdraw.delta(50), Ok(-50));
    }

    #[test]
    fn delta_rejects_non_positive_amounts() {
        assert!(matches!(
            OperationKind::Deposit.delta(0),
            Err(EngineError::InvalidOperation(_))
        ));
        assert!(matches!(
            OperationKind::Withdraw.delta(-10),
            Err(EngineError::InvalidOperation(_))
        ));
    }
}
