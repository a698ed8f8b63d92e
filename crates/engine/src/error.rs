//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a wallet does not exist.
//! - [`InsufficientFunds`] thrown when a withdrawal exceeds the balance.
//! - [`InvalidOperation`] thrown when an operation is malformed.
//! - [`Database`] thrown when the storage layer fails.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InsufficientFunds`]: EngineError::InsufficientFunds
//!  [`InvalidOperation`]: EngineError::InvalidOperation
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InsufficientFunds(a), Self::InsufficientFunds(b)) => a == b,
            (Self::InvalidOperation(a), Self::InvalidOperation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_variant_same_message_is_equal() {
        assert_eq!(
            EngineError::KeyNotFound("w1".to_string()),
            EngineError::KeyNotFound("w1".to_string())
        );
        assert_ne!(
            EngineError::KeyNotFound("w1".to_string()),
            EngineError::InsufficientFunds("w1".to_string())
        );
    }

    #[test]
    fn database_errors_compare_by_message() {
        let a = EngineError::from(DbErr::Custom("boom".to_string()));
        let b = EngineError::from(DbErr::Custom("boom".to_string()));
        assert_eq!(a, b);
    }

    #[test]
    fn display_keeps_the_key() {
        let err = EngineError::KeyNotFound("w1".to_string());
        assert_eq!(err.to_string(), "\"w1\" key not found!");
    }
}
