use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod balances;
mod store;
mod transactions;
mod wallets;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = $tx.rollback().await {
                    tracing::warn!("rollback failed: {rollback_err}");
                }
                Err(err)
            }
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug, Clone)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Wallet identifiers are opaque: only the empty string is refused, anything
/// else is looked up byte for byte.
fn require_wallet_uuid(value: &str) -> ResultEngine<&str> {
    if value.is_empty() {
        return Err(EngineError::InvalidOperation(
            "wallet uuid must not be empty".to_string(),
        ));
    }
    Ok(value)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_uuid_is_kept_verbatim() {
        assert_eq!(require_wallet_uuid(" w1\n"), Ok(" w1\n"));
    }

    #[test]
    fn empty_wallet_uuid_is_rejected() {
        assert!(matches!(
            require_wallet_uuid(""),
            Err(EngineError::InvalidOperation(_))
        ));
    }
}
