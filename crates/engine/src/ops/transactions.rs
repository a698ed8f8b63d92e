use sea_orm::TransactionTrait;

use crate::{OperationKind, ResultEngine, Wallet};

use super::{Engine, require_wallet_uuid, with_tx};

impl Engine {
    /// Applies one operation to a wallet and returns the updated wallet.
    ///
    /// Validation happens before the database is touched:
    /// - empty identifiers and non-positive amounts are `InvalidOperation`.
    ///
    /// Inside the DB transaction:
    /// - an unknown wallet is `KeyNotFound`;
    /// - a withdrawal larger than the balance is `InsufficientFunds`.
    ///
    /// Every failure rolls back, so either exactly one balance change is
    /// committed or none is.
    pub async fn apply_operation(
        &self,
        wallet_uuid: &str,
        kind: OperationKind,
        amount: i64,
    ) -> ResultEngine<Wallet> {
        let wallet_uuid = require_wallet_uuid(wallet_uuid)?;
        let delta = kind.delta(amount)?;

        let wallet = with_tx!(self, |db_tx| {
            self.apply_delta(&db_tx, wallet_uuid, delta).await
        })?;

        tracing::debug!(
            "{kind} of {amount} applied to wallet {}, balance is {}",
            wallet.uuid,
            wallet.balance
        );
        Ok(wallet)
    }
}
