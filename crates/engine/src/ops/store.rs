//! Wallet store primitives shared by the read and write paths.

use sea_orm::{ConnectionTrait, QueryFilter, prelude::*, sea_query::Expr};

use crate::{EngineError, ResultEngine, Wallet, wallets};

use super::Engine;

impl Engine {
    /// Point lookup by identifier.
    pub(super) async fn find_wallet<C: ConnectionTrait>(
        &self,
        db: &C,
        uuid: &str,
    ) -> ResultEngine<Wallet> {
        wallets::Entity::find_by_id(uuid.to_string())
            .one(db)
            .await?
            .map(Wallet::from)
            .ok_or_else(|| EngineError::KeyNotFound(uuid.to_string()))
    }

    /// Adds `delta` to the wallet balance with a single conditional update.
    ///
    /// The guard lives in the `WHERE` clause, so the row is locked before the
    /// balance is evaluated and two racing debits can never both pass the
    /// check. When no row is touched a lookup tells apart a missing wallet
    /// from a rejected delta.
    pub(super) async fn apply_delta<C: ConnectionTrait>(
        &self,
        db: &C,
        uuid: &str,
        delta: i64,
    ) -> ResultEngine<Wallet> {
        let update = wallets::Entity::update_many()
            .col_expr(
                wallets::Column::Balance,
                Expr::col(wallets::Column::Balance).add(delta),
            )
            .filter(wallets::Column::Uuid.eq(uuid.to_string()));
        let update = if delta < 0 {
            update.filter(wallets::Column::Balance.gte(-delta))
        } else {
            update.filter(wallets::Column::Balance.lte(i64::MAX - delta))
        };

        let result = update.exec(db).await?;
        if result.rows_affected == 0 {
            let wallet = self.find_wallet(db, uuid).await?;
            return Err(if delta < 0 {
                EngineError::InsufficientFunds(format!(
                    "wallet {uuid} holds {}, requested {}",
                    wallet.balance, -delta
                ))
            } else {
                EngineError::InvalidOperation(format!(
                    "deposit of {delta} would overflow wallet {uuid}"
                ))
            });
        }

        self.find_wallet(db, uuid).await
    }
}
