use sea_orm::{ActiveModelTrait, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, Wallet, wallets};

use super::{Engine, require_wallet_uuid, with_tx};

impl Engine {
    /// Provisions a new wallet.
    ///
    /// When `wallet_uuid` is `None` a random v4 UUID is generated. The
    /// opening balance must not be negative.
    pub async fn new_wallet(
        &self,
        wallet_uuid: Option<&str>,
        opening_balance: i64,
    ) -> ResultEngine<Wallet> {
        if opening_balance < 0 {
            return Err(EngineError::InvalidOperation(format!(
                "opening balance must not be negative, got {opening_balance}"
            )));
        }
        let wallet_uuid = match wallet_uuid {
            Some(uuid) => require_wallet_uuid(uuid)?.to_string(),
            None => Uuid::new_v4().to_string(),
        };

        // Insert first: the write lock is taken before anything is read, and a
        // racing insert of the same id fails on the primary key.
        with_tx!(self, |db_tx| {
            let wallet = Wallet::new(wallet_uuid.clone(), opening_balance);
            let model: wallets::ActiveModel = (&wallet).into();
            match model.insert(&db_tx).await {
                Ok(_) => Ok(wallet),
                Err(err) => match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        Err(EngineError::ExistingKey(wallet_uuid.clone()))
                    }
                    _ => Err(err.into()),
                },
            }
        })
    }
}
