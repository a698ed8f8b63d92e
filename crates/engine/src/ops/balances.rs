use crate::{ResultEngine, Wallet};

use super::{Engine, require_wallet_uuid};

impl Engine {
    /// Return a wallet snapshot from DB.
    ///
    /// A plain read: it sees whatever was committed last and never waits on
    /// in-flight operations.
    pub async fn wallet(&self, wallet_uuid: &str) -> ResultEngine<Wallet> {
        let wallet_uuid = require_wallet_uuid(wallet_uuid)?;
        self.find_wallet(&self.database, wallet_uuid).await
    }

    /// Return the current balance of a wallet.
    pub async fn balance(&self, wallet_uuid: &str) -> ResultEngine<i64> {
        Ok(self.wallet(wallet_uuid).await?.balance)
    }
}
