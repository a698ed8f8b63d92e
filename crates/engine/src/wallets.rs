//! The module contains `Wallet` struct and its persisted model.

use sea_orm::entity::{ActiveValue, prelude::*};

/// A wallet.
///
/// The only stateful entity of the ledger: an opaque identifier chosen by
/// whoever provisioned it and a balance in the smallest currency unit.
/// The balance is never negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wallet {
    pub uuid: String,
    pub balance: i64,
}

impl Wallet {
    pub fn new(uuid: String, balance: i64) -> Self {
        Self { uuid, balance }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub balance: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Wallet {
    fn from(value: Model) -> Self {
        Self {
            uuid: value.uuid,
            balance: value.balance,
        }
    }
}

impl From<&Wallet> for ActiveModel {
    fn from(value: &Wallet) -> Self {
        Self {
            uuid: ActiveValue::Set(value.uuid.clone()),
            balance: ActiveValue::Set(value.balance),
        }
    }
}
