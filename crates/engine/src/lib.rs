//! Wallet ledger engine.
//!
//! The [`Engine`] owns a database connection and exposes the two operations
//! of the ledger: applying a [`OperationKind::Deposit`] or
//! [`OperationKind::Withdraw`] to a wallet, and reading its balance.
pub use error::EngineError;
pub use operation::OperationKind;
pub use ops::{Engine, EngineBuilder};
pub use wallets::Wallet;

mod error;
mod operation;
mod ops;
mod wallets;

type ResultEngine<T> = Result<T, EngineError>;
