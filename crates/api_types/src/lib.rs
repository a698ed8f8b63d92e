use serde::{Deserialize, Serialize};

pub mod wallet {
    use super::*;

    /// Request body of `POST /api/v1/wallets/{id}/operation`.
    ///
    /// `operation_type` stays a plain string on the wire so that an unknown
    /// kind is a business error (400) and not a decoding error (422).
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WalletOperation {
        /// `DEPOSIT` or `WITHDRAW`.
        pub operation_type: String,
        /// Amount in the smallest currency unit. Must be positive.
        pub amount: i64,
    }

    /// A wallet and its current balance.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WalletBalance {
        pub uuid: String,
        pub balance: i64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum OperationStatus {
        Success,
    }

    /// Response body of a successful operation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct OperationApplied {
        pub status: OperationStatus,
        pub transaction: WalletBalance,
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
