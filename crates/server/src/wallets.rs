//! Wallets API endpoints.

use api_types::wallet::{OperationApplied, OperationStatus, WalletBalance, WalletOperation};
use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use engine::OperationKind;

use crate::{ServerError, server::ServerState};

pub async fn operation(
    State(state): State<ServerState>,
    Path(wallet_uuid): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<WalletOperation>, ServerError>,
) -> Result<Json<OperationApplied>, ServerError> {
    let kind = OperationKind::try_from(payload.operation_type.as_str())
        .map_err(|_| ServerError::UnknownOperation(payload.operation_type.clone()))?;
    let wallet = state
        .engine
        .apply_operation(&wallet_uuid, kind, payload.amount)
        .await?;

    tracing::info!(
        "{kind} of {} on wallet {}, new balance {}",
        payload.amount,
        wallet.uuid,
        wallet.balance
    );

    Ok(Json(OperationApplied {
        status: OperationStatus::Success,
        transaction: WalletBalance {
            uuid: wallet.uuid,
            balance: wallet.balance,
        },
    }))
}

pub async fn balance(
    State(state): State<ServerState>,
    Path(wallet_uuid): Path<String>,
) -> Result<Json<WalletBalance>, ServerError> {
    let wallet = state.engine.wallet(&wallet_uuid).await?;

    Ok(Json(WalletBalance {
        uuid: wallet.uuid,
        balance: wallet.balance,
    }))
}
