use api_types::ErrorBody;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{router, run_with_listener};

mod server;
mod wallets;

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// `operationType` is neither `DEPOSIT` nor `WITHDRAW`.
    UnknownOperation(String),
    /// The request body could not be decoded.
    Malformed(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InsufficientFunds(_) | EngineError::InvalidOperation(_) => {
            StatusCode::BAD_REQUEST
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "Database error".to_string()
        }
        EngineError::KeyNotFound(_) => "Wallet not found".to_string(),
        EngineError::InsufficientFunds(_) => "Insufficient funds".to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::UnknownOperation(kind) => {
                tracing::debug!("rejected operation type {kind:?}");
                (StatusCode::BAD_REQUEST, "Invalid operation type".to_string())
            }
            ServerError::Malformed(err) => {
                tracing::debug!("rejected request body: {err}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Invalid JSON provided. Please check the structure and data types."
                        .to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Malformed(value.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn insufficient_funds_maps_to_400() {
        let res =
            ServerError::from(EngineError::InsufficientFunds("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_operation_maps_to_400() {
        let res =
            ServerError::from(EngineError::InvalidOperation("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_conflict_maps_to_409() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_maps_to_500() {
        let err = EngineError::Database(sea_orm_err());
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unknown_operation_maps_to_400() {
        let res = ServerError::UnknownOperation("TRANSFER".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_maps_to_422() {
        let res = ServerError::Malformed("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    fn sea_orm_err() -> sea_orm::DbErr {
        sea_orm::DbErr::Custom("connection lost".to_string())
    }
}
