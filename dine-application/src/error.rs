use dine_core::{gateways::FetchError, usecases::Error as UsecaseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error("There is no previous request to retry")]
    NothingToRetry,
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> AppError {
        AppError::Business(err.into())
    }
}
