use crate::gateways::FetchError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("No restaurant ID provided")]
    EmptyRestaurantId,
    #[error("Invalid rating threshold: {0}")]
    InvalidThreshold(f64),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Fetch(err) if err.is_transport())
    }
}
