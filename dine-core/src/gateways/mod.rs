use thiserror::Error;

pub mod listing;
pub mod menu;

pub use self::{listing::ListingGateway, menu::MenuGateway};

/// Why a remote document could not be obtained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Unable to connect to the server: {0}")]
    Transport(String),
    #[error("HTTP error! status: {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("The server returned an error page. Please try again later.")]
    ErrorPage,
    #[error("{0}")]
    MalformedPayload(String),
    #[error("{0}")]
    Upstream(String),
}

impl FetchError {
    /// The server could not be reached or did not answer with 2xx.
    ///
    /// All other variants mean the server responded, but the
    /// payload was not usable.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}
