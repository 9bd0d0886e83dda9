use serde_json::Value;

use super::FetchError;

pub trait ListingGateway {
    /// Fetch the raw listing document.
    fn fetch_listing(&self) -> Result<Value, FetchError>;
}
