use serde_json::Value;

use super::FetchError;
use crate::entities::Id;

pub trait MenuGateway {
    /// Fetch the raw menu document of a single restaurant.
    ///
    /// HTML error pages must be reported as [`FetchError::ErrorPage`]
    /// without attempting to parse them.
    fn fetch_menu(&self, restaurant_id: &Id) -> Result<Value, FetchError>;
}
