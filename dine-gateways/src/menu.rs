use dine_core::{
    entities::Id,
    gateways::{FetchError, MenuGateway},
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use serde_json::Value;

use crate::http::{build_client, get_json, HttpConfig};

pub const RESTAURANT_ID_PLACEHOLDER: &str = "{restaurant_id}";

/// URL template of the menu endpoint.
///
/// The template must contain [`RESTAURANT_ID_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEndpoint {
    pub url_template: String,
}

impl MenuEndpoint {
    pub fn url(&self, restaurant_id: &Id) -> String {
        let encoded = utf8_percent_encode(restaurant_id.as_str(), NON_ALPHANUMERIC).to_string();
        self.url_template
            .replace(RESTAURANT_ID_PLACEHOLDER, &encoded)
    }
}

/// Fetches the menu of a single restaurant.
#[derive(Debug, Clone)]
pub struct HttpMenu {
    client: Client,
    endpoint: MenuEndpoint,
}

impl HttpMenu {
    pub fn new(endpoint: MenuEndpoint, http: &HttpConfig) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(http)?,
            endpoint,
        })
    }
}

impl MenuGateway for HttpMenu {
    fn fetch_menu(&self, restaurant_id: &Id) -> Result<Value, FetchError> {
        let url = self.endpoint.url(restaurant_id);
        log::info!("Fetching menu from {url}");
        get_json(self.client.get(&url))
    }
}
