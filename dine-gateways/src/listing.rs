use dine_core::gateways::{FetchError, ListingGateway};
use reqwest::blocking::Client;
use serde_json::Value;

use crate::http::{build_client, get_json, HttpConfig};

/// Where restaurants are listed.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingEndpoint {
    pub base_url: String,
    pub lat: f64,
    pub lng: f64,
    pub page_type: String,
}

/// Fetches restaurants near a fixed location.
#[derive(Debug, Clone)]
pub struct HttpListing {
    client: Client,
    endpoint: ListingEndpoint,
}

impl HttpListing {
    pub fn new(endpoint: ListingEndpoint, http: &HttpConfig) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(http)?,
            endpoint,
        })
    }
}

impl ListingGateway for HttpListing {
    fn fetch_listing(&self) -> Result<Value, FetchError> {
        let ListingEndpoint {
            base_url,
            lat,
            lng,
            page_type,
        } = &self.endpoint;
        log::info!("Fetching restaurant listing from {base_url}");
        let request = self.client.get(base_url).query(&[
            ("lat", lat.to_string()),
            ("lng", lng.to_string()),
            ("page_type", page_type.clone()),
        ]);
        get_json(request)
    }
}
