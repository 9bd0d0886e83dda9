use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("dinefinder.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub listing: Option<Listing>,
    pub menu: Option<Menu>,
    pub http: Option<Http>,
    pub images: Option<Images>,
    pub filters: Option<Filters>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Listing {
    pub base_url: String,
    pub lat: f64,
    pub lng: f64,
    pub page_type: String,
}

impl Default for Listing {
    fn default() -> Self {
        Config::default().listing.expect("Listing configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Menu {
    pub url_template: String,
}

impl Default for Menu {
    fn default() -> Self {
        Config::default().menu.expect("Menu configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Http {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub request_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub system_proxy: Option<bool>,
}

impl Default for Http {
    fn default() -> Self {
        Config::default().http.expect("HTTP configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Images {
    pub base_url: String,
    pub card_transform: String,
    pub item_transform: String,
}

impl Default for Images {
    fn default() -> Self {
        Config::default().images.expect("Images configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Filters {
    pub top_rated_threshold: Option<f64>,
}

impl Default for Filters {
    fn default() -> Self {
        Config::default().filters.expect("Filters configuration")
    }
}
