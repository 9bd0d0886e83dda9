use anyhow::Result;
use dine_core::usecases::DEFAULT_TOP_RATED_THRESHOLD;
use dine_gateways::{
    HttpConfig, ListingEndpoint, MenuEndpoint, DEFAULT_USER_AGENT, RESTAURANT_ID_PLACEHOLDER,
};
use std::{env, fs, io::ErrorKind, path::Path};
use thiserror::Error;
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "dinefinder.toml";

const ENV_NAME_LISTING_API_URL: &str = "LISTING_API_URL";
const ENV_NAME_MENU_API_URL: &str = "MENU_API_URL";

#[derive(Debug)]
pub struct Config {
    pub listing: ListingEndpoint,
    pub menu: MenuEndpoint,
    pub http: HttpConfig,
    pub images: Images,
    pub filters: Filters,
}

/// Where card and menu item images are loaded from.
#[derive(Debug)]
pub struct Images {
    pub base_url: String,
    pub card_transform: String,
    pub item_transform: String,
}

#[derive(Debug)]
pub struct Filters {
    pub top_rated_threshold: f64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name} '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error("The menu URL template '{0}' does not contain {{restaurant_id}}")]
    MissingPlaceholder(String),
    #[error("Invalid coordinates: lat = {lat}, lng = {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },
    #[error("Invalid top rated threshold: {0}")]
    InvalidThreshold(f64),
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        if let Ok(url) = env::var(ENV_NAME_LISTING_API_URL) {
            let mut listing = raw_config.listing.unwrap_or_default();
            listing.base_url = url;
            raw_config.listing = Some(listing);
        }
        if let Ok(url) = env::var(ENV_NAME_MENU_API_URL) {
            let mut menu = raw_config.menu.unwrap_or_default();
            menu.url_template = url;
            raw_config.menu = Some(menu);
        }
        Self::try_from(raw_config)
    }
}

fn check_url(name: &'static str, value: &str) -> std::result::Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
            source,
        })
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            listing,
            menu,
            http,
            images,
            filters,
        } = from;

        let raw::Listing {
            base_url,
            lat,
            lng,
            page_type,
        } = listing.unwrap_or_default();
        check_url("listing base URL", &base_url)?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ConfigError::InvalidCoordinates { lat, lng }.into());
        }
        let listing = ListingEndpoint {
            base_url,
            lat,
            lng,
            page_type,
        };

        let raw::Menu { url_template } = menu.unwrap_or_default();
        if !url_template.contains(RESTAURANT_ID_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(url_template).into());
        }
        check_url(
            "menu URL template",
            &url_template.replace(RESTAURANT_ID_PLACEHOLDER, "0"),
        )?;
        let menu = MenuEndpoint { url_template };

        let raw::Http {
            request_timeout,
            user_agent,
            system_proxy,
        } = http.unwrap_or_default();
        let defaults = HttpConfig::default();
        let http = HttpConfig {
            timeout: request_timeout.unwrap_or(defaults.timeout),
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            system_proxy: system_proxy.unwrap_or(defaults.system_proxy),
        };

        let raw::Images {
            base_url,
            card_transform,
            item_transform,
        } = images.unwrap_or_default();
        check_url("image base URL", &base_url)?;
        let images = Images {
            base_url,
            card_transform,
            item_transform,
        };

        let raw::Filters {
            top_rated_threshold,
        } = filters.unwrap_or_default();
        let top_rated_threshold = top_rated_threshold.unwrap_or(DEFAULT_TOP_RATED_THRESHOLD);
        if !top_rated_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(top_rated_threshold).into());
        }
        let filters = Filters {
            top_rated_threshold,
        };

        Ok(Self {
            listing,
            menu,
            http,
            images,
            filters,
        })
    }
}
