use crate::config::Config;
use anyhow::{Context, Result};
use dine_gateways::{HttpListing, HttpMenu};

pub fn listing_gateway(cfg: &Config) -> Result<HttpListing> {
    log::debug!("Use listing endpoint {}", cfg.listing.base_url);
    HttpListing::new(cfg.listing.clone(), &cfg.http)
        .context("Could not set up the listing HTTP client")
}

pub fn menu_gateway(cfg: &Config) -> Result<HttpMenu> {
    log::debug!("Use menu endpoint {}", cfg.menu.url_template);
    HttpMenu::new(cfg.menu.clone(), &cfg.http).context("Could not set up the menu HTTP client")
}
