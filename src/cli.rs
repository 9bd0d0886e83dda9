use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dine_entities::diet::DietFilter;

/// Find restaurants nearby and browse their menus.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Configuration file (defaults to `dinefinder.toml`)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the full error chain if something goes wrong
    #[arg(long, global = true)]
    pub show_trace: bool,

    /// Use the dark theme
    #[arg(long, global = true)]
    pub dark: bool,

    #[command(subcommand)]
    pub page: Option<Page>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Page {
    /// List restaurants (home page)
    List {
        /// Only show restaurants whose name contains this text
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Only show top rated restaurants
        #[arg(long, conflicts_with = "search")]
        top_rated: bool,
    },
    /// Show the menu of a restaurant
    Menu {
        #[arg(value_name = "RESTAURANT_ID")]
        restaurant_id: String,

        /// Only show items of this kind (all, veg, non-veg)
        #[arg(long, default_value_t = DietFilter::All)]
        diet: DietFilter,

        /// How often to retry if the menu could not be loaded
        #[arg(long, default_value_t = 0)]
        retries: u8,
    },
    About,
    Contact,
    /// Grocery store (coming soon)
    Grocery,
}

impl Default for Page {
    fn default() -> Self {
        Self::List {
            search: None,
            top_rated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn home_page_is_the_default() {
        let args = Args::try_parse_from(["dinefinder"]).unwrap();
        assert_eq!(Page::default(), args.page.unwrap_or_default());
    }

    #[test]
    fn parse_menu_page() {
        let args =
            Args::try_parse_from(["dinefinder", "menu", "253", "--diet", "veg", "--dark"]).unwrap();
        assert!(args.dark);
        assert_eq!(
            Some(Page::Menu {
                restaurant_id: "253".into(),
                diet: DietFilter::Veg,
                retries: 0,
            }),
            args.page
        );
    }

    #[test]
    fn parse_listing_filters() {
        let args = Args::try_parse_from([
            "dinefinder",
            "--show-trace",
            "list",
            "--search",
            "pizza",
        ])
        .unwrap();
        assert!(args.show_trace);
        assert_eq!(
            Some(Page::List {
                search: Some("pizza".into()),
                top_rated: false,
            }),
            args.page
        );
    }

    #[test]
    fn search_and_top_rated_are_exclusive() {
        let args = [
            "dinefinder",
            "list",
            "--search",
            "pizza",
            "--top-rated",
        ];
        assert!(Args::try_parse_from(args).is_err());
    }

    #[test]
    fn reject_unknown_diet() {
        assert!(Args::try_parse_from(["dinefinder", "menu", "1", "--diet", "vegan"]).is_err());
    }
}
