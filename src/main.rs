use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use dine_application::prelude::*;
use dine_entities::{id::Id, theme::Theme};

mod boundary;
mod cli;
mod config;
mod gateways;
mod pages;

use self::{
    cli::{Args, Page},
    config::Config,
};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let show_trace = args.show_trace;
    if !show_trace {
        boundary::log_panics();
    }
    boundary::guard(show_trace, move || run(args))
}

fn run(args: Args) -> anyhow::Result<()> {
    let Args {
        config, dark, page, ..
    } = args;
    let cfg = Config::try_load_from_file_or_default(config.as_ref())
        .context("Could not load the configuration")?;

    let theme = ThemeSwitch::new(Theme::Light);
    if dark {
        theme.toggle();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match page.unwrap_or_default() {
        Page::List { search, top_rated } => {
            let mut view = ListingView::new(
                gateways::listing_gateway(&cfg)?,
                theme.context(),
                cfg.filters.top_rated_threshold,
            );
            pages::header(&mut out, view.theme().current())?;
            view.load();
            let outcome = search.as_deref().map(|text| (text, view.search(text)));
            if top_rated {
                let count = view.show_top_rated()?;
                log::info!(
                    "{count} restaurants are rated above {}",
                    view.top_rated_threshold()
                );
            }
            pages::listing(
                &mut out,
                view.status(),
                view.restaurants(),
                outcome,
                &cfg.images,
            )?;
        }
        Page::Menu {
            restaurant_id,
            diet,
            retries,
        } => {
            let mut view = MenuView::new(gateways::menu_gateway(&cfg)?, theme.context());
            pages::header(&mut out, view.theme().current())?;
            view.set_filter(diet);
            view.load(Id::from(restaurant_id));
            for attempt in 1..=retries {
                let Some(reason) = view.status().error_message() else {
                    break;
                };
                if let Some(id) = view.restaurant_id() {
                    log::info!("Retry {attempt} of {retries} for restaurant {id} ({reason})");
                }
                view.retry()?;
            }
            let featured = view.featured();
            let sections = view.sections();
            pages::menu(
                &mut out,
                view.status(),
                view.detail(),
                featured.as_ref(),
                &sections,
                view.filter(),
                &cfg.images,
            )?;
        }
        Page::About => {
            pages::header(&mut out, theme.context().current())?;
            pages::about(&mut out)?;
        }
        Page::Contact => {
            pages::header(&mut out, theme.context().current())?;
            pages::contact(&mut out)?;
        }
        Page::Grocery => {
            pages::header(&mut out, theme.context().current())?;
            pages::grocery(&mut out)?;
        }
    }
    Ok(())
}
