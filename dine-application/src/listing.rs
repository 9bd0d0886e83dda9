use crate::{
    fallback::fallback_restaurants, theme::ThemeContext, usecases, view::ViewStatus,
    FetchSequence, FetchTicket, ListingGateway, RestaurantSummary, Result,
};

/// Result of a name search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NoResults,
}

/// State of the restaurant listing page.
#[derive(Debug)]
pub struct ListingView<G> {
    gateway: G,
    theme: ThemeContext,
    top_rated_threshold: f64,
    sequence: FetchSequence,
    status: ViewStatus,
    /// Everything from the last successful fetch.
    all: Vec<RestaurantSummary>,
    displayed: Vec<RestaurantSummary>,
}

impl<G> ListingView<G>
where
    G: ListingGateway,
{
    pub fn new(gateway: G, theme: ThemeContext, top_rated_threshold: f64) -> Self {
        Self {
            gateway,
            theme,
            top_rated_threshold,
            sequence: FetchSequence::default(),
            status: ViewStatus::Idle,
            all: vec![],
            displayed: vec![],
        }
    }

    /// Fetch the listing and replace all records.
    pub fn load(&mut self) {
        let ticket = self.begin_load();
        let result = usecases::load_listing(&self.gateway);
        self.complete_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> FetchTicket {
        self.status = ViewStatus::Loading;
        self.sequence.issue()
    }

    /// Apply the result of a fetch.
    ///
    /// Returns `false` if the fetch has been superseded by a newer one,
    /// in which case nothing changes.
    pub fn complete_load(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Vec<RestaurantSummary>, usecases::Error>,
    ) -> bool {
        if !self.sequence.is_current(ticket) {
            log::debug!("Ignoring stale listing response ({ticket:?})");
            return false;
        }
        match result {
            Ok(restaurants) => {
                self.status = if restaurants.is_empty() {
                    ViewStatus::Empty
                } else {
                    ViewStatus::Ready
                };
                self.replace_all(restaurants);
            }
            Err(err) if err.is_transport() => {
                log::warn!("Could not fetch restaurants ({err}): use local data");
                let fallback = fallback_restaurants().unwrap_or_else(|err| {
                    log::error!("Invalid fallback dataset: {err}");
                    vec![]
                });
                self.status = ViewStatus::Fallback(err.to_string());
                self.replace_all(fallback);
            }
            Err(err) => {
                log::error!("Error fetching restaurants: {err}");
                self.status = ViewStatus::Failed(err.to_string());
                self.replace_all(vec![]);
            }
        }
        true
    }

    fn replace_all(&mut self, restaurants: Vec<RestaurantSummary>) {
        self.displayed = restaurants.clone();
        self.all = restaurants;
    }

    /// Show restaurants whose name contains `text`.
    pub fn search(&mut self, text: &str) -> SearchOutcome {
        self.displayed = usecases::search_restaurants(&self.all, text);
        if self.displayed.is_empty() {
            log::info!("No restaurants match '{text}'");
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(self.displayed.len())
        }
    }

    /// Show restaurants rated above the configured threshold.
    pub fn show_top_rated(&mut self) -> Result<usize> {
        self.displayed = usecases::filter_top_rated(&self.all, self.top_rated_threshold)?;
        Ok(self.displayed.len())
    }

    /// Show everything from the last fetch again.
    pub fn reset(&mut self) {
        self.displayed = self.all.clone();
    }

    pub fn restaurants(&self) -> &[RestaurantSummary] {
        &self.displayed
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    pub fn top_rated_threshold(&self) -> f64 {
        self.top_rated_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::prelude::*, FetchError, Theme};

    fn view(responses: Vec<ListingResponse>) -> ListingView<ScriptedListing> {
        ListingView::new(ScriptedListing::new(responses), ThemeContext::default(), 4.45)
    }

    #[test]
    fn load_restaurants() {
        let mut v = view(vec![Ok(listing_doc(&[("Cafe Coffee Day", 4.2), ("Pizza Hut", 4.5)]))]);
        assert_eq!(&ViewStatus::Idle, v.status());
        v.load();
        assert_eq!(&ViewStatus::Ready, v.status());
        assert_eq!(2, v.restaurants().len());
        assert_eq!(Theme::Light, v.theme().current());
    }

    #[test]
    fn empty_listing_is_not_an_error() {
        let mut v = view(vec![Ok(listing_doc(&[]))]);
        v.load();
        assert_eq!(&ViewStatus::Empty, v.status());
        assert!(v.restaurants().is_empty());
        assert!(v.status().error_message().is_none());
    }

    #[test]
    fn fall_back_to_local_data_on_transport_errors() {
        let mut v = view(vec![Err(FetchError::Status {
            code: 502,
            reason: "Bad Gateway".into(),
        })]);
        v.load();
        assert_eq!(
            Some("HTTP error! status: 502 Bad Gateway"),
            v.status().error_message()
        );
        assert!(matches!(v.status(), ViewStatus::Fallback(_)));
        assert_eq!(5, v.restaurants().len());
    }

    #[test]
    fn malformed_payload_fails_without_fallback() {
        let mut v = view(vec![Err(FetchError::ErrorPage)]);
        v.load();
        assert!(matches!(v.status(), ViewStatus::Failed(_)));
        assert!(v.restaurants().is_empty());
    }

    #[test]
    fn search_and_reset() {
        let mut v = view(vec![Ok(listing_doc(&[("Cafe Coffee Day", 4.2), ("Pizza Hut", 4.5)]))]);
        v.load();
        assert_eq!(SearchOutcome::Found(1), v.search("cafe"));
        assert_eq!("Cafe Coffee Day", v.restaurants()[0].name);
        assert_eq!(SearchOutcome::NoResults, v.search("sushi"));
        assert!(v.restaurants().is_empty());
        v.reset();
        assert_eq!(2, v.restaurants().len());
    }

    #[test]
    fn filters_derive_from_the_full_set() {
        let mut v = view(vec![Ok(listing_doc(&[
            ("Cafe Coffee Day", 4.2),
            ("Pizza Hut", 4.5),
            ("Meghana Foods", 4.6),
        ]))]);
        v.load();
        v.search("cafe");
        assert_eq!(2, v.show_top_rated().unwrap());
        let names: Vec<_> = v.restaurants().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(vec!["Pizza Hut", "Meghana Foods"], names);
        assert_eq!(SearchOutcome::Found(1), v.search("cafe"));
        v.reset();
        assert_eq!(3, v.restaurants().len());
    }

    #[test]
    fn top_rated_after_reset_is_idempotent() {
        let mut v = view(vec![Ok(listing_doc(&[("A", 4.2), ("B", 4.5), ("C", 4.6)]))]);
        v.load();
        v.show_top_rated().unwrap();
        let once = v.restaurants().to_vec();
        v.reset();
        v.show_top_rated().unwrap();
        assert_eq!(once, v.restaurants());
    }

    #[test]
    fn ignore_stale_responses() {
        let mut v = view(vec![]);
        let first = v.begin_load();
        let second = v.begin_load();
        let newer = dine_core::extract::extract_restaurants(&listing_doc(&[("Newer", 4.0)]));
        let older = dine_core::extract::extract_restaurants(&listing_doc(&[("Older", 4.0)]));
        assert!(v.complete_load(second, Ok(newer)));
        assert!(!v.complete_load(first, Ok(older)));
        assert_eq!("Newer", v.restaurants()[0].name);
        assert_eq!(&ViewStatus::Ready, v.status());
    }

    #[test]
    fn reload_replaces_records() {
        let mut v = view(vec![
            Ok(listing_doc(&[("A", 4.2)])),
            Ok(listing_doc(&[("B", 4.5), ("C", 4.6)])),
        ]);
        v.load();
        v.search("a");
        v.load();
        assert_eq!(2, v.restaurants().len());
        assert_eq!(2, v.gateway.calls());
    }
}
