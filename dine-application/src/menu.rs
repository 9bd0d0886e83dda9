use crate::{
    error::AppError, theme::ThemeContext, usecases, view::ViewStatus, DietFilter, FetchSequence,
    FetchTicket, Id, MenuGateway, MenuPage, MenuSection, RestaurantDetail, Result,
};

/// State of the restaurant menu page.
#[derive(Debug)]
pub struct MenuView<G> {
    gateway: G,
    theme: ThemeContext,
    sequence: FetchSequence,
    status: ViewStatus,
    restaurant_id: Option<Id>,
    page: Option<MenuPage>,
    filter: DietFilter,
}

impl<G> MenuView<G>
where
    G: MenuGateway,
{
    pub fn new(gateway: G, theme: ThemeContext) -> Self {
        Self {
            gateway,
            theme,
            sequence: FetchSequence::default(),
            status: ViewStatus::Idle,
            restaurant_id: None,
            page: None,
            filter: DietFilter::All,
        }
    }

    /// Fetch the menu of a restaurant.
    pub fn load(&mut self, restaurant_id: Id) {
        let ticket = self.begin_load(restaurant_id.clone());
        let result = usecases::load_menu(&self.gateway, &restaurant_id);
        self.complete_load(ticket, result);
    }

    /// Fetch the menu of the last requested restaurant again.
    pub fn retry(&mut self) -> Result<()> {
        let restaurant_id = self.restaurant_id.clone().ok_or(AppError::NothingToRetry)?;
        log::info!("Retrying to load the menu of restaurant {restaurant_id}");
        self.load(restaurant_id);
        Ok(())
    }

    pub fn begin_load(&mut self, restaurant_id: Id) -> FetchTicket {
        self.status = ViewStatus::Loading;
        self.restaurant_id = Some(restaurant_id);
        self.sequence.issue()
    }

    /// Apply the result of a fetch.
    ///
    /// Returns `false` if the fetch has been superseded by a newer one,
    /// in which case nothing changes.
    pub fn complete_load(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<MenuPage, usecases::Error>,
    ) -> bool {
        if !self.sequence.is_current(ticket) {
            log::debug!("Ignoring stale menu response ({ticket:?})");
            return false;
        }
        match result {
            Ok(page) => {
                self.status = if page.sections.is_empty() && page.featured.is_none() {
                    ViewStatus::Empty
                } else {
                    ViewStatus::Ready
                };
                self.page = Some(page);
            }
            Err(err) => {
                log::error!("Error fetching menu: {err}");
                self.status = ViewStatus::Failed(err.to_string());
                self.page = None;
            }
        }
        true
    }

    pub fn set_filter(&mut self, filter: DietFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> DietFilter {
        self.filter
    }

    pub fn detail(&self) -> Option<&RestaurantDetail> {
        self.page.as_ref().map(|p| &p.detail)
    }

    /// The featured section, restricted to the active filter.
    pub fn featured(&self) -> Option<MenuSection> {
        let featured = self.page.as_ref()?.featured.as_ref()?;
        usecases::filter_menu_sections(std::slice::from_ref(featured), self.filter)
            .into_iter()
            .next()
    }

    /// All sections, restricted to the active filter.
    pub fn sections(&self) -> Vec<MenuSection> {
        self.page
            .as_ref()
            .map(|p| usecases::filter_menu_sections(&p.sections, self.filter))
            .unwrap_or_default()
    }

    pub fn restaurant_id(&self) -> Option<&Id> {
        self.restaurant_id.as_ref()
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }
}
