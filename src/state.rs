// Application state as one explicit, serializable struct driven by an
// event/reducer pair, in place of the original shell's ambient mutable
// variables. The filter and the calculator stay pure; everything they read
// lives here.

use serde::{Deserialize, Serialize};

use crate::booking::{MAX_HOURS, MIN_HOURS};
use crate::catalog::{PriceRange, SearchFilter};
use crate::favorites::FavoritesSet;
use crate::listing::ListingId;

// Navigation tabs of the shell. Home and Search render the same catalog
// view; the ids stay distinct for the navigation highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Search,
    Favorites,
    Profile,
    Support,
}

// Events the shell feeds into the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    TabSelected(Tab),
    ListingSelected(ListingId),
    SelectionCleared,
    QueryChanged(String),
    PriceRangeChanged(PriceRange),
    HoursChanged(u32),
    EmailChanged(String),
    FavoriteToggled(ListingId),
    SubmissionStarted,
    SubmissionSucceeded,
    SubmissionFailed,
}

// Snapshot of everything the shell renders from. The booking dialog is open
// exactly when `selected` is Some.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub active_tab: Tab,
    pub selected: Option<ListingId>,
    pub search_query: String,
    pub price_range: PriceRange,
    pub hours: u32,
    pub customer_email: String,
    pub favorites: FavoritesSet,
    pub submitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Home,
            selected: None,
            search_query: String::new(),
            price_range: PriceRange::default(),
            hours: 3,
            customer_email: String::new(),
            favorites: FavoritesSet::new(),
            submitting: false,
        }
    }
}

impl AppState {
    // Applies one event. Transitions that are not currently legal are
    // dropped; the state machine has no failure mode.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::TabSelected(tab) => self.active_tab = tab,
            AppEvent::ListingSelected(id) => self.selected = Some(id),
            AppEvent::SelectionCleared => self.selected = None,
            AppEvent::QueryChanged(query) => self.search_query = query,
            AppEvent::PriceRangeChanged(range) => self.price_range = range,
            // One bound everywhere, quick-search field included
            AppEvent::HoursChanged(hours) => self.hours = hours.clamp(MIN_HOURS, MAX_HOURS),
            AppEvent::EmailChanged(email) => self.customer_email = email,
            AppEvent::FavoriteToggled(id) => {
                self.favorites.toggle(id);
            }
            // At most one submission in flight; a repeat start is dropped
            AppEvent::SubmissionStarted => {
                if !self.submitting && self.selected.is_some() {
                    self.submitting = true;
                }
            }
            AppEvent::SubmissionSucceeded => {
                self.submitting = false;
                self.selected = None;
                self.customer_email.clear();
            }
            AppEvent::SubmissionFailed => self.submitting = false,
        }
    }

    // The filter derived from the current search inputs.
    pub fn search_filter(&self) -> SearchFilter {
        SearchFilter {
            query: self.search_query.clone(),
            price_range: self.price_range,
        }
    }
}
