// Session: wires the catalog, the reducer-driven state, the booking
// history, and the payment gateway into the end-to-end booking workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::booking::{quote, BookingRequest, Confirmation, SubmissionError};
use crate::catalog::Catalog;
use crate::gateway::PaymentGateway;
use crate::listing::{Listing, ListingId};
use crate::state::{AppEvent, AppState};

// One confirmed booking from this session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub listing_id: ListingId,
    pub listing_title: String,
    pub hours: u32,
    pub total: f64,
    pub booking_id: Option<String>,
    pub test_mode: bool,
    pub booked_at: DateTime<Utc>,
}

// Session-local log of confirmed bookings, oldest first. In-memory only;
// gone when the session ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingHistory {
    records: Vec<BookingRecord>,
}

impl BookingHistory {
    pub fn record(&mut self, request: &BookingRequest, confirmation: &Confirmation) {
        self.records.push(BookingRecord {
            listing_id: request.listing_id,
            listing_title: request.listing_title.clone(),
            hours: request.hours,
            total: request.total,
            booking_id: confirmation.booking_id.clone(),
            test_mode: confirmation.test_mode,
            booked_at: Utc::now(),
        });
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// A browsing session over a catalog, parameterized by the payment gateway
// behind the submission workflow.
pub struct Session<G> {
    catalog: Catalog,
    state: AppState,
    history: BookingHistory,
    gateway: G,
}

impl<G: PaymentGateway> Session<G> {
    pub fn new(catalog: Catalog, gateway: G) -> Self {
        Self {
            catalog,
            state: AppState::default(),
            history: BookingHistory::default(),
            gateway,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &BookingHistory {
        &self.history
    }

    pub fn apply(&mut self, event: AppEvent) {
        self.state.apply(event);
    }

    // Listings currently visible under the search inputs.
    pub fn visible_listings(&self) -> Vec<&Listing> {
        self.catalog.filter(&self.state.search_filter())
    }

    pub fn selected_listing(&self) -> Option<&Listing> {
        self.state.selected.and_then(|id| self.catalog.get(id))
    }

    // Total shown in the booking dialog; zero with nothing selected.
    pub fn current_total(&self) -> f64 {
        self.selected_listing()
            .map_or(0.0, |listing| quote(listing, self.state.hours))
    }

    // Runs the booking workflow end to end: validate, enter Submitting,
    // charge, return to Idle with the outcome's side effects applied.
    // Returns None when nothing is selected (there is no booking to
    // submit). Holding &mut self across the await keeps a second
    // submission unrepresentable while this one is in flight.
    pub async fn submit_booking(&mut self) -> Option<Result<Confirmation, SubmissionError>> {
        let listing = self.selected_listing()?.clone();

        // Checked before any network call; the state stays Idle for retry.
        if self.state.customer_email.is_empty() {
            return Some(Err(SubmissionError::ValidationError(
                "Укажите email для отправки подтверждения".to_string(),
            )));
        }

        let request = BookingRequest::new(&listing, self.state.hours, &self.state.customer_email);
        self.state.apply(AppEvent::SubmissionStarted);

        let result = self.gateway.charge(&request).await;

        match &result {
            Ok(confirmation) => {
                info!(
                    listing = request.listing_id,
                    total = request.total,
                    test_mode = confirmation.test_mode,
                    "booking confirmed"
                );
                self.history.record(&request, confirmation);
                self.state.apply(AppEvent::SubmissionSucceeded);
            }
            Err(err) => {
                warn!(listing = request.listing_id, "booking failed: {err}");
                self.state.apply(AppEvent::SubmissionFailed);
            }
        }

        Some(result)
    }
}
