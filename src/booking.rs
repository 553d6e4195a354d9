// Booking calculator and the types the submission workflow runs on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listing::{Listing, ListingId};

// Hours a listing can be booked for in one go
pub const MIN_HOURS: u32 = 1;
pub const MAX_HOURS: u32 = 24;

// Error types for the booking submission workflow. All are non-fatal: the
// session stays usable and the current selection is kept for retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Payment rejected: {0}")]
    Rejected(String),
}

// Total price for renting a listing for the given number of hours.
pub fn quote(listing: &Listing, hours: u32) -> f64 {
    listing.price * f64::from(hours)
}

// One booking submission. Constructed on submit, discarded once the
// response is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub listing_id: ListingId,
    pub listing_title: String,
    pub price: f64,
    pub hours: u32,
    pub total: f64,
    pub customer_email: String,
}

impl BookingRequest {
    // The total is derived here, never supplied by the caller, so
    // total == price * hours holds by construction.
    pub fn new(listing: &Listing, hours: u32, customer_email: &str) -> Self {
        Self {
            listing_id: listing.id,
            listing_title: listing.title.clone(),
            price: listing.price,
            hours,
            total: quote(listing, hours),
            customer_email: customer_email.to_string(),
        }
    }
}

// Successful outcome of a booking submission. The collaborator echoes a
// booking id and the charged amount when it has them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub booking_id: Option<String>,
    pub amount: Option<f64>,
    pub test_mode: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_quote() {
        let catalog = Catalog::seed();
        let listing = catalog.get(1).unwrap();
        assert_eq!(listing.price, 1500.0);
        assert_eq!(quote(listing, 4), 6000.0);
    }

    #[test]
    fn test_quote_holds_over_all_dialog_hours() {
        let catalog = Catalog::seed();
        for listing in catalog.listings() {
            for hours in MIN_HOURS..=MAX_HOURS {
                assert_eq!(quote(listing, hours), listing.price * f64::from(hours));
            }
        }
    }

    #[test]
    fn test_request_carries_derived_total() {
        let catalog = Catalog::seed();
        let listing = catalog.get(2).unwrap();
        let request = BookingRequest::new(listing, 3, "guest@example.com");

        assert_eq!(request.listing_id, 2);
        assert_eq!(request.listing_title, "Стильная студия у метро");
        assert_eq!(request.price, 800.0);
        assert_eq!(request.hours, 3);
        assert_eq!(request.total, 2400.0);
        assert_eq!(request.customer_email, "guest@example.com");
    }

    #[test]
    fn test_error_messages() {
        let err = SubmissionError::Rejected("card declined".to_string());
        assert_eq!(err.to_string(), "Payment rejected: card declined");

        let err = SubmissionError::NetworkError("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
