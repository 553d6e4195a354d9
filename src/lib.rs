// Main library file for the hourly apartment rental core

// Export modules for each part of the system
pub mod booking;
pub mod catalog;
pub mod favorites;
pub mod gateway;
pub mod listing;
pub mod session;
pub mod state;

// Re-export key types for convenience
pub use booking::{quote, BookingRequest, Confirmation, SubmissionError, MAX_HOURS, MIN_HOURS};
pub use catalog::{Catalog, PriceRange, SearchFilter};
pub use favorites::FavoritesSet;
pub use gateway::{
    GatewayConfig, HttpPaymentGateway, PaymentGateway, PaymentOutcome, PaymentPayload,
};
pub use listing::{Listing, ListingId};
pub use session::{BookingHistory, BookingRecord, Session};
pub use state::{AppEvent, AppState, Tab};
