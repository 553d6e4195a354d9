use serde::{Deserialize, Serialize};

// Identifier listings are addressed by, in the catalog and on the payment
// wire alike.
pub type ListingId = u32;

// A rentable unit. The catalog is fixed at process start; listings are never
// created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    // Hourly rate, always positive
    pub price: f64,
    // 0 to 5
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub location: String,
    pub amenities: Vec<String>,
    pub bedrooms: u8,
    pub bathrooms: u8,
    // Floor area in square meters
    pub area: f32,
}
