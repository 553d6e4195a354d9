// Catalog: the fixed in-memory listing collection and the search filter
// over it.

use serde::{Deserialize, Serialize};

use crate::listing::{Listing, ListingId};

// Inclusive hourly price window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    // Initial slider position of the shell
    fn default() -> Self {
        Self {
            min: 500.0,
            max: 5000.0,
        }
    }
}

// Search inputs the filter runs on. An empty query matches every title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub query: String,
    pub price_range: PriceRange,
}

// Fixed-order collection of listings with id lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    // The subsequence of listings whose title contains the query
    // (case-insensitively) and whose price falls inside the window.
    // Catalog order is preserved; an empty result is a valid result.
    pub fn filter(&self, criteria: &SearchFilter) -> Vec<&Listing> {
        let needle = criteria.query.to_lowercase();

        let mut matched = Vec::new();
        for listing in &self.listings {
            if !listing.title.to_lowercase().contains(&needle) {
                continue;
            }
            if !criteria.price_range.contains(listing.price) {
                continue;
            }
            matched.push(listing);
        }

        matched
    }

    // The production catalog. Titles and locations are the original Russian
    // product data; prices are rubles per hour.
    pub fn seed() -> Self {
        Self::new(vec![
            seed_listing(
                1,
                "Роскошные апартаменты в центре",
                1500.0,
                4.9,
                124,
                "https://cdn.poehali.dev/projects/bc2f7f3f-a1f8-4f23-839a-7f354885885e/files/6e421476-f2b7-40e7-9b5b-abc5ab6c0a1e.jpg",
                "Москва, Центр",
                &["Wi-Fi", "Кухня", "Кондиционер", "Парковка"],
                2,
                2,
                75.0,
            ),
            seed_listing(
                2,
                "Стильная студия у метро",
                800.0,
                4.7,
                89,
                "https://cdn.poehali.dev/projects/bc2f7f3f-a1f8-4f23-839a-7f354885885e/files/daaa14af-2116-4102-8a06-aef6bf285241.jpg",
                "Москва, Сокол",
                &["Wi-Fi", "Кухня", "Телевизор"],
                1,
                1,
                35.0,
            ),
            seed_listing(
                3,
                "Пентхаус с панорамным видом",
                3500.0,
                5.0,
                67,
                "https://cdn.poehali.dev/projects/bc2f7f3f-a1f8-4f23-839a-7f354885885e/files/b26f7af9-9841-48fb-a24e-0e15d055df89.jpg",
                "Москва, Сити",
                &["Wi-Fi", "Кухня", "Кондиционер", "Парковка", "Джакузи", "Терраса"],
                3,
                3,
                120.0,
            ),
            seed_listing(
                4,
                "Уютная квартира для двоих",
                1200.0,
                4.8,
                156,
                "https://cdn.poehali.dev/projects/bc2f7f3f-a1f8-4f23-839a-7f354885885e/files/6e421476-f2b7-40e7-9b5b-abc5ab6c0a1e.jpg",
                "Москва, Арбат",
                &["Wi-Fi", "Кухня", "Стиральная машина"],
                1,
                1,
                45.0,
            ),
            seed_listing(
                5,
                "Современная квартира у парка",
                1800.0,
                4.9,
                203,
                "https://cdn.poehali.dev/projects/bc2f7f3f-a1f8-4f23-839a-7f354885885e/files/daaa14af-2116-4102-8a06-aef6bf285241.jpg",
                "Москва, Парк Горького",
                &["Wi-Fi", "Кухня", "Кондиционер", "Балкон"],
                2,
                1,
                60.0,
            ),
            seed_listing(
                6,
                "Семейные апартаменты",
                2200.0,
                4.6,
                92,
                "https://cdn.poehali.dev/projects/bc2f7f3f-a1f8-4f23-839a-7f354885885e/files/b26f7af9-9841-48fb-a24e-0e15d055df89.jpg",
                "Москва, Кутузовский",
                &["Wi-Fi", "Кухня", "Посудомойка", "Парковка", "Детская кроватка"],
                3,
                2,
                90.0,
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_listing(
    id: ListingId,
    title: &str,
    price: f64,
    rating: f32,
    reviews: u32,
    image: &str,
    location: &str,
    amenities: &[&str],
    bedrooms: u8,
    bathrooms: u8,
    area: f32,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        price,
        rating,
        reviews,
        image: image.to_string(),
        location: location.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        bedrooms,
        bathrooms,
        area,
    }
}
