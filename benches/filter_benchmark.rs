use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hourly_rent::{Catalog, Listing, PriceRange, SearchFilter};
use rand::{seq::SliceRandom, thread_rng, Rng};

// Benchmark for the catalog filter over growing catalog sizes
pub fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");

    let titles = [
        "Стильная студия у метро",
        "Уютная квартира для двоих",
        "Современная квартира у парка",
        "Пентхаус с панорамным видом",
        "Семейные апартаменты",
        "Роскошные апартаменты в центре",
    ];

    for size in [100usize, 1_000, 10_000].iter() {
        // Build a catalog of the given size out of the seed titles with
        // randomized prices
        let mut rng = thread_rng();
        let listings = (0..*size)
            .map(|i| {
                let title = titles.choose(&mut rng).unwrap();
                Listing {
                    id: i as u32,
                    title: format!("{} №{}", title, i),
                    price: rng.gen_range(300.0..5000.0),
                    rating: rng.gen_range(3.5..5.0),
                    reviews: rng.gen_range(0..300),
                    image: String::new(),
                    location: "Москва".to_string(),
                    amenities: vec!["Wi-Fi".to_string()],
                    bedrooms: rng.gen_range(1..4),
                    bathrooms: rng.gen_range(1..3),
                    area: rng.gen_range(25.0..120.0),
                }
            })
            .collect::<Vec<_>>();
        let catalog = Catalog::new(listings);

        let criteria = SearchFilter {
            query: "студия".to_string(),
            price_range: PriceRange::new(500.0, 2500.0),
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(catalog.filter(black_box(&criteria))));
        });
    }

    group.finish();
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
