// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use bodega_app::{Product, ProductId, Rating};

/// Raw category labels as the store API serves them — punctuation intact,
/// so fixtures exercise the normalizer the way live data does.
pub const RAW_CATEGORIES: [&str; 4] = [
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
];

const ADJECTIVES: [&str; 8] = [
    "Classic", "Slim", "Rugged", "Vintage", "Everyday", "Premium", "Compact", "Bold",
];

const ELECTRONICS_NOUNS: [&str; 5] = ["Monitor", "Headset", "SSD", "Keyboard", "Webcam"];
const JEWELERY_NOUNS: [&str; 4] = ["Ring", "Bracelet", "Pendant", "Earrings"];
const MENS_NOUNS: [&str; 4] = ["Jacket", "T-Shirt", "Backpack", "Raincoat"];
const WOMENS_NOUNS: [&str; 4] = ["Blouse", "Scarf", "Coat", "Dress"];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded deterministic catalog generator: the same seed always produces the
/// same products, so assertions can pin exact values.
#[derive(Debug, Clone)]
pub struct CatalogFaker {
    rng: DeterministicRng,
    next_id: i64,
}

impl CatalogFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn product(&mut self, category: &str) -> Product {
        let id = self.next_id;
        self.next_id += 1;

        let adjective = ADJECTIVES[self.rng.int_n(ADJECTIVES.len())];
        let noun = self.pick_noun(category);
        let price = 5.0 + (self.rng.int_n(20_000) as f64) / 100.0;
        let rate = 1.0 + (self.rng.int_n(41) as f64) / 10.0;

        Product {
            id: ProductId::new(id),
            title: format!("{adjective} {noun}"),
            price,
            category: category.to_owned(),
            image: format!("https://fakestoreapi.com/img/{id}.jpg"),
            rating: Rating {
                rate,
                count: self.rng.int_n(500) as i64,
            },
        }
    }

    /// A catalog with `per_category` products in each raw category, grouped
    /// by category in `RAW_CATEGORIES` order.
    pub fn catalog(&mut self, per_category: usize) -> Vec<Product> {
        let mut products = Vec::with_capacity(per_category * RAW_CATEGORIES.len());
        for category in RAW_CATEGORIES {
            for _ in 0..per_category {
                products.push(self.product(category));
            }
        }
        products
    }

    fn pick_noun(&mut self, category: &str) -> &'static str {
        match category {
            "electronics" => ELECTRONICS_NOUNS[self.rng.int_n(ELECTRONICS_NOUNS.len())],
            "jewelery" => JEWELERY_NOUNS[self.rng.int_n(JEWELERY_NOUNS.len())],
            "women's clothing" => WOMENS_NOUNS[self.rng.int_n(WOMENS_NOUNS.len())],
            _ => MENS_NOUNS[self.rng.int_n(MENS_NOUNS.len())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogFaker, RAW_CATEGORIES};

    #[test]
    fn same_seed_produces_identical_catalogs() {
        let mut first = CatalogFaker::new(42);
        let mut second = CatalogFaker::new(42);
        assert_eq!(first.catalog(3), second.catalog(3));
    }

    #[test]
    fn catalog_covers_every_raw_category() {
        let mut faker = CatalogFaker::new(7);
        let catalog = faker.catalog(2);
        assert_eq!(catalog.len(), 2 * RAW_CATEGORIES.len());
        for category in RAW_CATEGORIES {
            assert_eq!(catalog.iter().filter(|p| p.category == category).count(), 2);
        }
    }

    #[test]
    fn generated_products_have_sane_values() {
        let mut faker = CatalogFaker::new(3);
        for product in faker.catalog(5) {
            assert!(product.price >= 5.0);
            assert!(product.rating.rate >= 1.0 && product.rating.rate <= 5.1);
            assert!(!product.title.is_empty());
        }
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        let mut faker = CatalogFaker::new(9);
        let catalog = faker.catalog(2);
        let ids: Vec<i64> = catalog.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, (1..=ids.len() as i64).collect::<Vec<i64>>());
    }
}
