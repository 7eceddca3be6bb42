// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use bodega_app::{Product, ProductId, Rating};

use crate::CatalogEvent;

/// Raw labels carry the punctuation the live API serves, so the demo
/// exercises the normalizer end to end.
const DEMO_CATEGORIES: [&str; 4] = [
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
];

struct DemoSeed {
    id: i64,
    title: &'static str,
    price: f64,
    category: &'static str,
    rate: f64,
    count: i64,
}

const DEMO_PRODUCTS: [DemoSeed; 10] = [
    DemoSeed {
        id: 1,
        title: "Fjallraven Backpack",
        price: 109.95,
        category: "men's clothing",
        rate: 3.9,
        count: 120,
    },
    DemoSeed {
        id: 2,
        title: "Casual Slim Fit T-Shirt",
        price: 22.3,
        category: "men's clothing",
        rate: 4.1,
        count: 259,
    },
    DemoSeed {
        id: 3,
        title: "Cotton Jacket",
        price: 55.99,
        category: "men's clothing",
        rate: 4.7,
        count: 500,
    },
    DemoSeed {
        id: 4,
        title: "Gold Plated Princess Ring",
        price: 9.99,
        category: "jewelery",
        rate: 3.0,
        count: 400,
    },
    DemoSeed {
        id: 5,
        title: "Silver Dragon Bracelet",
        price: 695.0,
        category: "jewelery",
        rate: 4.6,
        count: 400,
    },
    DemoSeed {
        id: 6,
        title: "Portable External Drive 2TB",
        price: 64.0,
        category: "electronics",
        rate: 3.3,
        count: 203,
    },
    DemoSeed {
        id: 7,
        title: "SATA III Internal SSD 1TB",
        price: 109.0,
        category: "electronics",
        rate: 2.9,
        count: 470,
    },
    DemoSeed {
        id: 8,
        title: "Gaming Monitor 49in",
        price: 999.99,
        category: "electronics",
        rate: 2.2,
        count: 140,
    },
    DemoSeed {
        id: 9,
        title: "Removable Hood Biker Jacket",
        price: 29.95,
        category: "women's clothing",
        rate: 2.6,
        count: 235,
    },
    DemoSeed {
        id: 10,
        title: "Short Sleeve Moisture Tee",
        price: 7.95,
        category: "women's clothing",
        rate: 4.5,
        count: 146,
    },
];

pub fn demo_products() -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            title: seed.title.to_owned(),
            price: seed.price,
            category: seed.category.to_owned(),
            image: format!("https://fakestoreapi.com/img/{}.jpg", seed.id),
            rating: Rating {
                rate: seed.rate,
                count: seed.count,
            },
        })
        .collect()
}

pub fn demo_categories() -> Vec<String> {
    DEMO_CATEGORIES.iter().map(|label| (*label).to_owned()).collect()
}

/// The same completion events a live fetch produces, ready to feed through
/// `CatalogStore::apply`.
pub fn demo_events() -> Vec<CatalogEvent> {
    vec![
        CatalogEvent::ProductsLoaded(demo_products()),
        CatalogEvent::CategoriesLoaded(demo_categories()),
    ]
}
