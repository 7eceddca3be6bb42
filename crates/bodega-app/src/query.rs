// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{FilterSelection, Product, SortCriterion};
use crate::normalize::normalize;

/// Keeps products whose normalized category equals `label`. A label with no
/// matches yields an empty vector, not an error.
pub fn by_category(products: &[Product], label: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| normalize(&product.category) == label)
        .cloned()
        .collect()
}

/// Copies the input and reorders it by the given criterion. The sort is
/// stable: products with equal keys keep their relative input order.
/// `SortCriterion::None` returns the copy untouched.
pub fn by_sort(products: &[Product], criterion: SortCriterion) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match criterion {
        SortCriterion::PriceAsc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortCriterion::PriceDesc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortCriterion::Rating => sorted.sort_by(|a, b| a.rating.rate.total_cmp(&b.rating.rate)),
        SortCriterion::None => {}
    }
    sorted
}

/// Case-insensitive substring match against product titles. When a category
/// filter is active the search scope is pre-filtered to that category, so a
/// title match outside the active category never surfaces.
pub fn by_search(products: &[Product], text: &str, filter: &FilterSelection) -> Vec<Product> {
    let needle = text.to_lowercase();
    let scope = match filter {
        FilterSelection::Category(label) => by_category(products, label),
        FilterSelection::None => products.to_vec(),
    };
    scope
        .into_iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .collect()
}
