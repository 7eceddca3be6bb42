// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod demo;

use bodega_app::{Product, normalize};

/// Load progress of one remote collection. `Failed` keeps the collection
/// empty and renderable; the reason goes to the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

impl LoadPhase {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Completion report from one fetch worker. Each fetch settles exactly once,
/// with either the whole batch or a failure — never a partial batch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    ProductsLoaded(Vec<Product>),
    ProductsFailed(String),
    CategoriesLoaded(Vec<String>),
    CategoriesFailed(String),
}

/// In-memory catalog: the product list and the normalized, lexicographically
/// sorted category labels, each with its own load phase. Created empty;
/// each collection is written once when its fetch settles.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    products_phase: LoadPhase,
    categories: Vec<String>,
    categories_phase: LoadPhase,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            products_phase: LoadPhase::Loading,
            categories: Vec::new(),
            categories_phase: LoadPhase::Loading,
        }
    }

    /// Folds one fetch completion into the store and returns the trace for
    /// the status line.
    pub fn apply(&mut self, event: CatalogEvent) -> String {
        match event {
            CatalogEvent::ProductsLoaded(products) => {
                let count = products.len();
                self.products = products;
                self.products_phase = LoadPhase::Ready;
                format!("products loaded ({count})")
            }
            CatalogEvent::ProductsFailed(reason) => {
                self.products.clear();
                self.products_phase = LoadPhase::Failed(reason.clone());
                format!("product fetch failed: {reason}")
            }
            CatalogEvent::CategoriesLoaded(labels) => {
                let mut normalized: Vec<String> =
                    labels.iter().map(|label| normalize(label)).collect();
                normalized.sort();
                let count = normalized.len();
                self.categories = normalized;
                self.categories_phase = LoadPhase::Ready;
                format!("categories loaded ({count})")
            }
            CatalogEvent::CategoriesFailed(reason) => {
                self.categories.clear();
                self.categories_phase = LoadPhase::Failed(reason.clone());
                format!("category fetch failed: {reason}")
            }
        }
    }

    /// Product list in server response order; empty until the fetch settles.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Normalized labels, sorted lexicographically; empty until settled.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn products_phase(&self) -> &LoadPhase {
        &self.products_phase
    }

    pub fn categories_phase(&self) -> &LoadPhase {
        &self.categories_phase
    }

    /// Both fetches have settled (successfully or not); the UI gates the
    /// first grid render and the filter-button construction on this.
    pub fn is_settled(&self) -> bool {
        self.products_phase.is_settled() && self.categories_phase.is_settled()
    }
}
