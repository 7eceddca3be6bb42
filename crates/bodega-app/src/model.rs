// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// One catalog entry as served by the store API. Immutable after fetch;
/// owned by the catalog store for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price in the store currency, never negative.
    pub price: f64,
    /// Raw category label as served; may contain punctuation. Comparisons
    /// always go through `normalize`, never the raw label.
    pub category: String,
    /// URI of the product image.
    pub image: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: i64,
}

/// The closed set of sort orders offered by the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortCriterion {
    None,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortCriterion {
    pub const ALL: [Self; 4] = [Self::None, Self::PriceAsc, Self::PriceDesc, Self::Rating];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(Self::None),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "default",
            Self::PriceAsc => "price: low to high",
            Self::PriceDesc => "price: high to low",
            Self::Rating => "rating",
        }
    }

    pub fn next(self) -> Self {
        let current = Self::ALL
            .iter()
            .position(|criterion| *criterion == self)
            .unwrap_or(0);
        Self::ALL[(current + 1) % Self::ALL.len()]
    }
}

/// The active category filter. At most one category can be active; the
/// payload is a normalized label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterSelection {
    None,
    Category(String),
}

impl FilterSelection {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Category(label) => Some(label),
        }
    }

    pub fn is_category(&self, label: &str) -> bool {
        matches!(self, Self::Category(active) if active == label)
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::None
    }
}
