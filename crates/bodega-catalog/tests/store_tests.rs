// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use bodega_app::{BrowseCommand, BrowseState, SortCriterion, by_category, normalize};
use bodega_catalog::demo::{demo_events, demo_products};
use bodega_catalog::{CatalogEvent, CatalogStore, LoadPhase};
use bodega_testkit::{CatalogFaker, RAW_CATEGORIES};

#[test]
fn store_categories_cover_every_product_bucket() {
    let mut faker = CatalogFaker::new(21);
    let mut store = CatalogStore::new();
    store.apply(CatalogEvent::ProductsLoaded(faker.catalog(3)));
    store.apply(CatalogEvent::CategoriesLoaded(
        RAW_CATEGORIES.iter().map(|label| (*label).to_owned()).collect(),
    ));

    // Union of the per-label buckets reconstructs the catalog: every product
    // category has a matching button label.
    let mut bucketed = 0;
    for label in store.categories() {
        bucketed += by_category(store.products(), label).len();
    }
    assert_eq!(bucketed, store.products().len());
}

#[test]
fn product_category_missing_from_endpoint_yields_button_less_bucket() {
    let mut faker = CatalogFaker::new(5);
    let mut products = faker.catalog(1);
    products.push(faker.product("garden & patio"));

    let mut store = CatalogStore::new();
    store.apply(CatalogEvent::ProductsLoaded(products));
    // The categories endpoint never mentions the extra label.
    store.apply(CatalogEvent::CategoriesLoaded(
        RAW_CATEGORIES.iter().map(|label| (*label).to_owned()).collect(),
    ));

    let buttons = store.categories();
    assert!(!buttons.contains(&normalize("garden & patio")));

    // The product is still reachable through the unfiltered grid.
    let state = BrowseState::default();
    let visible = state.visible_products(store.products());
    assert!(visible.iter().any(|p| p.category == "garden & patio"));
}

#[test]
fn one_failed_fetch_degrades_without_blocking_the_other() {
    let mut store = CatalogStore::new();
    store.apply(CatalogEvent::CategoriesFailed("server returned 502".to_owned()));
    store.apply(CatalogEvent::ProductsLoaded(demo_products()));

    assert!(store.is_settled());
    assert!(store.categories().is_empty());
    assert_eq!(
        *store.categories_phase(),
        LoadPhase::Failed("server returned 502".to_owned()),
    );

    // No buttons, but browsing, searching, and sorting still work.
    let mut state = BrowseState::default();
    state.dispatch(BrowseCommand::EditSearch("jacket".to_owned()));
    assert!(!state.visible_products(store.products()).is_empty());

    state.dispatch(BrowseCommand::SelectSort(SortCriterion::PriceAsc));
    let sorted = state.visible_products(store.products());
    assert!(sorted.windows(2).all(|pair| pair[0].price <= pair[1].price));
}

#[test]
fn demo_catalog_drives_the_full_browse_flow() {
    let mut store = CatalogStore::new();
    for event in demo_events() {
        store.apply(event);
    }

    let mut state = BrowseState::default();
    state.dispatch(BrowseCommand::ToggleFilter("mens clothing".to_owned()));
    let visible = state.visible_products(store.products());
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|p| p.category == "men's clothing"));

    state.dispatch(BrowseCommand::EditSearch("jacket".to_owned()));
    let visible = state.visible_products(store.products());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Cotton Jacket");
}
