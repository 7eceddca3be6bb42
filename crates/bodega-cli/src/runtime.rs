// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use bodega_api::Client;
use bodega_catalog::CatalogEvent;
use bodega_catalog::demo::demo_events;
use bodega_tui::{AppRuntime, InternalEvent};
use std::sync::mpsc::Sender;
use std::thread;

/// Live runtime: one worker thread per endpoint, fire-and-forget. Each
/// worker settles exactly once, with the whole batch or a failure report.
pub struct FetchRuntime {
    client: Client,
}

impl FetchRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl AppRuntime for FetchRuntime {
    fn start_catalog_load(&mut self, tx: Sender<InternalEvent>) {
        let client = self.client.clone();
        let products_tx = tx.clone();
        thread::spawn(move || {
            let event = match client.fetch_products() {
                Ok(products) => CatalogEvent::ProductsLoaded(products),
                Err(error) => CatalogEvent::ProductsFailed(format!("{error:#}")),
            };
            let _ = products_tx.send(InternalEvent::Catalog(event));
        });

        let client = self.client.clone();
        thread::spawn(move || {
            let event = match client.fetch_categories() {
                Ok(categories) => CatalogEvent::CategoriesLoaded(categories),
                Err(error) => CatalogEvent::CategoriesFailed(format!("{error:#}")),
            };
            let _ = tx.send(InternalEvent::Catalog(event));
        });
    }
}

/// Offline runtime for `--demo`: the seeded catalog arrives through the
/// same event path a live fetch uses.
pub struct DemoRuntime;

impl AppRuntime for DemoRuntime {
    fn start_catalog_load(&mut self, tx: Sender<InternalEvent>) {
        for event in demo_events() {
            let _ = tx.send(InternalEvent::Catalog(event));
        }
    }
}
