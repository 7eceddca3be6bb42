// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{FilterSelection, Product, SortCriterion};
use crate::query::{by_category, by_search, by_sort};

/// Which facet drove the most recent state change. The visible grid is a
/// function of the state alone, and the sort facet composes differently
/// from the other two (see `visible_products`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Catalog,
    Filter,
    Search,
    Sort,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    pub filter: FilterSelection,
    pub search: String,
    pub sort: SortCriterion,
    pub last: Facet,
    pub status_line: Option<String>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            filter: FilterSelection::None,
            search: String::new(),
            sort: SortCriterion::None,
            last: Facet::Catalog,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    /// A click on a category's filter button; clicking the active one
    /// clears it.
    ToggleFilter(String),
    /// The live text of the search field after an edit.
    EditSearch(String),
    /// The sort selector changed.
    SelectSort(SortCriterion),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseEvent {
    FilterSet(String),
    FilterCleared,
    SearchChanged(String),
    SortChanged(SortCriterion),
    SortReset,
    StatusUpdated(String),
    StatusCleared,
}

impl BrowseState {
    pub fn dispatch(&mut self, command: BrowseCommand) -> Vec<BrowseEvent> {
        match command {
            BrowseCommand::ToggleFilter(label) => {
                let mut events = Vec::new();
                if self.filter.is_category(&label) {
                    self.filter = FilterSelection::None;
                    events.push(BrowseEvent::FilterCleared);
                } else {
                    self.filter = FilterSelection::Category(label.clone());
                    events.push(BrowseEvent::FilterSet(label));
                }
                self.last = Facet::Filter;
                self.reset_sort(&mut events);
                events
            }
            BrowseCommand::EditSearch(text) => {
                self.search = text.clone();
                self.last = Facet::Search;
                let mut events = vec![BrowseEvent::SearchChanged(text)];
                self.reset_sort(&mut events);
                events
            }
            BrowseCommand::SelectSort(criterion) => {
                self.sort = criterion;
                self.last = Facet::Sort;
                vec![BrowseEvent::SortChanged(criterion)]
            }
            BrowseCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![BrowseEvent::StatusUpdated(message)]
            }
            BrowseCommand::ClearStatus => {
                self.status_line = None;
                vec![BrowseEvent::StatusCleared]
            }
        }
    }

    /// Changing the filter or the search text always snaps the sort
    /// selector back to its default entry.
    fn reset_sort(&mut self, events: &mut Vec<BrowseEvent>) {
        if self.sort != SortCriterion::None {
            self.sort = SortCriterion::None;
            events.push(BrowseEvent::SortReset);
        }
    }

    /// The product list the grid should show for the current state.
    ///
    /// A sort selection applies on top of the current search results, or on
    /// top of the full catalog when the search field is empty — an active
    /// category filter does not constrain a bare sort. Filter and search
    /// changes themselves always re-derive from filter + search, with the
    /// sort already reset.
    pub fn visible_products(&self, catalog: &[Product]) -> Vec<Product> {
        match self.last {
            Facet::Sort => {
                let base = if self.search.is_empty() {
                    catalog.to_vec()
                } else {
                    by_search(catalog, &self.search, &self.filter)
                };
                by_sort(&base, self.sort)
            }
            Facet::Catalog | Facet::Filter | Facet::Search => {
                if !self.search.is_empty() {
                    by_search(catalog, &self.search, &self.filter)
                } else if let FilterSelection::Category(label) = &self.filter {
                    by_category(catalog, label)
                } else {
                    catalog.to_vec()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BrowseCommand, BrowseEvent, BrowseState, Facet};
    use crate::ids::ProductId;
    use crate::model::{FilterSelection, Product, Rating, SortCriterion};

    fn product(id: i64, title: &str, price: f64, category: &str, rate: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            price,
            category: category.to_owned(),
            image: format!("https://img.example/{id}.jpg"),
            rating: Rating { rate, count: 10 },
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", 10.0, "men's clothing", 4.0),
            product(2, "Blue Shirt", 5.0, "men's clothing", 2.0),
            product(3, "Smart Phone", 120.0, "electronics", 4.5),
            product(4, "Phone Case", 15.0, "electronics", 3.5),
        ]
    }

    #[test]
    fn initial_state_shows_the_full_catalog() {
        let state = BrowseState::default();
        assert_eq!(state.visible_products(&catalog()), catalog());
    }

    #[test]
    fn toggling_a_filter_narrows_to_that_category() {
        let mut state = BrowseState::default();
        let events = state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        assert_eq!(
            events,
            vec![BrowseEvent::FilterSet("electronics".to_owned())]
        );

        let visible = state.visible_products(&catalog());
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == "electronics"));
    }

    #[test]
    fn toggling_the_same_filter_twice_restores_the_full_catalog() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        let events = state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        assert_eq!(events, vec![BrowseEvent::FilterCleared]);
        assert_eq!(state.filter, FilterSelection::None);
        assert_eq!(state.visible_products(&catalog()), catalog());
    }

    #[test]
    fn switching_filters_keeps_a_single_active_category() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        state.dispatch(BrowseCommand::ToggleFilter("mens clothing".to_owned()));
        assert_eq!(
            state.filter,
            FilterSelection::Category("mens clothing".to_owned())
        );
    }

    #[test]
    fn filter_change_resets_an_active_sort() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::SelectSort(SortCriterion::PriceDesc));
        let events = state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        assert_eq!(
            events,
            vec![
                BrowseEvent::FilterSet("electronics".to_owned()),
                BrowseEvent::SortReset,
            ],
        );
        assert_eq!(state.sort, SortCriterion::None);
    }

    #[test]
    fn search_edit_resets_an_active_sort() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::SelectSort(SortCriterion::Rating));
        let events = state.dispatch(BrowseCommand::EditSearch("shirt".to_owned()));
        assert_eq!(
            events,
            vec![
                BrowseEvent::SearchChanged("shirt".to_owned()),
                BrowseEvent::SortReset,
            ],
        );
    }

    #[test]
    fn search_honors_the_active_filter() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        state.dispatch(BrowseCommand::EditSearch("phone".to_owned()));

        let visible = state.visible_products(&catalog());
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == "electronics"));

        // A title hit outside the active category never surfaces.
        state.dispatch(BrowseCommand::EditSearch("shirt".to_owned()));
        assert!(state.visible_products(&catalog()).is_empty());
    }

    #[test]
    fn clearing_a_filter_leaves_the_searched_grid() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::EditSearch("shirt".to_owned()));
        state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));

        let visible = state.visible_products(&catalog());
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Red Shirt", "Blue Shirt"]);
    }

    #[test]
    fn sort_with_empty_search_orders_the_full_catalog() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::ToggleFilter("electronics".to_owned()));
        state.dispatch(BrowseCommand::SelectSort(SortCriterion::PriceAsc));

        // The bare sort applies to the whole catalog, not the filtered set.
        let visible = state.visible_products(&catalog());
        assert_eq!(visible.len(), 4);
        assert_eq!(visible[0].title, "Blue Shirt");
        assert_eq!(visible[3].title, "Smart Phone");
    }

    #[test]
    fn sort_applies_on_top_of_search_results() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::EditSearch("shirt".to_owned()));
        state.dispatch(BrowseCommand::SelectSort(SortCriterion::PriceAsc));

        let visible = state.visible_products(&catalog());
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Blue Shirt", "Red Shirt"]);
    }

    #[test]
    fn default_sort_selection_is_a_no_op_over_the_catalog() {
        let mut state = BrowseState::default();
        state.dispatch(BrowseCommand::SelectSort(SortCriterion::None));
        assert_eq!(state.last, Facet::Sort);
        assert_eq!(state.visible_products(&catalog()), catalog());
    }

    #[test]
    fn status_line_set_and_clear() {
        let mut state = BrowseState::default();
        let events = state.dispatch(BrowseCommand::SetStatus("products loaded".to_owned()));
        assert_eq!(
            events,
            vec![BrowseEvent::StatusUpdated("products loaded".to_owned())]
        );
        assert_eq!(state.status_line.as_deref(), Some("products loaded"));

        let events = state.dispatch(BrowseCommand::ClearStatus);
        assert_eq!(events, vec![BrowseEvent::StatusCleared]);
        assert!(state.status_line.is_none());
    }
}
