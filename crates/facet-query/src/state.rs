use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facet::{ALL, FacetSelection};
use crate::sort::{Sort, SortDirection};
use crate::window::DateWindow;

/// The full query state of one list view: search text, facet selections,
/// date window and sort.
///
/// This is a plain serializable value object — the engine evaluates it
/// without owning any UI state, so a view can persist it, put it in a URL,
/// or replay it in tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub facets: BTreeMap<String, FacetSelection>,
    #[serde(default)]
    pub window: DateWindow,
    #[serde(default)]
    pub sort: Option<Sort>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text. Empty text matches everything.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Replace one facet's choice. The `"all"` sentinel clears the
    /// constraint for that facet.
    pub fn set_facet(&mut self, name: impl Into<String>, choice: &str) {
        let name = name.into();
        if choice == ALL {
            self.facets.remove(&name);
        } else {
            self.facets
                .insert(name, FacetSelection::from_choice(choice));
        }
    }

    pub fn set_date_range(&mut self, window: DateWindow) {
        self.window = window;
    }

    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort = Some(Sort::new(field, direction));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Column-header behavior: clicking the active sort field flips its
    /// direction, clicking a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(sort) if sort.field == field => {
                sort.direction = sort.direction.toggled();
            }
            _ => self.sort = Some(Sort::new(field, SortDirection::Asc)),
        }
    }

    /// The facets that currently constrain the result set, as
    /// (name, required value) pairs.
    pub fn active_facets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facets.iter().filter_map(|(name, sel)| match sel {
            FacetSelection::Only(value) => Some((name.as_str(), value.as_str())),
            FacetSelection::Any => None,
        })
    }
}
