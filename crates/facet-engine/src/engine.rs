use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use facet_query::{DateWindow, QueryState, SortDirection};

use crate::config::{DateAccessor, EngineConfig, FacetAccessor};
use crate::error::ConfigError;
use crate::stats;

/// One evaluation of a list view: the records to render, in order, and the
/// stat tiles.
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    pub records: Vec<&'a T>,
    pub stats: BTreeMap<&'static str, f64>,
}

/// The shared query engine behind every list page.
///
/// Owns the page's [`EngineConfig`], the working set, and the last
/// [`QueryState`] snapshot. Evaluation is a pure, synchronous function of
/// (working set, query state, now): the same inputs always yield the same
/// output, and nothing here mutates the working set. The only mutation
/// entry point is [`replace_working_set`](Self::replace_working_set), called
/// by whatever surface completed a create/edit/delete.
pub struct ListEngine<T> {
    config: EngineConfig<T>,
    records: Vec<T>,
    state: QueryState,
}

impl<T> ListEngine<T> {
    /// Validate the configuration and start with an empty working set.
    pub fn new(config: EngineConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            records: Vec::new(),
            state: QueryState::default(),
        })
    }

    pub fn with_records(config: EngineConfig<T>, records: Vec<T>) -> Result<Self, ConfigError> {
        let mut engine = Self::new(config)?;
        engine.replace_working_set(records);
        Ok(engine)
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    pub fn set_facet(&mut self, name: impl Into<String>, choice: &str) {
        self.state.set_facet(name, choice);
    }

    pub fn set_date_range(&mut self, window: DateWindow) {
        self.state.set_date_range(window);
    }

    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.state.set_sort(field, direction);
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.state.toggle_sort(field);
    }

    /// Swap the entire backing collection. The next evaluation reflects it
    /// immediately.
    pub fn replace_working_set(&mut self, records: Vec<T>) {
        tracing::debug!(count = records.len(), "working set replaced");
        self.records = records;
    }

    /// Evaluate the current query state against the working set, resolving
    /// date windows against the wall clock.
    pub fn evaluate(&self) -> Result<Snapshot<'_, T>, ConfigError> {
        self.evaluate_at(Utc::now())
    }

    /// Same as [`evaluate`](Self::evaluate) with an injected "now", so date
    /// windows are deterministic under test.
    pub fn evaluate_at(&self, now: DateTime<Utc>) -> Result<Snapshot<'_, T>, ConfigError> {
        self.evaluate_with(&self.state, now)
    }

    /// Evaluate an arbitrary query state against the working set.
    pub fn evaluate_with(
        &self,
        state: &QueryState,
        now: DateTime<Utc>,
    ) -> Result<Snapshot<'_, T>, ConfigError> {
        // Resolve every accessor the state names before touching a record,
        // so a miswired view errors instead of filtering wrongly.
        let active_facets: Vec<(FacetAccessor<T>, &str)> = state
            .active_facets()
            .map(|(name, value)| Ok((self.config.facet_accessor(name)?, value)))
            .collect::<Result<_, ConfigError>>()?;

        let window_field: Option<DateAccessor<T>> = if state.window.is_all() {
            None
        } else {
            Some(self.config.date.ok_or(ConfigError::NoDateField)?)
        };

        let sort = state
            .sort
            .as_ref()
            .map(|s| Ok((self.config.sort_accessor(&s.field)?, s.direction)))
            .transpose()?;

        let needle = state.search.trim().to_lowercase();
        let mut scratch: Vec<String> = Vec::new();

        let mut filtered: Vec<&T> = Vec::new();
        for record in &self.records {
            if !self.matches_search(record, &needle, &mut scratch) {
                continue;
            }
            if !active_facets
                .iter()
                .all(|(accessor, want)| accessor(record).is_some_and(|have| have == *want))
            {
                continue;
            }
            if let Some(date_of) = window_field {
                // Missing date never matches a concrete window.
                let inside = date_of(record).is_some_and(|d| state.window.contains(d, now));
                if !inside {
                    continue;
                }
            }
            filtered.push(record);
        }

        if let Some((key, direction)) = sort {
            // Stable sort; direction flips the comparator, not the input,
            // so equal keys keep their original relative order either way.
            filtered.sort_by(|a, b| {
                let ord = key(a).compare(&key(b));
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        let stats = stats::compute(&self.config.stats, &self.records, &filtered);
        tracing::debug!(
            total = self.records.len(),
            matched = filtered.len(),
            "list query evaluated"
        );
        Ok(Snapshot {
            records: filtered,
            stats,
        })
    }

    fn matches_search(&self, record: &T, needle: &str, scratch: &mut Vec<String>) -> bool {
        if needle.is_empty() {
            return true;
        }
        for field in &self.config.search {
            scratch.clear();
            (field.extract)(record, scratch);
            if scratch.iter().any(|s| s.to_lowercase().contains(needle)) {
                return true;
            }
        }
        false
    }
}
