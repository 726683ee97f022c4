use std::collections::BTreeSet;

use chrono::NaiveDate;
use facet_query::Value;

use crate::error::ConfigError;

/// Pushes zero or more searchable strings for a record. Extractors over
/// nested line items push one string per item.
pub type SearchExtractor<T> = fn(&T, &mut Vec<String>);

/// Reads a record's facet field, `None` when the field is missing.
pub type FacetAccessor<T> = for<'a> fn(&'a T) -> Option<&'a str>;

/// Reads a record's date field for window filtering.
pub type DateAccessor<T> = fn(&T) -> Option<NaiveDate>;

/// Reads a record's sort key. Return [`Value::Null`] for a missing field;
/// it sorts to the minimum end consistently.
pub type SortKeyFn<T> = fn(&T) -> Value;

/// Which collection a stat reduces over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatBasis {
    /// The full working set, ignoring active filters. Most dashboard tiles
    /// in the source pages behave this way.
    Working,
    /// Only the records that pass the current filters.
    Filtered,
}

/// An aggregate over the stat's basis. All reducers yield a plain number
/// for display; `Average` skips records without a value and yields `0.0`
/// over an empty input rather than NaN.
pub enum Reducer<T> {
    Count,
    CountWhere(fn(&T) -> bool),
    Sum(fn(&T) -> f64),
    Average(fn(&T) -> Option<f64>),
}

pub(crate) struct SearchField<T> {
    pub name: &'static str,
    pub extract: SearchExtractor<T>,
}

pub(crate) struct Facet<T> {
    pub name: &'static str,
    pub accessor: FacetAccessor<T>,
}

pub(crate) struct SortField<T> {
    pub name: &'static str,
    pub key: SortKeyFn<T>,
}

pub(crate) struct Stat<T> {
    pub name: &'static str,
    pub basis: StatBasis,
    pub reducer: Reducer<T>,
}

/// Declarative configuration for one list view.
///
/// Each page supplies its own config — searchable fields, facet accessors,
/// the date field the window filter applies to, the sortable fields, and the
/// stat tiles — and shares the single engine implementation. Field access
/// goes through these explicit accessor tables; there is no by-name dynamic
/// lookup into records.
pub struct EngineConfig<T> {
    pub(crate) search: Vec<SearchField<T>>,
    pub(crate) facets: Vec<Facet<T>>,
    pub(crate) date: Option<DateAccessor<T>>,
    pub(crate) sort: Vec<SortField<T>>,
    pub(crate) stats: Vec<Stat<T>>,
}

impl<T> Default for EngineConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EngineConfig<T> {
    pub fn new() -> Self {
        Self {
            search: Vec::new(),
            facets: Vec::new(),
            date: None,
            sort: Vec::new(),
            stats: Vec::new(),
        }
    }

    pub fn search_field(mut self, name: &'static str, extract: SearchExtractor<T>) -> Self {
        self.search.push(SearchField { name, extract });
        self
    }

    pub fn facet(mut self, name: &'static str, accessor: FacetAccessor<T>) -> Self {
        self.facets.push(Facet { name, accessor });
        self
    }

    pub fn date_field(mut self, accessor: DateAccessor<T>) -> Self {
        self.date = Some(accessor);
        self
    }

    pub fn sort_field(mut self, name: &'static str, key: SortKeyFn<T>) -> Self {
        self.sort.push(SortField { name, key });
        self
    }

    pub fn stat(mut self, name: &'static str, basis: StatBasis, reducer: Reducer<T>) -> Self {
        self.stats.push(Stat {
            name,
            basis,
            reducer,
        });
        self
    }

    /// Reject duplicate names within each table. Run once at startup so a
    /// miswired view fails loudly instead of shadowing a field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unique("search field", self.search.iter().map(|f| f.name))?;
        check_unique("facet", self.facets.iter().map(|f| f.name))?;
        check_unique("sort field", self.sort.iter().map(|f| f.name))?;
        check_unique("stat", self.stats.iter().map(|s| s.name))?;
        Ok(())
    }

    pub(crate) fn facet_accessor(&self, name: &str) -> Result<FacetAccessor<T>, ConfigError> {
        self.facets
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.accessor)
            .ok_or_else(|| ConfigError::UnknownFacet(name.to_string()))
    }

    pub(crate) fn sort_accessor(&self, name: &str) -> Result<SortKeyFn<T>, ConfigError> {
        self.sort
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.key)
            .ok_or_else(|| ConfigError::UnknownSortField(name.to_string()))
    }
}

fn check_unique<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateName(format!("{kind} `{name}`")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
    }

    #[test]
    fn duplicate_facet_name_rejected() {
        let config = EngineConfig::<Row>::new()
            .facet("status", |_| None)
            .facet("status", |_| None);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateName("facet `status`".into()))
        );
    }

    #[test]
    fn unknown_lookups_error() {
        let config = EngineConfig::<Row>::new()
            .facet("status", |_| None)
            .sort_field("name", |r| Value::from(r.name.as_str()));
        assert!(matches!(
            config.facet_accessor("priority"),
            Err(ConfigError::UnknownFacet(_))
        ));
        assert!(matches!(
            config.sort_accessor("created"),
            Err(ConfigError::UnknownSortField(_))
        ));
        assert!(config.facet_accessor("status").is_ok());
        assert!(config.sort_accessor("name").is_ok());
    }
}
