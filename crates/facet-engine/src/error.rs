use std::fmt;

/// Programmer error in an engine configuration or in a query state that does
/// not line up with it.
///
/// User input never produces one of these: empty search text, `"all"` facet
/// choices and non-matching filters are ordinary states. A `ConfigError`
/// means a view wired a facet, sort field or date window the configuration
/// never declared, and should surface during development rather than be
/// swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFacet(String),
    UnknownSortField(String),
    DuplicateName(String),
    NoDateField,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFacet(name) => write!(f, "unknown facet: {name}"),
            ConfigError::UnknownSortField(name) => write!(f, "unknown sort field: {name}"),
            ConfigError::DuplicateName(name) => write!(f, "duplicate config name: {name}"),
            ConfigError::NoDateField => {
                write!(f, "date window set but no date field is configured")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
