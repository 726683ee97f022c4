mod config;
mod engine;
mod error;
mod stats;

pub use config::{
    DateAccessor, EngineConfig, FacetAccessor, Reducer, SearchExtractor, SortKeyFn, StatBasis,
};
pub use engine::{ListEngine, Snapshot};
pub use error::ConfigError;
