//! Per-page list-view configurations for the ERP modules.
//!
//! Each module pairs a typed record with the declarative
//! [`EngineConfig`](facet_engine::EngineConfig) its page feeds into the
//! shared engine, plus the fixture records the page ships with today in
//! place of a remote data source.

pub mod consumption;
pub mod employees;
pub mod purchase_orders;
