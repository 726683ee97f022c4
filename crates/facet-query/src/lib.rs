mod facet;
mod sort;
mod state;
mod value;
mod window;

pub use facet::{ALL, FacetSelection};
pub use sort::{Sort, SortDirection};
pub use state::QueryState;
pub use value::Value;
pub use window::{DateWindow, ParseWindowError};
