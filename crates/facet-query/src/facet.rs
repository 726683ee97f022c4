use serde::{Deserialize, Serialize};

/// Sentinel choice that clears a facet constraint.
pub const ALL: &str = "all";

/// The current choice for one categorical facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetSelection {
    /// No constraint — every record matches.
    Any,
    /// Only records whose facet field is present and equal to the value.
    Only(String),
}

impl FacetSelection {
    /// Build a selection from a UI choice, mapping the `"all"` sentinel to
    /// `Any`.
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL {
            FacetSelection::Any
        } else {
            FacetSelection::Only(choice.to_string())
        }
    }

    /// Whether a record's facet field satisfies this selection. A missing
    /// field never matches a concrete selection.
    pub fn matches(&self, field: Option<&str>) -> bool {
        match self {
            FacetSelection::Any => true,
            FacetSelection::Only(want) => field == Some(want.as_str()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, FacetSelection::Any)
    }
}
