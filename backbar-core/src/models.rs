use serde::{Deserialize, Serialize};

/// Reserved selection value meaning "no constraint on this axis".
/// Never declared as a catalogue option; always selectable.
pub const ALL: &str = "all";

/// Number of results shown initially and added per "show more" action.
pub const PAGE_SIZE: usize = 16;

/// The fixed filterable axes of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetAxis {
    Family,
    BaseType,
    Level,
}

impl FacetAxis {
    /// All axes, in display order.
    pub fn all() -> &'static [FacetAxis] {
        &[Self::Family, Self::BaseType, Self::Level]
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::BaseType => "base_type",
            Self::Level => "level",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::BaseType => "Base spirit",
            Self::Level => "Level",
        }
    }
}

/// One selectable value on a facet axis.
/// A non-empty `expands_to` makes this a grouping value: it matches items
/// whose concrete value is a member of the expansion set, never by string
/// equality against the raw item value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expands_to: Vec<String>,
}

impl FacetOption {
    pub fn is_grouping(&self) -> bool {
        !self.expands_to.is_empty()
    }
}

/// Ordered option list for one axis. The wildcard `all` is implicit and
/// never appears in `options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub axis: FacetAxis,
    pub options: Vec<FacetOption>,
}

impl FacetDefinition {
    pub fn option(&self, value: &str) -> Option<&FacetOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Aggregated rating joined in by item id. Absence on an item means
/// "unrated", equivalent to an explicit average 0 / count 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub average: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub base_type: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Item {
    pub fn facet_value(&self, axis: FacetAxis) -> Option<&str> {
        match axis {
            FacetAxis::Family => self.family.as_deref(),
            FacetAxis::BaseType => self.base_type.as_deref(),
            FacetAxis::Level => self.level.as_deref(),
        }
    }

    pub fn rating_or_default(&self) -> Rating {
        self.rating.unwrap_or_default()
    }
}

/// The catalogue document: facet definitions plus the item collection.
/// Immutable input to the browser; only the ratings join writes to items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub facets: Vec<FacetDefinition>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Catalogue {
    pub fn facet(&self, axis: FacetAxis) -> Option<&FacetDefinition> {
        self.facets.iter().find(|d| d.axis == axis)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Alphabetical,
    TopRated,
}

/// Current UI selection: exactly one selected value per axis (never
/// "none"), a free-text query, a sort key, and the visible result count.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub family: String,
    pub base_type: String,
    pub level: String,
    pub query: String,
    pub sort: SortKey,
    /// Requested result count, grown by "show more" in `PAGE_SIZE` steps.
    /// May exceed the filtered total; the view clamps the visible slice,
    /// so read the actual shown count off the view, not this field.
    pub visible_count: usize,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            family: ALL.to_string(),
            base_type: ALL.to_string(),
            level: ALL.to_string(),
            query: String::new(),
            sort: SortKey::default(),
            visible_count: PAGE_SIZE,
        }
    }

    pub fn selection(&self, axis: FacetAxis) -> &str {
        match axis {
            FacetAxis::Family => &self.family,
            FacetAxis::BaseType => &self.base_type,
            FacetAxis::Level => &self.level,
        }
    }

    pub fn select(&mut self, axis: FacetAxis, value: String) {
        match axis {
            FacetAxis::Family => self.family = value,
            FacetAxis::BaseType => self.base_type = value,
            FacetAxis::Level => self.level = value,
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
