// Public modules
pub mod browse;
pub mod filtering;
pub mod io;
pub mod models;
pub mod options;
pub mod ratings;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use browse::{reduce, Action, BrowseView, Browser};
pub use filtering::{apply_filters, facet_matches, matches_filters, matches_query};
pub use io::{load_catalogue, load_ratings};
pub use models::{
    Catalogue, FacetAxis, FacetDefinition, FacetOption, FilterState, Item, Rating, SortKey, ALL,
    PAGE_SIZE,
};
pub use options::available_options;
pub use ratings::{apply_ratings, parse_ratings, RatingsMap};
pub use schema_validation::{catalogue_schema, validate_against_schema};
pub use sorting::{normalize_for_sorting, sort_items, strip_leading_articles};
pub use validation::validate_catalogue;
