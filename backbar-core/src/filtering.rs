use crate::models::{FacetAxis, FacetDefinition, FilterState, Item, ALL};

/// Check whether an item's value on one axis satisfies the selected value.
/// `all` matches everything, including items with no value on the axis.
/// A grouping value matches only through its expansion set, never by
/// string equality against the raw item value.
pub fn facet_matches(
    definition: Option<&FacetDefinition>,
    selected: &str,
    item_value: Option<&str>,
) -> bool {
    if selected == ALL {
        return true;
    }

    if let Some(option) = definition.and_then(|d| d.option(selected)) {
        if option.is_grouping() {
            return match item_value {
                Some(value) => option.expands_to.iter().any(|member| member == value),
                None => false,
            };
        }
    }

    item_value == Some(selected)
}

/// Check whether an item matches the free-text query.
/// Empty query matches everything; otherwise case-insensitive substring
/// match against name or description.
pub fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    item.name.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
}

/// Check whether an item matches the full filter state:
/// the query AND every axis predicate (AND across axes).
pub fn matches_filters(item: &Item, state: &FilterState, facets: &[FacetDefinition]) -> bool {
    if !matches_query(item, &state.query) {
        return false;
    }

    FacetAxis::all().iter().all(|axis| {
        let definition = facets.iter().find(|d| d.axis == *axis);
        facet_matches(definition, state.selection(*axis), item.facet_value(*axis))
    })
}

/// Apply the filter state to a collection, preserving input order.
pub fn apply_filters(items: &[Item], state: &FilterState, facets: &[FacetDefinition]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches_filters(item, state, facets))
        .cloned()
        .collect()
}
