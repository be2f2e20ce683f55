use crate::filtering::{facet_matches, matches_query};
use crate::models::{FacetAxis, FacetDefinition, FilterState, Item, ALL};

/// Compute the selectable values for one axis: the query plus every OTHER
/// axis's selection narrows the pool, then this axis's options are kept if
/// at least one surviving item carries them. The axis's own selection is
/// deliberately excluded so a user can always re-widen along this axis.
/// `all` is always available and listed first; concrete and grouping
/// options follow in definition order.
pub fn available_options(
    axis: FacetAxis,
    state: &FilterState,
    facets: &[FacetDefinition],
    items: &[Item],
) -> Vec<String> {
    let survivors: Vec<&Item> = items
        .iter()
        .filter(|item| matches_query(item, &state.query))
        .filter(|item| {
            FacetAxis::all()
                .iter()
                .filter(|other| **other != axis)
                .all(|other| {
                    let definition = facets.iter().find(|d| d.axis == *other);
                    facet_matches(definition, state.selection(*other), item.facet_value(*other))
                })
        })
        .collect();

    let mut available = vec![ALL.to_string()];

    if let Some(definition) = facets.iter().find(|d| d.axis == axis) {
        for option in &definition.options {
            let present = if option.is_grouping() {
                survivors.iter().any(|item| {
                    item.facet_value(axis)
                        .is_some_and(|value| option.expands_to.iter().any(|m| m == value))
                })
            } else {
                survivors
                    .iter()
                    .any(|item| item.facet_value(axis) == Some(option.value.as_str()))
            };

            if present {
                available.push(option.value.clone());
            }
        }
    }

    available
}
