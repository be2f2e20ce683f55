use crate::models::{Catalogue, FacetAxis, FacetDefinition, ALL};
use std::collections::HashSet;

/// Validate catalogue structure beyond what the JSON Schema can express.
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_catalogue(catalogue: &Catalogue) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if catalogue.title.trim().is_empty() {
        errors.push("Catalogue title cannot be empty".to_string());
    }

    let mut seen_axes = HashSet::new();
    for definition in &catalogue.facets {
        if !seen_axes.insert(definition.axis) {
            errors.push(format!(
                "Axis '{}' is defined more than once",
                definition.axis.key()
            ));
        }
        validate_definition(definition, &mut errors);
    }

    validate_items(catalogue, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_definition(definition: &FacetDefinition, errors: &mut Vec<String>) {
    let axis = definition.axis.key();

    let mut seen = HashSet::new();
    for option in &definition.options {
        if option.value.trim().is_empty() {
            errors.push(format!("Axis '{}' contains an option with empty value", axis));
        }
        if option.value == ALL {
            errors.push(format!(
                "Axis '{}' declares the reserved value '{}'",
                axis, ALL
            ));
        }
        if !seen.insert(option.value.as_str()) {
            errors.push(format!(
                "Axis '{}' has duplicate option value: '{}'",
                axis, option.value
            ));
        }
    }

    // Groupings expand one level only: every member must name a concrete
    // option of the same axis, never another grouping.
    for option in &definition.options {
        for member in &option.expands_to {
            match definition.option(member) {
                None => errors.push(format!(
                    "Grouping '{}' on axis '{}' expands to undeclared value '{}'",
                    option.value, axis, member
                )),
                Some(target) if target.is_grouping() => errors.push(format!(
                    "Grouping '{}' on axis '{}' expands to grouping '{}' (only concrete values are allowed)",
                    option.value, axis, member
                )),
                Some(_) => {}
            }
        }
    }
}

fn validate_items(catalogue: &Catalogue, errors: &mut Vec<String>) {
    let mut item_ids = HashSet::new();

    for (idx, item) in catalogue.items.iter().enumerate() {
        let item_ref = format!("Item #{} ('{}')", idx + 1, item.id);

        if item.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", item_ref));
        }
        if item.name.trim().is_empty() {
            errors.push(format!("{}: name cannot be empty", item_ref));
        }
        if !item_ids.insert(&item.id) {
            errors.push(format!("{}: duplicate item id", item_ref));
        }

        for axis in FacetAxis::all() {
            let Some(value) = item.facet_value(*axis) else {
                continue; // an unset facet is a valid state, not an error
            };

            match catalogue.facet(*axis) {
                None => errors.push(format!(
                    "{}: has a value on undefined axis '{}'",
                    item_ref,
                    axis.key()
                )),
                Some(definition) => match definition.option(value) {
                    None => errors.push(format!(
                        "{}: axis '{}' has invalid value '{}' (not in declared options)",
                        item_ref,
                        axis.key(),
                        value
                    )),
                    Some(option) if option.is_grouping() => errors.push(format!(
                        "{}: axis '{}' carries grouping value '{}' (items must use concrete values)",
                        item_ref,
                        axis.key(),
                        value
                    )),
                    Some(_) => {}
                },
            }
        }

        if let Some(rating) = &item.rating {
            if !rating.average.is_finite() || rating.average < 0.0 {
                errors.push(format!(
                    "{}: rating average must be finite and non-negative",
                    item_ref
                ));
            }
        }
    }
}
