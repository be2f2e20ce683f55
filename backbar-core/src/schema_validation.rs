use serde_json::{json, Value};

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            // Format validation error with path
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}

/// JSON Schema for the catalogue document. Structural rules only; the
/// cross-reference rules (grouping expansion targets, item facet values)
/// live in `validate_catalogue`.
pub fn catalogue_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Cocktail catalogue",
        "type": "object",
        "required": ["title", "facets"],
        "properties": {
            "title": {"type": "string"},
            "description": {"type": ["string", "null"]},
            "facets": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["axis", "options"],
                    "properties": {
                        "axis": {
                            "type": "string",
                            "enum": ["family", "base_type", "level"]
                        },
                        "options": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["value", "label"],
                                "properties": {
                                    "value": {"type": "string", "minLength": 1},
                                    "label": {"type": "string"},
                                    "expands_to": {
                                        "type": "array",
                                        "items": {"type": "string"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": {"type": "string", "minLength": 1},
                        "name": {"type": "string"},
                        "description": {"type": "string"},
                        "family": {"type": ["string", "null"]},
                        "base_type": {"type": ["string", "null"]},
                        "level": {"type": ["string", "null"]},
                        "featured": {"type": "boolean"},
                        "rating": {
                            "type": ["object", "null"],
                            "required": ["average", "count"],
                            "properties": {
                                "average": {"type": "number", "minimum": 0},
                                "count": {"type": "integer", "minimum": 0}
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_catalogue() -> Value {
        json!({
            "title": "Field Manual",
            "facets": [
                {
                    "axis": "base_type",
                    "options": [
                        {"value": "gin", "label": "Gin"},
                        {
                            "value": "all-rum",
                            "label": "All Rum",
                            "expands_to": ["spiced-rum"]
                        }
                    ]
                }
            ],
            "items": [
                {"id": "gimlet", "name": "Gimlet", "base_type": "gin"}
            ]
        })
    }

    #[test]
    fn test_valid_catalogue_passes() {
        let result = validate_against_schema(&catalogue_schema(), &minimal_catalogue());
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_title_fails() {
        let mut data = minimal_catalogue();
        data.as_object_mut().unwrap().remove("title");

        let result = validate_against_schema(&catalogue_schema(), &data);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_axis_fails() {
        let mut data = minimal_catalogue();
        data["facets"][0]["axis"] = json!("garnish");

        let result = validate_against_schema(&catalogue_schema(), &data);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_without_id_fails() {
        let mut data = minimal_catalogue();
        data["items"][0].as_object_mut().unwrap().remove("id");

        let result = validate_against_schema(&catalogue_schema(), &data);
        let errors = result.unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_negative_rating_count_fails() {
        let mut data = minimal_catalogue();
        data["items"][0]["rating"] = json!({"average": 4.0, "count": -1});

        let result = validate_against_schema(&catalogue_schema(), &data);
        assert!(result.is_err());
    }
}
