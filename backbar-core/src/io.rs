use crate::models::Catalogue;
use crate::ratings::{parse_ratings, RatingsMap};
use crate::schema_validation::{catalogue_schema, validate_against_schema};
use crate::validation::validate_catalogue;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a catalogue from a JSON file: schema validation, deserialization,
/// then structural validation. A broken catalogue is a fatal error.
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<Catalogue, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;

    validate_against_schema(&catalogue_schema(), &raw)
        .map_err(|errors| format!("Schema validation failed:\n{}", errors.join("\n")))?;

    let catalogue: Catalogue = serde_json::from_value(raw)?;

    validate_catalogue(&catalogue)
        .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

    Ok(catalogue)
}

/// Load a ratings map from a JSON file. Unlike the catalogue, ratings are
/// optional enrichment: an unreadable or malformed file yields an empty
/// map (every item stays unrated) instead of an error.
pub fn load_ratings<P: AsRef<Path>>(path: P) -> RatingsMap {
    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(document) => parse_ratings(&document),
            Err(_) => RatingsMap::new(),
        },
        Err(_) => RatingsMap::new(),
    }
}
