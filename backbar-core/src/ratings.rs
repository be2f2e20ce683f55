use crate::models::{Item, Rating};
use serde_json::Value;
use std::collections::HashMap;

/// External rating scores keyed by item id.
pub type RatingsMap = HashMap<String, Rating>;

/// Parse a ratings document of the shape
/// `{ "<item id>": { "average": 4.6, "count": 128 }, ... }`.
///
/// Ratings are a non-essential sort enhancement, so parsing is lenient:
/// a non-object document yields an empty map, and entries with missing,
/// non-numeric, or out-of-range fields are skipped. Every skipped entry
/// simply leaves its item unrated.
pub fn parse_ratings(document: &Value) -> RatingsMap {
    let mut ratings = RatingsMap::new();

    if let Value::Object(entries) = document {
        for (id, entry) in entries {
            let average = entry.get("average").and_then(Value::as_f64);
            let count = entry.get("count").and_then(Value::as_u64);

            if let (Some(average), Some(count)) = (average, count) {
                if average.is_finite() && average >= 0.0 {
                    ratings.insert(
                        id.clone(),
                        Rating {
                            average,
                            count: count.min(u32::MAX as u64) as u32,
                        },
                    );
                }
            }
        }
    }

    ratings
}

/// Join ratings onto items by id. Ids with no matching item are silently
/// ignored; items absent from the map keep whatever rating they had.
pub fn apply_ratings(items: &mut [Item], ratings: &RatingsMap) {
    for item in items {
        if let Some(rating) = ratings.get(&item.id) {
            item.rating = Some(*rating);
        }
    }
}
