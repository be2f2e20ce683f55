use crate::models::{Item, SortKey};
use regex::Regex;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort items in place by the given key.
/// Both orders are stable: `sort_by` preserves input order for exact ties
/// and the name comparison acts as an explicit secondary key.
pub fn sort_items(items: &mut [Item], key: SortKey) {
    match key {
        SortKey::Alphabetical => items.sort_by(compare_names),
        SortKey::TopRated => items.sort_by(|a, b| {
            let ra = a.rating_or_default();
            let rb = b.rating_or_default();

            // Descending by average, then descending by count. Unrated
            // items carry average 0 / count 0 and fall to the bottom.
            rb.average
                .partial_cmp(&ra.average)
                .unwrap_or(Ordering::Equal)
                .then(rb.count.cmp(&ra.count))
                .then_with(|| compare_names(a, b))
        }),
    }
}

fn compare_names(a: &Item, b: &Item) -> Ordering {
    let a_key = normalize_for_sorting(&a.name);
    let b_key = normalize_for_sorting(&b.name);

    match a_key.cmp(&b_key) {
        // Secondary sort: original name for ties
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    }
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD, drop combining marks) and lowercase
/// - Fold ligatures with no decomposition so "Æ" collates as "ae"
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let mut folded = String::with_capacity(without_articles.len());
    for c in without_articles.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match c {
            'Æ' | 'æ' => folded.push_str("ae"),
            'Œ' | 'œ' => folded.push_str("oe"),
            'Ø' | 'ø' => folded.push('o'),
            'Đ' | 'đ' => folded.push('d'),
            'ß' => folded.push_str("ss"),
            _ => folded.push(c),
        }
    }

    let normalized = folded.to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
/// Supports: a, an, the (English) and common articles in other languages
pub fn strip_leading_articles(s: &str) -> String {
    let re = Regex::new(
        r"^(?i)(the|a|an|der|die|das|le|la|les|el|la|los|las|il|lo|i|gli|un|une|een)\s+",
    )
    .unwrap();
    re.replace(s, "").to_string()
}
