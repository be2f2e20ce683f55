use crate::filtering::apply_filters;
use crate::models::{Catalogue, FacetAxis, FilterState, Item, SortKey, ALL, PAGE_SIZE};
use crate::options::available_options;
use crate::ratings::{apply_ratings, RatingsMap};
use crate::sorting::sort_items;

/// A discrete user action against the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectFacet(FacetAxis, String),
    SetQuery(String),
    SetSort(SortKey),
    ShowMore,
    ClearFilters,
}

/// Pure reducer: apply one action to the filter state.
/// Any change to a facet selection, the query, or the sort key resets the
/// visible count to one page. `ShowMore` only grows the requested count;
/// clamping to the actual result total happens at view time.
/// `ClearFilters` resets selections, query, and pagination but keeps the
/// sort key, and a selection is never auto-cleared on the user's behalf.
pub fn reduce(state: &FilterState, action: &Action) -> FilterState {
    let mut next = state.clone();

    match action {
        Action::SelectFacet(axis, value) => {
            next.select(*axis, value.clone());
            next.visible_count = PAGE_SIZE;
        }
        Action::SetQuery(query) => {
            next.query = query.clone();
            next.visible_count = PAGE_SIZE;
        }
        Action::SetSort(key) => {
            next.sort = *key;
            next.visible_count = PAGE_SIZE;
        }
        Action::ShowMore => {
            next.visible_count = next.visible_count.saturating_add(PAGE_SIZE);
        }
        Action::ClearFilters => {
            for axis in FacetAxis::all() {
                next.select(*axis, ALL.to_string());
            }
            next.query.clear();
            next.visible_count = PAGE_SIZE;
        }
    }

    next
}

/// Read-only derived view over the catalogue for the current state.
#[derive(Debug, Clone)]
pub struct BrowseView {
    /// Full filtered and sorted result set.
    pub filtered: Vec<Item>,
    /// The `[0, visible_count)` slice of `filtered` shown to the user.
    pub visible: Vec<Item>,
    /// Featured subset of `filtered`; never paginated.
    pub featured: Vec<Item>,
    /// Selectable values per axis, in `FacetAxis::all()` order.
    pub options: Vec<(FacetAxis, Vec<String>)>,
    pub total: usize,
    pub has_more: bool,
}

/// Owns the catalogue and the filter state and recomputes the derived
/// view synchronously after every action. The catalogue's items are
/// treated as immutable input; only the ratings join writes to them.
#[derive(Debug)]
pub struct Browser {
    catalogue: Catalogue,
    state: FilterState,
}

impl Browser {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            state: FilterState::new(),
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, &action);
    }

    /// Join externally fetched ratings by item id. Safe to call at any
    /// time (or never): filtering and sorting are correct before the
    /// join, with every item treated as unrated, and re-derive from the
    /// merged scores afterwards. Idempotent; leaves pagination alone.
    pub fn merge_ratings(&mut self, ratings: &RatingsMap) {
        apply_ratings(&mut self.catalogue.items, ratings);
    }

    pub fn view(&self) -> BrowseView {
        let mut filtered = apply_filters(&self.catalogue.items, &self.state, &self.catalogue.facets);
        sort_items(&mut filtered, self.state.sort);

        let total = filtered.len();
        let shown = self.state.visible_count.min(total);
        let visible = filtered[..shown].to_vec();
        let featured = filtered.iter().filter(|i| i.featured).cloned().collect();

        let options = FacetAxis::all()
            .iter()
            .map(|axis| {
                (
                    *axis,
                    available_options(*axis, &self.state, &self.catalogue.facets, &self.catalogue.items),
                )
            })
            .collect();

        BrowseView {
            filtered,
            visible,
            featured,
            options,
            total,
            has_more: shown < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacetDefinition, FacetOption, Rating};
    use crate::ratings::parse_ratings;
    use serde_json::json;

    fn concrete(value: &str) -> FacetOption {
        FacetOption {
            value: value.to_string(),
            label: value.to_string(),
            expands_to: Vec::new(),
        }
    }

    fn item(id: &str, family: Option<&str>, base_type: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            family: family.map(str::to_string),
            base_type: base_type.map(str::to_string),
            level: None,
            featured: false,
            rating: None,
        }
    }

    /// The five-item catalogue used throughout: two sours on spiced rum,
    /// one sour on gin, one highball on spiced rum, one untagged.
    fn catalogue() -> Catalogue {
        Catalogue {
            title: "Field Manual".to_string(),
            description: None,
            facets: vec![
                FacetDefinition {
                    axis: FacetAxis::Family,
                    options: vec![concrete("sours"), concrete("highballs")],
                },
                FacetDefinition {
                    axis: FacetAxis::BaseType,
                    options: vec![concrete("spiced-rum"), concrete("gin")],
                },
            ],
            items: vec![
                item("daiquiri", Some("sours"), Some("spiced-rum")),
                item("rum-sour", Some("sours"), Some("spiced-rum")),
                item("gimlet", Some("sours"), Some("gin")),
                item("dark-and-stormy", Some("highballs"), Some("spiced-rum")),
                item("house-pour", None, None),
            ],
        }
    }

    fn options_for(view: &BrowseView, axis: FacetAxis) -> Vec<String> {
        view.options
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, values)| values.clone())
            .unwrap()
    }

    #[test]
    fn test_narrowing_scenario() {
        let mut browser = Browser::new(catalogue());

        browser.dispatch(Action::SelectFacet(FacetAxis::Family, "sours".to_string()));
        let view = browser.view();
        assert_eq!(view.total, 3);
        assert_eq!(
            options_for(&view, FacetAxis::BaseType),
            vec!["all", "spiced-rum", "gin"]
        );

        browser.dispatch(Action::SelectFacet(
            FacetAxis::BaseType,
            "spiced-rum".to_string(),
        ));
        let view = browser.view();
        assert_eq!(view.total, 2);
        // Family options ignore the family selection: the only remaining
        // constraint is spiced-rum, which sours and highballs both satisfy.
        assert_eq!(
            options_for(&view, FacetAxis::Family),
            vec!["all", "sours", "highballs"]
        );
    }

    #[test]
    fn test_selection_survives_becoming_unavailable() {
        let mut browser = Browser::new(catalogue());
        browser.dispatch(Action::SelectFacet(FacetAxis::BaseType, "gin".to_string()));
        browser.dispatch(Action::SelectFacet(
            FacetAxis::Family,
            "highballs".to_string(),
        ));

        // No gin highballs exist, but neither selection is cleared.
        let view = browser.view();
        assert_eq!(view.total, 0);
        assert_eq!(browser.state().selection(FacetAxis::BaseType), "gin");
        assert_eq!(browser.state().selection(FacetAxis::Family), "highballs");
    }

    #[test]
    fn test_pagination_reset_law() {
        let mut state = FilterState::new();
        state = reduce(&state, &Action::ShowMore);
        assert_eq!(state.visible_count, 2 * PAGE_SIZE);
        state = reduce(&state, &Action::ShowMore);
        assert_eq!(state.visible_count, 3 * PAGE_SIZE);

        for action in [
            Action::SelectFacet(FacetAxis::Family, "sours".to_string()),
            Action::SetQuery("daiquiri".to_string()),
            Action::SetSort(SortKey::TopRated),
        ] {
            let grown = reduce(&state, &Action::ShowMore);
            let reset = reduce(&grown, &action);
            assert_eq!(reset.visible_count, PAGE_SIZE);
        }
    }

    #[test]
    fn test_show_more_clamps_to_total() {
        let browser = {
            let mut b = Browser::new(catalogue());
            b.dispatch(Action::ShowMore);
            b
        };
        let view = browser.view();
        assert_eq!(view.visible.len(), view.total);
        assert!(!view.has_more);
    }

    #[test]
    fn test_has_more_when_results_exceed_page() {
        let mut cat = catalogue();
        for n in 0..PAGE_SIZE {
            cat.items.push(item(&format!("filler-{n:02}"), None, None));
        }
        let mut browser = Browser::new(cat);

        let view = browser.view();
        assert_eq!(view.visible.len(), PAGE_SIZE);
        assert!(view.has_more);

        browser.dispatch(Action::ShowMore);
        let view = browser.view();
        assert_eq!(view.visible.len(), view.total);
        assert!(!view.has_more);
    }

    #[test]
    fn test_clear_filters_is_idempotent_and_keeps_sort() {
        let mut browser = Browser::new(catalogue());
        browser.dispatch(Action::SetSort(SortKey::TopRated));
        browser.dispatch(Action::SelectFacet(FacetAxis::Family, "sours".to_string()));
        browser.dispatch(Action::SetQuery("rum".to_string()));

        browser.dispatch(Action::ClearFilters);
        let once = browser.state().clone();
        browser.dispatch(Action::ClearFilters);
        let twice = browser.state().clone();

        assert_eq!(once, twice);
        assert_eq!(once.sort, SortKey::TopRated);
        assert_eq!(browser.view().total, browser.catalogue().items.len());
    }

    #[test]
    fn test_featured_tracks_filtered_set() {
        let mut cat = catalogue();
        cat.items[0].featured = true; // daiquiri, sours
        cat.items[3].featured = true; // dark-and-stormy, highballs
        let mut browser = Browser::new(cat);

        assert_eq!(browser.view().featured.len(), 2);

        browser.dispatch(Action::SelectFacet(FacetAxis::Family, "sours".to_string()));
        let featured = browser.view().featured;
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "daiquiri");
    }

    #[test]
    fn test_empty_catalogue_yields_empty_views() {
        let browser = Browser::new(Catalogue {
            title: "Empty".to_string(),
            description: None,
            facets: Vec::new(),
            items: Vec::new(),
        });

        let view = browser.view();
        assert!(view.filtered.is_empty());
        assert!(view.visible.is_empty());
        assert!(view.featured.is_empty());
        assert_eq!(view.total, 0);
        assert!(!view.has_more);
    }

    #[test]
    fn test_top_rated_before_and_after_ratings_merge() {
        let mut browser = Browser::new(catalogue());
        browser.dispatch(Action::SetSort(SortKey::TopRated));

        // Before the fetch resolves everything ties at 0/0 and the order
        // is alphabetical.
        let before: Vec<_> = browser.view().filtered.iter().map(|i| i.id.clone()).collect();
        assert_eq!(
            before,
            vec!["daiquiri", "dark-and-stormy", "gimlet", "house-pour", "rum-sour"]
        );

        let ratings = parse_ratings(&json!({
            "rum-sour": {"average": 4.9, "count": 12},
            "gimlet": {"average": 4.9, "count": 40},
            "unknown-id": {"average": 5.0, "count": 1}
        }));
        browser.merge_ratings(&ratings);

        // Only the rated items change rank; the tie at 4.9 breaks on count.
        let after: Vec<_> = browser.view().filtered.iter().map(|i| i.id.clone()).collect();
        assert_eq!(
            after,
            vec!["gimlet", "rum-sour", "daiquiri", "dark-and-stormy", "house-pour"]
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut browser = Browser::new(catalogue());
        let mut ratings = RatingsMap::new();
        ratings.insert(
            "gimlet".to_string(),
            Rating {
                average: 4.2,
                count: 9,
            },
        );

        browser.merge_ratings(&ratings);
        let first: Vec<_> = browser.view().filtered;
        browser.merge_ratings(&ratings);
        let second: Vec<_> = browser.view().filtered;

        let ids = |items: &[Item]| items.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }
}
