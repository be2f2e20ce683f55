use backbar_core::{BrowseView, Catalogue, FacetAxis, FilterState, Item, SortKey, ALL};
use colored::Colorize;
use serde::Serialize;

/// Machine-readable rendering of a derived view.
/// Options are a list, not a map, so axes keep their display order.
#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    has_more: bool,
    options: Vec<JsonAxisOptions<'a>>,
    visible: &'a [Item],
    featured: &'a [Item],
}

#[derive(Serialize)]
struct JsonAxisOptions<'a> {
    axis: &'static str,
    values: &'a [String],
}

fn json_report(view: &BrowseView) -> JsonReport<'_> {
    JsonReport {
        total: view.total,
        has_more: view.has_more,
        options: view
            .options
            .iter()
            .map(|(axis, values)| JsonAxisOptions {
                axis: axis.key(),
                values: values.as_slice(),
            })
            .collect(),
        visible: &view.visible,
        featured: &view.featured,
    }
}

/// Print the derived view as pretty JSON for scripting consumers.
pub fn print_json(view: &BrowseView) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(&json_report(view))?);
    Ok(())
}

/// Print the catalogue header and any active filters.
pub fn print_header(catalogue: &Catalogue, state: &FilterState) {
    println!("{}", format!("# {}", catalogue.title).bold());
    println!();

    let mut active: Vec<String> = Vec::new();
    for axis in FacetAxis::all() {
        let selection = state.selection(*axis);
        if selection != ALL {
            active.push(format!("{}: {}", axis.display_name(), selection));
        }
    }
    if !state.query.is_empty() {
        active.push(format!("Search: \"{}\"", state.query));
    }

    if !active.is_empty() {
        println!("{}", "## Active Filters".bold());
        println!();
        for line in &active {
            println!("- {}", line);
        }
        println!();
    }

    let sort_label = match state.sort {
        SortKey::Alphabetical => "alphabetical",
        SortKey::TopRated => "top rated",
    };
    println!("**Sorted by:** {}", sort_label);
    println!();
}

/// Print the visible page of results with the total/remaining line.
pub fn print_results(view: &BrowseView) {
    println!(
        "**Matching Items:** {} (showing {})",
        view.total,
        view.visible.len()
    );
    println!();

    if view.visible.is_empty() {
        println!("{}", "_No items match the specified filters._".dimmed());
        println!();
        return;
    }

    for item in &view.visible {
        print_item(item);
    }

    if view.has_more {
        let remaining = view.total - view.visible.len();
        println!(
            "{}",
            format!("… {} more (re-run with a higher --more)", remaining).dimmed()
        );
        println!();
    }
}

pub fn print_item(item: &Item) {
    let title = if item.featured {
        format!("### {} ★", item.name)
    } else {
        format!("### {}", item.name)
    };
    println!("{}", title.green().bold());
    println!();

    if !item.description.is_empty() {
        println!("{}", item.description);
        println!();
    }

    for axis in FacetAxis::all() {
        if let Some(value) = item.facet_value(*axis) {
            println!("- {}: {}", axis.display_name(), value);
        }
    }

    if let Some(rating) = item.rating {
        println!("- Rating: {:.1} ({} ratings)", rating.average, rating.count);
    }

    println!();
}

/// Print the selectable values per axis given the current selections.
pub fn print_options(view: &BrowseView) {
    println!("{}", "## Available Options".bold());
    println!();

    for (axis, values) in &view.options {
        println!("{}: {}", axis.display_name().cyan(), values.join(", "));
    }
    println!();
}

/// Print the featured subset of the current filtered set.
pub fn print_featured(view: &BrowseView) {
    println!("{}", "## Featured".bold());
    println!();

    if view.featured.is_empty() {
        println!("{}", "_No featured items in the current selection._".dimmed());
        println!();
        return;
    }

    for item in &view.featured {
        print_item(item);
    }
}
