use anyhow::{anyhow, Result};
use backbar_core::{load_catalogue, load_ratings, Action, Browser, FacetAxis, SortKey};
use clap::{Parser, ValueEnum};
use std::path::Path;

mod errors;
mod output;

use errors::map_catalogue_load_error;

/// Cocktail catalogue browser - filter and display recipes with faceted search
///
/// Examples:
///   # Display the first page of the catalogue
///   backbar manual.json
///
///   # Narrow by family and base spirit
///   backbar manual.json --family sours --base spiced-rum
///
///   # Grouping values expand to their members
///   backbar manual.json --base all-rum
///
///   # Free-text search combined with facets
///   backbar manual.json --family sours --query ginger
///
///   # Sort by rating, joined from a ratings file
///   backbar manual.json --ratings ratings.json --sort top-rated
///
///   # Show which filter values remain selectable
///   backbar manual.json --family sours --show-options
#[derive(Parser, Debug)]
#[command(name = "backbar")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Each axis holds exactly one selection; 'all' means no constraint\n  \
    - Different axes are combined with AND\n  \
    - The query matches name or description, case-insensitively\n  \
    - A grouping value (e.g. all-rum) matches every member of its expansion\n\n\
Options Display:\n  \
    - --show-options lists, per axis, the values still reachable given the\n    \
OTHER axes' selections; an axis never narrows its own option list\n\n\
Pagination:\n  \
    - One page of results is shown; each --more step adds another page")]
struct Cli {
    /// Path to the catalogue JSON file
    #[arg(value_name = "FILE")]
    file: String,

    /// Path to a ratings JSON file to join by item id
    #[arg(long = "ratings", value_name = "FILE")]
    ratings: Option<String>,

    /// Select a cocktail family (e.g. sours, highballs)
    #[arg(short = 'f', long = "family", value_name = "VALUE")]
    family: Option<String>,

    /// Select a base spirit (concrete or grouping value, e.g. gin, all-rum)
    #[arg(short = 'b', long = "base", value_name = "VALUE")]
    base: Option<String>,

    /// Select a difficulty level
    #[arg(short = 'l', long = "level", value_name = "VALUE")]
    level: Option<String>,

    /// Free-text search over name and description
    #[arg(short = 'q', long = "query", value_name = "TEXT")]
    query: Option<String>,

    /// Sort order
    #[arg(short = 's', long = "sort", value_name = "KEY")]
    sort: Option<CliSort>,

    /// Reveal N additional pages beyond the first
    #[arg(long = "more", value_name = "N", default_value_t = 0)]
    more: usize,

    /// List the selectable values per axis for the current selections
    #[arg(long = "show-options")]
    show_options: bool,

    /// Also print the featured subset of the filtered results
    #[arg(long = "featured")]
    featured: bool,

    /// Reset all facet selections and the query before paginating
    /// (keeps the sort order)
    #[arg(long = "clear")]
    clear: bool,

    /// Emit the derived view as JSON instead of formatted text
    #[arg(long = "json")]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSort {
    Alphabetical,
    TopRated,
}

impl From<CliSort> for SortKey {
    fn from(sort: CliSort) -> Self {
        match sort {
            CliSort::Alphabetical => SortKey::Alphabetical,
            CliSort::TopRated => SortKey::TopRated,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalogue = load_catalogue(&cli.file).map_err(|e| {
        let (title, details) = map_catalogue_load_error(e.as_ref(), Path::new(&cli.file));
        anyhow!("{}\n{}", title, details)
    })?;

    let mut browser = Browser::new(catalogue);

    if let Some(ratings_path) = &cli.ratings {
        browser.merge_ratings(&load_ratings(ratings_path));
    }

    dispatch_cli_actions(&mut browser, &cli);

    let view = browser.view();

    if cli.json {
        output::print_json(&view)?;
        return Ok(());
    }

    output::print_header(browser.catalogue(), browser.state());
    output::print_results(&view);

    if cli.show_options {
        output::print_options(&view);
    }

    if cli.featured {
        output::print_featured(&view);
    }

    Ok(())
}

/// Translate CLI flags into browser actions: selections, query, and sort
/// first, then `--clear` (which wipes selections and query but keeps the
/// sort), then `--more` pagination steps.
fn dispatch_cli_actions(browser: &mut Browser, cli: &Cli) {
    for (axis, selection) in [
        (FacetAxis::Family, &cli.family),
        (FacetAxis::BaseType, &cli.base),
        (FacetAxis::Level, &cli.level),
    ] {
        if let Some(value) = selection {
            browser.dispatch(Action::SelectFacet(axis, value.clone()));
        }
    }

    if let Some(query) = &cli.query {
        browser.dispatch(Action::SetQuery(query.clone()));
    }

    if let Some(sort) = cli.sort {
        browser.dispatch(Action::SetSort(sort.into()));
    }

    if cli.clear {
        browser.dispatch(Action::ClearFilters);
    }

    for _ in 0..cli.more {
        browser.dispatch(Action::ShowMore);
    }
}
