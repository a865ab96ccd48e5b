use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use scholar_core::{FilterChange, Listing, Selection, SortKey};

use crate::site::logging::LogDestination;

/// Builds and queries an academic portfolio site.
#[derive(Debug, Parser)]
#[command(name = "scholar")]
#[command(version)]
pub struct Cli {
    /// RON configuration file. Defaults to ./scholar.ron when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the JSON resources.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Fetch resources from `<BASE_URL>/data/` instead of the data directory.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub log: Option<LogDestination>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render every page and the BibTeX export into the output directory.
    Build {
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print a filtered listing.
    List {
        #[arg(value_enum)]
        listing: ListingArg,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Write the BibTeX of the filtered publications.
    Bibtex {
        #[command(flatten)]
        filters: FilterArgs,
        /// Target file. Defaults to publications.bib in the output directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListingArg {
    Publications,
    Projects,
    News,
}

impl From<ListingArg> for Listing {
    fn from(value: ListingArg) -> Self {
        match value {
            ListingArg::Publications => Listing::Publications,
            ListingArg::Projects => Listing::Projects,
            ListingArg::News => Listing::News,
        }
    }
}

/// Filter controls, taking the same values as the page's select boxes:
/// `all` (or nothing) leaves a dimension inactive.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    /// Publication type or news kind.
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long)]
    pub theme: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    /// Project status (active, completed).
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub featured: bool,
    /// year-desc, date-desc, title; anything else keeps file order.
    #[arg(long)]
    pub sort: Option<String>,
}

impl FilterArgs {
    pub fn changes(&self) -> Vec<FilterChange> {
        let mut changes = Vec::new();
        if let Some(query) = &self.query {
            changes.push(FilterChange::Query(query.clone()));
        }
        if let Some(year) = &self.year {
            changes.push(FilterChange::Year(Selection::year_from_control(year)));
        }
        if let Some(kind) = self.kind.as_ref().or(self.status.as_ref()) {
            changes.push(FilterChange::Kind(Selection::from_control(kind)));
        }
        if let Some(theme) = &self.theme {
            changes.push(FilterChange::Theme(Selection::from_control(theme)));
        }
        if let Some(author) = &self.author {
            changes.push(FilterChange::Author(Selection::from_control(author)));
        }
        if self.featured {
            changes.push(FilterChange::FeaturedOnly(true));
        }
        if let Some(sort) = &self.sort {
            changes.push(FilterChange::Sort(SortKey::from_control(sort)));
        }
        changes
    }
}
