//! Filter selections and the predicate composed from them.

use crate::record::Record;
use crate::sort::SortKey;

/// One filter dimension: either the "all" sentinel or a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl Selection<String> {
    /// Parses a control value where `"all"` (or empty) is the sentinel.
    pub fn from_control(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }
}

impl Selection<i32> {
    /// Parses a year control value; anything that is not a number means "all".
    pub fn year_from_control(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(year) => Selection::Only(year),
            Err(_) => Selection::All,
        }
    }
}

/// Active filter selections for one listing page, plus its sort order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    pub query: String,
    pub year: Selection<i32>,
    /// Publication type, news kind or project status.
    pub kind: Selection<String>,
    pub theme: Selection<String>,
    pub author: Selection<String>,
    pub featured_only: bool,
    pub sort: SortKey,
}

/// A single user edit to a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Query(String),
    Year(Selection<i32>),
    Kind(Selection<String>),
    Theme(Selection<String>),
    Author(Selection<String>),
    FeaturedOnly(bool),
    Sort(SortKey),
    /// Resets every filter dimension; the sort order is kept.
    Clear,
}

impl FilterState {
    pub fn with_sort(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Applies a change and reports whether anything differs afterwards.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let before = self.clone();
        match change {
            FilterChange::Query(query) => self.query = query,
            FilterChange::Year(year) => self.year = year,
            FilterChange::Kind(kind) => self.kind = kind,
            FilterChange::Theme(theme) => self.theme = theme,
            FilterChange::Author(author) => self.author = author,
            FilterChange::FeaturedOnly(featured) => self.featured_only = featured,
            FilterChange::Sort(sort) => self.sort = sort,
            FilterChange::Clear => {
                *self = Self::with_sort(self.sort);
            }
        }
        *self != before
    }

    /// True when at least one dimension narrows the collection.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty()
            || self.year.is_active()
            || self.kind.is_active()
            || self.theme.is_active()
            || self.author.is_active()
            || self.featured_only
    }

    pub fn predicate(&self) -> Predicate {
        let query = self.query.to_lowercase();
        Predicate {
            query: (!query.is_empty()).then_some(query),
            year: self.year.as_option().copied(),
            kind: self.kind.as_option().cloned(),
            theme: self.theme.as_option().cloned(),
            author: self.author.as_option().cloned(),
            featured_only: self.featured_only,
        }
    }
}

/// Inclusion test over a single record: every active dimension must hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Predicate {
    query: Option<String>,
    year: Option<i32>,
    kind: Option<String>,
    theme: Option<String>,
    author: Option<String>,
    featured_only: bool,
}

impl Predicate {
    /// True when no dimension is active, i.e. every record passes.
    pub fn is_trivial(&self) -> bool {
        *self == Predicate::default()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.featured_only && !record.is_featured() {
            return false;
        }
        if let Some(year) = self.year {
            if record.year() != Some(year) {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if record.kind_key() != Some(kind.as_str()) {
                return false;
            }
        }
        if let Some(theme) = &self.theme {
            if !record.themes().iter().any(|t| t == theme) {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if !record.authors().iter().any(|a| a == author) {
                return false;
            }
        }
        match &self.query {
            Some(query) => matches_query(record, query),
            None => true,
        }
    }
}

/// `needle` must already be lowercased.
fn matches_query<R: Record>(record: &R, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(record.title())
        || contains(record.summary())
        || record.venue().is_some_and(contains)
        || record.authors().iter().any(|a| contains(a))
        || record.keywords().iter().any(|k| contains(k))
}
