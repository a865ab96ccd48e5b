//! Distinct filter options derived from a record collection.

use std::collections::BTreeSet;

use crate::record::Record;

/// Filter options for one listing.
///
/// Strings are sorted alphabetically, years newest first. Multi-valued
/// fields contribute every element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facets {
    pub years: Vec<i32>,
    pub kinds: Vec<String>,
    pub themes: Vec<String>,
    pub authors: Vec<String>,
}

impl Facets {
    pub fn extract<R: Record>(records: &[R]) -> Self {
        Self {
            years: distinct_years_desc(records),
            kinds: distinct_sorted(records, |r| r.kind_key()),
            themes: distinct_sorted(records, |r| r.themes().iter().map(String::as_str)),
            authors: distinct_sorted(records, |r| r.authors().iter().map(String::as_str)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
            && self.kinds.is_empty()
            && self.themes.is_empty()
            && self.authors.is_empty()
    }
}

/// Distinct values of a scalar or multi-valued field, alphabetically.
pub fn distinct_sorted<'a, R, F, I>(records: &'a [R], select: F) -> Vec<String>
where
    F: Fn(&'a R) -> I,
    I: IntoIterator<Item = &'a str>,
{
    records
        .iter()
        .flat_map(select)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

pub fn distinct_years_desc<R: Record>(records: &[R]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().filter_map(Record::year).collect();
    years.into_iter().rev().collect()
}
