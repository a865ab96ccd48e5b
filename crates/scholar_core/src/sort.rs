use std::cmp::Ordering;

use crate::record::Record;

/// Ordering applied to a filtered listing. All orders are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Newest year first; records without a year go last.
    #[default]
    YearDesc,
    /// Newest date first; undated records go last.
    DateDesc,
    TitleAsc,
    /// Input order.
    Unsorted,
}

impl SortKey {
    /// Control value used by the listing pages.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::YearDesc => "year-desc",
            SortKey::DateDesc => "date-desc",
            SortKey::TitleAsc => "title",
            SortKey::Unsorted => "none",
        }
    }

    /// Unknown control values keep input order.
    pub fn from_control(value: &str) -> Self {
        match value.trim() {
            "year-desc" => SortKey::YearDesc,
            "date-desc" => SortKey::DateDesc,
            "title" => SortKey::TitleAsc,
            _ => SortKey::Unsorted,
        }
    }

    pub fn compare<R: Record>(self, a: &R, b: &R) -> Ordering {
        match self {
            SortKey::YearDesc => descending_some_first(a.year(), b.year()),
            SortKey::DateDesc => descending_some_first(a.date(), b.date()),
            SortKey::TitleAsc => compare_titles(a.title(), b.title()),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

fn descending_some_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sorts positions into `records` in place.
pub fn sort_indices<R: Record>(records: &[R], order: &mut [usize], key: SortKey) {
    if key == SortKey::Unsorted {
        return;
    }
    order.sort_by(|&a, &b| key.compare(&records[a], &records[b]));
}

/// Returns a sorted copy of `records`.
pub fn sorted<R: Record + Clone>(records: &[R], key: SortKey) -> Vec<R> {
    let mut out = records.to_vec();
    if key != SortKey::Unsorted {
        out.sort_by(|a, b| key.compare(a, b));
    }
    out
}
