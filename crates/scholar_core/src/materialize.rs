//! Memoized derivation of listing views.
//!
//! A view is a pure function of (collection, filter state). The
//! [`Materializer`] caches the last facets by collection identity and the
//! last view by (collection identity, filter state); a cache hit returns the
//! same `Arc` so hosts can skip re-rendering.

use std::sync::Arc;

use scholar_logging::scholar_trace;

use crate::facet::Facets;
use crate::filter::FilterState;
use crate::record::Record;
use crate::sort::sort_indices;

/// Filtered, ordered view over a shared collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView<R> {
    records: Arc<[R]>,
    order: Vec<usize>,
    pub facets: Arc<Facets>,
    pub filter: FilterState,
}

impl<R: Record> ListingView<R> {
    /// Computes a view without caching.
    pub fn compute(records: Arc<[R]>, facets: Arc<Facets>, filter: FilterState) -> Self {
        let predicate = filter.predicate();
        let mut order: Vec<usize> = if predicate.is_trivial() {
            (0..records.len()).collect()
        } else {
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| predicate.matches(*record))
                .map(|(idx, _)| idx)
                .collect()
        };
        sort_indices(&records, &mut order, filter.sort);
        Self {
            records,
            order,
            facets,
            filter,
        }
    }
}

impl<R> ListingView<R> {
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            order: Vec::new(),
            facets: Arc::new(Facets::default()),
            filter: FilterState::default(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.order.iter().map(|&idx| &self.records[idx])
    }

    /// Number of records in the view.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of records in the underlying collection.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filter.has_active_filters()
    }

    pub fn to_vec(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// How often each stage actually ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterializerStats {
    pub facet_runs: u64,
    pub view_runs: u64,
}

#[derive(Debug, Clone)]
pub struct Materializer<R> {
    facets: Option<(Arc<[R]>, Arc<Facets>)>,
    view: Option<Arc<ListingView<R>>>,
    stats: MaterializerStats,
}

impl<R> Default for Materializer<R> {
    fn default() -> Self {
        Self {
            facets: None,
            view: None,
            stats: MaterializerStats::default(),
        }
    }
}

impl<R: Record> Materializer<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the view for `records` under `filter`, recomputing only the
    /// stages whose inputs changed since the previous call.
    pub fn materialize(&mut self, records: &Arc<[R]>, filter: &FilterState) -> Arc<ListingView<R>> {
        if let Some(view) = &self.view {
            if Arc::ptr_eq(&view.records, records) && view.filter == *filter {
                return Arc::clone(view);
            }
        }

        let facets = self.facets_for(records);
        self.stats.view_runs += 1;
        let view = Arc::new(ListingView::compute(
            Arc::clone(records),
            facets,
            filter.clone(),
        ));
        scholar_trace!(
            "materialized view: {} of {} records, sort={}",
            view.len(),
            view.total(),
            filter.sort.as_str()
        );
        self.view = Some(Arc::clone(&view));
        view
    }

    fn facets_for(&mut self, records: &Arc<[R]>) -> Arc<Facets> {
        if let Some((cached, facets)) = &self.facets {
            if Arc::ptr_eq(cached, records) {
                return Arc::clone(facets);
            }
        }
        self.stats.facet_runs += 1;
        let facets = Arc::new(Facets::extract(records));
        self.facets = Some((Arc::clone(records), Arc::clone(&facets)));
        facets
    }

    pub fn stats(&self) -> MaterializerStats {
        self.stats
    }
}
