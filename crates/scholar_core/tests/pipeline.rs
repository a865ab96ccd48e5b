mod common;

use std::sync::Arc;

use common::{corpus, init_logging, publication};
use pretty_assertions::assert_eq;
use scholar_core::{
    sorted, Facets, FilterState, Materializer, Publication, PublicationType, Record, Selection,
    SortKey,
};

fn ids(records: &[Publication]) -> Vec<&str> {
    records.iter().map(|p| p.id.as_str()).collect()
}

fn materialize(records: &Arc<[Publication]>, filter: &FilterState) -> Vec<Publication> {
    Materializer::new().materialize(records, filter).to_vec()
}

fn sample_filters() -> Vec<FilterState> {
    vec![
        FilterState::default(),
        FilterState {
            query: "crowd".into(),
            ..FilterState::default()
        },
        FilterState {
            year: Selection::Only(2022),
            ..FilterState::default()
        },
        FilterState {
            kind: Selection::Only("journal".into()),
            sort: SortKey::TitleAsc,
            ..FilterState::default()
        },
        FilterState {
            theme: Selection::Only("Crowd Computing".into()),
            author: Selection::Only("A. Researcher".into()),
            ..FilterState::default()
        },
        FilterState {
            featured_only: true,
            query: "BEYOND".into(),
            ..FilterState::default()
        },
    ]
}

#[test]
fn inactive_filters_only_sort() {
    init_logging();
    let records = corpus();
    for sort in [SortKey::YearDesc, SortKey::TitleAsc, SortKey::Unsorted] {
        let filter = FilterState::with_sort(sort);
        assert_eq!(materialize(&records, &filter), sorted(&records, sort));
    }
}

#[test]
fn view_is_sound_and_complete() {
    init_logging();
    let records = corpus();
    for filter in sample_filters() {
        let predicate = filter.predicate();
        let view = materialize(&records, &filter);
        for record in records.iter() {
            let occurrences = view.iter().filter(|p| p.id == record.id).count();
            if predicate.matches(record) {
                assert_eq!(occurrences, 1, "{} missing under {filter:?}", record.id);
            } else {
                assert_eq!(occurrences, 0, "{} leaked under {filter:?}", record.id);
            }
        }
    }
}

#[test]
fn year_sort_is_idempotent_and_stable() {
    let records = corpus();
    let once = sorted(&records, SortKey::YearDesc);
    let twice = sorted(&once, SortKey::YearDesc);
    assert_eq!(once, twice);
    // p2 and p4 share 2022 and keep their input order.
    assert_eq!(ids(&once), vec!["p3", "p2", "p4", "p1"]);
}

#[test]
fn title_sort_ignores_case() {
    let records = corpus();
    let by_title = sorted(&records, SortKey::TitleAsc);
    assert_eq!(ids(&by_title), vec!["p3", "p2", "p4", "p1"]);
}

#[test]
fn themes_facet_is_distinct_across_multi_valued_fields() {
    let mut first = publication("a", "A", 2020, PublicationType::Journal);
    first.themes = vec!["A".into(), "B".into()];
    let mut second = publication("b", "B", 2021, PublicationType::Journal);
    second.themes = vec!["B".into(), "C".into()];

    let facets = Facets::extract(&[first, second]);
    assert_eq!(facets.themes, vec!["A", "B", "C"]);
}

#[test]
fn corpus_facets_are_ordered() {
    let facets = Facets::extract(&corpus());
    assert_eq!(facets.years, vec![2023, 2022, 2021]);
    assert_eq!(facets.kinds, vec!["conference", "journal", "preprint", "workshop"]);
    assert_eq!(
        facets.authors,
        vec!["A. Researcher", "B. Colleague", "C. Student"]
    );
}

#[test]
fn query_matching_is_case_insensitive() {
    let filter = FilterState {
        query: "DEEP".into(),
        ..FilterState::default()
    };
    let record = publication("x", "Deep Learning for Everyone", 2020, PublicationType::Journal);
    assert!(filter.predicate().matches(&record));
}

#[test]
fn query_whitespace_is_matched_verbatim() {
    let record = publication("x", "Learning to Deep", 2020, PublicationType::Journal);
    let with_query = |query: &str| FilterState {
        query: query.into(),
        ..FilterState::default()
    };

    assert!(!with_query("deep ").predicate().matches(&record));
    assert!(with_query("to deep").predicate().matches(&record));
    assert!(!with_query("  ").predicate().matches(&record));
}

#[test]
fn query_searches_abstract_venue_authors_and_keywords() {
    let records = corpus();
    let hits = |query: &str| {
        let filter = FilterState {
            query: query.into(),
            sort: SortKey::Unsorted,
            ..FilterState::default()
        };
        ids(&materialize(&records, &filter))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(hits("bias"), vec!["p2"]);
    assert_eq!(hits("arxiv"), vec!["p3"]);
    assert_eq!(hits("c. student"), vec!["p3"]);
    assert_eq!(hits("explainab"), vec!["p4"]);
    assert!(hits("quantum").is_empty());
}

#[test]
fn end_to_end_year_and_type_filters() {
    let records: Arc<[Publication]> = Arc::from(vec![
        publication("old", "Old", 2021, PublicationType::Conference),
        publication("new", "New", 2023, PublicationType::Conference),
        publication("mid", "Mid", 2022, PublicationType::Journal),
    ]);

    let all = materialize(&records, &FilterState::with_sort(SortKey::YearDesc));
    let years: Vec<_> = all.iter().filter_map(Record::year).collect();
    assert_eq!(years, vec![2023, 2022, 2021]);

    let journals = materialize(
        &records,
        &FilterState {
            kind: Selection::Only("journal".into()),
            ..FilterState::default()
        },
    );
    assert_eq!(ids(&journals), vec!["mid"]);
}

#[test]
fn materializer_reuses_work_until_inputs_change() {
    init_logging();
    let records = corpus();
    let mut materializer = Materializer::new();
    let filter = FilterState::default();

    let first = materializer.materialize(&records, &filter);
    let again = materializer.materialize(&records, &filter);
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(materializer.stats().view_runs, 1);
    assert_eq!(materializer.stats().facet_runs, 1);

    let narrowed = FilterState {
        featured_only: true,
        ..FilterState::default()
    };
    let featured = materializer.materialize(&records, &narrowed);
    assert_eq!(featured.len(), 2);
    assert_eq!(featured.total(), 4);
    assert!(featured.has_active_filters());
    assert_eq!(materializer.stats().view_runs, 2);
    // Facets depend on the collection only.
    assert_eq!(materializer.stats().facet_runs, 1);
    assert!(Arc::ptr_eq(&first.facets, &featured.facets));

    // Same contents, new collection: everything is recomputed but the
    // output is unchanged.
    let reloaded: Arc<[Publication]> = Arc::from(records.to_vec());
    let fresh = materializer.materialize(&reloaded, &narrowed);
    assert_eq!(materializer.stats().facet_runs, 2);
    assert_eq!(fresh.to_vec(), featured.to_vec());
}
