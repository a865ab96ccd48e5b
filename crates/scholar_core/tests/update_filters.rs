mod common;

use common::{corpus, init_logging, news, project};
use scholar_core::{
    update, AppState, Effect, FilterChange, Listing, Msg, NewsKind, ProjectStatus, ResourceName,
    ResourcePayload, Route, Selection, SortKey, BIBTEX_FILENAME,
};

fn loaded(resource: ResourceName, payload: ResourcePayload) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::LoadRequested(resource));
    let request_id = match effects.as_slice() {
        [Effect::FetchResource { request_id, .. }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };
    let (mut state, _) = update(
        state,
        Msg::ResourceLoaded {
            request_id,
            payload,
        },
    );
    state.consume_dirty();
    state
}

fn filter(state: AppState, listing: Listing, change: FilterChange) -> AppState {
    let (state, effects) = update(state, Msg::FilterChanged { listing, change });
    assert!(effects.is_empty());
    state
}

fn publication_ids(state: &AppState) -> Vec<String> {
    state
        .view()
        .publications
        .iter()
        .map(|p| p.id.clone())
        .collect()
}

#[test]
fn update_noop_leaves_view_untouched() {
    init_logging();
    let state = loaded(ResourceName::Publications, ResourcePayload::Publications(corpus()));
    let before = state.view();

    let (mut next, effects) = update(state, Msg::NoOp);
    assert!(effects.is_empty());
    assert_eq!(next.view(), before);
    assert!(!next.consume_dirty());
    assert_eq!(next.materializer_stats(Listing::Publications).view_runs, 2);
}

#[test]
fn filters_narrow_with_and_semantics() {
    init_logging();
    let state = loaded(ResourceName::Publications, ResourcePayload::Publications(corpus()));
    assert_eq!(publication_ids(&state), vec!["p3", "p2", "p4", "p1"]);

    let state = filter(
        state,
        Listing::Publications,
        FilterChange::Theme(Selection::Only("Crowd Computing".into())),
    );
    assert_eq!(publication_ids(&state), vec!["p3", "p1"]);

    let state = filter(
        state,
        Listing::Publications,
        FilterChange::Author(Selection::Only("B. Colleague".into())),
    );
    assert_eq!(publication_ids(&state), vec!["p1"]);

    let mut state = filter(state, Listing::Publications, FilterChange::Clear);
    assert_eq!(publication_ids(&state), vec!["p3", "p2", "p4", "p1"]);
    assert!(state.consume_dirty());
}

#[test]
fn unrelated_messages_do_not_recompute_views() {
    init_logging();
    let state = loaded(ResourceName::Publications, ResourcePayload::Publications(corpus()));
    let runs = state.materializer_stats(Listing::Publications);

    let (state, _) = update(state, Msg::Tick);
    let (state, _) = update(state, Msg::LoadRequested(ResourceName::Profile));
    let state = filter(
        state,
        Listing::News,
        FilterChange::Kind(Selection::Only("award".into())),
    );
    let (state, _) = update(
        state,
        Msg::AbstractToggled {
            id: "p2".to_string(),
        },
    );

    assert_eq!(state.materializer_stats(Listing::Publications), runs);
    assert_eq!(state.view().expanded_abstract.as_deref(), Some("p2"));
}

#[test]
fn toggling_the_same_abstract_collapses_it() {
    let state = AppState::new();
    let toggle = |state, id: &str| {
        update(
            state,
            Msg::AbstractToggled { id: id.to_string() },
        )
        .0
    };
    let state = toggle(state, "p1");
    let state = toggle(state, "p3");
    assert_eq!(state.view().expanded_abstract.as_deref(), Some("p3"));
    let state = toggle(state, "p3");
    assert_eq!(state.view().expanded_abstract, None);
}

#[test]
fn sort_selection_reorders_publications() {
    init_logging();
    let state = loaded(ResourceName::Publications, ResourcePayload::Publications(corpus()));
    let state = filter(
        state,
        Listing::Publications,
        FilterChange::Sort(SortKey::from_control("title")),
    );
    assert_eq!(publication_ids(&state), vec!["p3", "p2", "p4", "p1"]);

    let state = filter(
        state,
        Listing::Publications,
        FilterChange::Kind(Selection::from_control("workshop")),
    );
    assert_eq!(publication_ids(&state), vec!["p4"]);
    assert_eq!(state.view().publications.total(), 4);
}

#[test]
fn download_bibtex_uses_visible_publications() {
    init_logging();
    let state = loaded(ResourceName::Publications, ResourcePayload::Publications(corpus()));

    let (state, effects) = update(state, Msg::DownloadBibtexClicked);
    assert_eq!(
        effects,
        vec![Effect::SaveBibtex {
            filename: BIBTEX_FILENAME.to_string(),
            contents: "@article{p2}\n\n@inproceedings{p1}\n".to_string(),
        }]
    );

    let state = filter(
        state,
        Listing::Publications,
        FilterChange::Year(Selection::Only(2023)),
    );
    assert_eq!(state.view().bibtex_count, 0);
    let (_state, effects) = update(state, Msg::DownloadBibtexClicked);
    assert!(effects.is_empty());
}

#[test]
fn theme_query_seeds_publication_filter() {
    init_logging();
    let state = loaded(ResourceName::Publications, ResourcePayload::Publications(corpus()));
    let (state, _) = update(
        state,
        Msg::RouteEntered {
            route: Route::Publications,
            query: Some("?theme=Responsible%20AI".to_string()),
        },
    );
    assert_eq!(publication_ids(&state), vec!["p2"]);
    assert_eq!(
        state.filter(Listing::Publications).theme,
        Selection::Only("Responsible AI".to_string())
    );
}

#[test]
fn project_status_and_theme_filters() {
    init_logging();
    let projects = vec![
        project("a", ProjectStatus::Active, &["Crowd Computing"]),
        project("b", ProjectStatus::Completed, &["Crowd Computing", "Ethics"]),
        project("c", ProjectStatus::Active, &["Ethics"]),
    ];
    let state = loaded(ResourceName::Projects, ResourcePayload::Projects(projects.into()));
    let view = state.view();
    assert_eq!(view.projects.facets.themes, vec!["Crowd Computing", "Ethics"]);
    assert_eq!(view.projects.facets.kinds, vec!["active", "completed"]);

    let state = filter(
        state,
        Listing::Projects,
        FilterChange::Kind(Selection::Only("active".into())),
    );
    let state = filter(
        state,
        Listing::Projects,
        FilterChange::Theme(Selection::Only("Ethics".into())),
    );
    let ids: Vec<_> = state.view().projects.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["c"]);
}

#[test]
fn news_is_sorted_by_date_and_filtered_by_kind() {
    init_logging();
    let items = vec![
        news("a", "2023-04-01", NewsKind::Award),
        news("b", "2024-01-15", NewsKind::Keynote),
        news("c", "2023-11-20", NewsKind::Award),
        news("d", "undated", NewsKind::Other("misc".into())),
    ];
    let state = loaded(ResourceName::News, ResourcePayload::News(items.into()));
    let ids = |state: &AppState| -> Vec<String> {
        state.view().news.iter().map(|n| n.id.clone()).collect()
    };
    assert_eq!(ids(&state), vec!["b", "c", "a", "d"]);

    let state = filter(
        state,
        Listing::News,
        FilterChange::Kind(Selection::Only("award".into())),
    );
    assert_eq!(ids(&state), vec!["c", "a"]);
}
