mod common;

use common::{corpus, init_logging, news};
use scholar_core::{
    update, AppState, Effect, LoadStatus, Msg, NewsKind, RequestId, ResourceName, ResourcePayload,
    ResourceSlot, Route,
};

fn fetch_ids(effects: &[Effect]) -> Vec<(RequestId, ResourceName)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchResource {
                request_id,
                resource,
            } => Some((*request_id, *resource)),
            _ => None,
        })
        .collect()
}

fn request(state: AppState, resource: ResourceName) -> (AppState, RequestId) {
    let (state, effects) = update(state, Msg::LoadRequested(resource));
    let fetches = fetch_ids(&effects);
    assert_eq!(fetches.len(), 1);
    (state, fetches[0].0)
}

#[test]
fn slot_failure_keeps_default_and_reports_error() {
    let mut slot = ResourceSlot::new(vec!["fallback"]);
    assert!(slot.is_loading());
    slot.begin(1);

    assert!(slot.resolve(1, Err("Failed to load news.json".to_string())));
    assert_eq!(slot.data(), &vec!["fallback"]);
    assert!(!slot.is_loading());
    assert_eq!(slot.error(), Some("Failed to load news.json"));
}

#[test]
fn slot_ignores_superseded_responses() {
    let mut slot = ResourceSlot::new(0);
    slot.begin(1);
    slot.begin(2);

    assert!(!slot.resolve(1, Ok(10)));
    assert!(slot.is_loading());
    assert!(slot.resolve(2, Ok(20)));
    assert_eq!(*slot.data(), 20);
    assert_eq!(slot.status(), &LoadStatus::Loaded);

    // Terminal until a new request is issued.
    assert!(!slot.resolve(2, Ok(30)));
    assert_eq!(*slot.data(), 20);
}

#[test]
fn entering_a_route_fetches_its_resources_once() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::RouteEntered {
            route: Route::Publications,
            query: None,
        },
    );
    let fetches = fetch_ids(&effects);
    let resources: Vec<_> = fetches.iter().map(|(_, r)| *r).collect();
    assert_eq!(
        resources,
        vec![ResourceName::Profile, ResourceName::Publications]
    );
    assert_ne!(fetches[0].0, fetches[1].0);

    // In flight: a second visit issues nothing new.
    let (_state, effects) = update(
        state,
        Msg::RouteEntered {
            route: Route::Publications,
            query: None,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn loaded_payload_populates_view() {
    init_logging();
    let (state, request_id) = request(AppState::new(), ResourceName::Publications);
    assert!(state.view().is_loading(ResourceName::Publications));

    let (mut state, effects) = update(
        state,
        Msg::ResourceLoaded {
            request_id,
            payload: ResourcePayload::Publications(corpus()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    assert!(!view.is_loading(ResourceName::Publications));
    assert_eq!(view.publications.len(), 4);
    assert_eq!(view.publications.facets.years, vec![2023, 2022, 2021]);
    assert_eq!(view.bibtex_count, 2);
}

#[test]
fn failed_load_is_terminal_with_default_data() {
    init_logging();
    let (state, request_id) = request(AppState::new(), ResourceName::News);
    let (state, _) = update(
        state,
        Msg::ResourceFailed {
            request_id,
            resource: ResourceName::News,
            message: "Failed to load news.json: http status 404".to_string(),
        },
    );

    let view = state.view();
    let status = view.resource(ResourceName::News).unwrap();
    assert!(!status.loading);
    assert_eq!(
        status.error.as_deref(),
        Some("Failed to load news.json: http status 404")
    );
    assert!(view.news.is_empty());
    assert!(view.recent_news.is_empty());

    // Other resources are isolated.
    assert!(view.is_loading(ResourceName::Publications));
    assert_eq!(state.status(ResourceName::Publications), &LoadStatus::Loading);
}

#[test]
fn stale_response_cannot_overwrite_newer_state() {
    init_logging();
    let (state, first) = request(AppState::new(), ResourceName::News);
    let (state, second) = request(state, ResourceName::News);
    assert!(second > first);

    let newer = vec![news("fresh", "2024-06-01", NewsKind::Award)];
    let (state, _) = update(
        state,
        Msg::ResourceLoaded {
            request_id: second,
            payload: ResourcePayload::News(newer.into()),
        },
    );

    let older = vec![news("stale", "2020-01-01", NewsKind::Media)];
    let (state, _) = update(
        state,
        Msg::ResourceLoaded {
            request_id: first,
            payload: ResourcePayload::News(older.into()),
        },
    );

    let view = state.view();
    let ids: Vec<_> = view.news.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["fresh"]);
}

#[test]
fn failed_resource_is_requested_again_on_next_visit() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::RouteEntered {
            route: Route::Contact,
            query: None,
        },
    );
    let fetches = fetch_ids(&effects);
    let contact = fetches
        .iter()
        .find(|(_, resource)| *resource == ResourceName::Contact)
        .map(|(id, _)| *id)
        .expect("contact fetch");

    let (state, _) = update(
        state,
        Msg::ResourceFailed {
            request_id: contact,
            resource: ResourceName::Contact,
            message: "network error".to_string(),
        },
    );
    let (_state, effects) = update(
        state,
        Msg::RouteEntered {
            route: Route::Contact,
            query: None,
        },
    );
    let resources: Vec<_> = fetch_ids(&effects).into_iter().map(|(_, r)| r).collect();
    assert_eq!(resources, vec![ResourceName::Contact]);
}

#[test]
fn recent_news_is_newest_first_and_capped() {
    init_logging();
    let (state, request_id) = request(AppState::new(), ResourceName::News);
    let items: Vec<_> = (1..=8)
        .map(|month| news(&format!("n{month}"), &format!("2024-{month:02}-01"), NewsKind::Grant))
        .collect();
    let (state, _) = update(
        state,
        Msg::ResourceLoaded {
            request_id,
            payload: ResourcePayload::News(items.into()),
        },
    );

    let view = state.view();
    let recent: Vec<_> = view.recent_news.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(recent, vec!["n8", "n7", "n6", "n5", "n4", "n3"]);
    assert_eq!(view.news.len(), 8);
}
