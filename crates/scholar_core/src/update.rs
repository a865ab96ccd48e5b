use crate::{
    theme_from_query, AppState, Effect, FilterChange, Listing, Msg, Route, Selection,
    BIBTEX_FILENAME,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RouteEntered { route, query } => {
            if route == Route::Publications {
                if let Some(theme) = query.as_deref().and_then(theme_from_query) {
                    state.apply_filter(
                        Listing::Publications,
                        FilterChange::Theme(Selection::Only(theme)),
                    );
                }
            }
            let missing: Vec<_> = route
                .resources()
                .iter()
                .copied()
                .filter(|resource| state.needs_load(*resource))
                .collect();
            missing
                .into_iter()
                .map(|resource| Effect::FetchResource {
                    request_id: state.begin_load(resource),
                    resource,
                })
                .collect()
        }
        Msg::LoadRequested(resource) => {
            let request_id = state.begin_load(resource);
            vec![Effect::FetchResource {
                request_id,
                resource,
            }]
        }
        Msg::ResourceLoaded {
            request_id,
            payload,
        } => {
            state.apply_payload(request_id, payload);
            Vec::new()
        }
        Msg::ResourceFailed {
            request_id,
            resource,
            message,
        } => {
            state.apply_failure(request_id, resource, message);
            Vec::new()
        }
        Msg::FilterChanged { listing, change } => {
            state.apply_filter(listing, change);
            Vec::new()
        }
        Msg::AbstractToggled { id } => {
            state.toggle_abstract(id);
            Vec::new()
        }
        Msg::DownloadBibtexClicked => {
            let contents = state.visible_bibtex();
            if contents.is_empty() {
                Vec::new()
            } else {
                vec![Effect::SaveBibtex {
                    filename: BIBTEX_FILENAME.to_string(),
                    contents,
                }]
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    state.refresh_views();
    (state, effects)
}
