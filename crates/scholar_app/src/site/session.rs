use std::time::{Duration, Instant};

use scholar_core::{
    update, AppState, AppViewModel, FilterChange, Listing, LoadStatus, Msg, ResourceName, Route,
};
use scholar_logging::scholar_warn;

use super::effects::EffectRunner;

/// Headless host for the core state machine: dispatches messages, runs
/// the resulting effects and pumps engine results until loads settle.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
    load_deadline: Duration,
}

impl Session {
    pub fn new(runner: EffectRunner, load_deadline: Duration) -> Self {
        Self {
            state: AppState::new(),
            runner,
            load_deadline,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Opens every route in `routes` and waits for all their resources.
    pub fn visit(&mut self, routes: &[Route]) -> bool {
        let mut needed: Vec<ResourceName> = Vec::new();
        for &route in routes {
            self.dispatch(Msg::RouteEntered { route, query: None });
            for resource in route.resources() {
                if !needed.contains(resource) {
                    needed.push(*resource);
                }
            }
        }
        self.settle(&needed)
    }

    /// Pumps engine results until none of `resources` is loading. Returns
    /// false when the deadline passes first or the engine has stopped.
    pub fn settle(&mut self, resources: &[ResourceName]) -> bool {
        let deadline = Instant::now() + self.load_deadline;
        while let Some(pending) = self.first_loading(resources) {
            let now = Instant::now();
            if now >= deadline {
                scholar_warn!("gave up waiting for {}", pending);
                return false;
            }
            match self.runner.next_msg(deadline - now) {
                Ok(Some(msg)) => self.dispatch(msg),
                Ok(None) => {}
                Err(err) => {
                    scholar_warn!("{} while waiting for {}", err, pending);
                    return false;
                }
            }
        }
        true
    }

    pub fn apply_filters(&mut self, listing: Listing, changes: Vec<FilterChange>) {
        for change in changes {
            self.dispatch(Msg::FilterChanged { listing, change });
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&mut self) -> AppViewModel {
        self.state.consume_dirty();
        self.state.view()
    }

    fn first_loading(&self, resources: &[ResourceName]) -> Option<ResourceName> {
        resources
            .iter()
            .copied()
            .find(|resource| *self.state.status(*resource) == LoadStatus::Loading)
    }
}
