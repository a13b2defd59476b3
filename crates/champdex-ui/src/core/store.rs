//! The reconciled view state and its reducer.
//!
//! # Design
//! - One yewdux store holds the only [`ViewState`]; every event yields a new snapshot.
//! - [`reduce`] is pure. The history push it asks for comes back as an [`Effect`]
//!   and [`dispatch`] performs it after the new snapshot is published.
//! - Malformed input degrades (unparseable paths become Home); nothing here fails.

use crate::core::breakpoints::{DeviceClass, Viewport, classify};
use crate::core::catalog::CollectionState;
use crate::core::routing::{Route, format_route, parse_route};
use std::rc::Rc;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Snapshot consumed by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct ViewState {
    /// Catalog fetch lifecycle.
    pub collection: CollectionState,
    /// Current navigational state.
    pub route: Route,
    /// Current layout class.
    pub device: DeviceClass,
}

impl ViewState {
    /// State at boot: fetch pending, route and device read from the environment.
    #[must_use]
    pub fn initial(path: &str, viewport: Viewport) -> Self {
        Self {
            collection: CollectionState::Loading,
            route: parse_route(path),
            device: classify(viewport),
        }
    }
}

/// Inputs folded into the view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The catalog fetch finished (or, defensively, reported progress).
    CollectionSettled(CollectionState),
    /// The browser location changed (back/forward, or after a push).
    LocationChanged(String),
    /// The user asked to show a route.
    NavigateRequested(Route),
    /// The window was resized.
    WindowResized(Viewport),
}

/// Side effects requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Push a new entry onto the browser history stack.
    PushHistory(String),
}

/// Result of reducing one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Next snapshot.
    pub state: ViewState,
    /// Effect to perform once the snapshot is published.
    pub effect: Option<Effect>,
}

impl Transition {
    const fn quiet(state: ViewState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Compute the next snapshot for `event`.
#[must_use]
pub fn reduce(state: &ViewState, event: ViewEvent) -> Transition {
    match event {
        ViewEvent::CollectionSettled(collection) => {
            if state.collection.is_settled() && !collection.is_settled() {
                return Transition::quiet(state.clone());
            }
            Transition::quiet(ViewState {
                collection,
                ..state.clone()
            })
        }
        ViewEvent::LocationChanged(path) => Transition::quiet(ViewState {
            route: parse_route(&path),
            ..state.clone()
        }),
        ViewEvent::NavigateRequested(requested) => {
            // Store what the pushed path will parse back to, so the location echo
            // re-derives the same route.
            let path = format_route(&requested);
            let route = parse_route(&path);
            if route == state.route {
                return Transition::quiet(state.clone());
            }
            Transition {
                state: ViewState {
                    route,
                    ..state.clone()
                },
                effect: Some(Effect::PushHistory(path)),
            }
        }
        ViewEvent::WindowResized(viewport) => Transition::quiet(ViewState {
            device: classify(viewport),
            ..state.clone()
        }),
    }
}

/// Destination for history pushes.
pub trait HistorySink {
    /// Push `path` as a new history entry.
    fn push(&self, path: &str);
}

/// Holder of the latest snapshot.
pub trait SnapshotStore {
    /// Latest published snapshot.
    fn snapshot(&self) -> Rc<ViewState>;
    /// Replace the published snapshot.
    fn publish(&self, next: ViewState);
}

impl SnapshotStore for Dispatch<ViewState> {
    fn snapshot(&self) -> Rc<ViewState> {
        self.get()
    }

    fn publish(&self, next: ViewState) {
        self.set(next);
    }
}

/// Reduce `event` against the store, publish the result, then run its effect.
///
/// Publishing first means a location listener fired synchronously by the history
/// push already sees the new route and re-derives the same value.
pub fn dispatch<S, H>(store: &S, history: &H, event: ViewEvent)
where
    S: SnapshotStore + ?Sized,
    H: HistorySink + ?Sized,
{
    let Transition { state, effect } = reduce(&store.snapshot(), event);
    store.publish(state);
    match effect {
        Some(Effect::PushHistory(path)) => history.push(&path),
        None => {}
    }
}
