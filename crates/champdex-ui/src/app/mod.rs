use crate::components::detail::DetailPanel;
use crate::components::grid::CharacterGrid;
use crate::components::shell::AppShell;
use crate::components::status::{FailureNotice, LoadingIndicator, NotFoundNotice};
use crate::core::breakpoints::{DeviceClass, for_width};
use crate::core::catalog::{Character, CollectionState};
use crate::core::config::CatalogConfig;
use crate::core::logic::{KeyOutcome, RenderPlan, document_title, interpret_key, plan};
use crate::core::routing::{Route, is_malformed_path};
use crate::core::store::{ViewEvent, ViewState, dispatch};
use crate::services::catalog::CatalogClient;
use environment::{current_breakpoint, current_path, current_viewport, load_config};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yewdux::prelude::{Dispatch, use_selector};

mod environment;

/// Shared app context: configuration and the one history handle.
#[derive(Clone)]
pub(crate) struct AppCtx {
    pub config: Rc<CatalogConfig>,
    pub history: Rc<BrowserHistory>,
}

impl PartialEq for AppCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.history, &other.history)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    pub ctx: AppCtx,
}

#[function_component(ChampdexApp)]
pub(crate) fn champdex_app(props: &AppProps) -> Html {
    let ctx = props.ctx.clone();
    let store = Dispatch::<ViewState>::new();
    let breakpoint = use_state_eq(current_breakpoint);
    let state = use_selector(|state: &ViewState| state.clone());

    let on_navigate = {
        let store = store.clone();
        let history = ctx.history.clone();
        Callback::from(move |route: Route| {
            dispatch(&store, &*history, ViewEvent::NavigateRequested(route));
        })
    };

    {
        let store = store.clone();
        let history = ctx.history.clone();
        let endpoint = ctx.config.catalog_url();
        use_effect_with_deps(
            move |_| {
                let client = CatalogClient::new(endpoint);
                console::log!("fetching champion catalog", client.endpoint.clone());
                yew::platform::spawn_local(async move {
                    let settled = CollectionState::settle(client.fetch_collection().await);
                    match &settled {
                        CollectionState::Loaded(characters) => {
                            console::log!("champion catalog loaded", characters.len());
                        }
                        CollectionState::Failed(reason) => {
                            console::error!("champion catalog failed", reason.clone());
                        }
                        CollectionState::NotStarted | CollectionState::Loading => {}
                    }
                    dispatch(&store, &*history, ViewEvent::CollectionSettled(settled));
                });
                || ()
            },
            (),
        );
    }
    {
        let store = store.clone();
        let history = ctx.history.clone();
        use_effect_with_deps(
            move |_| {
                let listener = history.listen({
                    let history = history.clone();
                    move || {
                        let path = current_path(&history);
                        if is_malformed_path(&path) {
                            console::warn!("unreadable champion path, showing list", path.clone());
                        }
                        dispatch(&store, &*history, ViewEvent::LocationChanged(path));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }
    {
        let store = store.clone();
        let history = ctx.history.clone();
        let breakpoint = breakpoint.clone();
        use_effect_with_deps(
            move |_| {
                let handler = EventListener::new(&window(), "resize", move |_event| {
                    let viewport = current_viewport();
                    dispatch(&store, &*history, ViewEvent::WindowResized(viewport));
                    breakpoint.set(for_width(viewport.width));
                });
                move || drop(handler)
            },
            (),
        );
    }
    {
        let store = store.clone();
        let on_navigate = on_navigate.clone();
        use_effect_with_deps(
            move |_| {
                let handler = EventListener::new(&window(), "keydown", move |event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                        return;
                    };
                    match interpret_key(&key, &store.get().route) {
                        Some(KeyOutcome::DismissDetail) => on_navigate.emit(Route::Home),
                        None => {}
                    }
                });
                move || drop(handler)
            },
            (),
        );
    }

    let current = plan(&state);
    {
        let title = document_title(&current);
        let missing = match current {
            RenderPlan::NotFound { id, .. } => Some(id.to_string()),
            RenderPlan::Pending
            | RenderPlan::Failed { .. }
            | RenderPlan::Grid { .. }
            | RenderPlan::Detail { .. } => None,
        };
        use_effect_with_deps(
            move |(title, missing)| {
                document().set_title(title);
                if let Some(id) = missing {
                    console::warn!("no champion matches route", id.clone());
                }
                || ()
            },
            (title, missing),
        );
    }

    let columns = breakpoint.grid_columns;
    let grid = |characters: &Rc<[Character]>, selected: Option<String>| {
        html! {
            <CharacterGrid
                characters={characters.clone()}
                config={ctx.config.clone()}
                columns={columns}
                selected={selected}
                on_navigate={on_navigate.clone()}
            />
        }
    };

    let body = match current {
        RenderPlan::Pending => html! { <LoadingIndicator /> },
        RenderPlan::Failed { message } => html! {
            <FailureNotice message={message.to_string()} />
        },
        RenderPlan::Grid { characters } => grid(characters, None),
        RenderPlan::Detail { character, grid: roster } => html! {
            <div class="split">
                {roster.map(|roster| grid(roster, Some(character.slug()))).unwrap_or_default()}
                <DetailPanel
                    character={character.clone()}
                    config={ctx.config.clone()}
                    on_navigate={on_navigate.clone()}
                />
            </div>
        },
        RenderPlan::NotFound { id, grid: roster } => html! {
            <div class="split">
                {roster.map(|roster| grid(roster, None)).unwrap_or_default()}
                <NotFoundNotice id={id.to_string()} on_navigate={on_navigate.clone()} />
            </div>
        },
    };

    html! {
        <AppShell
            breakpoint={*breakpoint}
            compact={state.device == DeviceClass::Phone}
            on_navigate={on_navigate.clone()}
        >
            {body}
        </AppShell>
    }
}

/// Boot the app: read the environment, seed the store, mount into `#root`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = load_config();
    let history = BrowserHistory::new();
    Dispatch::<ViewState>::new().set(ViewState::initial(
        &current_path(&history),
        current_viewport(),
    ));
    let props = AppProps {
        ctx: AppCtx {
            config: Rc::new(config),
            history: Rc::new(history),
        },
    };
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<ChampdexApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<ChampdexApp>::with_props(props).render();
    }
}
