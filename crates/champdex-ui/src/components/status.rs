//! Placeholder panels for pending, failed, and unmatched states.
//!
//! # Design
//! - Keep copy prop-driven; these panels never trigger retries.

use crate::core::routing::Route;
use yew::prelude::*;

#[function_component(LoadingIndicator)]
pub(crate) fn loading_indicator() -> Html {
    html! {
        <div class="status-panel">
            <span class="loading loading-spinner" role="status" aria-label="Loading champions" />
            <p class="muted">{"Loading champions…"}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FailureNoticeProps {
    pub message: AttrValue,
}

#[function_component(FailureNotice)]
pub(crate) fn failure_notice(props: &FailureNoticeProps) -> Html {
    html! {
        <div class="status-panel error" role="alert">
            <h4>{"Could not load champions"}</h4>
            <p class="muted">{props.message.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NotFoundNoticeProps {
    pub id: AttrValue,
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundNotice)]
pub(crate) fn not_found_notice(props: &NotFoundNoticeProps) -> Html {
    let back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Home))
    };
    html! {
        <section class="detail-panel placeholder">
            <h4>{"No champion found"}</h4>
            <p class="muted">{format!("Nothing matches \"{}\".", props.id)}</p>
            <button class="ghost" type="button" onclick={back}>{"Back to champions"}</button>
        </section>
    }
}
