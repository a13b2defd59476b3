use crate::core::breakpoints::Breakpoint;
use crate::core::logic::APP_TITLE;
use crate::core::routing::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub breakpoint: Breakpoint,
    /// Phone layout: the detail panel replaces the grid.
    pub compact: bool,
    pub on_navigate: Callback<Route>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(Route::Home);
        })
    };
    html! {
        <div class={classes!(
            "app-shell",
            format!("bp-{}", props.breakpoint.name),
            props.compact.then_some("compact"),
        )}>
            <header class="topbar">
                <a class="brand" href="/" onclick={go_home}>
                    <strong>{APP_TITLE}</strong>
                </a>
            </header>
            <main class="content">
                {for props.children.iter()}
            </main>
        </div>
    }
}
