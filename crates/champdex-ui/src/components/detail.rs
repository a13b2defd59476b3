use crate::core::catalog::Character;
use crate::core::config::CatalogConfig;
use crate::core::logic::percent_of_ten;
use crate::core::routing::Route;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DetailPanelProps {
    pub character: Character,
    pub config: Rc<CatalogConfig>,
    pub on_navigate: Callback<Route>,
}

#[function_component(DetailPanel)]
pub(crate) fn detail_panel(props: &DetailPanelProps) -> Html {
    let character = &props.character;
    let on_close = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Home))
    };
    html! {
        <section class="detail-panel">
            <header>
                <div>
                    <h2>{character.name.clone()}</h2>
                    <p class="muted">{character.title.clone()}</p>
                </div>
                <button
                    class="ghost"
                    type="button"
                    onclick={on_close}
                    aria-label="Back to champions"
                >
                    {"✕"}
                </button>
            </header>
            <img
                class="portrait"
                src={props.config.portrait_url(&character.image_file_name)}
                alt={character.name.clone()}
            />
            <ul class="tags">
                {for character.tags.iter().map(|tag| html! {
                    <li class="pill">{tag.clone()}</li>
                })}
            </ul>
            <p class="blurb">{character.blurb.clone()}</p>
            <dl class="stats">
                {for character.stats.rows().into_iter().map(|(label, value)| html! {
                    <StatBar label={label} value={value} />
                })}
            </dl>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatBarProps {
    pub label: &'static str,
    pub value: i32,
}

#[function_component(StatBar)]
fn stat_bar(props: &StatBarProps) -> Html {
    let width = format!("width: {}%;", percent_of_ten(props.value));
    html! {
        <>
            <dt>{props.label}</dt>
            <dd>
                <div class="stat-bar" title={format!("{}/10", props.value)}>
                    <span style={width} />
                </div>
            </dd>
        </>
    }
}
