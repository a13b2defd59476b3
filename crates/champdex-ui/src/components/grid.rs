//! Champion grid and its tiles.
//!
//! # Design
//! - Tiles raise navigation intents; they never touch history themselves.
//! - Column count comes from the current breakpoint via a CSS variable.

use crate::core::catalog::Character;
use crate::core::config::CatalogConfig;
use crate::core::routing::Route;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CharacterGridProps {
    pub characters: Rc<[Character]>,
    pub config: Rc<CatalogConfig>,
    pub columns: u8,
    /// Slug of the champion shown in the detail panel, if any.
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(CharacterGrid)]
pub(crate) fn character_grid(props: &CharacterGridProps) -> Html {
    let style = format!("--grid-columns: {};", props.columns);
    html! {
        <ul class="champion-grid" style={style}>
            {for props.characters.iter().map(|character| {
                let slug = character.slug();
                let selected = props.selected.as_deref() == Some(slug.as_str());
                html! {
                    <CharacterTile
                        key={slug}
                        character={character.clone()}
                        thumbnail={props.config.thumbnail_url(&character.image_file_name)}
                        selected={selected}
                        on_navigate={props.on_navigate.clone()}
                    />
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CharacterTileProps {
    pub character: Character,
    pub thumbnail: AttrValue,
    #[prop_or_default]
    pub selected: bool,
    pub on_navigate: Callback<Route>,
}

#[function_component(CharacterTile)]
fn character_tile(props: &CharacterTileProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        let route = Route::detail(props.character.slug());
        Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
    };
    let character = &props.character;
    html! {
        <li class={classes!("champion-tile", props.selected.then_some("selected"))}>
            <button type="button" {onclick}>
                <img src={props.thumbnail.clone()} alt={character.name.clone()} loading="lazy" />
                <strong>{character.name.clone()}</strong>
                <span class="muted">{character.title.clone()}</span>
            </button>
        </li>
    }
}
