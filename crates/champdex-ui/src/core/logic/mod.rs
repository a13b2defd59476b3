//! Pure UI helpers extracted from components for non-wasm testing.

use crate::core::breakpoints::DeviceClass;
use crate::core::catalog::{Character, CollectionState};
use crate::core::routing::{Route, resolve_character};
use crate::core::store::ViewState;
use std::rc::Rc;

/// Application name used in the document title.
pub const APP_TITLE: &str = "Champdex";

/// What the renderer should draw for a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPlan<'a> {
    /// Catalog not loaded yet: loading indicator only.
    Pending,
    /// Catalog fetch failed.
    Failed {
        /// Readable failure description.
        message: &'a str,
    },
    /// The champion grid.
    Grid {
        /// Every champion, in catalog order.
        characters: &'a Rc<[Character]>,
    },
    /// A resolved champion.
    Detail {
        /// Champion shown in the detail panel.
        character: &'a Character,
        /// Grid shown beside the panel; `None` on phones.
        grid: Option<&'a Rc<[Character]>>,
    },
    /// A detail route whose identifier matched nothing.
    NotFound {
        /// Identifier taken from the address bar.
        id: &'a str,
        /// Grid shown beside the message; `None` on phones.
        grid: Option<&'a Rc<[Character]>>,
    },
}

/// Decide what to render. Every collection/route pairing is spelled out.
#[must_use]
pub fn plan(state: &ViewState) -> RenderPlan<'_> {
    match (&state.collection, &state.route) {
        (
            CollectionState::NotStarted | CollectionState::Loading,
            Route::Home | Route::Detail { .. },
        ) => RenderPlan::Pending,
        (CollectionState::Failed(message), Route::Home | Route::Detail { .. }) => {
            RenderPlan::Failed {
                message: message.as_str(),
            }
        }
        (CollectionState::Loaded(characters), Route::Home) => RenderPlan::Grid {
            characters,
        },
        (CollectionState::Loaded(characters), Route::Detail { id }) => {
            let grid = match state.device {
                DeviceClass::Phone => None,
                DeviceClass::NotPhone => Some(characters),
            };
            match resolve_character(&state.route, characters) {
                Some(character) => RenderPlan::Detail { character, grid },
                None => RenderPlan::NotFound {
                    id: id.as_str(),
                    grid,
                },
            }
        }
    }
}

/// Document title for a render plan.
#[must_use]
pub fn document_title(plan: &RenderPlan<'_>) -> String {
    match plan {
        RenderPlan::Pending | RenderPlan::Failed { .. } | RenderPlan::Grid { .. } => {
            APP_TITLE.to_string()
        }
        RenderPlan::Detail { character, .. } => format!("{} | {APP_TITLE}", character.name),
        RenderPlan::NotFound { .. } => format!("Not found | {APP_TITLE}"),
    }
}

/// Keyboard shortcuts the shell reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Close the detail view and return to the grid.
    DismissDetail,
}

/// Map a key press to a shortcut given the current route.
#[must_use]
pub fn interpret_key(key: &str, route: &Route) -> Option<KeyOutcome> {
    match (key, route) {
        ("Escape", Route::Detail { .. }) => Some(KeyOutcome::DismissDetail),
        _ => None,
    }
}

/// Width of a stat bar as a percentage of 10, clamped for display.
#[must_use]
pub fn percent_of_ten(value: i32) -> u8 {
    u8::try_from(value.clamp(0, 10) * 10).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::breakpoints::Viewport;
    use crate::core::catalog::CharacterStats;

    fn champion(id: &str) -> Character {
        Character {
            name: id.to_string(),
            title: format!("title of {id}"),
            image_file_name: format!("{id}.png"),
            id: id.to_string(),
            blurb: String::new(),
            stats: CharacterStats::default(),
            tags: vec![],
        }
    }

    fn loaded(route: Route, device: DeviceClass) -> ViewState {
        let roster: Rc<[Character]> = vec![champion("Ahri"), champion("Lux")].into();
        ViewState {
            collection: CollectionState::Loaded(roster),
            route,
            device,
        }
    }

    #[test]
    fn pending_collection_shows_loading_for_every_route() {
        for route in [Route::Home, Route::detail("ahri")] {
            let state = ViewState {
                route,
                ..ViewState::initial("/", Viewport::new(1200, 800))
            };
            assert_eq!(plan(&state), RenderPlan::Pending);
        }
        assert_eq!(plan(&ViewState::default()), RenderPlan::Pending);
    }

    #[test]
    fn failure_wins_over_route() {
        let state = ViewState {
            collection: CollectionState::Failed("network error".into()),
            route: Route::detail("ahri"),
            device: DeviceClass::NotPhone,
        };
        assert_eq!(
            plan(&state),
            RenderPlan::Failed {
                message: "network error"
            }
        );
    }

    #[test]
    fn home_shows_full_grid_on_any_device() {
        for device in [DeviceClass::Phone, DeviceClass::NotPhone] {
            let state = loaded(Route::Home, device);
            match plan(&state) {
                RenderPlan::Grid { characters } => assert_eq!(characters.len(), 2),
                other => panic!("unexpected plan {other:?}"),
            }
        }
    }

    #[test]
    fn detail_keeps_grid_only_off_phone() {
        let desktop = loaded(Route::detail("ahri"), DeviceClass::NotPhone);
        match plan(&desktop) {
            RenderPlan::Detail { character, grid } => {
                assert_eq!(character.id, "Ahri");
                assert_eq!(grid.map(|roster| roster.len()), Some(2));
            }
            other => panic!("unexpected plan {other:?}"),
        }

        let phone = loaded(Route::detail("ahri"), DeviceClass::Phone);
        match plan(&phone) {
            RenderPlan::Detail { character, grid } => {
                assert_eq!(character.id, "Ahri");
                assert!(grid.is_none());
            }
            other => panic!("unexpected plan {other:?}"),
        }
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        let state = loaded(Route::detail("nope"), DeviceClass::NotPhone);
        match plan(&state) {
            RenderPlan::NotFound { id, grid } => {
                assert_eq!(id, "nope");
                assert!(grid.is_some());
            }
            other => panic!("unexpected plan {other:?}"),
        }
    }

    #[test]
    fn titles_follow_the_plan() {
        let detail = loaded(Route::detail("lux"), DeviceClass::NotPhone);
        assert_eq!(document_title(&plan(&detail)), "Lux | Champdex");
        let missing = loaded(Route::detail("nope"), DeviceClass::NotPhone);
        assert_eq!(document_title(&plan(&missing)), "Not found | Champdex");
        assert_eq!(document_title(&RenderPlan::Pending), "Champdex");
    }

    #[test]
    fn escape_dismisses_only_detail_routes() {
        assert_eq!(
            interpret_key("Escape", &Route::detail("ahri")),
            Some(KeyOutcome::DismissDetail)
        );
        assert_eq!(interpret_key("Escape", &Route::Home), None);
        assert_eq!(interpret_key("Enter", &Route::detail("ahri")), None);
    }

    #[test]
    fn stat_bars_are_clamped_percentages() {
        assert_eq!(percent_of_ten(0), 0);
        assert_eq!(percent_of_ten(7), 70);
        assert_eq!(percent_of_ten(10), 100);
        assert_eq!(percent_of_ten(14), 100);
        assert_eq!(percent_of_ten(-3), 0);
    }
}
