//! Address-bar routing: path <-> [`Route`] and route -> champion lookup.
//!
//! # Design
//! - Only the first path segment matters; it is percent-decoded into the identifier.
//! - Undecodable segments fall back to [`Route::Home`]; they are never an error.
//! - A well-formed identifier that matches nothing stays a `Detail` route and is
//!   presented as "not found" by the view.

use crate::core::catalog::Character;

/// Navigational state derived from the URL path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// The champion grid.
    #[default]
    Home,
    /// A single champion, by URL identifier.
    Detail {
        /// Percent-decoded identifier from the first path segment.
        id: String,
    },
}

impl Route {
    /// Route for a champion's detail view.
    #[must_use]
    pub fn detail(id: impl Into<String>) -> Self {
        Self::Detail { id: id.into() }
    }
}

/// Derive a route from a location path such as `/ahri`.
///
/// Query strings and fragments are ignored when present.
#[must_use]
pub fn parse_route(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segment = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    if segment.is_empty() {
        return Route::Home;
    }
    match urlencoding::decode(segment) {
        Ok(id) if !id.is_empty() => Route::Detail { id: id.into_owned() },
        _ => Route::Home,
    }
}

/// Render a route back into a location path.
#[must_use]
pub fn format_route(route: &Route) -> String {
    match route {
        Route::Home => "/".to_string(),
        Route::Detail { id } => format!("/{}", urlencoding::encode(id)),
    }
}

/// True when `path` names something but still parses to [`Route::Home`].
#[must_use]
pub fn is_malformed_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    !path.trim_matches('/').is_empty() && parse_route(path) == Route::Home
}

/// Look up the champion a detail route points at.
///
/// The identifier is matched case-insensitively against the stable `id` first and
/// the display `name` second, so both `/monkeyking` and legacy `/wukong` links
/// resolve. Home routes resolve to nothing.
#[must_use]
pub fn resolve_character<'a>(route: &Route, characters: &'a [Character]) -> Option<&'a Character> {
    let Route::Detail { id } = route else {
        return None;
    };
    let wanted = id.to_lowercase();
    characters
        .iter()
        .find(|character| character.id.to_lowercase() == wanted)
        .or_else(|| {
            characters
                .iter()
                .find(|character| character.name.to_lowercase() == wanted)
        })
}
