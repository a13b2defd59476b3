//! Champion catalog records and the one-shot collection lifecycle.
//!
//! # Design
//! - Decode the whole payload or nothing; one malformed record rejects the catalog.
//! - Wire DTOs stay private so views only ever see validated [`Character`] values.
//! - The collection settles once; nothing here refreshes or retries.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::rc::Rc;
use thiserror::Error;

/// Per-champion ratings, conventionally in the range 0–10.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterStats {
    /// Physical damage rating.
    pub attack: i32,
    /// Toughness rating.
    pub defense: i32,
    /// Ability power rating.
    pub magic: i32,
    /// How hard the champion is to play.
    pub difficulty: i32,
}

impl CharacterStats {
    /// Labelled stat rows in display order.
    #[must_use]
    pub const fn rows(&self) -> [(&'static str, i32); 4] {
        [
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Magic", self.magic),
            ("Difficulty", self.difficulty),
        ]
    }
}

/// A playable champion as shown in the grid and detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    /// Display name (`Kai'Sa`).
    pub name: String,
    /// Epithet shown under the name.
    pub title: String,
    /// Square icon file name (`Kaisa.png`).
    pub image_file_name: String,
    /// Stable catalog identifier (`Kaisa`).
    pub id: String,
    /// Short lore text.
    pub blurb: String,
    /// Ratings rendered as bars.
    pub stats: CharacterStats,
    /// Role tags in catalog order.
    pub tags: Vec<String>,
}

impl Character {
    /// Identifier used in the address bar for this champion.
    #[must_use]
    pub fn slug(&self) -> String {
        self.id.to_lowercase()
    }
}

#[derive(Deserialize)]
struct CatalogDto {
    data: BTreeMap<String, ChampionDto>,
}

#[derive(Deserialize)]
struct ChampionDto {
    id: String,
    name: String,
    title: String,
    blurb: String,
    image: ImageDto,
    info: InfoDto,
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct ImageDto {
    full: String,
}

#[derive(Deserialize)]
struct InfoDto {
    attack: i32,
    defense: i32,
    magic: i32,
    difficulty: i32,
}

impl ChampionDto {
    fn into_character(self) -> Character {
        Character {
            name: self.name,
            title: self.title,
            image_file_name: self.image.full,
            id: self.id,
            blurb: self.blurb,
            stats: CharacterStats {
                attack: self.info.attack,
                defense: self.info.defense,
                magic: self.info.magic,
                difficulty: self.info.difficulty,
            },
            tags: self.tags,
        }
    }
}

/// Reasons the catalog could not be turned into characters.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint answered HTTP {0}")]
    Status(u16),
    /// The body was not a well-formed catalog document.
    #[error("catalog payload rejected: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a `{ "data": { <id>: <record>, ... } }` document.
///
/// Records come back ordered by their map key, so the grid order is stable for a
/// given payload. Unknown fields are ignored.
///
/// # Errors
/// Returns [`CatalogError::Decode`] when the body is not JSON or any record lacks a
/// required field.
pub fn decode_catalog(body: &str) -> Result<Vec<Character>, CatalogError> {
    let catalog: CatalogDto = serde_json::from_str(body)?;
    Ok(catalog.data.into_values().map(ChampionDto::into_character).collect())
}

/// Lifecycle of the one-time catalog fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CollectionState {
    /// Store bootstrap before the app has started the fetch.
    #[default]
    NotStarted,
    /// Request in flight.
    Loading,
    /// Catalog decoded.
    Loaded(Rc<[Character]>),
    /// Transport or decode failure, as a readable message.
    Failed(String),
}

impl CollectionState {
    /// Convert a fetch outcome into its terminal state.
    pub fn settle<E: Display>(result: Result<Vec<Character>, E>) -> Self {
        match result {
            Ok(characters) => Self::Loaded(characters.into()),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Whether the fetch has reached `Loaded` or `Failed`.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }
}
