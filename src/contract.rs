//! # contract: the monster source interface and the shapes that cross it
//!
//! The pipeline only ever talks to the remote API through [`MonsterSource`],
//! so tests can swap in a [`MockMonsterSource`] and real runs use
//! [`crate::download::SrdClient`].
//!
//! ## Types
//! - [`Reference`]: one entry of the monster index, as returned by the list endpoint.
//! - [`Monster`]: one record in the application's schema.
//! - [`MonsterDocument`]: the file written at the end of a run.
//!
//! Detail responses cross the trait as raw `serde_json::Value`; they are
//! validated into a typed record by [`crate::preprocess::map_monster`].

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExpandError;

/// Provenance tag stamped on every record this tool produces.
pub const SOURCE_TAG: &str = "SRD";

/// Armor class used when the source gives none.
pub const DEFAULT_ARMOR_CLASS: u32 = 10;

/// One monster in the index listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Display name, also used as the identifier in progress output.
    pub name: String,
    /// Path (e.g. `/api/monsters/goblin`) or absolute URL of the detail record.
    pub url: String,
}

impl Reference {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Movement modes to distances, copied from the source as-is and in source
/// order (`{"walk": "30 ft.", "fly": "60 ft.", "hover": true}`).
pub type Speed = serde_json::Map<String, Value>;

/// A monster in the application's schema. Field order here is the field
/// order in the written document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub slug: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
    pub alignment: String,
    pub armor_class: u32,
    pub hit_points: u32,
    pub hit_dice: String,
    pub speed: Speed,
    #[serde(rename = "str")]
    pub strength: u32,
    #[serde(rename = "dex")]
    pub dexterity: u32,
    #[serde(rename = "con")]
    pub constitution: u32,
    #[serde(rename = "int")]
    pub intelligence: u32,
    #[serde(rename = "wis")]
    pub wisdom: u32,
    #[serde(rename = "cha")]
    pub charisma: u32,
    pub challenge_rating: serde_json::Number,
    pub source: String,
}

/// The aggregate output file: `{"monsters": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterDocument {
    pub monsters: Vec<Monster>,
}

/// Read access to a monster API.
///
/// Implementations perform exactly one request per call and never retry.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait MonsterSource: Send + Sync {
    /// Fetch the full monster index, in the order the API returns it.
    async fn list_monsters(&self) -> Result<Vec<Reference>, ExpandError>;

    /// Fetch the raw detail record behind one index entry.
    async fn fetch_monster(&self, reference: &Reference) -> Result<Value, ExpandError>;
}
