//! Record mapping: SRD detail record → application [`Monster`].
//!
//! The detail record is first deserialized into [`SourceMonster`], which
//! spells out which fields are required and which are optional. Every way the
//! mapping can fail is therefore a serde error on that struct and surfaces as
//! [`ExpandError::Schema`]. Once deserialized, conversion is total.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::contract::{Monster, Speed, DEFAULT_ARMOR_CLASS, SOURCE_TAG};
use crate::error::ExpandError;

/// One armor class entry, e.g. `{"type": "natural", "value": 15}`. Only
/// `value` is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ArmorClassEntry {
    pub value: u32,
}

/// The subset of an SRD monster detail record that we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceMonster {
    pub index: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub subtype: Option<String>,
    pub alignment: String,
    #[serde(default)]
    pub armor_class: Option<Vec<ArmorClassEntry>>,
    pub hit_points: u32,
    pub hit_dice: String,
    pub speed: Speed,
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
    pub challenge_rating: serde_json::Number,
}

impl From<SourceMonster> for Monster {
    fn from(src: SourceMonster) -> Self {
        let armor_class = src
            .armor_class
            .as_deref()
            .and_then(<[ArmorClassEntry]>::first)
            .map_or(DEFAULT_ARMOR_CLASS, |entry| entry.value);

        Monster {
            slug: src.index,
            name: src.name,
            size: src.size,
            kind: src.kind,
            subtype: src.subtype.unwrap_or_default(),
            alignment: src.alignment,
            armor_class,
            hit_points: src.hit_points,
            hit_dice: src.hit_dice,
            speed: src.speed,
            strength: src.strength,
            dexterity: src.dexterity,
            constitution: src.constitution,
            intelligence: src.intelligence,
            wisdom: src.wisdom,
            charisma: src.charisma,
            challenge_rating: src.challenge_rating,
            source: SOURCE_TAG.to_string(),
        }
    }
}

/// Maps one raw detail record. Deterministic and side-effect free apart from
/// debug tracing.
pub fn map_monster(record: &Value) -> Result<Monster, ExpandError> {
    let label = record
        .get("index")
        .and_then(Value::as_str)
        .unwrap_or("<unknown>");

    let source = SourceMonster::deserialize(record).map_err(|e| {
        error!(monster = %label, error = %e, "[MAP] Record does not match the SRD schema");
        ExpandError::schema(format!("monster record '{label}'"), e)
    })?;

    let monster = Monster::from(source);
    debug!(slug = %monster.slug, armor_class = monster.armor_class, "[MAP] Mapped monster");
    Ok(monster)
}
