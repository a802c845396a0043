//! Operator records
//!
//! Reads `character_table.json` entries, decides which of them are playable
//! operators, and builds the flattened operator list for `chars.json`.

use crate::error::DataError;
use crate::reference;
use crate::skill::{BuffChain, CharBuffs};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Character class as named in the game data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Profession {
    Pioneer, // Vanguard
    Warrior, // Guard
    Tank,    // Defender
    Sniper,
    Caster,
    Medic,
    Support, // Supporter
    Special, // Specialist
    Token,
    Trap,
    #[serde(other)]
    Other,
}

/// The two fields that decide whether a character is an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CharacterKind {
    pub profession: Profession,
    #[serde(rename = "isNotObtainable")]
    pub is_not_obtainable: bool,
}

impl CharacterKind {
    pub fn is_operator(&self) -> bool {
        is_operator(self)
    }
}

/// Playable characters: not a token, not a trap, and obtainable
pub fn is_operator(kind: &CharacterKind) -> bool {
    !kind.is_not_obtainable && !matches!(kind.profession, Profession::Token | Profession::Trap)
}

/// One entry of the character table
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub appellation: String,
    /// Zero-based rarity as stored in the source
    #[serde(deserialize_with = "crate::de::rarity")]
    pub rarity: u32,
    #[serde(flatten)]
    pub kind: CharacterKind,
}

impl CharacterRecord {
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// One-based rarity shown to users
    pub fn display_rarity(&self) -> u32 {
        self.rarity.saturating_add(1)
    }
}

/// Character table keyed by character id, in source order
pub type CharacterTable = IndexMap<String, CharacterRecord>;

/// An operator as written to `chars.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator<S> {
    pub char_id: String,
    pub name: String,
    pub rarity: u32,
    pub skills: Vec<S>,
}

/// Resolve the display name of a character
///
/// Extra overrides are consulted first, then the static table, then the
/// source appellation.
pub fn display_name<'a>(
    char_id: &str,
    appellation: &'a str,
    extra_overrides: &'a BTreeMap<String, String>,
) -> &'a str {
    extra_overrides
        .get(char_id)
        .map(String::as_str)
        .or_else(|| reference::name_override(char_id))
        .unwrap_or(appellation)
}

/// Build the operator list from the character and base-skill tables
///
/// `flatten` turns one operator's skill chains into output skill entries.
/// Operators keep source order. An operator without a base-skills entry is a
/// data error.
pub fn build_operators<S, F>(
    characters: &CharacterTable,
    base_skills: &IndexMap<String, CharBuffs>,
    extra_overrides: &BTreeMap<String, String>,
    mut flatten: F,
) -> Result<Vec<Operator<S>>, DataError>
where
    F: FnMut(&[BuffChain]) -> Result<Vec<S>, DataError>,
{
    characters
        .iter()
        .filter(|(_, record)| record.is_operator())
        .map(|(char_id, record)| {
            let buffs = base_skills
                .get(char_id)
                .ok_or_else(|| DataError::MissingBaseSkills(char_id.clone()))?;

            Ok(Operator {
                char_id: char_id.clone(),
                name: display_name(char_id, &record.appellation, extra_overrides).to_string(),
                rarity: record.display_rarity(),
                skills: flatten(&buffs.buff_char)?,
            })
        })
        .collect()
}
