//! Base skills
//!
//! `building_data.json` stores each operator's base skills as chains of
//! tiers, each tier unlocked at an elite phase and level. These are flattened
//! into one ordered list per operator, either with the skill text inlined or
//! with a reference into a shared skill table.

use crate::error::DataError;
use crate::facility::RoomRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The parts of `building_data.json` the pipeline reads
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingData {
    pub chars: IndexMap<String, CharBuffs>,
    pub buffs: IndexMap<String, BuffRecord>,
    #[serde(default)]
    pub rooms: IndexMap<String, RoomRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharBuffs {
    pub buff_char: Vec<BuffChain>,
}

/// One base skill slot and its upgrade tiers
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffChain {
    pub buff_data: Vec<BuffTier>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffTier {
    pub buff_id: String,
    pub cond: UnlockCondition,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UnlockCondition {
    #[serde(deserialize_with = "crate::de::phase")]
    pub phase: u32,
    pub level: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffRecord {
    pub buff_name: String,
    pub skill_icon: String,
    pub description: String,
}

/// Skill text as shown in the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfo {
    pub name: String,
    pub icon_id: String,
    pub description: String,
}

impl From<&BuffRecord> for SkillInfo {
    fn from(record: &BuffRecord) -> Self {
        SkillInfo {
            name: record.buff_name.clone(),
            icon_id: record.skill_icon.clone(),
            description: record.description.clone(),
        }
    }
}

/// A skill tier with its text inlined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSkill {
    pub elite: u32,
    pub level: u32,
    #[serde(flatten)]
    pub info: SkillInfo,
}

/// A skill tier referencing the shared skill table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRef {
    pub elite: u32,
    pub level: u32,
    pub skill_id: String,
}

/// Skill text lookup over both locales, English first
pub struct SkillBook<'a> {
    en: &'a IndexMap<String, BuffRecord>,
    cn: &'a IndexMap<String, BuffRecord>,
}

impl<'a> SkillBook<'a> {
    pub fn new(en: &'a IndexMap<String, BuffRecord>, cn: &'a IndexMap<String, BuffRecord>) -> Self {
        Self { en, cn }
    }

    pub fn lookup(&self, skill_id: &str) -> Result<&'a BuffRecord, DataError> {
        self.en
            .get(skill_id)
            .or_else(|| self.cn.get(skill_id))
            .ok_or_else(|| DataError::MissingSkill(skill_id.to_string()))
    }
}

/// Skills keyed by id in first-seen order, written as `skills.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillTable(IndexMap<String, SkillInfo>);

impl SkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill_id: &str) -> Option<&SkillInfo> {
        self.0.get(skill_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillInfo)> {
        self.0.iter().map(|(id, info)| (id.as_str(), info))
    }

    /// Record a skill unless it is already present
    fn insert_with(&mut self, skill_id: &str, info: impl FnOnce() -> SkillInfo) {
        if !self.0.contains_key(skill_id) {
            self.0.insert(skill_id.to_string(), info());
        }
    }
}

fn tiers(chains: &[BuffChain]) -> impl Iterator<Item = &BuffTier> {
    chains.iter().flat_map(|chain| chain.buff_data.iter())
}

/// Flatten skill chains with each tier's text inlined
pub fn flatten_inline(chains: &[BuffChain], book: &SkillBook<'_>) -> Result<Vec<InlineSkill>, DataError> {
    tiers(chains)
        .map(|tier| {
            let record = book.lookup(&tier.buff_id)?;
            Ok(InlineSkill {
                elite: tier.cond.phase,
                level: tier.cond.level,
                info: record.into(),
            })
        })
        .collect()
}

/// Flatten skill chains into references, adding each new skill to `table`
pub fn flatten_referenced(
    chains: &[BuffChain],
    book: &SkillBook<'_>,
    table: &mut SkillTable,
) -> Result<Vec<SkillRef>, DataError> {
    tiers(chains)
        .map(|tier| {
            let record = book.lookup(&tier.buff_id)?;
            table.insert_with(&tier.buff_id, || record.into());
            Ok(SkillRef {
                elite: tier.cond.phase,
                level: tier.cond.level,
                skill_id: tier.buff_id.clone(),
            })
        })
        .collect()
}
