//! Deserializers for numbers the game data stores either as integers or as
//! tagged strings such as `"TIER_6"` and `"PHASE_2"`

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrTag {
    Number(u32),
    Tag(String),
}

fn number_or_tag<'de, D>(deserializer: D, prefix: &str, expected: &'static str) -> Result<NumberOrTag, D::Error>
where
    D: Deserializer<'de>,
{
    let value = NumberOrTag::deserialize(deserializer)?;
    if let NumberOrTag::Tag(tag) = &value {
        let valid = tag
            .strip_prefix(prefix)
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()));
        if !valid {
            return Err(de::Error::invalid_value(Unexpected::Str(tag), &expected));
        }
    }
    Ok(value)
}

fn tag_number<E: de::Error>(tag: &str, prefix: &str, expected: &'static str) -> Result<u32, E> {
    tag[prefix.len()..]
        .parse()
        .map_err(|_| E::invalid_value(Unexpected::Str(tag), &expected))
}

/// Zero-based rarity: an integer, or `"TIER_n"` meaning `n - 1`
pub(crate) fn rarity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    const EXPECTED: &str = "an integer or a string like \"TIER_n\" with n >= 1";

    match number_or_tag(deserializer, "TIER_", EXPECTED)? {
        NumberOrTag::Number(n) => Ok(n),
        NumberOrTag::Tag(tag) => match tag_number::<D::Error>(&tag, "TIER_", EXPECTED)? {
            0 => Err(de::Error::invalid_value(Unexpected::Str(&tag), &EXPECTED)),
            n => Ok(n - 1),
        },
    }
}

/// Elite phase: an integer, or `"PHASE_n"` meaning `n`
pub(crate) fn phase<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    const EXPECTED: &str = "an integer or a string like \"PHASE_n\"";

    match number_or_tag(deserializer, "PHASE_", EXPECTED)? {
        NumberOrTag::Number(n) => Ok(n),
        NumberOrTag::Tag(tag) => tag_number::<D::Error>(&tag, "PHASE_", EXPECTED),
    }
}
