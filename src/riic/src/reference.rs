//! Hardcoded reference data
//!
//! Display-name fixes for operators whose in-game appellation is ambiguous or
//! romanized differently, and the colors and exclusions for base facilities.

use phf::{phf_map, phf_set, Map, Set};

/// Operators shown under a different name than their source appellation
pub static NAME_OVERRIDES: Map<&'static str, &'static str> = phf_map! {
    "char_118_yuki" => "Shirayuki",
    "char_196_sunbr" => "Gummy",
    "char_115_headbr" => "Zima",
    "char_195_glassb" => "Istina",
    "char_197_poca" => "Rosa",
    "char_1001_amiya2" => "Amiya (Guard)",
    "char_4055_bgsnow" => "Pozyomka",
    "char_4064_mlynar" => "Mlynar",
};

/// Room types that are never planned, by lowercase id
pub static IGNORED_FACILITIES: Set<&'static str> = phf_set! {
    "elevator",
    "corridor",
};

/// Theme color of each plannable room type, by uppercase id
pub static FACILITY_COLORS: Map<&'static str, &'static str> = phf_map! {
    "CONTROL" => "#005752",
    "DORMITORY" => "#21cdcb",
    "HIRE" => "#565656",
    "MANUFACTURE" => "#ffd800",
    "MEETING" => "#dd653f",
    "POWER" => "#8fc31f",
    "TRADING" => "#0075a9",
    "TRAINING" => "#7d0022",
    "WORKSHOP" => "#e3eb00",
};

/// Get the static display name override for a character id
pub fn name_override(char_id: &str) -> Option<&'static str> {
    NAME_OVERRIDES.get(char_id).copied()
}

/// Whether a room id is excluded from facility output
pub fn is_ignored_facility(room_id: &str) -> bool {
    IGNORED_FACILITIES.contains(room_id.to_ascii_lowercase().as_str())
}

/// Get the color of a room type, matching the id case-insensitively
pub fn facility_color(room_id: &str) -> Option<&'static str> {
    FACILITY_COLORS
        .get(room_id.to_ascii_uppercase().as_str())
        .copied()
}
