//! Base facilities
//!
//! Room types from `building_data.json`, reduced to what the planner needs:
//! a color and the per-level power cost and operator capacity.

use crate::error::DataError;
use crate::reference;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RoomRecord {
    pub name: String,
    pub phases: Vec<RoomPhase>,
}

/// Stats of a room at one upgrade level
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPhase {
    pub electricity: i32,
    pub max_stationed_num: u32,
}

/// A facility as written to `facilities.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facility {
    /// Lowercase room id, also the icon id
    pub id: String,
    pub name: String,
    pub color: &'static str,
    pub power: Vec<i32>,
    pub capacity: Vec<u32>,
}

/// Convert the room table, dropping ignored room types
pub fn extract_facilities(rooms: &IndexMap<String, RoomRecord>) -> Result<Vec<Facility>, DataError> {
    rooms
        .iter()
        .filter(|(room_id, _)| !reference::is_ignored_facility(room_id))
        .map(|(room_id, room)| {
            let color = reference::facility_color(room_id)
                .ok_or_else(|| DataError::MissingFacilityColor(room_id.clone()))?;

            Ok(Facility {
                id: room_id.to_ascii_lowercase(),
                name: room.name.clone(),
                color,
                power: room.phases.iter().map(|p| p.electricity).collect(),
                capacity: room.phases.iter().map(|p| p.max_stationed_num).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rooms(value: serde_json::Value) -> IndexMap<String, RoomRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_power_plant() {
        let rooms = rooms(json!({
            "POWER": {
                "id": "POWER",
                "name": "Power Plant",
                "phases": [
                    {"electricity": 60, "maxStationedNum": 1, "manpowerCost": 0},
                    {"electricity": 130, "maxStationedNum": 1, "manpowerCost": 0},
                    {"electricity": 270, "maxStationedNum": 1, "manpowerCost": 0},
                ],
            },
        }));

        let facilities = extract_facilities(&rooms).unwrap();

        assert_eq!(
            facilities,
            vec![Facility {
                id: "power".to_string(),
                name: "Power Plant".to_string(),
                color: "#8fc31f",
                power: vec![60, 130, 270],
                capacity: vec![1, 1, 1],
            }]
        );
    }

    #[test]
    fn test_ignored_rooms_never_appear() {
        let phase = json!([{"electricity": 0, "maxStationedNum": 0}]);
        let rooms = rooms(json!({
            "ELEVATOR": {"name": "Elevator", "phases": phase.clone()},
            "corridor": {"name": "Corridor", "phases": phase.clone()},
            "TRADING": {"name": "Trading Post", "phases": phase.clone()},
            "elevator": {"name": "Elevator", "phases": phase},
        }));

        let facilities = extract_facilities(&rooms).unwrap();

        let ids: Vec<_> = facilities.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["trading"]);
    }

    #[test]
    fn test_unknown_room_color_is_fatal() {
        let rooms = rooms(json!({
            "GARDEN": {"name": "Garden", "phases": []},
        }));

        assert_eq!(
            extract_facilities(&rooms).unwrap_err(),
            DataError::MissingFacilityColor("GARDEN".to_string())
        );
    }

    #[test]
    fn test_facility_json_shape() {
        let facility = Facility {
            id: "control".to_string(),
            name: "Control Center".to_string(),
            color: "#005752",
            power: vec![0, 0],
            capacity: vec![1, 2],
        };
        assert_eq!(
            serde_json::to_value(&facility).unwrap(),
            json!({"id": "control", "name": "Control Center", "color": "#005752", "power": [0, 0], "capacity": [1, 2]})
        );
    }
}
