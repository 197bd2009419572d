use serde::{Deserialize, Serialize};

/// Default viewer position (Taipei), used until a device position is
/// committed.
pub const TAIPEI: Position = Position { latitude: 25.0657976, longitude: 121.5352149 };

/// A geographic coordinate pair. Always committed whole: the store never
/// updates one field without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Position {
    fn default() -> Self {
        TAIPEI
    }
}

/// One row of the service-area city list, in the gateway's own field shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityRecord {
    #[serde(rename = "CityID")]
    pub city_id: String,
    pub city_name: String,
    pub city_code: String,
    pub city: String,
    #[serde(rename = "CountyID")]
    pub county_id: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_taipei() {
        let pos = Position::default();

        assert_eq!(pos.latitude, 25.0657976);
        assert_eq!(pos.longitude, 121.5352149);
    }

    #[test]
    fn city_record_serializes_with_gateway_field_names() {
        let record = CityRecord {
            city_id: "A".into(),
            city_name: "臺北市".into(),
            city_code: "TPE".into(),
            city: "Taipei".into(),
            county_id: "A".into(),
            version: "22.09.1".into(),
        };

        let json = serde_json::to_value(&record).expect("record must serialize");
        assert_eq!(json["CityID"], "A");
        assert_eq!(json["CityName"], "臺北市");
        assert_eq!(json["CityCode"], "TPE");
        assert_eq!(json["City"], "Taipei");
        assert_eq!(json["CountyID"], "A");
        assert_eq!(json["Version"], "22.09.1");
    }
}
