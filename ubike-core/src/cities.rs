//! Embedded city list.
//!
//! The gateway's own city-list endpoint sits behind credentials a viewer
//! client does not hold, so the list ships with the binary instead. The rows
//! mirror the upstream data set, in which `CountyID` always equals `CityID`.

use crate::model::CityRecord;

const CITY_LIST_VERSION: &str = "22.09.1";

/// (CityID, CityName, CityCode, City)
const CITY_ROWS: &[(&str, &str, &str, &str)] = &[
    ("A", "臺北市", "TPE", "Taipei"),
    ("B", "臺中市", "TXG", "Taichung"),
    ("C", "基隆市", "KEE", "Keelung"),
    ("D", "臺南市", "TNN", "Tainan"),
    ("E", "高雄市", "KHH", "Kaohsiung"),
    ("F", "新北市", "NWT", "NewTaipei"),
    ("G", "宜蘭縣", "ILA", "YilanCounty"),
    ("H", "桃園市", "TAO", "Taoyuan"),
    ("I", "嘉義市", "CYI", "Chiayi"),
    ("J", "新竹縣", "HSQ", "HsinchuCounty"),
    ("K", "苗栗縣", "MIA", "MiaoliCounty"),
    ("M", "南投縣", "NAN", "NantouCounty"),
    ("N", "彰化縣", "CHA", "ChanghuaCounty"),
    ("O", "新竹市", "HSZ", "Hsinchu"),
    ("P", "雲林縣", "YUN", "YunlinCounty"),
    ("Q", "嘉義縣", "CYQ", "ChiayiCounty"),
    ("T", "屏東縣", "PIF", "PingtungCounty"),
    ("U", "花蓮縣", "HUA", "HualienCounty"),
    ("V", "臺東縣", "TTT", "TaitungCounty"),
    ("W", "金門縣", "KIN", "KinmenCounty"),
    ("X", "澎湖縣", "PEN", "PenghuCounty"),
    ("Z", "連江縣", "LIE", "LienchiangCounty"),
];

/// All cities and counties in the service area.
pub fn all() -> Vec<CityRecord> {
    CITY_ROWS
        .iter()
        .map(|&(id, name, code, city)| CityRecord {
            city_id: id.to_string(),
            city_name: name.to_string(),
            city_code: code.to_string(),
            city: city.to_string(),
            county_id: id.to_string(),
            version: CITY_LIST_VERSION.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_all_twenty_two_divisions() {
        assert_eq!(all().len(), 22);
    }

    #[test]
    fn city_ids_are_unique() {
        let cities = all();
        let ids: HashSet<&str> = cities.iter().map(|c| c.city_id.as_str()).collect();

        assert_eq!(ids.len(), cities.len());
    }

    #[test]
    fn every_field_is_populated() {
        for record in all() {
            assert!(!record.city_id.is_empty());
            assert!(!record.city_name.is_empty());
            assert!(!record.city_code.is_empty());
            assert!(!record.city.is_empty());
            assert!(!record.county_id.is_empty());
            assert!(!record.version.is_empty());
        }
    }

    #[test]
    fn knows_taipei() {
        let cities = all();
        let taipei = cities
            .iter()
            .find(|c| c.city_code == "TPE")
            .expect("Taipei must be in the table");

        assert_eq!(taipei.city, "Taipei");
        assert_eq!(taipei.city_id, "A");
        assert_eq!(taipei.county_id, "A");
    }
}
