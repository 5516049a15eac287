//! Country record types, response merging and worker channels.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{
    Arc, Mutex,
    mpsc::{Receiver, Sender},
};

/// Common and official names for a country.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FlagImages {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MapLinks {
    #[serde(rename = "googleMaps")]
    pub google_maps: Option<String>,
    #[serde(rename = "openStreetMaps")]
    pub open_street_maps: Option<String>,
}

/// One country as served by the REST endpoint. `cca3` is the identity key
/// used to correlate markers, selection and merged responses; every other
/// field is best-effort.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CountryRecord {
    pub cca3: String,
    pub name: Option<CountryName>,
    pub latlng: Option<Vec<f64>>,
    pub capital: Option<Vec<String>>,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub flag: Option<String>,
    pub flags: Option<FlagImages>,
    // Ordered maps keep the sidebar display stable across runs
    pub currencies: Option<BTreeMap<String, Currency>>,
    pub languages: Option<BTreeMap<String, String>>,
    pub borders: Option<Vec<String>>,
    pub maps: Option<MapLinks>,
    pub timezones: Option<Vec<String>>,
}

impl CountryRecord {
    /// Marker latitude/longitude, if the record carries a usable pair.
    /// Records without one never get a marker.
    pub fn marker_lat_lon(&self) -> Option<(f32, f32)> {
        let latlng = self.latlng.as_ref()?;
        if latlng.len() < 2 {
            return None;
        }
        Some((latlng[0] as f32, latlng[1] as f32))
    }

    pub fn common_name(&self) -> &str {
        self.name
            .as_ref()
            .map(|n| n.common.as_str())
            .unwrap_or(self.cca3.as_str())
    }

    /// Fill every field the primary response left empty from the
    /// supplementary field-subset response.
    fn fill_missing_from(&mut self, other: CountryRecord) {
        macro_rules! fill {
            ($($field:ident),+ $(,)?) => {
                $(if self.$field.is_none() {
                    self.$field = other.$field;
                })+
            };
        }
        fill!(
            name, latlng, capital, population, area, region, subregion, flag, flags, currencies,
            languages, borders, maps, timezones,
        );
    }
}

/// Merge the two field-subset responses by `cca3`. Fields present in the
/// primary response win; the supplement only fills gaps.
pub fn merge_country_responses(
    primary: Vec<CountryRecord>,
    supplement: Vec<CountryRecord>,
) -> Vec<CountryRecord> {
    let mut extras: HashMap<String, CountryRecord> = supplement
        .into_iter()
        .map(|country| (country.cca3.clone(), country))
        .collect();

    let mut merged = primary;
    for country in &mut merged {
        if let Some(extra) = extras.remove(&country.cca3) {
            country.fill_missing_from(extra);
        }
    }
    merged
}

/// Commands for the country fetch worker thread.
pub enum CountryFetchCommand {
    FetchAll,
}

/// Results from the country fetch worker thread.
pub enum CountryFetchResult {
    Loaded(Vec<CountryRecord>),
    Failed(String),
}

/// Resource containing channels for communicating with the worker thread.
#[derive(Resource)]
pub struct CountryFetchChannels {
    pub cmd_tx: Sender<CountryFetchCommand>,
    pub res_rx: Arc<Mutex<Receiver<CountryFetchResult>>>,
}

/// Load lifecycle for the primary dataset. A failure blocks the UI until
/// the user retries.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CountryLoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Session-wide country list; fetched once on startup and held until exit.
#[derive(Resource, Default)]
pub struct CountryStore {
    pub countries: Vec<CountryRecord>,
    pub load_state: CountryLoadState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> CountryRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_merge_fills_fields_from_both_responses() {
        let primary = vec![record(r#"{"cca3":"USA","name":{"common":"United States","official":"United States of America"}}"#)];
        let supplement = vec![record(r#"{"cca3":"USA","languages":{"eng":"English"}}"#)];

        let merged = merge_country_responses(primary, supplement);
        assert_eq!(merged.len(), 1);
        let usa = &merged[0];
        assert_eq!(usa.common_name(), "United States");
        let languages = usa.languages.as_ref().unwrap();
        assert_eq!(languages.get("eng").map(String::as_str), Some("English"));
    }

    #[test]
    fn test_merge_primary_fields_win() {
        let primary = vec![record(r#"{"cca3":"FRA","population":68000000}"#)];
        let supplement = vec![record(r#"{"cca3":"FRA","population":1}"#)];

        let merged = merge_country_responses(primary, supplement);
        assert_eq!(merged[0].population, Some(68_000_000));
    }

    #[test]
    fn test_merge_ignores_unmatched_supplement_entries() {
        let primary = vec![record(r#"{"cca3":"DEU"}"#)];
        let supplement = vec![record(r#"{"cca3":"AUT","area":83879.0}"#)];

        let merged = merge_country_responses(primary, supplement);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].cca3, "DEU");
        assert!(merged[0].area.is_none());
    }

    #[test]
    fn test_marker_lat_lon_requires_two_entries() {
        assert!(record(r#"{"cca3":"XXX"}"#).marker_lat_lon().is_none());
        assert!(
            record(r#"{"cca3":"XXX","latlng":[45.0]}"#)
                .marker_lat_lon()
                .is_none()
        );
        assert_eq!(
            record(r#"{"cca3":"CHE","latlng":[47.0,8.0]}"#).marker_lat_lon(),
            Some((47.0, 8.0))
        );
    }

    #[test]
    fn test_common_name_falls_back_to_cca3() {
        let country = record(r#"{"cca3":"ABW"}"#);
        assert_eq!(country.common_name(), "ABW");
    }
}
