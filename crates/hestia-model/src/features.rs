//! Request schema for a housing block and the canonical column contract.
//!
//! The scaler and regressor were fitted on a fixed column order, so every
//! place that turns named fields into a numeric row must agree on it.
//! `FEATURE_FIELDS` is that single source of truth: it drives row
//! assembly, the docs page field table, and the order-invariance tests.

use hestia_common::{HestiaError, Result};
use serde::{Deserialize, Serialize};

/// Number of input columns the artifacts were fitted on.
pub const FEATURE_COUNT: usize = 8;

/// Canonical (name, description) pairs, in fitted column order.
pub const FEATURE_FIELDS: [(&str, &str); FEATURE_COUNT] = [
    ("MedInc", "Median income in the block group"),
    ("HouseAge", "Median house age in the block group"),
    ("AveRooms", "Average number of rooms per household"),
    ("AveBedrms", "Average number of bedrooms per household"),
    ("Population", "Block group population"),
    ("AveOccup", "Average number of household members"),
    ("Latitude", "Block group latitude"),
    ("Longitude", "Block group longitude"),
];

/// Input features for one housing block.
///
/// All eight fields are required; requests with a missing field, an
/// unknown field, or a non-numeric value are rejected during
/// deserialization and never reach the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct HouseFeatures {
    pub med_inc: f64,
    pub house_age: f64,
    pub ave_rooms: f64,
    pub ave_bedrms: f64,
    pub population: f64,
    pub ave_occup: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl HouseFeatures {
    /// Values in the canonical column order.
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.med_inc,
            self.house_age,
            self.ave_rooms,
            self.ave_bedrms,
            self.population,
            self.ave_occup,
            self.latitude,
            self.longitude,
        ]
    }
}

/// Check an artifact's recorded feature names against the canonical order.
///
/// Artifacts are free to omit the list; when present it must match
/// exactly, otherwise columns would be silently routed to the wrong
/// model coefficients.
pub fn check_feature_names(recorded: Option<&[String]>) -> Result<()> {
    let Some(names) = recorded else {
        return Ok(());
    };
    let canonical: Vec<&str> = FEATURE_FIELDS.iter().map(|(name, _)| *name).collect();
    if names.len() != canonical.len() || names.iter().zip(&canonical).any(|(a, b)| a != b) {
        return Err(HestiaError::ArtifactLoad(format!(
            "feature name order mismatch: artifact has {:?}, expected {:?}",
            names, canonical
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HouseFeatures {
        HouseFeatures {
            med_inc: 8.3252,
            house_age: 41.0,
            ave_rooms: 6.9841,
            ave_bedrms: 1.0238,
            population: 322.0,
            ave_occup: 2.5556,
            latitude: 37.88,
            longitude: -122.23,
        }
    }

    #[test]
    fn test_row_follows_canonical_order() {
        let row = sample().to_row();
        assert_eq!(row[0], 8.3252); // MedInc
        assert_eq!(row[4], 322.0); // Population
        assert_eq!(row[7], -122.23); // Longitude
    }

    #[test]
    fn test_scrambled_key_order_routes_by_name() {
        // Keys deliberately out of column order; values must still land in
        // their semantic columns.
        let body = r#"{
            "Longitude": -122.23, "Latitude": 37.88, "AveOccup": 2.5556,
            "Population": 322.0, "AveBedrms": 1.0238, "AveRooms": 6.9841,
            "HouseAge": 41.0, "MedInc": 8.3252
        }"#;
        let features: HouseFeatures = serde_json::from_str(body).unwrap();
        assert_eq!(features.to_row(), sample().to_row());
    }

    #[test]
    fn test_missing_field_rejected() {
        let body = r#"{
            "MedInc": 8.3252, "HouseAge": 41.0, "AveRooms": 6.9841,
            "AveBedrms": 1.0238, "Population": 322.0, "AveOccup": 2.5556,
            "Latitude": 37.88
        }"#;
        assert!(serde_json::from_str::<HouseFeatures>(body).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let body = r#"{
            "MedInc": 8.3252, "HouseAge": 41.0, "AveRooms": 6.9841,
            "AveBedrms": 1.0238, "Population": 322.0, "AveOccup": 2.5556,
            "Latitude": 37.88, "Longitude": -122.23, "Rooms": 3.0
        }"#;
        assert!(serde_json::from_str::<HouseFeatures>(body).is_err());
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let body = r#"{
            "MedInc": "high", "HouseAge": 41.0, "AveRooms": 6.9841,
            "AveBedrms": 1.0238, "Population": 322.0, "AveOccup": 2.5556,
            "Latitude": 37.88, "Longitude": -122.23
        }"#;
        assert!(serde_json::from_str::<HouseFeatures>(body).is_err());
    }

    #[test]
    fn test_serialized_keys_match_contract() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), FEATURE_COUNT);
        for (name, _) in FEATURE_FIELDS {
            assert!(object.contains_key(name), "missing key {}", name);
        }
    }

    #[test]
    fn test_feature_name_check() {
        let good: Vec<String> = FEATURE_FIELDS.iter().map(|(n, _)| n.to_string()).collect();
        assert!(check_feature_names(Some(good.as_slice())).is_ok());
        assert!(check_feature_names(None).is_ok());

        let mut swapped = good.clone();
        swapped.swap(0, 1);
        assert!(check_feature_names(Some(swapped.as_slice())).is_err());

        assert!(check_feature_names(Some(&good[..7])).is_err());
    }
}
