//! Coordinate Validator
//!
//! Pure range checks for coordinate pairs. No cache interaction.

use crate::domain::value_objects::LocationCoordinates;
use serde_json::Value;

const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Check that latitude lies in [-90, 90] and longitude in [-180, 180].
///
/// `NaN` fails both range comparisons, so it is never valid.
pub fn validate_coordinates(coordinates: &LocationCoordinates) -> bool {
    LATITUDE_RANGE.contains(&coordinates.latitude)
        && LONGITUDE_RANGE.contains(&coordinates.longitude)
}

/// Validate an untyped coordinate object such as a request body.
///
/// Both `latitude` and `longitude` must be present and be JSON numbers;
/// numeric strings are rejected.
pub fn validate_coordinates_value(value: &Value) -> bool {
    let (Some(latitude), Some(longitude)) = (
        value.get("latitude").and_then(Value::as_f64),
        value.get("longitude").and_then(Value::as_f64),
    ) else {
        return false;
    };

    validate_coordinates(&LocationCoordinates::new(latitude, longitude))
}
