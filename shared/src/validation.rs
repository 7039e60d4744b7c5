//! Validation utilities for HeatGuard inputs

use crate::models::VulnerabilityMetrics;

/// Minimum length of a place-name search
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude/longitude are finite and inside WGS84 ranges
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a place-name search and return it trimmed
pub fn validate_search_query(query: &str) -> Result<&str, &'static str> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_SEARCH_QUERY_LEN {
        return Err("Search query must be at least 2 characters");
    }
    Ok(trimmed)
}

// ============================================================================
// Weather Validations
// ============================================================================

/// Validate a temperature reading is usable
pub fn validate_temperature(temperature_c: f64) -> Result<(), &'static str> {
    if !temperature_c.is_finite() {
        return Err("Temperature must be a finite number");
    }
    Ok(())
}

/// Validate a percentage lies in 0-100
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate relative humidity
pub fn validate_humidity(humidity_percent: f64) -> Result<(), &'static str> {
    validate_percentage(humidity_percent).map_err(|_| "Humidity must be between 0 and 100")
}

/// Validate every vulnerability share is a percentage
pub fn validate_vulnerability(metrics: &VulnerabilityMetrics) -> Result<(), &'static str> {
    validate_percentage(metrics.elderly_population)
        .and_then(|_| validate_percentage(metrics.outdoor_workers))
        .and_then(|_| validate_percentage(metrics.slum_population))
        .map_err(|_| "Vulnerability shares must be between 0 and 100")
}
