//! District catalog and place-name search

use rand::Rng;
use shared::{validate_search_query, Coordinates, DistrictMetadata, VulnerabilityMetrics};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::weather::{GeocodedPlace, WeatherClient};

/// Country code kept from geocoding results
pub const SEARCH_COUNTRY: &str = "IN";

// (id, name, state, lat, lon, elderly %, outdoor workers %, slum %)
const BUILTIN_DISTRICTS: [(&str, &str, &str, f64, f64, f64, f64, f64); 20] = [
    ("d1", "Chennai", "Tamil Nadu", 13.0827, 80.2707, 12.0, 25.0, 28.0),
    ("d2", "Madurai", "Tamil Nadu", 9.9252, 78.1198, 10.0, 40.0, 15.0),
    ("d3", "Coimbatore", "Tamil Nadu", 11.0168, 76.9558, 14.0, 20.0, 10.0),
    ("d4", "New Delhi", "Delhi", 28.6139, 77.2090, 8.0, 30.0, 20.0),
    ("d5", "Mumbai", "Maharashtra", 19.0760, 72.8777, 11.0, 22.0, 40.0),
    ("d6", "Kolkata", "West Bengal", 22.5726, 88.3639, 13.0, 28.0, 30.0),
    ("d7", "Bengaluru", "Karnataka", 12.9716, 77.5946, 9.0, 18.0, 15.0),
    ("d8", "Hyderabad", "Telangana", 17.3850, 78.4867, 10.0, 25.0, 22.0),
    ("d9", "Ahmedabad", "Gujarat", 23.0225, 72.5714, 11.0, 35.0, 18.0),
    ("d10", "Jaipur", "Rajasthan", 26.9124, 75.7873, 12.0, 32.0, 25.0),
    ("d11", "Lucknow", "Uttar Pradesh", 26.8467, 80.9462, 10.0, 38.0, 20.0),
    ("d12", "Patna", "Bihar", 25.5941, 85.1376, 9.0, 45.0, 28.0),
    ("d13", "Bhopal", "Madhya Pradesh", 23.2599, 77.4126, 11.0, 30.0, 22.0),
    ("d14", "Chandigarh", "Chandigarh", 30.7333, 76.7794, 14.0, 15.0, 10.0),
    ("d15", "Srinagar", "Jammu and Kashmir", 34.0837, 74.7973, 12.0, 20.0, 5.0),
    ("d16", "Thiruvananthapuram", "Kerala", 8.5241, 76.9366, 16.0, 25.0, 12.0),
    ("d17", "Bhubaneswar", "Odisha", 20.2961, 85.8245, 11.0, 35.0, 25.0),
    ("d18", "Guwahati", "Assam", 26.1445, 91.7362, 10.0, 30.0, 15.0),
    ("d19", "Nagpur", "Maharashtra", 21.1458, 79.0882, 12.0, 33.0, 20.0),
    ("d20", "Visakhapatnam", "Andhra Pradesh", 17.6868, 83.2185, 11.0, 28.0, 22.0),
];

/// Static catalog of monitored districts
#[derive(Debug, Clone)]
pub struct DistrictCatalog {
    districts: Vec<DistrictMetadata>,
}

impl DistrictCatalog {
    /// The 20 districts shipped with the service
    pub fn builtin() -> Self {
        let districts = BUILTIN_DISTRICTS
            .iter()
            .map(
                |&(id, name, state, lat, lon, elderly, outdoor, slum)| DistrictMetadata {
                    id: id.to_string(),
                    name: name.to_string(),
                    state: Some(state.to_string()),
                    coordinates: Coordinates::new(lat, lon),
                    vulnerability: VulnerabilityMetrics::new(elderly, outdoor, slum),
                },
            )
            .collect();
        Self { districts }
    }

    pub fn list(&self) -> &[DistrictMetadata] {
        &self.districts
    }

    /// Districts of one state, case-insensitive, in catalog order
    pub fn by_state(&self, state: &str) -> Vec<DistrictMetadata> {
        let wanted = state.trim();
        self.districts
            .iter()
            .filter(|d| {
                d.state
                    .as_deref()
                    .map(|s| s.eq_ignore_ascii_case(wanted))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&DistrictMetadata> {
        self.districts.iter().find(|d| d.id == id)
    }

    /// Distinct state names in catalog order
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = Vec::new();
        for state in self.districts.iter().filter_map(|d| d.state.as_ref()) {
            if !states.contains(state) {
                states.push(state.clone());
            }
        }
        states
    }
}

impl Default for DistrictCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Search for places outside the catalog by name
pub async fn search_districts(weather: &WeatherClient, query: &str) -> AppResult<Vec<DistrictMetadata>> {
    let query = validate_search_query(query).map_err(|msg| AppError::validation("q", msg))?;

    let places = weather.geocode(query).await?;
    let mut rng = rand::thread_rng();
    let districts: Vec<DistrictMetadata> = places
        .iter()
        .filter(|p| p.country.as_deref() == Some(SEARCH_COUNTRY))
        .map(|p| place_to_district(p, &mut rng))
        .collect();

    tracing::info!("Search '{}' matched {} places", query, districts.len());
    Ok(districts)
}

/// Turn a geocoding match into a district with estimated vulnerability.
///
/// No census data exists for ad-hoc places, so shares are drawn uniformly:
/// elderly 8-15%, outdoor workers 20-40%, slum 10-30%.
pub fn place_to_district<R: Rng>(place: &GeocodedPlace, rng: &mut R) -> DistrictMetadata {
    let id = Uuid::new_v4().simple().to_string();
    DistrictMetadata {
        id: format!("search_{}", &id[..8]),
        name: place.name.clone(),
        state: place.state.clone(),
        coordinates: Coordinates::new(place.lat, place.lon),
        vulnerability: VulnerabilityMetrics::new(
            estimate(rng, 8.0, 15.0),
            estimate(rng, 20.0, 40.0),
            estimate(rng, 10.0, 30.0),
        ),
    }
}

fn estimate<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    (rng.gen_range(low..=high) * 10.0).round() / 10.0
}
