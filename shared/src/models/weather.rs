//! Weather data models

use serde::{Deserialize, Serialize};

use crate::heat_index::heat_index_celsius;

/// A temperature/humidity reading for one place and time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub temperature_c: f64,
    /// Relative humidity, 0-100
    pub humidity_percent: f64,
}

impl WeatherSample {
    pub fn new(temperature_c: f64, humidity_percent: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
        }
    }

    /// Reading used when an upstream fetch failed
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn heat_index_c(&self) -> f64 {
        heat_index_celsius(self.temperature_c, self.humidity_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_heat_index() {
        assert_eq!(WeatherSample::new(35.0, 70.0).heat_index_c(), 50.0);
    }
}
