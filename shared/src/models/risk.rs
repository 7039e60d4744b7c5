//! Heat-health risk levels and the classifier that produces them

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{validate_humidity, validate_temperature};

/// Width of each temperature band below the extreme threshold
pub const BAND_WIDTH_C: f64 = 3.0;

/// The humidity penalty only applies within this many bands of the extreme threshold
pub const HUMIDITY_PENALTY_BANDS: f64 = 3.0;

/// Heat-health risk level shown on every dashboard surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    #[serde(alias = "low", alias = "LOW")]
    Low,
    #[serde(alias = "moderate", alias = "MODERATE")]
    Moderate,
    #[serde(alias = "high", alias = "HIGH")]
    High,
    #[serde(alias = "extreme", alias = "EXTREME")]
    Extreme,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];

    /// Position on the 0-3 scale used for averaging
    pub fn ordinal(self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Moderate => 1,
            RiskLevel::High => 2,
            RiskLevel::Extreme => 3,
        }
    }

    /// Inverse of [`RiskLevel::ordinal`]; values above 3 saturate at Extreme
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => RiskLevel::Low,
            1 => RiskLevel::Moderate,
            2 => RiskLevel::High,
            _ => RiskLevel::Extreme,
        }
    }

    pub fn alert_color(self) -> AlertColor {
        match self {
            RiskLevel::Low => AlertColor::Green,
            RiskLevel::Moderate => AlertColor::Yellow,
            RiskLevel::High => AlertColor::Orange,
            RiskLevel::Extreme => AlertColor::Red,
        }
    }

    /// High and Extreme count as critical zones
    pub fn is_critical(self) -> bool {
        self >= RiskLevel::High
    }

    /// One step up, saturating at Extreme
    pub fn escalate(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        }
    }

    /// Parse either vocabulary ("high" or "orange"), case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Some(RiskLevel::Low),
            "moderate" => Some(RiskLevel::Moderate),
            "high" => Some(RiskLevel::High),
            "extreme" => Some(RiskLevel::Extreme),
            _ => AlertColor::parse(&normalized).map(AlertColor::risk_level),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour code used by the upstream prediction source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl AlertColor {
    /// Case-insensitive lookup of a colour code
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "green" => Some(AlertColor::Green),
            "yellow" => Some(AlertColor::Yellow),
            "orange" => Some(AlertColor::Orange),
            "red" => Some(AlertColor::Red),
            _ => None,
        }
    }

    /// Numeric model label (0-3)
    pub fn label(self) -> u8 {
        self.risk_level().ordinal()
    }

    pub fn risk_level(self) -> RiskLevel {
        match self {
            AlertColor::Green => RiskLevel::Low,
            AlertColor::Yellow => RiskLevel::Moderate,
            AlertColor::Orange => RiskLevel::High,
            AlertColor::Red => RiskLevel::Extreme,
        }
    }

    /// Badge colour used by the dashboard
    pub fn hex(self) -> &'static str {
        match self {
            AlertColor::Green => "#22c55e",
            AlertColor::Yellow => "#eab308",
            AlertColor::Orange => "#f97316",
            AlertColor::Red => "#ef4444",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AlertColor::Green => "Comfortable/warm",
            AlertColor::Yellow => "Hot",
            AlertColor::Orange => "Very hot / potential heat stress",
            AlertColor::Red => "Extreme heat / dangerous",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertColor::Green => "Green",
            AlertColor::Yellow => "Yellow",
            AlertColor::Orange => "Orange",
            AlertColor::Red => "Red",
        }
    }
}

impl std::fmt::Display for AlertColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an upstream colour code to a risk level. Unknown codes fall back to Low.
pub fn classify_alert_code(code: &str) -> RiskLevel {
    AlertColor::parse(code)
        .map(AlertColor::risk_level)
        .unwrap_or(RiskLevel::Low)
}

/// Errors raised when risk policy values are out of bounds
#[derive(Debug, Error, PartialEq)]
pub enum RiskError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    ThresholdOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// User-adjustable classification policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskThresholds {
    /// Temperature at or above which a day is Extreme
    pub extreme_temperature_c: f64,
    /// Relative humidity at or above which the level is raised one step
    pub high_humidity_percent: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            extreme_temperature_c: 40.0,
            high_humidity_percent: 70.0,
        }
    }
}

impl RiskThresholds {
    pub const EXTREME_TEMPERATURE_RANGE: (f64, f64) = (35.0, 45.0);
    pub const HIGH_HUMIDITY_RANGE: (f64, f64) = (50.0, 90.0);

    pub fn new(extreme_temperature_c: f64, high_humidity_percent: f64) -> Result<Self, RiskError> {
        let thresholds = Self {
            extreme_temperature_c,
            high_humidity_percent,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check both values against the ranges offered in the settings panel
    pub fn validate(&self) -> Result<(), RiskError> {
        check_range(
            "extreme_temperature_c",
            self.extreme_temperature_c,
            Self::EXTREME_TEMPERATURE_RANGE,
        )?;
        check_range(
            "high_humidity_percent",
            self.high_humidity_percent,
            Self::HIGH_HUMIDITY_RANGE,
        )
    }

    /// Classify from numeric weather only.
    ///
    /// Bands of [`BAND_WIDTH_C`] are counted down from the extreme threshold.
    /// Humidity at or above the penalty threshold raises the level by one step
    /// once the temperature is within [`HUMIDITY_PENALTY_BANDS`] bands of the
    /// threshold. Malformed input (non-finite temperature, humidity outside
    /// 0-100) fails closed to Low.
    pub fn classify(&self, temperature_c: f64, humidity_percent: Option<f64>) -> RiskLevel {
        if validate_temperature(temperature_c).is_err() {
            return RiskLevel::Low;
        }
        if humidity_percent.map_or(false, |h| validate_humidity(h).is_err()) {
            return RiskLevel::Low;
        }

        let extreme = self.extreme_temperature_c;
        let base = if temperature_c >= extreme {
            RiskLevel::Extreme
        } else if temperature_c >= extreme - BAND_WIDTH_C {
            RiskLevel::High
        } else if temperature_c >= extreme - 2.0 * BAND_WIDTH_C {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };

        let humid = humidity_percent
            .map(|h| h >= self.high_humidity_percent)
            .unwrap_or(false);
        let in_penalty_range = temperature_c >= extreme - HUMIDITY_PENALTY_BANDS * BAND_WIDTH_C;

        if humid && in_penalty_range {
            base.escalate()
        } else {
            base
        }
    }
}

fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), RiskError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(RiskError::ThresholdOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
