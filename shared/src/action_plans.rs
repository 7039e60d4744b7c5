//! Static heat action plans per risk level

use crate::models::RiskLevel;

const LOW: &[&str] = &[
    "Monitor weather forecasts daily.",
    "Ensure hydration.",
    "No specific medical advisory needed.",
];

const MODERATE: &[&str] = &[
    "Issue Yellow Alert.",
    "Advise outdoor workers to take breaks between 12 PM - 3 PM.",
    "Keep ORS packets ready in PHCs.",
];

const HIGH: &[&str] = &[
    "Issue Orange Alert.",
    "Open cooling centers in high vulnerability wards.",
    "Suspend outdoor labor during peak heat hours.",
    "Hospitals to activate heat-stroke wards.",
];

const EXTREME: &[&str] = &[
    "Issue Red Alert.",
    "Close schools and non-essential outdoor activities.",
    "Deploy mobile water tankers to slums.",
    "Emergency medical teams on standby.",
    "Mass media warnings every hour.",
];

/// Recommended actions for a risk level, most urgent first
pub fn action_plan(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => LOW,
        RiskLevel::Moderate => MODERATE,
        RiskLevel::High => HIGH,
        RiskLevel::Extreme => EXTREME,
    }
}
