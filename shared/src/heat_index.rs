//! Apparent ("feels like") temperature from temperature and relative humidity
//!
//! Uses the NWS Rothfusz regression with its low- and high-humidity
//! adjustments. The regression was fitted for roughly 26-46°C and 0-100%
//! humidity; outside that range the result is extrapolated and unverified,
//! but still returned.

/// Below this simple-average estimate (°F) the regression is not applied
const REGRESSION_CUTOFF_F: f64 = 80.0;

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Heat index in °F, unrounded
pub fn heat_index_fahrenheit(t: f64, rh: f64) -> f64 {
    let simple = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094);
    if simple <= REGRESSION_CUTOFF_F {
        return simple;
    }

    let mut hi = -42.379 + 2.04901523 * t + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh;

    if rh < 13.0 && t > 80.0 && t < 112.0 {
        hi -= ((13.0 - rh) / 4.0) * ((17.0 - (t - 95.0).abs()) / 17.0).sqrt();
    } else if rh > 85.0 && t > 80.0 && t < 87.0 {
        hi += ((rh - 85.0) / 10.0) * ((87.0 - t) / 5.0);
    }

    hi
}

/// Heat index in °C, rounded to the nearest whole degree (halves round up)
pub fn heat_index_celsius(temperature_c: f64, humidity_percent: f64) -> f64 {
    let hi_f = heat_index_fahrenheit(celsius_to_fahrenheit(temperature_c), humidity_percent);
    round_half_up(fahrenheit_to_celsius(hi_f))
}

pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
