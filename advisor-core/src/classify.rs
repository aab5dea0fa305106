use serde::Serialize;

/// Coarse weather classification derived from the provider's condition keyword
/// plus temperature and humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionLabel {
    Sunny,
    Rainy,
    Cold,
    Cloudy,
    /// Only produced when no current observation is available.
    Unknown,
}

impl ConditionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionLabel::Sunny => "sunny",
            ConditionLabel::Rainy => "rainy",
            ConditionLabel::Cold => "cold",
            ConditionLabel::Cloudy => "cloudy",
            ConditionLabel::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Air-quality bucket derived from temperature and humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQualityLabel {
    Good,
    Normal,
    Bad,
}

/// Map a condition keyword plus temperature/humidity to a [`ConditionLabel`].
///
/// Rules are checked top to bottom and the first match wins: the keyword rules
/// take precedence over the temperature/humidity rules, so e.g. "snow" at 40 °C
/// is still `Cold`.
pub fn classify(condition: &str, temperature_c: f64, humidity_pct: f64) -> ConditionLabel {
    match condition {
        "rain" | "drizzle" => ConditionLabel::Rainy,
        "clear" => ConditionLabel::Sunny,
        "clouds" => ConditionLabel::Cloudy,
        "snow" => ConditionLabel::Cold,
        _ if temperature_c < 10.0 => ConditionLabel::Cold,
        _ if temperature_c > 25.0 && humidity_pct < 60.0 => ConditionLabel::Sunny,
        _ => ConditionLabel::Cloudy,
    }
}

/// Derive an [`AirQualityLabel`] from temperature and humidity.
///
/// Wind speed is accepted for call-site symmetry with the other weather inputs
/// but does not influence the result.
pub fn air_quality(temperature_c: f64, humidity_pct: f64, _wind_speed_mps: f64) -> AirQualityLabel {
    if humidity_pct > 80.0 || temperature_c > 35.0 {
        AirQualityLabel::Bad
    } else if humidity_pct > 60.0 || temperature_c > 30.0 {
        AirQualityLabel::Normal
    } else {
        AirQualityLabel::Good
    }
}
