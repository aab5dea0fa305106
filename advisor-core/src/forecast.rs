use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::advisor;
use crate::classify;
use crate::model::{DailyAggregate, ForecastSample};

/// Conversion factor from m/s (provider units) to km/h (response units).
pub(crate) const MPS_TO_KMH: f64 = 3.6;

/// Round to one decimal place for output.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Local calendar date a forecast sample falls on.
fn sample_local_date(sample: &ForecastSample) -> NaiveDate {
    sample.timestamp.with_timezone(&Local).date_naive()
}

/// Most frequent value, ties broken by first occurrence.
///
/// Counts are built in one pass keyed by value while recording first-seen
/// order, then scanned in that order so ties never depend on map iteration.
fn dominant<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for value in order {
        let count = counts[value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value)
}

/// Summarize 3-hour forecast samples into per-day aggregates.
///
/// Only dates 1 or 2 calendar days after `today` are retained; today itself
/// and anything further out is dropped. Days without samples produce no
/// entry. Output is sorted ascending by date. An empty input yields an empty
/// output.
pub fn aggregate(samples: &[ForecastSample], today: NaiveDate) -> Vec<DailyAggregate> {
    let mut by_date: HashMap<NaiveDate, Vec<&ForecastSample>> = HashMap::new();

    for sample in samples {
        let date = sample_local_date(sample);
        let days_ahead = (date - today).num_days();
        if (1..=2).contains(&days_ahead) {
            by_date.entry(date).or_default().push(sample);
        }
    }

    let mut dates: Vec<NaiveDate> = by_date.keys().copied().collect();
    dates.sort_unstable();

    dates
        .into_iter()
        .map(|date| summarize_day(date, &by_date[&date]))
        .collect()
}

fn summarize_day(date: NaiveDate, samples: &[&ForecastSample]) -> DailyAggregate {
    let count = samples.len() as f64;
    let mean_temp = samples.iter().map(|s| s.temperature_c).sum::<f64>() / count;
    let mean_humidity = samples.iter().map(|s| f64::from(s.humidity_pct)).sum::<f64>() / count;
    let mean_wind = samples.iter().map(|s| s.wind_speed_mps).sum::<f64>() / count;

    let condition = dominant(samples.iter().map(|s| s.condition.as_str())).unwrap_or("");
    let description = dominant(samples.iter().map(|s| s.description.as_str())).unwrap_or("");

    // Classification runs on the unrounded means; rounding is output-only.
    let label = classify::classify(condition, mean_temp, mean_humidity);
    let air_quality = classify::air_quality(mean_temp, mean_humidity, mean_wind);

    DailyAggregate {
        date,
        day_name: date.format("%A").to_string(),
        temperature: round1(mean_temp),
        humidity: mean_humidity.round() as u8,
        wind_speed: round1(mean_wind * MPS_TO_KMH),
        air_quality,
        weather_description: description.to_string(),
        weather_condition: label,
        recommendations: advisor::recommendations_for(label),
        activity_distribution: advisor::distribution_for(label),
    }
}
