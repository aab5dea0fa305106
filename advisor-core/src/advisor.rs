use serde::Serialize;

use crate::classify::ConditionLabel;

/// Whether a recommended activity happens outside, inside, or either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Outdoor,
    Indoor,
    Mixed,
}

/// A canned activity suggestion for one weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

const fn rec(
    name: &'static str,
    description: &'static str,
    activity_type: ActivityType,
) -> Recommendation {
    Recommendation { name, description, activity_type }
}

/// Outdoor vs indoor activity split, in integer percentages summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityDistribution {
    pub outdoor: u8,
    pub indoor: u8,
}

/// Fixed activity suggestions for a condition label.
///
/// Each of the four known labels maps to exactly four activities; anything
/// else gets a single mixed fallback entry.
pub fn recommendations_for(label: ConditionLabel) -> Vec<Recommendation> {
    use ActivityType::{Indoor, Mixed, Outdoor};

    match label {
        ConditionLabel::Sunny => vec![
            rec("Go Hiking!!", "Ideal weather for hiking!", Outdoor),
            rec("Beach Volleyball", "Perfect for outdoor sports", Outdoor),
            rec("Picnic in the Park", "Great weather for outdoor dining", Outdoor),
            rec("Cycling", "Excellent conditions for biking", Outdoor),
        ],
        ConditionLabel::Rainy => vec![
            rec("Visit Museum", "Perfect indoor cultural activity", Indoor),
            rec("Indoor Rock Climbing", "Stay active while staying dry", Indoor),
            rec("Movie Marathon", "Cozy indoor entertainment", Indoor),
            rec("Cooking Workshop", "Learn new culinary skills", Indoor),
        ],
        ConditionLabel::Cold => vec![
            rec("Indoor Swimming", "Warm indoor pool activity", Indoor),
            rec("Hot Yoga", "Stay warm and flexible", Indoor),
            rec("Coffee Shop Tour", "Warm indoor exploration", Indoor),
            rec("Board Games Cafe", "Cozy indoor gaming", Indoor),
        ],
        ConditionLabel::Cloudy => vec![
            rec("Light Jogging", "Good conditions for light exercise", Outdoor),
            rec("Photography Walk", "Great lighting for photos", Outdoor),
            rec("Gardening", "Perfect weather for outdoor work", Outdoor),
            rec("Window Shopping", "Comfortable weather for walking", Outdoor),
        ],
        ConditionLabel::Unknown => vec![rec("Mixed Activities", "Weather is variable", Mixed)],
    }
}

/// Fixed outdoor/indoor split for a condition label.
pub fn distribution_for(label: ConditionLabel) -> ActivityDistribution {
    match label {
        ConditionLabel::Sunny => ActivityDistribution { outdoor: 75, indoor: 25 },
        ConditionLabel::Rainy => ActivityDistribution { outdoor: 15, indoor: 85 },
        ConditionLabel::Cold => ActivityDistribution { outdoor: 20, indoor: 80 },
        ConditionLabel::Cloudy => ActivityDistribution { outdoor: 55, indoor: 45 },
        ConditionLabel::Unknown => ActivityDistribution { outdoor: 50, indoor: 50 },
    }
}
