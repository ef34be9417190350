//! Dashboard summary statistics.
//!
//! A summary is either supplied by the data source as-is or computed from a
//! response list with [`SurveySummary::from_responses`].

use crate::date::parse_timestamp;
use crate::response::{ImprovementArea, SurveyResponse};
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveySummary {
    pub total_responses: u64,
    /// Completed surveys as a share of started ones, e.g. `78%`.
    pub completion_rate: String,
    /// Mean satisfaction, one decimal place.
    pub average_satisfaction: f64,
    /// Responses per weekday, Monday first.
    pub responses_by_day: Vec<DayCount>,
    /// Responses per rating, 5 down to 1.
    pub satisfaction_distribution: Vec<RatingCount>,
    /// Responses per improvement area label.
    pub improvements: Vec<AreaCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: u8,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCount {
    pub area: String,
    pub count: u64,
}

impl SurveySummary {
    /// Computes summary statistics from `responses`.
    ///
    /// `surveys_started` is the number of surveys opened, used for the
    /// completion rate (capped at 100%). Ratings outside 1..=5 are left out of
    /// the average and distribution; timestamps that do not parse are left out
    /// of the per-day counts.
    pub fn from_responses(responses: &[SurveyResponse], surveys_started: u64) -> Self {
        let total_responses = responses.len() as u64;

        let rated: Vec<i32> = responses
            .iter()
            .map(|r| r.satisfaction)
            .filter(|s| (1..=5).contains(s))
            .collect();
        let average_satisfaction = if rated.is_empty() {
            0.0
        } else {
            let mean = rated.iter().map(|&s| f64::from(s)).sum::<f64>() / rated.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        let satisfaction_distribution = (1..=5u8)
            .rev()
            .map(|rating| RatingCount {
                rating,
                count: rated.iter().filter(|&&s| s == i32::from(rating)).count() as u64,
            })
            .collect();

        let mut responses_by_day: Vec<DayCount> = WEEK
            .iter()
            .map(|day| DayCount {
                day: day.to_string(),
                count: 0,
            })
            .collect();
        for dt in responses.iter().filter_map(|r| parse_timestamp(&r.date)) {
            let index = dt.weekday().num_days_from_monday() as usize;
            responses_by_day[index].count += 1;
        }

        Self {
            total_responses,
            completion_rate: completion_rate(total_responses, surveys_started),
            average_satisfaction,
            responses_by_day,
            satisfaction_distribution,
            improvements: improvement_counts(responses),
        }
    }
}

fn completion_rate(completed: u64, started: u64) -> String {
    if started == 0 {
        return "0%".to_owned();
    }
    let percent = (completed as f64 / started as f64 * 100.0).round().min(100.0);
    format!("{}%", percent as u64)
}

/// Known areas first, in form order and including zero counts, then any
/// unrecognised codes in order of first appearance.
fn improvement_counts(responses: &[SurveyResponse]) -> Vec<AreaCount> {
    let mut counts: Vec<(ImprovementArea, u64)> = ImprovementArea::KNOWN
        .into_iter()
        .map(|area| (area, 0))
        .collect();

    for response in responses {
        match counts.iter_mut().find(|(area, _)| *area == response.improvement) {
            Some((_, count)) => *count += 1,
            None => counts.push((response.improvement.clone(), 1)),
        }
    }

    counts
        .into_iter()
        .map(|(area, count)| AreaCount {
            area: area.label().to_owned(),
            count,
        })
        .collect()
}
