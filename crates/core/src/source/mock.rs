//! In-memory data source with simulated latency.
//!
//! Every call sleeps for the configured delay and then resolves with fixed
//! data. There is no cancellation, timeout or retry.

use super::SurveyDataSource;
use crate::error::SurveyResult;
use crate::response::{ImprovementArea, SurveyResponse};
use crate::submission::{SubmissionAck, ValidatedSubmission};
use crate::summary::{AreaCount, DayCount, RatingCount, SurveySummary};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;

pub struct MockSurveySource {
    delay: Duration,
    summary: SurveySummary,
    responses: Vec<SurveyResponse>,
    submissions: Mutex<Vec<ValidatedSubmission>>,
}

impl MockSurveySource {
    /// A source serving [`sample_summary`] and [`sample_responses`].
    pub fn new(delay: Duration) -> Self {
        Self::with_data(delay, sample_summary(), sample_responses())
    }

    pub fn with_data(
        delay: Duration,
        summary: SurveySummary,
        responses: Vec<SurveyResponse>,
    ) -> Self {
        Self {
            delay,
            summary,
            responses,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Submissions received so far, oldest first.
    pub async fn submissions(&self) -> Vec<ValidatedSubmission> {
        self.submissions.lock().await.clone()
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl SurveyDataSource for MockSurveySource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_summary(&self) -> SurveyResult<SurveySummary> {
        self.simulate_latency().await;
        Ok(self.summary.clone())
    }

    async fn fetch_responses(&self) -> SurveyResult<Vec<SurveyResponse>> {
        self.simulate_latency().await;
        Ok(self.responses.clone())
    }

    async fn submit_response(
        &self,
        submission: &ValidatedSubmission,
    ) -> SurveyResult<SubmissionAck> {
        self.simulate_latency().await;
        let ack = SubmissionAck::accepted();
        tracing::info!(
            receipt_id = %ack.receipt_id,
            satisfaction = %submission.satisfaction,
            improvement = submission.improvement.code(),
            "survey submitted"
        );
        self.submissions.lock().await.push(submission.clone());
        Ok(ack)
    }
}

/// Fixed dashboard statistics served by the mock source.
pub fn sample_summary() -> SurveySummary {
    let days = [
        ("Mon", 32),
        ("Tue", 45),
        ("Wed", 39),
        ("Thu", 50),
        ("Fri", 55),
        ("Sat", 15),
        ("Sun", 9),
    ];
    let ratings = [(5, 120), (4, 80), (3, 25), (2, 15), (1, 5)];
    // Dashboard chart labels; "Website UX" differs from the form's wording.
    let areas = [
        ("Product Quality", 15),
        ("Pricing", 85),
        ("Shipping", 60),
        ("Website UX", 45),
        ("Customer Service", 40),
    ];

    SurveySummary {
        total_responses: 245,
        completion_rate: "78%".to_owned(),
        average_satisfaction: 4.2,
        responses_by_day: days
            .into_iter()
            .map(|(day, count)| DayCount {
                day: day.to_owned(),
                count,
            })
            .collect(),
        satisfaction_distribution: ratings
            .into_iter()
            .map(|(rating, count)| RatingCount { rating, count })
            .collect(),
        improvements: areas
            .into_iter()
            .map(|(area, count)| AreaCount {
                area: area.to_owned(),
                count,
            })
            .collect(),
    }
}

/// The ten fixed responses served by the mock source, newest first.
pub fn sample_responses() -> Vec<SurveyResponse> {
    use ImprovementArea::*;

    vec![
        sample(
            "resp-001",
            "2023-07-15T14:35:00Z",
            5,
            Shipping,
            9,
            "Great products, but shipping took longer than expected.",
        ),
        sample(
            "resp-002",
            "2023-07-14T10:20:00Z",
            4,
            Pricing,
            7,
            "Love the quality, but prices are a bit high compared to competitors.",
        ),
        sample(
            "resp-003",
            "2023-07-14T09:15:00Z",
            3,
            WebsiteUx,
            5,
            "The checkout process was confusing.",
        ),
        sample(
            "resp-004",
            "2023-07-13T16:42:00Z",
            5,
            ProductQuality,
            10,
            "Absolutely love everything about your store!",
        ),
        sample(
            "resp-005",
            "2023-07-13T12:05:00Z",
            2,
            CustomerService,
            3,
            "Had trouble reaching customer service about my order status.",
        ),
        sample("resp-006", "2023-07-12T08:30:00Z", 4, Shipping, 8, ""),
        sample(
            "resp-007",
            "2023-07-11T15:20:00Z",
            5,
            ProductQuality,
            9,
            "The quality of your products exceeded my expectations!",
        ),
        sample(
            "resp-008",
            "2023-07-10T11:05:00Z",
            3,
            Pricing,
            6,
            "Good products, but a bit overpriced for what they are.",
        ),
        sample(
            "resp-009",
            "2023-07-09T13:45:00Z",
            4,
            WebsiteUx,
            8,
            "Overall great experience, but product filters could be improved.",
        ),
        sample(
            "resp-010",
            "2023-07-08T17:30:00Z",
            1,
            Shipping,
            2,
            "My order arrived damaged and customer service was unhelpful.",
        ),
    ]
}

fn sample(
    id: &str,
    date: &str,
    satisfaction: i32,
    improvement: ImprovementArea,
    recommendation: i32,
    comments: &str,
) -> SurveyResponse {
    SurveyResponse {
        id: id.to_owned(),
        date: date.to_owned(),
        satisfaction,
        improvement,
        recommendation,
        comments: comments.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SurveyAnswers;

    #[test]
    fn sample_ids_are_unique_and_ordered() {
        let ids: Vec<String> = sample_responses().into_iter().map(|r| r.id).collect();
        let expected: Vec<String> = (1..=10).map(|n| format!("resp-{n:03}")).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_resolves_after_configured_delay() {
        let source = MockSurveySource::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        let responses = source.fetch_responses().await.expect("mock never fails");
        assert_eq!(responses.len(), 10);
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn summary_matches_fixed_statistics() {
        let source = MockSurveySource::new(Duration::ZERO);
        let summary = source.fetch_summary().await.unwrap();
        assert_eq!(summary.total_responses, 245);
        assert_eq!(summary.completion_rate, "78%");
        assert_eq!(summary.average_satisfaction, 4.2);
        assert_eq!(summary.responses_by_day.len(), 7);
        assert_eq!(summary.satisfaction_distribution[0].count, 120);
        let areas: Vec<&str> = summary.improvements.iter().map(|a| a.area.as_str()).collect();
        assert_eq!(
            areas,
            vec!["Product Quality", "Pricing", "Shipping", "Website UX", "Customer Service"]
        );
    }

    #[tokio::test]
    async fn submissions_are_acknowledged_and_recorded() {
        let source = MockSurveySource::new(Duration::ZERO);
        let submission = SurveyAnswers {
            satisfaction: "2".into(),
            improvement: "customer_service".into(),
            recommendation: "4".into(),
            comments: Some("Slow replies".into()),
        }
        .validate()
        .unwrap();

        let ack = source.submit_response(&submission).await.unwrap();
        assert!(ack.success);
        assert_eq!(source.submissions().await, vec![submission]);
    }
}
