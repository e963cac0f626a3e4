//! Company analytics aggregation.
//!
//! Groups every stored response for a company by question id and averages
//! the four option values per state across respondents. The output is
//! lossy on purpose: raw per-response values are dropped and only the
//! rounded averages leave this module.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

use super::allocation::PointAllocation;
use super::submission::SurveySubmission;

/// Submission window covered by an analytics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub first_response: Timestamp,
    pub last_response: Timestamp,
}

/// Averaged allocations for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAverages {
    pub question_title: String,
    pub averages: StateAverages,
}

/// Rounded per-option averages, one allocation per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAverages {
    pub current: PointAllocation,
    pub aspirational: PointAllocation,
}

/// Derived, non-persisted analytics view over one company's submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAnalytics {
    pub company_name: String,
    pub total_responses: u64,
    pub date_range: DateRange,
    /// Keyed by question id; BTreeMap keeps the output order stable.
    pub question_analytics: BTreeMap<u32, QuestionAverages>,
}

#[derive(Default)]
struct OptionSums {
    current: [u64; 4],
    aspirational: [u64; 4],
    count: u64,
}

/// Computes company analytics from submissions sorted newest-first.
///
/// The company name and `lastResponse` come from the first (newest)
/// submission, `firstResponse` from the last (oldest). Per question and per
/// option, `average = round(sum / count)` via `f64::round`, which rounds
/// halves away from zero; sums here are non-negative, so halves round up
/// (3 and 4 average to 4). Deterministic for a fixed input sequence.
///
/// # Errors
///
/// Returns `NoSubmissionsFound` on an empty input; callers surface this as
/// a not-found rather than a zeroed report.
pub fn compute_company_analytics(
    submissions: &[SurveySubmission],
) -> Result<CompanyAnalytics, DomainError> {
    let (newest, oldest) = match (submissions.first(), submissions.last()) {
        (Some(newest), Some(oldest)) => (newest, oldest),
        _ => {
            return Err(DomainError::new(
                ErrorCode::NoSubmissionsFound,
                "No surveys found for this company",
            ))
        }
    };

    let mut titles: BTreeMap<u32, String> = BTreeMap::new();
    let mut sums: BTreeMap<u32, OptionSums> = BTreeMap::new();

    for submission in submissions {
        for response in &submission.question_responses {
            titles
                .entry(response.question_id)
                .or_insert_with(|| response.question_title.clone());

            let entry = sums.entry(response.question_id).or_default();
            for (acc, value) in entry
                .current
                .iter_mut()
                .zip(response.current_state.values())
            {
                *acc += u64::from(value);
            }
            for (acc, value) in entry
                .aspirational
                .iter_mut()
                .zip(response.aspirational_state.values())
            {
                *acc += u64::from(value);
            }
            entry.count += 1;
        }
    }

    let question_analytics = sums
        .into_iter()
        .map(|(question_id, entry)| {
            let averages = StateAverages {
                current: average_allocation(&entry.current, entry.count),
                aspirational: average_allocation(&entry.aspirational, entry.count),
            };
            let question_title = titles
                .remove(&question_id)
                .unwrap_or_default();
            (
                question_id,
                QuestionAverages {
                    question_title,
                    averages,
                },
            )
        })
        .collect();

    Ok(CompanyAnalytics {
        company_name: newest.company_name.clone(),
        total_responses: submissions.len() as u64,
        date_range: DateRange {
            first_response: oldest.submitted_at,
            last_response: newest.submitted_at,
        },
        question_analytics,
    })
}

fn average_allocation(sums: &[u64; 4], count: u64) -> PointAllocation {
    let avg = |sum: u64| ((sum as f64) / (count as f64)).round() as u32;
    PointAllocation::new(avg(sums[0]), avg(sums[1]), avg(sums[2]), avg(sums[3]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SubmissionId;
    use crate::domain::survey::{QuestionResponse, UserDetails};

    fn details(email: &str) -> UserDetails {
        UserDetails {
            full_name: "Jane Doe".to_string(),
            email: email.to_string(),
            phone_number: String::new(),
            designation: "Manager".to_string(),
            cohort_team: "Design".to_string(),
            office_typology: "HQ".to_string(),
            company: "Acme".to_string(),
        }
    }

    fn submission(
        company: &str,
        submitted_at: Timestamp,
        responses: Vec<QuestionResponse>,
    ) -> SurveySubmission {
        SurveySubmission {
            id: SubmissionId::new(),
            user_details: details("jane@acme.com"),
            question_responses: responses,
            completion_time: 120,
            submitted_at,
            ip_address: "unknown".to_string(),
            user_agent: "unknown".to_string(),
            company_name: company.to_string(),
        }
    }

    fn response(question_id: u32, current: PointAllocation) -> QuestionResponse {
        QuestionResponse {
            question_id,
            question_title: format!("Question {question_id}"),
            current_state: current,
            aspirational_state: PointAllocation::new(10, 20, 30, 40),
        }
    }

    #[test]
    fn empty_input_signals_not_found() {
        let err = compute_company_analytics(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoSubmissionsFound);
    }

    #[test]
    fn opposite_allocations_average_to_fifty_fifty() {
        let newest = Timestamp::from_unix_secs(2_000);
        let oldest = Timestamp::from_unix_secs(1_000);
        let submissions = vec![
            submission(
                "Acme",
                newest,
                vec![response(1, PointAllocation::new(100, 0, 0, 0))],
            ),
            submission(
                "Acme",
                oldest,
                vec![response(1, PointAllocation::new(0, 100, 0, 0))],
            ),
        ];

        let analytics = compute_company_analytics(&submissions).unwrap();
        let question = &analytics.question_analytics[&1];
        assert_eq!(
            question.averages.current,
            PointAllocation::new(50, 50, 0, 0)
        );
    }

    #[test]
    fn date_range_spans_oldest_to_newest() {
        let newest = Timestamp::from_unix_secs(2_000);
        let oldest = Timestamp::from_unix_secs(1_000);
        let submissions = vec![
            submission("Acme", newest, vec![]),
            submission("Acme", oldest, vec![]),
        ];

        let analytics = compute_company_analytics(&submissions).unwrap();
        assert_eq!(analytics.company_name, "Acme");
        assert_eq!(analytics.total_responses, 2);
        assert_eq!(analytics.date_range.last_response, newest);
        assert_eq!(analytics.date_range.first_response, oldest);
    }

    #[test]
    fn halves_round_up() {
        // 3 and 4 sum to 7 over two respondents: 3.5 rounds to 4.
        let submissions = vec![
            submission(
                "Acme",
                Timestamp::from_unix_secs(2_000),
                vec![response(1, PointAllocation::new(3, 97, 0, 0))],
            ),
            submission(
                "Acme",
                Timestamp::from_unix_secs(1_000),
                vec![response(1, PointAllocation::new(4, 96, 0, 0))],
            ),
        ];

        let analytics = compute_company_analytics(&submissions).unwrap();
        let current = analytics.question_analytics[&1].averages.current;
        assert_eq!(current.a, 4);
        assert_eq!(current.b, 97); // 96.5 rounds up too
    }

    #[test]
    fn title_comes_from_first_response_encountered() {
        let mut first = response(2, PointAllocation::new(40, 30, 20, 10));
        first.question_title = "Newest title".to_string();
        let mut second = response(2, PointAllocation::new(40, 30, 20, 10));
        second.question_title = "Older title".to_string();

        let submissions = vec![
            submission("Acme", Timestamp::from_unix_secs(2_000), vec![first]),
            submission("Acme", Timestamp::from_unix_secs(1_000), vec![second]),
        ];

        let analytics = compute_company_analytics(&submissions).unwrap();
        assert_eq!(
            analytics.question_analytics[&2].question_title,
            "Newest title"
        );
    }

    #[test]
    fn questions_are_grouped_independently() {
        let submissions = vec![
            submission(
                "Acme",
                Timestamp::from_unix_secs(2_000),
                vec![
                    response(1, PointAllocation::new(100, 0, 0, 0)),
                    response(2, PointAllocation::new(0, 0, 100, 0)),
                ],
            ),
            submission(
                "Acme",
                Timestamp::from_unix_secs(1_000),
                vec![response(1, PointAllocation::new(0, 100, 0, 0))],
            ),
        ];

        let analytics = compute_company_analytics(&submissions).unwrap();
        assert_eq!(analytics.question_analytics.len(), 2);
        assert_eq!(
            analytics.question_analytics[&1].averages.current,
            PointAllocation::new(50, 50, 0, 0)
        );
        // Question 2 has a single respondent, so averages are its values.
        assert_eq!(
            analytics.question_analytics[&2].averages.current,
            PointAllocation::new(0, 0, 100, 0)
        );
    }

    #[test]
    fn output_is_deterministic() {
        let submissions = vec![
            submission(
                "Acme",
                Timestamp::from_unix_secs(2_000),
                vec![response(1, PointAllocation::new(60, 25, 10, 5))],
            ),
            submission(
                "Acme",
                Timestamp::from_unix_secs(1_000),
                vec![response(1, PointAllocation::new(55, 30, 10, 5))],
            ),
        ];

        let first = compute_company_analytics(&submissions).unwrap();
        let second = compute_company_analytics(&submissions).unwrap();
        assert_eq!(first, second);
    }
}
