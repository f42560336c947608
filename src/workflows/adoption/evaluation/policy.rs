use serde::{Deserialize, Serialize};

/// Final categorical verdict for an evaluated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Rejected,
    Review,
    Interview,
}

impl Disposition {
    pub const fn label(self) -> &'static str {
        match self {
            Disposition::Rejected => "rejected",
            Disposition::Review => "review",
            Disposition::Interview => "interview",
        }
    }
}

const INTERVIEW_THRESHOLD: u8 = 80;
const REVIEW_THRESHOLD: u8 = 60;

/// Round and clamp a raw score into the `[0, 100]` band.
pub(crate) fn bounded_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Classify a bounded score. Any knockout forces rejection regardless of
/// score magnitude.
pub(crate) fn classify(score: u8, knockouts: &[String]) -> Disposition {
    if !knockouts.is_empty() {
        return Disposition::Rejected;
    }

    if score >= INTERVIEW_THRESHOLD {
        Disposition::Interview
    } else if score >= REVIEW_THRESHOLD {
        Disposition::Review
    } else {
        Disposition::Rejected
    }
}
