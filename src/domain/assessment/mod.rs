//! Assessment module - questionnaire items, answers and risk scoring.
//!
//! - `question` - Question rows and the per-request `QuestionCatalog`
//! - `answer` - The closed answer set and submitted `UserResponse`s
//! - `profile` - `RiskProfile` output and frontend `ProfileSubmission`s
//! - `evaluator` - Weighted scoring and finding collection

mod answer;
mod evaluator;
mod profile;
mod question;

pub use answer::{AnswerValue, UserResponse};
pub use evaluator::{
    RiskEvaluator, DEFAULT_RECOMMENDATION, HIGH_VOLUME_CAVEAT, HIGH_VOLUME_FINDINGS_THRESHOLD,
    UNKNOWN_DOMAIN, UNKNOWN_IMPACT, UNKNOWN_QUESTION,
};
pub use profile::{
    unique_recommendation_texts, Finding, ProfileSubmission, Recommendation, RiskLabel,
    RiskProfile,
};
pub use question::{
    Question, QuestionCatalog, COL_DOMAIN, COL_QUESTION_ID, COL_QUESTION_TEXT,
    COL_RECOMMENDATION, COL_RISK_DESCRIPTION, COL_WEIGHT,
};
