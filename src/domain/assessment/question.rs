//! Questionnaire items and the per-request question catalog.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::foundation::QuestionId;

/// Column holding the question identifier.
pub const COL_QUESTION_ID: &str = "Question_ID";
/// Column holding the governance domain (e.g. "Data Privacy").
pub const COL_DOMAIN: &str = "Domain";
/// Column holding the question shown to the user.
pub const COL_QUESTION_TEXT: &str = "Question_Text";
/// Column describing the risk when the control is missing.
pub const COL_RISK_DESCRIPTION: &str = "Risk_Description";
/// Column holding the remediation advice.
pub const COL_RECOMMENDATION: &str = "Recommendation";
/// Column holding the scoring weight.
pub const COL_WEIGHT: &str = "Weight";

/// A single questionnaire row.
///
/// Typed accessors cover the columns the evaluator needs. The full source
/// record is kept so the listing endpoint can return every column the
/// spreadsheet carries, exactly as loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: Option<QuestionId>,
    domain: Option<String>,
    text: Option<String>,
    risk_description: Option<String>,
    recommendation: Option<String>,
    weight: Option<f64>,
    record: Map<String, Value>,
}

impl Question {
    /// Builds a question from a loaded row keyed by (trimmed) column name.
    pub fn from_record(record: Map<String, Value>) -> Self {
        let id = record
            .get(COL_QUESTION_ID)
            .and_then(cell_text)
            .and_then(|raw| QuestionId::new(raw).ok());

        Self {
            id,
            domain: record.get(COL_DOMAIN).and_then(cell_text),
            text: record.get(COL_QUESTION_TEXT).and_then(cell_text),
            risk_description: record.get(COL_RISK_DESCRIPTION).and_then(cell_text),
            recommendation: record.get(COL_RECOMMENDATION).and_then(cell_text),
            weight: record.get(COL_WEIGHT).and_then(cell_number),
            record,
        }
    }

    pub fn id(&self) -> Option<&QuestionId> {
        self.id.as_ref()
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn risk_description(&self) -> Option<&str> {
        self.risk_description.as_deref()
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.recommendation.as_deref()
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// The untouched source row.
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

impl Serialize for Question {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

/// Extracts display text from a cell; blank and null cells count as absent.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn cell_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Immutable id → question mapping built once per load.
///
/// Listing order follows the source file. Rows without a usable
/// `Question_ID` are listed but cannot be looked up; for duplicate ids the
/// last row wins.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// An empty catalog, used when the data file is missing or unreadable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .filter_map(|(pos, q)| q.id().map(|id| (id.clone(), pos)))
            .collect();
        Self { questions, index }
    }

    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        Self::from_questions(records.into_iter().map(Question::from_record).collect())
    }

    /// Looks up a question by the id posted by the client.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index
            .get(id.trim())
            .and_then(|&pos| self.questions.get(pos))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
