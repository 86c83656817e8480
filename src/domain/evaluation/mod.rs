//! Evaluation request/response contract and result shaping
//!
//! The workflow on the other side of this boundary is model-backed and
//! schema-loose: any of the expected keys may be missing, and
//! `overall_feedback` may come back as a non-text value. Everything the
//! workflow returns passes through [`EvaluationResponse::shape`] so the
//! HTTP contract stays fixed regardless of what the model produced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Optional validation thresholds for incoming essays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationLimits {
    /// Minimum word count; no minimum is enforced when unset
    pub min_words: Option<usize>,
}

/// A validated essay evaluation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    essay: String,
}

impl EvaluationRequest {
    /// Validate the `essay` field of a request payload.
    ///
    /// The essay must be a string that is non-empty after trimming leading
    /// and trailing whitespace. A non-string value is treated the same as an
    /// absent field.
    pub fn parse(payload: &Value, limits: EvaluationLimits) -> Result<Self, DomainError> {
        let essay = payload
            .get("essay")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim();

        if essay.is_empty() {
            return Err(DomainError::missing_input("essay field absent or blank"));
        }

        if let Some(min_words) = limits.min_words {
            let words = essay.split_whitespace().count();
            if words < min_words {
                return Err(DomainError::validation(format!(
                    "Essay must be at least {min_words} words"
                )));
            }
        }

        Ok(Self {
            essay: essay.to_string(),
        })
    }

    pub fn essay(&self) -> &str {
        &self.essay
    }

    /// Consume the request and produce the workflow's input record
    pub fn into_workflow_input(self) -> WorkflowInput {
        WorkflowInput { essay: self.essay }
    }
}

/// Input record for one workflow invocation: exactly the trimmed essay text
/// under the `essay` key
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkflowInput {
    pub essay: String,
}

/// Opaque result returned by the evaluation workflow.
///
/// No shape is guaranteed; absence of any key is legitimate and handled by
/// the shaping step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkflowResult(Map<String, Value>);

impl WorkflowResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a result from a JSON value; anything that is not an object
    /// becomes an empty result
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

/// The externally observable evaluation result.
///
/// All six fields are presence-guaranteed; missing upstream keys are
/// defaulted during shaping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationResponse {
    pub language_feedback: String,
    pub analysis_feedback: String,
    pub clarity_feedback: String,
    pub overall_feedback: String,
    pub individual_score: Vec<f64>,
    pub avg_score: f64,
}

impl EvaluationResponse {
    /// Shape an opaque workflow result into the fixed response contract.
    ///
    /// Fails only when `avg_score` is present but not numeric; every other
    /// mismatch or absence falls back to the field's default.
    pub fn shape(result: &WorkflowResult) -> Result<Self, DomainError> {
        Ok(Self {
            language_feedback: text_field(result.get("language_feedback")),
            analysis_feedback: text_field(result.get("analysis_feedback")),
            clarity_feedback: text_field(result.get("clarity_feedback")),
            overall_feedback: coerce_text(result.get("overall_feedback")),
            individual_score: score_list(result.get("individual_score")),
            avg_score: round_two_decimals(numeric_field(result.get("avg_score"))?),
        })
    }
}

fn text_field(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or("").to_string()
}

/// Coerce a value to its text representation; the workflow does not
/// guarantee `overall_feedback` is a string
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn score_list(value: Option<&Value>) -> Vec<f64> {
    value
        .and_then(Value::as_array)
        .map(|scores| scores.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default()
}

fn numeric_field(value: Option<&Value>) -> Result<f64, DomainError> {
    match value {
        None => Ok(0.0),
        Some(score) => score
            .as_f64()
            .ok_or_else(|| DomainError::evaluation(format!("avg_score is not numeric: {score}"))),
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
