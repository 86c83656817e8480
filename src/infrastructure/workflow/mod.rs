//! Gemini-backed evaluation workflow
//!
//! Default implementation of [`EvaluationWorkflow`] against the Google
//! Generative Language API. The model is asked for a JSON object carrying
//! the response contract keys; whatever it actually returns is handed back
//! opaquely and normalized by the shaping step at the API boundary.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::{
    CredentialSource, DomainError, EvaluationWorkflow, WorkflowInput, WorkflowResult,
};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const RUBRIC_PROMPT: &str = "You are a strict UPSC essay examiner. Evaluate the essay below on \
three criteria: quality of language, depth of analysis, and clarity of thought. Score each \
criterion out of 10.\n\nRespond with a single JSON object and nothing else, using exactly these \
keys:\n  \"language_feedback\": string,\n  \"analysis_feedback\": string,\n  \
\"clarity_feedback\": string,\n  \"overall_feedback\": string,\n  \"individual_score\": array of \
the three numeric scores,\n  \"avg_score\": number (mean of the three scores)\n\nEssay:\n";

/// Essay evaluation workflow backed by a Gemini model
pub struct GeminiWorkflow {
    client: reqwest::Client,
    credentials: Arc<dyn CredentialSource>,
    model: String,
    base_url: String,
}

impl GeminiWorkflow {
    pub fn new(credentials: Arc<dyn CredentialSource>, model: impl Into<String>) -> Self {
        Self::with_base_url(credentials, model, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        credentials: Arc<dyn CredentialSource>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, input: &WorkflowInput) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": build_prompt(&input.essay) }]
            }],
            "generationConfig": {
                "temperature": 0.2,
                "response_mime_type": "application/json"
            }
        })
    }
}

#[async_trait]
impl EvaluationWorkflow for GeminiWorkflow {
    async fn invoke(&self, input: WorkflowInput) -> Result<WorkflowResult, DomainError> {
        // Re-read the credential per invocation; it is process-wide state
        // that may change after startup.
        let api_key = self
            .credentials
            .google_api_key()
            .ok_or_else(|| DomainError::configuration("GOOGLE_API_KEY is not set"))?;

        let response = self
            .client
            .post(self.generate_content_url())
            .header("x-goog-api-key", api_key)
            .json(&self.build_request(&input))
            .send()
            .await
            .map_err(|err| DomainError::provider("gemini", format!("Request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                "gemini",
                format!("HTTP {status}: {error_body}"),
            ));
        }

        let body: Value = response.json().await.map_err(|err| {
            DomainError::provider("gemini", format!("Failed to parse response: {err}"))
        })?;

        let text = extract_candidate_text(&body)?;
        debug!(model = %self.model, reply_chars = text.len(), "gemini evaluation reply received");

        parse_result(text)
    }
}

fn build_prompt(essay: &str) -> String {
    format!("{RUBRIC_PROMPT}{essay}")
}

/// Pull the first candidate's text out of a `generateContent` response
fn extract_candidate_text(body: &Value) -> Result<&str, DomainError> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::provider("gemini", "No candidate text in response"))
}

/// Parse the model's reply into a workflow result.
///
/// Tolerates a Markdown code fence around the JSON. When the model supplied
/// `individual_score` but omitted `avg_score`, the mean is filled in here.
fn parse_result(text: &str) -> Result<WorkflowResult, DomainError> {
    let payload: Value = serde_json::from_str(strip_code_fences(text)).map_err(|err| {
        DomainError::provider("gemini", format!("Reply is not valid JSON: {err}"))
    })?;

    if !payload.is_object() {
        return Err(DomainError::provider("gemini", "Reply is not a JSON object"));
    }

    let mut result = WorkflowResult::from_value(payload);

    if !result.contains_key("avg_score") {
        if let Some(mean) = mean_score(result.get("individual_score")) {
            result.insert("avg_score", json!(mean));
        }
    }

    Ok(result)
}

fn mean_score(scores: Option<&Value>) -> Option<f64> {
    let scores: Vec<f64> = scores?
        .as_array()?
        .iter()
        .filter_map(Value::as_f64)
        .collect();

    if scores.is_empty() {
        return None;
    }

    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    {
        let inner = inner.strip_prefix("json").unwrap_or(inner);
        return inner.trim();
    }

    trimmed
}
