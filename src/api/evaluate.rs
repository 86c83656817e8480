//! Essay evaluation endpoint
//!
//! The handler is the whole request pipeline: precondition checks in a fixed
//! order (credential, content type, essay text), one workflow invocation, and
//! shaping of the workflow's opaque result into the fixed response contract.

use axum::{body::Bytes, extract::State, http::header, http::HeaderMap, Json};
use serde_json::Value;
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{DomainError, EvaluationRequest, EvaluationResponse};

/// POST /evaluate
pub async fn evaluate_essay(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EvaluationResponse>, ApiError> {
    // Credential first: without it the service cannot do any work, no matter
    // what the payload looks like. Read per request so a key set after
    // startup is picked up.
    if state.credentials.google_api_key().is_none() {
        return Err(DomainError::configuration("GOOGLE_API_KEY is not set").into());
    }

    if !is_json_content_type(&headers) {
        return Err(DomainError::unsupported_media_type(
            headers
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("<none>")
                .to_string(),
        )
        .into());
    }

    // A body that does not parse is treated as an empty object so the essay
    // check below produces the client-facing error.
    let payload: Value =
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::Object(Default::default()));

    let request = EvaluationRequest::parse(&payload, state.limits)?;
    debug!(essay_chars = request.essay().len(), "evaluating essay");

    // Single invocation, no retries. Whatever went wrong inside the workflow
    // is indistinguishable from here; log it and classify as a generic
    // evaluation failure.
    let result = state
        .workflow
        .invoke(request.into_workflow_input())
        .await
        .map_err(|err| {
            error!(error = %err, "essay evaluation workflow failed");
            DomainError::evaluation("workflow invocation failed")
        })?;

    let response = EvaluationResponse::shape(&result).map_err(|err| {
        error!(error = %err, "workflow returned an unshapeable result");
        err
    })?;

    Ok(Json(response))
}

/// Whether the declared content type indicates a JSON body: exactly
/// `application/json` or any `+json` suffixed media type, parameters ignored
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || mime.ends_with("+json")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::HeaderValue;
    use serde_json::json;

    use super::*;
    use crate::domain::credentials::MockCredentialSource;
    use crate::domain::workflow::MockEvaluationWorkflow;
    use crate::domain::{EvaluationLimits, WorkflowResult};

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn credentials(key: Option<&str>) -> MockCredentialSource {
        let key = key.map(String::from);
        let mut mock = MockCredentialSource::new();
        mock.expect_google_api_key().return_const(key);
        mock
    }

    fn state(workflow: MockEvaluationWorkflow, creds: MockCredentialSource) -> AppState {
        AppState::new(
            Arc::new(workflow),
            Arc::new(creds),
            EvaluationLimits::default(),
        )
    }

    #[test]
    fn test_is_json_content_type() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert!(is_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(is_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        assert!(is_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json_content_type(&headers));
    }

    #[tokio::test]
    async fn test_success_shapes_workflow_result() {
        let mut workflow = MockEvaluationWorkflow::new();
        workflow.expect_invoke().times(1).returning(|input| {
            assert_eq!(input.essay, "A fine essay.");
            Ok(WorkflowResult::from_value(json!({
                "avg_score": 7.666,
                "individual_score": [7, 8]
            })))
        });

        let state = state(workflow, credentials(Some("key")));
        let body = Bytes::from(r#"{"essay": "  A fine essay.  "}"#);

        let Json(response) = evaluate_essay(State(state), json_headers(), body)
            .await
            .unwrap();

        assert_eq!(response.avg_score, 7.67);
        assert_eq!(response.individual_score, vec![7.0, 8.0]);
        assert_eq!(response.language_feedback, "");
        assert_eq!(response.overall_feedback, "");
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let mut workflow = MockEvaluationWorkflow::new();
        workflow.expect_invoke().times(0);

        let state = state(workflow, credentials(None));
        let body = Bytes::from(r#"{"essay": "valid essay"}"#);

        let err = evaluate_essay(State(state), json_headers(), body)
            .await
            .unwrap_err();

        assert_eq!(err.response.error, "Google API key not configured");
    }

    #[tokio::test]
    async fn test_wrong_content_type_short_circuits() {
        let mut workflow = MockEvaluationWorkflow::new();
        workflow.expect_invoke().times(0);

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let state = state(workflow, credentials(Some("key")));
        let err = evaluate_essay(State(state), headers, Bytes::from(r#"{"essay": "hi"}"#))
            .await
            .unwrap_err();

        assert_eq!(err.response.error, "Content-Type must be application/json");
    }

    #[tokio::test]
    async fn test_malformed_body_reported_as_missing_essay() {
        let mut workflow = MockEvaluationWorkflow::new();
        workflow.expect_invoke().times(0);

        let state = state(workflow, credentials(Some("key")));
        let err = evaluate_essay(State(state), json_headers(), Bytes::from("{not json"))
            .await
            .unwrap_err();

        assert_eq!(err.response.error, "Essay text is required");
    }

    #[tokio::test]
    async fn test_workflow_failure_is_generic() {
        let mut workflow = MockEvaluationWorkflow::new();
        workflow
            .expect_invoke()
            .times(1)
            .returning(|_| Err(DomainError::provider("gemini", "HTTP 503")));

        let state = state(workflow, credentials(Some("key")));
        let err = evaluate_essay(
            State(state),
            json_headers(),
            Bytes::from(r#"{"essay": "hi"}"#),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.response.error,
            "Failed to evaluate essay. Please try again."
        );
    }

    #[tokio::test]
    async fn test_min_words_limit_enforced() {
        let mut workflow = MockEvaluationWorkflow::new();
        workflow.expect_invoke().times(0);

        let state = AppState::new(
            Arc::new(workflow),
            Arc::new(credentials(Some("key"))),
            EvaluationLimits {
                min_words: Some(10),
            },
        );

        let err = evaluate_essay(
            State(state),
            json_headers(),
            Bytes::from(r#"{"essay": "too short"}"#),
        )
        .await
        .unwrap_err();

        assert_eq!(err.response.error, "Essay must be at least 10 words");
    }
}
