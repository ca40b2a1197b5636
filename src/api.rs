//! JSON request/response contract.
//!
//! Transport agnostic: callers hand in a request body and get back a status
//! code plus a JSON body, which a CLI, an HTTP handler or a test can forward
//! as they see fit.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregator::ScanResult;
use crate::errors::ScanError;
use crate::scanner::Scanner;

pub const DEBUG_ENV_VAR: &str = "SCAMSCAN_DEBUG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Attach the full per-analyzer breakdown to the response.
    #[serde(default)]
    pub debug: bool,
}

impl ScanOptions {
    /// Force debug output when `SCAMSCAN_DEBUG` is `1` or `true`.
    pub fn with_env_overrides(self) -> Self {
        Self {
            debug: self.debug || debug_forced_by_env(),
        }
    }
}

fn debug_forced_by_env() -> bool {
    std::env::var(DEBUG_ENV_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub text: String,
    pub options: ScanOptions,
}

impl ScanRequest {
    pub fn parse(body: &str) -> Result<Self, ScanError> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            ScanError::malformed_request(format!("Request body is not valid JSON: {e}"))
        })?;
        Self::from_value(value)
    }

    /// Extract the request from an already-decoded body. Unknown fields
    /// are ignored.
    pub fn from_value(value: Value) -> Result<Self, ScanError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ScanError::malformed_request(format!(
                    "Request body must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let text = match map.remove("text") {
            None | Some(Value::Null) => return Err(ScanError::missing_text()),
            Some(Value::String(text)) => text,
            Some(other) => return Err(ScanError::wrong_type(json_type_name(&other))),
        };

        let options = match map.remove("options") {
            None | Some(Value::Null) => ScanOptions::default(),
            Some(raw) => serde_json::from_value(raw)
                .map_err(|e| ScanError::malformed_request(format!("`options` is invalid: {e}")))?,
        };

        Ok(Self { text, options })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub has_phones: bool,
    pub has_emails: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDetails {
    pub keywords_found: Vec<String>,
    pub suspicious_urls: Vec<String>,
    pub contact_info: ContactInfo,
}

/// Successful scan as seen by callers of the JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub result: String,
    pub threat_level: String,
    pub explanation: String,
    pub score: u32,
    pub details: ResponseDetails,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<ScanResult>,
}

impl ScanResponse {
    pub fn from_result(result: ScanResult, options: ScanOptions, now: DateTime<Utc>) -> Self {
        let details = ResponseDetails {
            keywords_found: result.keywords_found(),
            suspicious_urls: result.suspicious_urls(),
            contact_info: ContactInfo {
                has_phones: result.findings.contacts.has_phones(),
                has_emails: result.findings.contacts.has_emails(),
            },
        };

        Self {
            result: result.recommendation.verdict().to_string(),
            threat_level: result.risk_tier.threat_level().to_string(),
            explanation: result.explanation.clone(),
            score: result.total_score,
            details,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            debug: options.debug.then_some(result),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&ScanError> for ErrorResponse {
    fn from(err: &ScanError) -> Self {
        Self {
            error: err.label().to_string(),
            message: err.public_message(),
        }
    }
}

/// Status code and JSON body for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    fn error(err: &ScanError) -> Self {
        match err {
            ScanError::Internal(detail) => {
                log::error!("scan failed [{}]: {detail}", err.code());
            }
            ScanError::InvalidInput { .. } => {
                log::debug!("rejected request [{}]: {err}", err.code());
            }
        }
        Self {
            status: err.status(),
            body: to_json(&ErrorResponse::from(err)),
        }
    }
}

/// Scan `text` and render the wire response.
pub fn respond(
    scanner: &Scanner,
    text: &str,
    options: ScanOptions,
) -> Result<ScanResponse, ScanError> {
    respond_at(scanner, text, options, Utc::now())
}

pub fn respond_at(
    scanner: &Scanner,
    text: &str,
    options: ScanOptions,
    now: DateTime<Utc>,
) -> Result<ScanResponse, ScanError> {
    let result = scanner.scan(text)?;
    Ok(ScanResponse::from_result(result, options, now))
}

pub fn handle_request(scanner: &Scanner, body: &str) -> ApiReply {
    handle_request_at(scanner, body, Utc::now())
}

/// Same as [`handle_request`] with a fixed clock.
pub fn handle_request_at(scanner: &Scanner, body: &str, now: DateTime<Utc>) -> ApiReply {
    let outcome = ScanRequest::parse(body).and_then(|request| {
        respond_at(
            scanner,
            &request.text,
            request.options.with_env_overrides(),
            now,
        )
    });

    match outcome {
        Ok(response) => ApiReply {
            status: 200,
            body: to_json(&response),
        },
        Err(err) => ApiReply::error(&err),
    }
}

// Response types contain only strings, numbers, bools, maps and sequences,
// which serde_json always represents.
fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        log::error!("failed to encode response: {e}");
        serde_json::json!({
            "error": "internal_error",
            "message": "The scan could not be completed",
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_text_is_400() {
        let reply = handle_request_at(&Scanner::default(), r#"{"options":{}}"#, fixed_now());
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body["error"], "invalid_input");
    }

    #[test]
    fn test_wrong_type_names_the_type() {
        let err = ScanRequest::parse(r#"{"text": 42}"#).unwrap_err();
        assert_eq!(err.public_message(), "`text` must be a string, got number");
    }

    #[test]
    fn test_null_text_counts_as_missing() {
        let err = ScanRequest::parse(r#"{"text": null}"#).unwrap_err();
        assert_eq!(err, ScanError::missing_text());
    }

    #[test]
    fn test_invalid_json_is_400() {
        let reply = handle_request_at(&Scanner::default(), "{not json", fixed_now());
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn test_malformed_messages_name_the_problem() {
        let not_json = ScanRequest::parse("{not json").unwrap_err();
        assert!(not_json
            .public_message()
            .starts_with("Request body is not valid JSON"));

        let array = ScanRequest::parse("[1, 2]").unwrap_err();
        assert_eq!(
            array.public_message(),
            "Request body must be a JSON object, got array"
        );

        let options = ScanRequest::parse(r#"{"text":"hi","options":{"debug":"yes"}}"#).unwrap_err();
        assert!(options.public_message().starts_with("`options` is invalid"));
        assert!(!options.public_message().contains("not valid JSON"));
    }

    #[test]
    fn test_options_parsed() {
        let request = ScanRequest::parse(r#"{"text":"hi","options":{"debug":true}}"#).unwrap();
        assert!(request.options.debug);
    }

    #[test]
    fn test_safe_text_reply_shape() {
        let reply = handle_request_at(
            &Scanner::default(),
            r#"{"text":"Hi, just checking in on the project status."}"#,
            fixed_now(),
        );
        assert!(reply.is_success());
        assert_eq!(
            reply.body,
            json!({
                "result": "Likely Safe",
                "threatLevel": "Low",
                "explanation": "No significant risk (score 0): no keyword categories matched; \
                    0 suspicious URLs of 0 links; 0 contact warnings; 0 text quality issues.",
                "score": 0,
                "details": {
                    "keywordsFound": [],
                    "suspiciousUrls": [],
                    "contactInfo": { "hasPhones": false, "hasEmails": false }
                },
                "timestamp": "2024-05-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_debug_attaches_breakdown() {
        let response = respond_at(
            &Scanner::default(),
            "urgent",
            ScanOptions { debug: true },
            fixed_now(),
        )
        .unwrap();
        let debug = response.debug.expect("debug breakdown present");
        assert_eq!(debug.total_score, response.score);
    }
}
