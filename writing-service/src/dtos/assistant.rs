//! Request and response bodies for the `/api` endpoints.

use super::{null_as_empty, string_or_none};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TextRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransformStyleRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Text and target style are required"))]
    pub text: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Text and target style are required"))]
    pub target_style: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeDocumentRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Document text and question are required"))]
    pub document_text: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Document text and question are required"))]
    pub question: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MeetingNotesRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Transcript is required"))]
    pub transcript: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DraftEmailRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Context is required"))]
    pub context: String,

    /// Unrecognised or non-string tones fall back to professional.
    #[serde(default, deserialize_with = "string_or_none")]
    pub tone: Option<String>,

    #[serde(default)]
    pub recipient: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarCheckResponse {
    pub original: String,
    pub corrected: String,
    pub has_errors: bool,
}

impl GrammarCheckResponse {
    /// Any textual difference counts as a correction.
    pub fn new(original: String, corrected: String) -> Self {
        Self {
            has_errors: corrected != original,
            original,
            corrected,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImproveTextResponse {
    pub original: String,
    pub improved: String,
}

#[derive(Debug, Serialize)]
pub struct TransformStyleResponse {
    pub original: String,
    pub transformed: String,
    /// The style the caller asked for, even when it fell back to professional.
    pub style: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeDocumentResponse {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct MeetingNotesResponse {
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct DraftEmailResponse {
    pub draft: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_missing_fields_fail_validation() {
        for body in [json!({}), json!({ "text": null }), json!({ "text": "" })] {
            let request: TextRequest = serde_json::from_value(body).unwrap();
            assert!(request.validate().is_err());
        }
    }

    #[test]
    fn transform_style_reads_camel_case() {
        let request: TransformStyleRequest =
            serde_json::from_value(json!({ "text": "hi", "targetStyle": "brief" })).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.target_style, "brief");
    }

    #[test]
    fn draft_email_only_requires_context() {
        let request: DraftEmailRequest =
            serde_json::from_value(json!({ "context": "follow up" })).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.tone.is_none());
        assert!(request.recipient.is_none());
    }

    #[test]
    fn draft_email_ignores_non_string_tone() {
        for tone in [json!(1), json!(true), json!(["formal"]), json!(null)] {
            let request: DraftEmailRequest =
                serde_json::from_value(json!({ "context": "follow up", "tone": tone })).unwrap();
            assert!(request.tone.is_none());
        }

        let request: DraftEmailRequest =
            serde_json::from_value(json!({ "context": "follow up", "tone": "casual" })).unwrap();
        assert_eq!(request.tone.as_deref(), Some("casual"));
    }

    #[test]
    fn grammar_response_flags_any_change() {
        let unchanged = GrammarCheckResponse::new("Hello.".into(), "Hello.".into());
        assert!(!unchanged.has_errors);

        let changed = GrammarCheckResponse::new("helo".into(), "hello".into());
        assert!(changed.has_errors);
        assert_eq!(
            serde_json::to_value(&changed).unwrap(),
            json!({ "original": "helo", "corrected": "hello", "hasErrors": true })
        );
    }
}
