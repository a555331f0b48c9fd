//! Best-effort interpretation of the tone-analysis completion.

use serde::Serialize;
use serde_json::{Map, Value};

/// Keys the prompt asks the model to return.
pub const REPORT_KEYS: [&str; 4] = ["tone", "emotion", "formality", "characteristics"];

/// Either the parsed report or the raw completion when it did not parse.
///
/// A report is any JSON object carrying every key in [`REPORT_KEYS`]. Values
/// and additional keys are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToneAnalysis {
    Structured(Map<String, Value>),
    Raw { analysis: String },
}

impl ToneAnalysis {
    pub fn from_completion(completion: String) -> Self {
        let report = match serde_json::from_str::<Map<String, Value>>(strip_code_fence(&completion)) {
            Ok(report) => report,
            Err(e) => {
                tracing::debug!(error = %e, "Tone analysis is not a JSON object, returning raw text");
                return ToneAnalysis::Raw {
                    analysis: completion,
                };
            }
        };

        match REPORT_KEYS.iter().find(|key| !report.contains_key(**key)) {
            None => ToneAnalysis::Structured(report),
            Some(missing) => {
                tracing::debug!(missing_key = *missing, "Tone analysis is incomplete, returning raw text");
                ToneAnalysis::Raw {
                    analysis: completion,
                }
            }
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ToneAnalysis::Structured(_))
    }
}

/// Strip a surrounding markdown code fence, with or without a language tag.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening fence line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with('{') => body.trim(),
        _ => inner.trim(),
    }
}
