//! The writing tasks the relay offers and the single provider call each makes.

use super::metrics;
use super::providers::{CompletionRequest, TextProvider};
use service_core::error::AppError;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    CheckGrammar,
    AnalyzeTone,
    ImproveText,
    TransformStyle,
    AnalyzeDocument,
    GenerateMeetingNotes,
    DraftEmail,
}

impl Task {
    pub fn name(self) -> &'static str {
        match self {
            Task::CheckGrammar => "check-grammar",
            Task::AnalyzeTone => "analyze-tone",
            Task::ImproveText => "improve-text",
            Task::TransformStyle => "transform-style",
            Task::AnalyzeDocument => "analyze-document",
            Task::GenerateMeetingNotes => "generate-meeting-notes",
            Task::DraftEmail => "draft-email",
        }
    }

    /// Output budget, sized to the expected length of the answer.
    pub fn max_tokens(self) -> u32 {
        match self {
            Task::CheckGrammar | Task::AnalyzeTone | Task::DraftEmail => 1024,
            Task::ImproveText
            | Task::TransformStyle
            | Task::AnalyzeDocument
            | Task::GenerateMeetingNotes => 2048,
        }
    }

    /// Message returned to the caller when the provider call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Task::CheckGrammar => "Failed to check grammar",
            Task::AnalyzeTone => "Failed to analyze tone",
            Task::ImproveText => "Failed to improve text",
            Task::TransformStyle => "Failed to transform style",
            Task::AnalyzeDocument => "Failed to analyze document",
            Task::GenerateMeetingNotes => "Failed to generate meeting notes",
            Task::DraftEmail => "Failed to draft email",
        }
    }

    /// Send `prompt` to the provider once and return the completion text.
    ///
    /// Provider failures become an `InternalError` whose visible message is
    /// [`Task::failure_message`]; there is no retry.
    pub async fn run(self, provider: &dyn TextProvider, prompt: String) -> Result<String, AppError> {
        let request = CompletionRequest {
            prompt,
            max_tokens: self.max_tokens(),
        };

        let started = Instant::now();
        let result = provider.complete(&request).await;
        metrics::observe_provider_latency(self.name(), started.elapsed().as_secs_f64());

        match result {
            Ok(completion) => {
                metrics::record_provider_call(self.name(), "ok");
                tracing::info!(
                    task = self.name(),
                    model = provider.model(),
                    input_tokens = completion.input_tokens,
                    output_tokens = completion.output_tokens,
                    stop_reason = ?completion.stop_reason,
                    "Completion received"
                );
                Ok(completion.text)
            }
            Err(e) => {
                metrics::record_provider_call(self.name(), e.kind());
                Err(AppError::InternalError(
                    anyhow::Error::new(e).context(self.failure_message()),
                ))
            }
        }
    }
}
