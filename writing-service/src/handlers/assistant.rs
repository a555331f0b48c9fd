//! The `/api` endpoints: validate, build the prompt, call the provider once,
//! shape the reply.

use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::dtos::assistant::{
    AnalyzeDocumentRequest, AnalyzeDocumentResponse, DraftEmailRequest, DraftEmailResponse,
    GrammarCheckResponse, ImproveTextResponse, MeetingNotesRequest, MeetingNotesResponse,
    TextRequest, TransformStyleRequest, TransformStyleResponse,
};
use crate::services::prompts::{self, EmailTone, WritingStyle};
use crate::services::tone::ToneAnalysis;
use crate::services::Task;
use crate::startup::AppState;

#[tracing::instrument(skip(state, request))]
pub async fn check_grammar(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TextRequest>,
) -> Result<Json<GrammarCheckResponse>, AppError> {
    let prompt = prompts::grammar_prompt(&request.text);
    let corrected = Task::CheckGrammar
        .run(state.text_provider.as_ref(), prompt)
        .await?;

    Ok(Json(GrammarCheckResponse::new(request.text, corrected)))
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_tone(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TextRequest>,
) -> Result<Json<ToneAnalysis>, AppError> {
    let prompt = prompts::tone_prompt(&request.text);
    let completion = Task::AnalyzeTone
        .run(state.text_provider.as_ref(), prompt)
        .await?;

    let analysis = ToneAnalysis::from_completion(completion);
    tracing::debug!(structured = analysis.is_structured(), "Tone analysis shaped");

    Ok(Json(analysis))
}

#[tracing::instrument(skip(state, request))]
pub async fn improve_text(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TextRequest>,
) -> Result<Json<ImproveTextResponse>, AppError> {
    let prompt = prompts::improve_prompt(&request.text);
    let improved = Task::ImproveText
        .run(state.text_provider.as_ref(), prompt)
        .await?;

    Ok(Json(ImproveTextResponse {
        original: request.text,
        improved,
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn transform_style(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TransformStyleRequest>,
) -> Result<Json<TransformStyleResponse>, AppError> {
    let style = WritingStyle::from_selector(&request.target_style);
    tracing::debug!(requested = %request.target_style, applied = ?style, "Style selected");
    let prompt = prompts::transform_prompt(style, &request.text);
    let transformed = Task::TransformStyle
        .run(state.text_provider.as_ref(), prompt)
        .await?;

    Ok(Json(TransformStyleResponse {
        original: request.text,
        transformed,
        style: request.target_style,
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_document(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzeDocumentRequest>,
) -> Result<Json<AnalyzeDocumentResponse>, AppError> {
    let prompt = prompts::document_prompt(&request.document_text, &request.question);
    let answer = Task::AnalyzeDocument
        .run(state.text_provider.as_ref(), prompt)
        .await?;

    Ok(Json(AnalyzeDocumentResponse {
        question: request.question,
        answer,
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_meeting_notes(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MeetingNotesRequest>,
) -> Result<Json<MeetingNotesResponse>, AppError> {
    let prompt = prompts::meeting_notes_prompt(&request.transcript);
    let notes = Task::GenerateMeetingNotes
        .run(state.text_provider.as_ref(), prompt)
        .await?;

    Ok(Json(MeetingNotesResponse { notes }))
}

#[tracing::instrument(skip(state, request))]
pub async fn draft_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DraftEmailRequest>,
) -> Result<Json<DraftEmailResponse>, AppError> {
    let tone = EmailTone::from_selector(request.tone.as_deref());
    let prompt = prompts::email_prompt(tone, &request.context, request.recipient.as_deref());
    let draft = Task::DraftEmail
        .run(state.text_provider.as_ref(), prompt)
        .await?;

    Ok(Json(DraftEmailResponse { draft }))
}
