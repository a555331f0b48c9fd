//! Prompt templates and guidance tables.
//!
//! Selector lookups are exact and case-sensitive; anything unrecognised falls
//! back to the professional entry.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown selector: {0}")]
pub struct UnknownSelector(pub String);

/// Target style for the transform-style endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritingStyle {
    #[default]
    Professional,
    Casual,
    Formal,
    Friendly,
    Brief,
    Detailed,
}

impl FromStr for WritingStyle {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(WritingStyle::Professional),
            "casual" => Ok(WritingStyle::Casual),
            "formal" => Ok(WritingStyle::Formal),
            "friendly" => Ok(WritingStyle::Friendly),
            "brief" => Ok(WritingStyle::Brief),
            "detailed" => Ok(WritingStyle::Detailed),
            other => Err(UnknownSelector(other.to_string())),
        }
    }
}

impl WritingStyle {
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_default()
    }

    pub fn guidance(self) -> &'static str {
        match self {
            WritingStyle::Professional => "Convert this text to a professional, formal business tone. Use proper grammar, remove slang, and maintain a respectful, corporate style.",
            WritingStyle::Casual => "Convert this text to a casual, friendly tone. Make it conversational and approachable while keeping the main message.",
            WritingStyle::Formal => "Convert this text to a very formal, academic tone. Use sophisticated vocabulary and proper structure.",
            WritingStyle::Friendly => "Convert this text to a warm, friendly tone. Make it personable and engaging.",
            WritingStyle::Brief => "Make this text as brief as possible while preserving all key information. Remove unnecessary words.",
            WritingStyle::Detailed => "Expand this text with more detail, examples, and explanation. Make it comprehensive.",
        }
    }
}

/// Tone for the draft-email endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailTone {
    #[default]
    Professional,
    Friendly,
    Casual,
    Formal,
}

impl FromStr for EmailTone {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(EmailTone::Professional),
            "friendly" => Ok(EmailTone::Friendly),
            "casual" => Ok(EmailTone::Casual),
            "formal" => Ok(EmailTone::Formal),
            other => Err(UnknownSelector(other.to_string())),
        }
    }
}

impl EmailTone {
    /// Absent, empty and unknown selectors all mean professional.
    pub fn from_selector(selector: Option<&str>) -> Self {
        selector
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn guidance(self) -> &'static str {
        match self {
            EmailTone::Professional => "formal, respectful, and business-appropriate",
            EmailTone::Friendly => "warm, personable, but still professional",
            EmailTone::Casual => "relaxed and conversational",
            EmailTone::Formal => "very formal, traditional business style",
        }
    }
}

pub fn grammar_prompt(text: &str) -> String {
    format!(
        "You are a professional grammar and spelling checker. Fix any grammar, spelling, or punctuation errors in the following text. Return ONLY the corrected text, with no explanations or additional commentary.

Text to check:
{text}"
    )
}

pub fn tone_prompt(text: &str) -> String {
    format!(
        r#"Analyze the tone of the following text. Identify:
1. Overall tone (e.g., formal, casual, friendly, professional, aggressive, neutral)
2. Emotion level (high, medium, low)
3. Formality level (very formal, formal, neutral, casual, very casual)
4. Key characteristics (2-3 brief points)

Respond in this exact JSON format:
{{
  "tone": "primary tone here",
  "emotion": "emotion level",
  "formality": "formality level",
  "characteristics": ["point 1", "point 2", "point 3"]
}}

Text to analyze:
{text}"#
    )
}

pub fn improve_prompt(text: &str) -> String {
    format!(
        "Improve the following text to make it clearer, more concise, and more impactful. \n\
Maintain the original meaning but enhance:
- Clarity and readability
- Conciseness (remove unnecessary words)
- Impact and persuasiveness
- Professional tone

Return ONLY the improved version, no explanations.

Text to improve:
{text}"
    )
}

pub fn transform_prompt(style: WritingStyle, text: &str) -> String {
    format!(
        "{guidance}

Return ONLY the transformed text, no explanations.

Text to transform:
{text}",
        guidance = style.guidance()
    )
}

pub fn document_prompt(document_text: &str, question: &str) -> String {
    format!(
        "You are analyzing a document. Answer the user's question based ONLY on the information in the document below. If the answer is not in the document, say so.

Document:
{document_text}

Question: {question}

Provide a clear, concise answer:"
    )
}

pub fn meeting_notes_prompt(transcript: &str) -> String {
    format!(
        "Generate structured meeting notes from this transcript. Include:

1. **Meeting Summary** (2-3 sentences)
2. **Key Discussion Points** (bullet points)
3. **Decisions Made** (bullet points)
4. **Action Items** (bullet points with format: [Person] - [Action])
5. **Next Steps**

Format the output in clear markdown.

Transcript:
{transcript}"
    )
}

/// The recipient line is left out entirely when there is no recipient.
pub fn email_prompt(tone: EmailTone, context: &str, recipient: Option<&str>) -> String {
    let recipient_line = recipient
        .filter(|r| !r.is_empty())
        .map(|r| format!("Recipient: {r}\n"))
        .unwrap_or_default();

    format!(
        "Draft a {guidance} email based on this context:

Context: {context}
{recipient_line}
Generate:
1. Subject line
2. Email body (complete, ready to send)

Format as:
Subject: [subject line]

[email body]",
        guidance = tone.guidance()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_selectors_are_exact() {
        assert_eq!(WritingStyle::from_selector("casual"), WritingStyle::Casual);
        assert_eq!(WritingStyle::from_selector("detailed"), WritingStyle::Detailed);
        assert_eq!(
            WritingStyle::from_selector("Casual"),
            WritingStyle::Professional
        );
        assert_eq!(
            WritingStyle::from_selector("sarcastic"),
            WritingStyle::Professional
        );
    }

    #[test]
    fn unknown_style_reports_selector() {
        assert_eq!(
            "sarcastic".parse::<WritingStyle>(),
            Err(UnknownSelector("sarcastic".to_string()))
        );
    }

    #[test]
    fn email_tone_defaults_to_professional() {
        assert_eq!(EmailTone::from_selector(None), EmailTone::Professional);
        assert_eq!(EmailTone::from_selector(Some("")), EmailTone::Professional);
        assert_eq!(EmailTone::from_selector(Some("brief")), EmailTone::Professional);
        assert_eq!(EmailTone::from_selector(Some("friendly")), EmailTone::Friendly);
    }

    #[test]
    fn improve_prompt_keeps_template_spacing() {
        let prompt = improve_prompt("We should ship.");
        assert!(prompt.starts_with(
            "Improve the following text to make it clearer, more concise, and more impactful. \n\
             Maintain the original meaning but enhance:\n"
        ));
        assert!(prompt.ends_with("Text to improve:\nWe should ship."));
    }

    #[test]
    fn transform_prompt_leads_with_guidance() {
        let prompt = transform_prompt(WritingStyle::Brief, "a long sentence");
        assert!(prompt.starts_with(WritingStyle::Brief.guidance()));
        assert!(prompt.ends_with("Text to transform:\na long sentence"));
    }

    #[test]
    fn grammar_prompt_ends_with_text() {
        let prompt = grammar_prompt("their going home");
        assert!(prompt.contains("Return ONLY the corrected text"));
        assert!(prompt.ends_with("Text to check:\ntheir going home"));
    }

    #[test]
    fn tone_prompt_spells_out_json_shape() {
        let prompt = tone_prompt("hello");
        assert!(prompt.contains("\"characteristics\": [\"point 1\", \"point 2\", \"point 3\"]"));
        assert!(prompt.contains("{\n  \"tone\""));
        assert!(prompt.ends_with("Text to analyze:\nhello"));
    }

    #[test]
    fn document_prompt_places_question_after_document() {
        let prompt = document_prompt("The sky is blue.", "What colour is the sky?");
        let doc_at = prompt.find("Document:\nThe sky is blue.").unwrap();
        let question_at = prompt.find("Question: What colour is the sky?").unwrap();
        assert!(doc_at < question_at);
        assert!(prompt.ends_with("Provide a clear, concise answer:"));
    }

    #[test]
    fn meeting_notes_prompt_lists_five_sections() {
        let prompt = meeting_notes_prompt("Alice: ship it");
        for section in [
            "1. **Meeting Summary**",
            "2. **Key Discussion Points**",
            "3. **Decisions Made**",
            "4. **Action Items**",
            "5. **Next Steps**",
        ] {
            assert!(prompt.contains(section), "missing {section}");
        }
        assert!(prompt.ends_with("Transcript:\nAlice: ship it"));
    }

    #[test]
    fn email_prompt_includes_recipient_when_given() {
        let prompt = email_prompt(EmailTone::Casual, "lunch on friday", Some("Sam"));
        assert!(prompt.starts_with("Draft a relaxed and conversational email"));
        assert!(prompt.contains("Context: lunch on friday\nRecipient: Sam\n\nGenerate:"));
    }

    #[test]
    fn email_prompt_omits_recipient_line_when_absent() {
        for recipient in [None, Some("")] {
            let prompt = email_prompt(EmailTone::Professional, "quarterly report", recipient);
            assert!(!prompt.contains("Recipient"));
            assert!(prompt.contains("Context: quarterly report\n\nGenerate:"));
        }
    }
}
