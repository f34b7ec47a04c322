use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::errors::UpstreamError;
use business::domain::identification::errors::IdentificationError;
use business::domain::identification::model::IdentificationResult;
use business::domain::identification::services::ItemIdentifierService;
use business::domain::image::model::ImagePayload;

use crate::client::GeminiClient;

const IDENTIFY_PROMPT: &str = r#"Analyze this image and identify the waste item shown.
Respond ONLY in raw JSON like:
{"itemName": "plastic bottle"}
Do not include any code fences, markdown, or explanations."#;

const CODE_FENCE: &str = "```";

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

pub struct ItemIdentifierGemini {
    client: GeminiClient,
}

impl ItemIdentifierGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_request(payload: &ImagePayload) -> serde_json::Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {"text": IDENTIFY_PROMPT},
                        {
                            "inline_data": {
                                "mime_type": payload.mime_type(),
                                "data": payload.data(),
                            }
                        },
                    ],
                },
            ],
        })
    }

    /// First text part of the first candidate, or `{}` when there is none.
    fn extract_text(body: &str) -> Result<String, IdentificationError> {
        let response: GenerateContentResponse =
            serde_json::from_str(body).map_err(|e| UpstreamError::decode(e.to_string()))?;

        let text = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .unwrap_or_else(|| "{}".to_string());

        Ok(text)
    }

    fn parse_identification(text: &str) -> Result<IdentificationResult, IdentificationError> {
        let cleaned = cleanup_json_text(text);

        let parsed: serde_json::Value = serde_json::from_str(&cleaned)
            .map_err(|_| IdentificationError::MalformedResponse(cleaned.clone()))?;

        let item_name = parsed
            .get("itemName")
            .and_then(|n| n.as_str())
            .ok_or(IdentificationError::ItemNotIdentified)?;

        IdentificationResult::new(item_name)
    }

    /// Non-success statuses become [`UpstreamError::Status`] carrying the vendor detail.
    fn map_response(status: u16, body: &str) -> Result<IdentificationResult, IdentificationError> {
        if !(200..300).contains(&status) {
            return Err(UpstreamError::status(status, Self::error_detail(body)).into());
        }

        let content = Self::extract_text(body)?;
        Self::parse_identification(&content)
    }

    /// Prefers `STATUS: message` from Google's error envelope, else the raw body.
    fn error_detail(body: &str) -> String {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| {
                let message = envelope.error.message?;
                Some(match envelope.error.status {
                    Some(status) if !status.is_empty() => format!("{}: {}", status, message),
                    _ => message,
                })
            })
            .unwrap_or_else(|| body.to_string())
    }
}

/// Removes markdown code-fence wrapping (with an optional language tag) around
/// model output. Idempotent: clean input comes back unchanged.
pub fn cleanup_json_text(raw: &str) -> String {
    let mut text = raw.trim();
    loop {
        let stripped = strip_code_fence(text);
        if stripped == text {
            return text.to_string();
        }
        text = stripped;
    }
}

fn strip_code_fence(text: &str) -> &str {
    let mut inner = text;
    if let Some(rest) = inner.strip_prefix(CODE_FENCE) {
        let tag_end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(rest.len());
        inner = &rest[tag_end..];
    }
    if let Some(rest) = inner.strip_suffix(CODE_FENCE) {
        inner = rest;
    }
    inner.trim()
}

#[async_trait]
impl ItemIdentifierService for ItemIdentifierGemini {
    async fn identify(
        &self,
        payload: &ImagePayload,
    ) -> Result<IdentificationResult, IdentificationError> {
        let body = Self::build_request(payload);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .query(&[("key", self.client.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::decode(e.without_url().to_string()))?;

        Self::map_response(status.as_u16(), &text)
    }
}
