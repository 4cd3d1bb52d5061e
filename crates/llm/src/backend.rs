//! Hosted-LLM client for messages the local rules decline.
//!
//! Speaks a Gemini-style `generateContent` API. One bounded request per
//! escalation, no retries; dropping the future cancels the request, which
//! is what happens when the shopper navigates away mid-answer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use stylist_config::LlmSettings;
use stylist_core::{ChatReply, ChatTurn, Reply};

use crate::FallbackError;

/// Remote engine interface: raw message, locale hint, and prior turns in;
/// a validated reply out. Every failure is an error for the caller to
/// degrade, never a panic.
#[async_trait]
pub trait FallbackEngine: Send + Sync {
    async fn respond(
        &self,
        message: &str,
        locale: Option<&str>,
        history: &[ChatTurn],
    ) -> Result<Reply, FallbackError>;
}

/// Gemini `generateContent` client.
pub struct GeminiBackend {
    client: Client,
    settings: LlmSettings,
    system_context: String,
}

impl GeminiBackend {
    /// Build a client from settings plus the pre-assembled system context.
    ///
    /// Fails with [`FallbackError::Disabled`] when the fallback switch is
    /// off or no API key is configured, so callers can decide up front to
    /// run local-only.
    pub fn new(settings: LlmSettings, system_context: String) -> Result<Self, FallbackError> {
        if !settings.fallback_active() {
            return Err(FallbackError::Disabled);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|e| FallbackError::Network(e.to_string()))?;

        Ok(Self {
            client,
            settings,
            system_context,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model,
            self.settings.api_key
        )
    }

    fn request_body(
        &self,
        message: &str,
        locale: Option<&str>,
        history: &[ChatTurn],
    ) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: Some(turn.role.as_str().to_string()),
                parts: vec![Part {
                    text: turn.content.clone(),
                }],
            })
            .collect();

        let text = match locale {
            Some(locale) => format!("{message}\n\n(Locale hint: {locale} - reply in this language.)"),
            None => message.to_string(),
        };
        contents.push(Content {
            role: Some("user".to_string()),
            parts: vec![Part { text }],
        });

        GenerateContentRequest {
            contents,
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: self.system_context.clone(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
                response_mime_type: "application/json",
            },
        }
    }
}

#[async_trait]
impl FallbackEngine for GeminiBackend {
    async fn respond(
        &self,
        message: &str,
        locale: Option<&str>,
        history: &[ChatTurn],
    ) -> Result<Reply, FallbackError> {
        let request = self.request_body(message, locale, history);
        debug!(
            model = %self.settings.model,
            history_turns = history.len(),
            "forwarding message to the remote stylist"
        );

        let response = self
            .client
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FallbackError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| FallbackError::InvalidReply(e.to_string()))?;

        let text = payload.candidate_text();
        if text.is_empty() {
            return Err(FallbackError::InvalidReply(
                "empty candidate content".to_string(),
            ));
        }

        let reply = parse_reply_text(&text)?;
        debug!(action = %reply.action_type(), "remote reply validated");
        Ok(reply)
    }
}

/// Parse model output into a validated reply.
///
/// Models wrap JSON in prose or code fences often enough that we extract
/// the outermost object before deserializing; the flat wire reply is then
/// re-validated into the tagged union.
fn parse_reply_text(text: &str) -> Result<Reply, FallbackError> {
    let json = extract_json_object(text)
        .ok_or_else(|| FallbackError::InvalidReply("no JSON object in candidate".to_string()))?;

    let wire: ChatReply =
        serde_json::from_str(json).map_err(|e| FallbackError::InvalidReply(e.to_string()))?;

    Reply::try_from(wire).map_err(|e| FallbackError::InvalidReply(e.to_string()))
}

/// Outermost `{...}` span of the text, fences and prose stripped.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

// =============================================================================
// Gemini API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn candidate_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::ActionType;

    #[test]
    fn test_disabled_without_api_key() {
        let settings = LlmSettings::default();
        assert!(matches!(
            GeminiBackend::new(settings, String::new()),
            Err(FallbackError::Disabled)
        ));
    }

    #[test]
    fn test_request_serialization_is_camel_case() {
        let settings = LlmSettings {
            api_key: "test-key".to_string(),
            ..LlmSettings::default()
        };
        let backend = GeminiBackend::new(settings, "context".to_string()).unwrap();
        let history = vec![
            ChatTurn::user("punjabi dekhao"),
            ChatTurn::model("Ei dekhun amader punjabi collection!"),
        ];
        let request = backend.request_body("dhonnobad", Some("bn-IN"), &history);

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("systemInstruction"));
        assert!(json.contains("generationConfig"));
        assert!(json.contains("maxOutputTokens"));
        assert!(json.contains("\"role\":\"model\""));
        assert!(json.contains("bn-IN"));
    }

    #[test]
    fn test_url_includes_model_and_key() {
        let settings = LlmSettings {
            api_key: "k123".to_string(),
            ..LlmSettings::default()
        };
        let backend = GeminiBackend::new(settings, String::new()).unwrap();
        let url = backend.request_url();
        assert!(url.contains("/models/gemini-1.5-flash:generateContent"));
        assert!(url.ends_with("key=k123"));
    }

    #[test]
    fn test_extract_json_object_strips_fences() {
        let fenced = "```json\n{\"response\": \"hi\"}\n```";
        assert_eq!(extract_json_object(fenced), Some("{\"response\": \"hi\"}"));

        let prose = "Here you go: {\"response\": \"hi\"} - hope that helps";
        assert_eq!(extract_json_object(prose), Some("{\"response\": \"hi\"}"));

        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_parse_reply_text_validates_the_union() {
        let text = r#"```json
        {"response": "1 x Black Designer Punjabi apnar order e add korlam!",
         "actionType": "item_added",
         "cartItems": [{"name": "Black Designer Punjabi", "price": 957, "quantity": 1}],
         "totalPrice": 957}
        ```"#;
        let reply = parse_reply_text(text).unwrap();
        assert_eq!(reply.action_type(), ActionType::ItemAdded);
        assert_eq!(reply.cart_items().len(), 1);
    }

    #[test]
    fn test_parse_reply_text_rejects_inconsistent_reply() {
        // item_added without cart items violates the reply invariant.
        let text = r#"{"response": "added!", "actionType": "item_added"}"#;
        assert!(matches!(
            parse_reply_text(text),
            Err(FallbackError::InvalidReply(_))
        ));
    }

    #[test]
    fn test_candidate_text_joins_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [
                    {"text": "{\"response\""},
                    {"text": ": \"hello\"}"}
                ]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidate_text(), "{\"response\": \"hello\"}");
    }

    #[test]
    fn test_empty_candidates_yield_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.candidate_text(), "");
    }
}
