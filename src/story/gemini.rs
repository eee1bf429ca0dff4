use serde::{Deserialize, Serialize};

use super::prompt::build_prompt;
use super::provider::{StoryRequest, Storyteller, StorytellerError, StorytellerResult};

/// Harm categories blocked for bedtime content, all at medium-and-above.
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

const STORY_TEMPERATURE: f64 = 0.9;

/// Storyteller backed by the Gemini `generateContent` REST API.
#[derive(Debug, Clone)]
pub struct GeminiStoryteller {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiStoryteller {
    pub fn new(
        client: reqwest::Client,
        api_key: Option<String>,
        model: String,
        base_url: String,
    ) -> StorytellerResult<Self> {
        let api_key = api_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(StorytellerError::MissingApiKey)?;
        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(request: &StoryRequest) -> GeminiGenerateRequest {
        GeminiGenerateRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: build_prompt(request),
                }],
            }],
            safety_settings: SAFETY_CATEGORIES
                .into_iter()
                .map(|category| GeminiSafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
            generation_config: GeminiGenerationConfig {
                temperature: STORY_TEMPERATURE,
            },
        }
    }

    fn extract_text(response: GeminiGenerateResponse) -> StorytellerResult<String> {
        for candidate in response.candidates {
            for part in candidate.content.parts {
                let trimmed = part.text.trim();
                if !trimmed.is_empty() {
                    return Ok(trimmed.to_string());
                }
            }
        }
        Err(StorytellerError::EmptyResponse)
    }
}

impl Storyteller for GeminiStoryteller {
    async fn tell(&self, request: &StoryRequest) -> StorytellerResult<String> {
        let payload = Self::build_request(request);
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|err| StorytellerError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            let body: String = body.chars().take(400).collect();
            return Err(StorytellerError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decoded = response
            .json::<GeminiGenerateResponse>()
            .await
            .map_err(|err| StorytellerError::Parse(err.to_string()))?;
        Self::extract_text(decoded)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateRequest {
    contents: Vec<GeminiContent>,
    safety_settings: Vec<GeminiSafetySetting>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiSafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    parts: Vec<GeminiPart>,
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::i18n::Language;
    use crate::sky::ObjectKind;

    fn story_request() -> StoryRequest {
        StoryRequest {
            object_name: "Jupiter".to_string(),
            kind: ObjectKind::Planet,
            location: "Milan".to_string(),
            scientific_facts: "The largest planet in our solar system".to_string(),
            language: Language::It,
        }
    }

    fn storyteller(base_url: String) -> GeminiStoryteller {
        GeminiStoryteller::new(
            reqwest::Client::new(),
            Some("test-key".to_string()),
            "test-model".to_string(),
            base_url,
        )
        .expect("storyteller")
    }

    #[test]
    fn new_rejects_missing_api_key() {
        let err = GeminiStoryteller::new(
            reqwest::Client::new(),
            Some("   ".to_string()),
            "test-model".to_string(),
            "http://localhost".to_string(),
        )
        .err()
        .expect("error");
        assert!(matches!(err, StorytellerError::MissingApiKey));
    }

    #[tokio::test]
    async fn tell_posts_prompt_with_safety_settings() {
        let server = MockServer::start().await;
        let body = r##"{"candidates":[{"content":{"parts":[{"text":"# Il Racconto di Giove\n\nUna storia dolce.\n"}]}}]}"##;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/test-model:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_string_contains("safetySettings"))
            .and(body_string_contains("BLOCK_MEDIUM_AND_ABOVE"))
            .and(body_string_contains("\"temperature\":0.9"))
            .and(body_string_contains("Jupiter"))
            .and(body_string_contains("Italiano"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let teller = storyteller(server.uri());
        let text = teller.tell(&story_request()).await.expect("story text");
        assert!(text.starts_with("# Il Racconto di Giove"));
    }

    #[tokio::test]
    async fn tell_surfaces_http_errors_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let teller = storyteller(server.uri());
        let err = teller.tell(&story_request()).await.err().expect("error");
        match err {
            StorytellerError::HttpStatus { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn tell_rejects_responses_without_text() {
        let server = MockServer::start().await;
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&server)
            .await;

        let teller = storyteller(server.uri());
        let err = teller.tell(&story_request()).await.err().expect("error");
        assert!(matches!(err, StorytellerError::EmptyResponse));
    }
}
