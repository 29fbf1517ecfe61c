use crate::{
    config::Config,
    errors::{RoutineError, RoutineResult},
    logging::log_api_call,
    models::{ApiCallLog, Message},
};
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Instant;

/// Chat completion endpoint client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl CompletionClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Sends the full transcript and returns the first choice's message content.
    pub async fn complete(&self, messages: &[Message]) -> RoutineResult<String> {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature
        });

        let start_time = Instant::now();
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RoutineError::api_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: self.api_url.clone(),
            request_summary: format!("chat completion ({} messages)", messages.len()),
            response_status: status.as_u16(),
            response_time_ms: start_time.elapsed().as_millis(),
        });

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RoutineError::api_error(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        let response_data: Value = response
            .json()
            .await
            .map_err(|e| RoutineError::api_error(format!("Failed to parse API response: {}", e)))?;

        match response_data["choices"][0]["message"]["content"].as_str() {
            Some(content) if !content.is_empty() => Ok(content.to_string()),
            _ => Err(RoutineError::MissingContent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_client(server: &MockServer) -> CompletionClient {
        let config = Config {
            api_key: "test-api-key".to_string(),
            api_url: format!("{}/v1/chat/completions", server.uri()),
            ..Config::default()
        };
        CompletionClient::new(Client::new(), &config)
    }

    fn transcript() -> Vec<Message> {
        vec![
            Message::new(Role::System, "be helpful"),
            Message::new(Role::User, "what should I use at night?"),
        ]
    }

    #[tokio::test]
    async fn test_completion_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o",
                "max_tokens": 500,
                "messages": [
                    { "role": "system", "content": "be helpful" },
                    { "role": "user", "content": "what should I use at night?" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Use a retinol serum." } }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reply = test_client(&mock_server)
            .complete(&transcript())
            .await
            .unwrap();
        assert_eq!(reply, "Use a retinol serum.");
    }

    #[tokio::test]
    async fn test_completion_missing_content() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "object": "chat.completion" })))
            .mount(&mock_server)
            .await;

        let err = test_client(&mock_server)
            .complete(&transcript())
            .await
            .unwrap_err();
        assert!(matches!(err, RoutineError::MissingContent));
    }

    #[tokio::test]
    async fn test_completion_empty_content_is_missing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "" } }]
            })))
            .mount(&mock_server)
            .await;

        let err = test_client(&mock_server)
            .complete(&transcript())
            .await
            .unwrap_err();
        assert!(matches!(err, RoutineError::MissingContent));
    }

    #[tokio::test]
    async fn test_completion_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
            })))
            .mount(&mock_server)
            .await;

        let err = test_client(&mock_server)
            .complete(&transcript())
            .await
            .unwrap_err();
        assert!(matches!(err, RoutineError::Api(_)));
    }

    #[tokio::test]
    async fn test_completion_non_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = test_client(&mock_server)
            .complete(&transcript())
            .await
            .unwrap_err();
        assert!(matches!(err, RoutineError::Api(_)));
    }

    #[tokio::test]
    async fn test_completion_unreachable_host() {
        let config = Config {
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ..Config::default()
        };
        let client = CompletionClient::new(Client::new(), &config);

        let err = client.complete(&transcript()).await.unwrap_err();
        assert!(matches!(err, RoutineError::Api(_)));
    }
}
