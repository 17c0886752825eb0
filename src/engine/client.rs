// HotelChat — Engine: Answer Client

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::atoms::error::WidgetResult;
use crate::atoms::types::ChatMessage;

/// Boundary to whatever answers the visitor. The widget only talks
/// through this trait; tests and embedded hosts swap in their own.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    /// One question/answer round trip. `history` already contains the
    /// message being sent, oldest entry first.
    async fn send_message(&self, message: &str, history: &[ChatMessage])
        -> WidgetResult<ChatReply>;
}

/// Service response reduced to the part the widget cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Non-empty answer text. `None` for every other body shape:
    /// error payloads, blank answers, non-string answers.
    pub answer: Option<String>,
}

impl ChatReply {
    pub fn from_value(body: &Value) -> Self {
        let answer = body
            .get("answer")
            .and_then(Value::as_str)
            .filter(|answer| !answer.is_empty())
            .map(str::to_string);
        Self { answer }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: &'a [ChatMessage],
}

/// Stock client: posts each message to the configured HTTP endpoint.
pub struct HttpAnswerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAnswerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn send_message(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> WidgetResult<ChatReply> {
        log::debug!("[client] POST {} ({} history entries)", self.endpoint, history.len());
        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(&ChatRequest { message, history })
            .send()
            .await?;

        // Error statuses still carry a JSON body and must read as "no
        // answer", so the status line is never checked.
        let body: Value = response.json().await?;
        Ok(ChatReply::from_value(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reply_takes_non_empty_answer() {
        let reply = ChatReply::from_value(&json!({ "answer": "Còn 2 phòng trống." }));
        assert_eq!(reply.answer.as_deref(), Some("Còn 2 phòng trống."));
    }

    #[test]
    fn unusable_bodies_read_as_no_answer() {
        for body in [
            json!({ "answer": "" }),
            json!({ "answer": 42 }),
            json!({ "error": "model unavailable" }),
            json!({}),
            json!(null),
            json!("answer"),
        ] {
            assert_eq!(ChatReply::from_value(&body).answer, None, "body: {body}");
        }
    }

    #[test]
    fn request_serializes_message_and_full_history() {
        let history = vec![ChatMessage::assistant("Xin chào"), ChatMessage::user("Giá phòng?")];
        let body =
            serde_json::to_value(ChatRequest { message: "Giá phòng?", history: &history }).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "Giá phòng?",
                "history": [
                    { "role": "assistant", "content": "Xin chào" },
                    { "role": "user", "content": "Giá phòng?" },
                ],
            })
        );
    }
}
