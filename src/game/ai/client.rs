//! Move providers
//!
//! A [`MoveProvider`] answers "what does the other side play on this board?".
//! Failures are not surfaced as errors: any problem reaching or understanding
//! the provider is logged and collapses to `None`, which the controller turns
//! into a skipped turn.

use super::parser::{parse_move, AIMove};
use super::prompt::build_request;
use crate::core::Settings;
use async_trait::async_trait;
use chess_engine::{Board, Color};
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

#[async_trait]
pub trait MoveProvider: Send + Sync {
    /// Ask for a move for `mover` on `board`
    ///
    /// `None` means no move could be obtained at all. A reply that was only
    /// partly understood is `Some` with empty fields.
    async fn request_move(&self, board: &Board, mover: Color) -> Option<AIMove>;
}

/// Why an HTTP round-trip produced no reply text
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider reply contained no message content")]
    EmptyReply,
}

/// The parts of a chat-completions response we read
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
    }
}

/// Talks to a chat-completions endpoint over HTTP
///
/// The endpoint is either the provider itself (with `api_key` set) or the
/// relay, which adds the key on its side.
#[derive(Debug, Clone)]
pub struct HttpMoveProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpMoveProvider {
    pub fn new(settings: &Settings) -> Result<Self, AdapterError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One round-trip: request body out, first choice text back
    pub async fn fetch_reply(&self, board: &Board) -> Result<String, AdapterError> {
        let body = build_request(&self.model, board)?;

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdapterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await?
            .into_text()
            .ok_or(AdapterError::EmptyReply)
    }
}

#[async_trait]
impl MoveProvider for HttpMoveProvider {
    async fn request_move(&self, board: &Board, mover: Color) -> Option<AIMove> {
        info!("[AI] Requesting {} move from {}", mover, self.endpoint);

        match self.fetch_reply(board).await {
            Ok(text) => {
                debug!("[AI] Reply text: {:?}", text);
                Some(parse_move(&text, mover))
            }
            Err(e) => {
                warn!("[AI] No move from provider: {}", e);
                None
            }
        }
    }
}

/// Replays canned replies in order
///
/// Each entry is either reply text or `None` for a failed round-trip. Once the
/// queue is empty every request fails.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Option<String>>>,
    boards: Mutex<Vec<Board>>,
}

/// Separates replies in a script file
pub const SCRIPT_SEPARATOR: &str = "---";

impl ScriptedProvider {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            boards: Mutex::new(Vec::new()),
        }
    }

    pub fn with_replies(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|text| Some(text.to_string())))
    }

    /// Parse a script: replies separated by lines holding only `---`
    pub fn from_script(script: &str) -> Self {
        let mut replies = Vec::new();
        let mut current = String::new();
        for line in script.lines() {
            if line.trim() == SCRIPT_SEPARATOR {
                replies.push(Some(std::mem::take(&mut current)));
            } else {
                current.push_str(line);
                current.push('\n');
            }
        }
        if !current.trim().is_empty() {
            replies.push(Some(current));
        }
        Self::new(replies)
    }

    pub fn push_reply(&self, text: impl Into<String>) {
        self.queue().push_back(Some(text.into()));
    }

    pub fn push_failure(&self) {
        self.queue().push_back(None);
    }

    pub fn remaining(&self) -> usize {
        self.queue().len()
    }

    /// Boards received so far, oldest first
    pub fn boards_seen(&self) -> Vec<Board> {
        self.boards
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn queue(&self) -> std::sync::MutexGuard<'_, VecDeque<Option<String>>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl MoveProvider for ScriptedProvider {
    async fn request_move(&self, board: &Board, mover: Color) -> Option<AIMove> {
        self.boards
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(*board);

        let next = self.queue().pop_front().flatten();
        match next {
            Some(text) => Some(parse_move(&text, mover)),
            None => {
                warn!("[AI] Scripted provider has no reply");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::{Coord, Piece, PieceType};

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"Piece: Pawn"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("Piece: Pawn"));

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.into_text(), None);

        let error_body: ChatCompletionResponse =
            serde_json::from_str(r#"{"error":{"message":"quota"}}"#).unwrap();
        assert_eq!(error_body.into_text(), None);
    }

    #[tokio::test]
    async fn test_scripted_provider_replays_in_order() {
        let provider = ScriptedProvider::new(vec![
            Some("Piece: Knight\nFrom: b8\nTo: c6".to_string()),
            None,
        ]);

        let first = provider
            .request_move(&Board::new(), Color::Black)
            .await
            .unwrap();
        assert_eq!(first.piece, Some(Piece::new(PieceType::Knight, Color::Black)));
        assert_eq!(first.to, Coord::new(2, 2));

        assert_eq!(provider.request_move(&Board::new(), Color::Black).await, None);
        assert_eq!(provider.request_move(&Board::new(), Color::Black).await, None);
        assert_eq!(provider.boards_seen().len(), 3);
    }

    #[test]
    fn test_script_file_format() {
        let provider = ScriptedProvider::from_script(
            "Piece: Pawn\nFrom: e7\nTo: e5\n---\nPiece: Knight\nFrom: g8\nTo: f6\n",
        );
        assert_eq!(provider.remaining(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_collapses_to_none() {
        let settings = Settings {
            endpoint: "http://127.0.0.1:1/v1/chat/completions".to_string(),
            request_timeout_secs: 2,
            ..Settings::default()
        };
        let provider = HttpMoveProvider::new(&settings).unwrap();

        assert!(provider.fetch_reply(&Board::new()).await.is_err());
        assert_eq!(provider.request_move(&Board::new(), Color::Black).await, None);
    }
}
