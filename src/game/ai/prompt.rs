//! Request construction for the external mover
//!
//! The user message is a fixed instruction followed by the board snapshot as
//! JSON: an 8×8 array, row 0 first, each square either `null` or
//! `{"type":"N","color":"black"}`. Highlight state is not sent.

use chess_engine::Board;
use serde::{Deserialize, Serialize};

/// Instruction placed before the board snapshot
pub const MOVE_PROMPT: &str = "Given the following chess board state as a 2D array, \
make the best move for the Black pieces and explain your reasoning. \
This game of chess will end when one of the two kings is captured. \
Please return your response in the following structured format with no additional output:

1. Piece: <piece name, like \"Knight\", \"Pawn\", etc.>
2. From: <from square, like \"e2\">
3. To: <to square, like \"e4\">
4. Explanation: <explain why you made this move in three sentences or fewer>

Here is the current board state: ";

/// Persona and ruleset sent as the system message
pub const SYSTEM_PROMPT: &str = "You are a chess grandmaster playing the Black pieces. \
In this game there is no check, checkmate or stalemate: the game ends only when a king is captured, \
so capturing the opposing king wins immediately and leaving your own king exposed can lose. \
Answer strictly in the requested format.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Chat-completions request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// The user message: instruction plus serialized board
pub fn build_prompt(board: &Board) -> serde_json::Result<String> {
    let snapshot = serde_json::to_string(&board.snapshot())?;
    Ok(format!("{MOVE_PROMPT}{snapshot}"))
}

pub fn build_request(model: &str, board: &Board) -> serde_json::Result<ChatRequest> {
    Ok(ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::new(Role::System, SYSTEM_PROMPT),
            ChatMessage::new(Role::User, build_prompt(board)?),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_prompt_ends_with_board_json() {
        let prompt = build_prompt(&Board::new()).unwrap();
        let (instruction, json) = prompt.split_at(MOVE_PROMPT.len());

        assert_eq!(instruction, MOVE_PROMPT);
        let rows: Value = serde_json::from_str(json).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 8);
        assert_eq!(rows[0][4], serde_json::json!({"type": "K", "color": "black"}));
        assert_eq!(rows[4][4], Value::Null);
        assert_eq!(rows[7][3], serde_json::json!({"type": "Q", "color": "white"}));
    }

    #[test]
    fn test_highlights_are_not_sent() {
        let plain = build_prompt(&Board::new()).unwrap();
        let highlighted = build_prompt(&Board::new().with_highlights(&[
            "e3".parse().unwrap(),
            "e4".parse().unwrap(),
        ]))
        .unwrap();
        assert_eq!(plain, highlighted);
    }

    #[test]
    fn test_request_shape() {
        let request = build_request("gpt-4o-mini", &Board::new()).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert!(json["messages"][1]["content"]
            .as_str()
            .unwrap()
            .starts_with("Given the following chess board state"));
    }
}
