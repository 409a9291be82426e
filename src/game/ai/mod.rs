//! External move adapter
//!
//! The opposing side is played by a text-generation service. This module
//! turns a board into a chat-completions request, sends it, and reads the
//! structured reply back into an [`AIMove`].
//!
//! # Architecture
//!
//! - `prompt`: fixed instruction, persona and request body
//! - `parser`: line-by-line extraction of piece, squares and explanation
//! - `client`: the [`MoveProvider`] seam with an HTTP implementation and a
//!   scripted one for tests and offline play
//!
//! Every failure degrades to "no move"; nothing in here is fatal.

pub mod client;
pub mod parser;
pub mod prompt;

pub use client::{AdapterError, HttpMoveProvider, MoveProvider, ScriptedProvider};
pub use parser::{parse_move, string_to_piece, string_to_row_col, AIMove};
pub use prompt::{build_prompt, build_request, ChatMessage, ChatRequest, Role, MOVE_PROMPT, SYSTEM_PROMPT};
