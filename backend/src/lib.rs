//! Relay between the game client and the chat-completions provider
//!
//! The relay keeps the provider key on the server. It does no game logic: the
//! request body is forwarded as is and the provider's JSON comes back as is.

pub mod api;

pub use api::{router, RelayConfig, RelayError, RelayState};
