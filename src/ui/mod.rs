//! Text front end
//!
//! - `renderer` - Unicode board and status lines for the terminal

pub mod renderer;

pub use renderer::{piece_symbol, render_board, render_game};
