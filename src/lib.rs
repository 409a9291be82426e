//! Play king-capture chess against a text-generation model
//!
//! - [`core`] - settings, logging, core errors
//! - [`game`] - turn controller, async session, external move adapter
//! - [`ui`] - terminal rendering

pub mod core;
pub mod game;
pub mod ui;

pub use chess_engine;
