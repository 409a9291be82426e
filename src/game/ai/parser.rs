//! Reply parsing
//!
//! The reply is expected in four labelled lines:
//!
//! ```text
//! 1. Piece: Knight
//! 2. From: g8
//! 3. To: f6
//! 4. Explanation: Develops a piece toward the centre.
//! ```
//!
//! Each line is found on its own, anywhere in the text. A missing or
//! unreadable line leaves that field empty; parsing never fails. Numbering and
//! markdown emphasis around the label (`**From:**`) are tolerated.

use chess_engine::{Color, Coord, Piece, PieceType};
use lazy_static::lazy_static;
use regex::Regex;

/// A move as described by the external mover
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AIMove {
    pub piece: Option<Piece>,
    pub from: Option<Coord>,
    pub to: Option<Coord>,
    pub explanation: Option<String>,
}

impl AIMove {
    /// The three fields needed to play the move, if all are present
    pub fn complete(&self) -> Option<(Piece, Coord, Coord)> {
        Some((self.piece?, self.from?, self.to?))
    }
}

fn labelled_line(label: &str) -> Regex {
    let pattern = format!(
        r"(?m)^[ \t>*_-]*(?:\d+[.)][ \t]*)?[*_]*{label}[*_]*[ \t]*:[*_]*[ \t]*(.*?)[ \t*_]*$"
    );
    // Built from a fixed label, cannot fail
    Regex::new(&pattern).unwrap()
}

lazy_static! {
    static ref PIECE_LINE: Regex = labelled_line("Piece");
    static ref FROM_LINE: Regex = labelled_line("From");
    static ref TO_LINE: Regex = labelled_line("To");
    static ref EXPLANATION_LINE: Regex = labelled_line("Explanation");
}

fn field<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_matches(|c: char| matches!(c, '"' | '\'' | '`')).trim())
        .filter(|value| !value.is_empty())
}

/// Full English piece name to a piece of `color`
///
/// Case-sensitive: `"Knight"` maps, `"knight"` does not.
pub fn string_to_piece(name: &str, color: Color) -> Option<Piece> {
    PieceType::from_name(name).map(|kind| Piece::new(kind, color))
}

/// Algebraic square to board coordinate (`"e2"` → row 6, col 4)
///
/// Characters after the first two are ignored. Short input, an unknown file
/// letter or a rank outside `1..=8` give `None`.
pub fn string_to_row_col(square: &str) -> Option<Coord> {
    Coord::from_algebraic(square)
}

/// Extract the move from reply text; pieces are given `color`
pub fn parse_move(text: &str, color: Color) -> AIMove {
    AIMove {
        piece: field(&PIECE_LINE, text).and_then(|name| string_to_piece(name, color)),
        from: field(&FROM_LINE, text).and_then(string_to_row_col),
        to: field(&TO_LINE, text).and_then(string_to_row_col),
        explanation: field(&EXPLANATION_LINE, text).map(str::to_string),
    }
}
