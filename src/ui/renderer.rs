//! Terminal board renderer
//!
//! Row 0 (rank 8) is printed first, so White sits at the bottom. Highlighted
//! squares are bracketed: `[·]` for an empty destination, `[♟]` for a capture.

use crate::game::{TurnController, TurnPhase};
use chess_engine::{Board, Color, Coord, Piece, PieceType};

const FILES: &str = "   a  b  c  d  e  f  g  h";

pub fn piece_symbol(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceType::Pawn) => '♙',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::King) => '♔',
        (Color::Black, PieceType::Pawn) => '♟',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::King) => '♚',
    }
}

/// Render the board to a multi-line string
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FILES);
    out.push('\n');

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for at in (0..8u8).filter_map(|col| Coord::new(row, col)) {
            let symbol = board.piece_at(at).map(piece_symbol).unwrap_or('·');
            if board.is_highlighted(at) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else {
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILES);
    out
}

/// Board plus the status lines under it
pub fn render_game(controller: &TurnController) -> String {
    let mut out = render_board(controller.board());
    out.push('\n');

    if let Some(message) = controller.message() {
        out.push_str(message);
        out.push('\n');
    }

    let status = match controller.phase() {
        TurnPhase::GameOver => "Game over. Type `reset` to play again.".to_string(),
        TurnPhase::AwaitingExternalMove => "Waiting for the opponent...".to_string(),
        TurnPhase::Selected => match controller.selected() {
            Some(selected) => format!(
                "{} on {} selected. Pick a highlighted square or another piece.",
                selected.piece, selected.origin
            ),
            None => "Pick a highlighted square.".to_string(),
        },
        TurnPhase::Idle => format!("Move {}. Pick a piece.", controller.move_number()),
    };
    out.push_str(&status);
    out
}
