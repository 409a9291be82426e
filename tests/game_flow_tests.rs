//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Human move followed by the opponent's reply
//! - Skipped opponent turns (unreachable service, partial replies)
//! - Promotion and king capture
//! - Input refused while the opponent is thinking

use chess_engine::{Board, Color, Coord, Piece, PieceType};
use gptchess::game::ai::{parse_move, ScriptedProvider};
use gptchess::game::{
    ClickOutcome, ExternalOutcome, GameSession, IgnoreReason, SkipReason, TurnController, TurnPhase,
};
use std::time::Duration;

fn sq(notation: &str) -> Coord {
    notation.parse().unwrap()
}

fn session(replies: &[&str]) -> GameSession<ScriptedProvider> {
    GameSession::new(ScriptedProvider::with_replies(replies), Duration::from_secs(5))
}

fn session_from(board: Board, replies: &[&str]) -> GameSession<ScriptedProvider> {
    GameSession::with_controller(
        TurnController::with_board(board),
        ScriptedProvider::with_replies(replies),
        Duration::from_secs(5),
    )
}

// ============================================================================
// Full Exchange Tests
// ============================================================================

#[tokio::test]
async fn test_opening_exchange() {
    let mut game = session(&[
        "1. Piece: Pawn\n2. From: e7\n3. To: e5\n4. Explanation: Mirror the centre.",
        "1. Piece: Knight\n2. From: b8\n3. To: c6\n4. Explanation: Defend e5.",
    ]);

    game.click_notation("e2").await.unwrap();
    game.click_notation("e4").await.unwrap();
    game.click_notation("g1").await.unwrap();
    let report = game.click_notation("f3").await.unwrap();

    assert!(matches!(report.external, Some(ExternalOutcome::Applied(_))));

    let board = game.controller().board();
    assert_eq!(board.piece_at(sq("e4")), Some(Piece::new(PieceType::Pawn, Color::White)));
    assert_eq!(board.piece_at(sq("e5")), Some(Piece::new(PieceType::Pawn, Color::Black)));
    assert_eq!(board.piece_at(sq("f3")), Some(Piece::new(PieceType::Knight, Color::White)));
    assert_eq!(board.piece_at(sq("c6")), Some(Piece::new(PieceType::Knight, Color::Black)));
    assert!(board.is_empty(sq("b8")));
    assert_eq!(game.controller().message(), Some("Defend e5."));
    assert_eq!(game.controller().move_number(), 3);
}

#[tokio::test]
async fn test_provider_sees_board_after_human_move() {
    let mut game = session(&["Piece: Pawn\nFrom: d7\nTo: d5"]);
    game.click_notation("d2").await.unwrap();
    game.click_notation("d4").await.unwrap();

    let seen = game.provider().boards_seen();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_empty(sq("d2")));
    assert!(!seen[0].is_empty(sq("d4")));
    assert_eq!(seen[0].highlighted().count(), 0);
}

// ============================================================================
// Skipped Turn Tests
// ============================================================================

#[tokio::test]
async fn test_missing_to_line_leaves_board_untouched() {
    let mut game = session(&["1. Piece: Pawn\n2. From: e7\n4. Explanation: Hmm."]);
    game.click_notation("e2").await.unwrap();
    let before_reply = Board::new()
        .without_piece(sq("e2"))
        .with_piece(sq("e4"), Some(Piece::new(PieceType::Pawn, Color::White)));

    let report = game.click_notation("e4").await.unwrap();

    assert_eq!(
        report.external,
        Some(ExternalOutcome::Skipped(SkipReason::Incomplete))
    );
    assert_eq!(game.controller().board(), &before_reply);
    assert!(game.controller().message().unwrap().contains("lucky"));
    assert_eq!(game.controller().phase(), TurnPhase::Idle);
}

#[tokio::test]
async fn test_service_failure_gives_free_turn() {
    let mut game = session(&[]);
    game.click_notation("e2").await.unwrap();
    let report = game.click_notation("e4").await.unwrap();

    assert_eq!(
        report.external,
        Some(ExternalOutcome::Skipped(SkipReason::Unavailable))
    );
    assert!(game.controller().message().unwrap().contains("free turn"));

    // The human simply moves again
    let next = game.click_notation("d2").await.unwrap();
    assert!(matches!(next.click, ClickOutcome::Selected { .. }));
}

#[tokio::test]
async fn test_unknown_piece_name_is_incomplete() {
    let mut game = session(&["Piece: Dragon\nFrom: e7\nTo: e5"]);
    game.click_notation("e2").await.unwrap();
    let report = game.click_notation("e4").await.unwrap();

    assert_eq!(
        report.external,
        Some(ExternalOutcome::Skipped(SkipReason::Incomplete))
    );
    assert!(!game.controller().board().is_empty(sq("e7")));
}

// ============================================================================
// Lenient External Move Tests
// ============================================================================

#[tokio::test]
async fn test_mismatched_origin_duplicates_piece() {
    // Claims a queen on b8, where a knight stands
    let mut game = session(&["Piece: Queen\nFrom: b8\nTo: b5"]);
    game.click_notation("a2").await.unwrap();
    let report = game.click_notation("a3").await.unwrap();

    let Some(ExternalOutcome::Applied(applied)) = report.external else {
        panic!("expected the move to be applied");
    };
    assert!(!applied.origin_cleared);

    let board = game.controller().board();
    assert_eq!(board.piece_at(sq("b8")), Some(Piece::new(PieceType::Knight, Color::Black)));
    assert_eq!(board.piece_at(sq("b5")), Some(Piece::new(PieceType::Queen, Color::Black)));
}

// ============================================================================
// Promotion and Win Condition Tests
// ============================================================================

#[tokio::test]
async fn test_pawn_promotes_on_last_rank() {
    let board = Board::with_pieces(&[
        (Piece::new(PieceType::Pawn, Color::White), sq("c7")),
        (Piece::new(PieceType::King, Color::White), sq("e1")),
        (Piece::new(PieceType::King, Color::Black), sq("h8")),
    ]);
    let mut game = session_from(board, &["Piece: King\nFrom: h8\nTo: g8"]);

    game.click_notation("c7").await.unwrap();
    let report = game.click_notation("c8").await.unwrap();

    let ClickOutcome::Committed(commit) = &report.click else {
        panic!("expected a commit");
    };
    assert!(commit.promoted);
    assert_eq!(
        game.controller().board().piece_at(sq("c8")),
        Some(Piece::new(PieceType::Queen, Color::White))
    );
}

#[tokio::test]
async fn test_king_capture_ends_game_and_ignores_clicks() {
    let board = Board::with_pieces(&[
        (Piece::new(PieceType::Knight, Color::White), sq("f6")),
        (Piece::new(PieceType::King, Color::White), sq("e1")),
        (Piece::new(PieceType::King, Color::Black), sq("e8")),
    ]);
    let mut game = session_from(board, &[]);

    game.click_notation("f6").await.unwrap();
    let report = game.click_notation("e8").await.unwrap();

    assert!(report.external.is_none());
    assert_eq!(game.controller().winner(), Some(Color::White));
    assert_eq!(game.controller().phase(), TurnPhase::GameOver);
    assert!(game.provider().boards_seen().is_empty());

    let after = game.click_notation("e1").await.unwrap();
    assert_eq!(after.click, ClickOutcome::Ignored(IgnoreReason::GameOver));

    game.reset();
    assert_eq!(game.controller().winner(), None);
    assert_eq!(game.controller().board(), &Board::new());
}

#[tokio::test]
async fn test_opponent_can_capture_king() {
    let board = Board::with_pieces(&[
        (Piece::new(PieceType::Pawn, Color::White), sq("h2")),
        (Piece::new(PieceType::King, Color::White), sq("e1")),
        (Piece::new(PieceType::Rook, Color::Black), sq("e8")),
        (Piece::new(PieceType::King, Color::Black), sq("a8")),
    ]);
    let mut game = session_from(board, &["Piece: Rook\nFrom: e8\nTo: e1\nExplanation: Straight down the file."]);

    game.click_notation("h2").await.unwrap();
    game.click_notation("h3").await.unwrap();

    assert_eq!(game.controller().winner(), Some(Color::Black));
    assert_eq!(game.controller().phase(), TurnPhase::GameOver);
    assert_eq!(game.controller().message(), Some("Black wins!"));
}

// ============================================================================
// Input Guard Tests
// ============================================================================

#[test]
fn test_clicks_refused_while_awaiting_reply() {
    let mut controller = TurnController::new();
    controller.click(sq("e2")).unwrap();
    let ClickOutcome::Committed(commit) = controller.click(sq("e4")).unwrap() else {
        panic!("expected a commit");
    };
    let request = commit.request.unwrap();

    for square in ["d2", "e4", "a1", "h8"] {
        assert_eq!(
            controller.click(sq(square)).unwrap(),
            ClickOutcome::Ignored(IgnoreReason::AwaitingExternalMove)
        );
    }
    assert_eq!(controller.board(), &request.board);

    let reply = parse_move("Piece: Pawn\nFrom: c7\nTo: c5", request.mover);
    controller.apply_external_move(request.ticket, Some(reply.clone()));
    assert_eq!(controller.phase(), TurnPhase::Idle);

    // A second delivery of the same reply is stale
    assert_eq!(
        controller.apply_external_move(request.ticket, Some(reply)),
        ExternalOutcome::Stale
    );
}
