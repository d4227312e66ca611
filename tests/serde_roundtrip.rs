#![cfg(feature = "serde")]

use mailbox_chess::board::{Color, Move, Piece, PieceKind, Position, SearchParams, Square};

#[test]
fn search_params_round_trip() {
    let params = SearchParams {
        depth: 4,
        coef_mobility: 2,
        coef_material: 5,
    };
    let json = serde_json::to_string(&params).unwrap();
    let back: SearchParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn generated_move_round_trip() {
    let mut position = Position::new();
    let mv = position.legal_moves(Color::White).first().unwrap();
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);
    assert!(!back.is_applied());
    assert_eq!(back.piece(), PieceKind::Knight);
    assert_eq!(back.to(), Square(2, 0));
}

#[test]
fn piece_serializes_by_name() {
    let json = serde_json::to_string(&Piece::new(Color::Black, PieceKind::Queen)).unwrap();
    assert_eq!(json, r#"{"color":"Black","kind":"Queen"}"#);
}
