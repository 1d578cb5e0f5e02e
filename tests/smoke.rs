use chessbox_core::ChessPiece;
use chessbox_store::ChessBox;

#[test]
fn pair_round_trips_a_piece() {
    let mut boxes = ChessBox::with_colors("Navy", "Gold", 8);
    assert_eq!(boxes.p1_color().as_str(), "NAVY");

    assert!(boxes.add_piece(ChessPiece::rook("GOLD", 7, 0, false)));
    assert!(boxes.contains("ROOK", "GOLD"));
    assert!(boxes.remove_piece("ROOK", "GOLD"));
    assert!(!boxes.contains("ROOK", "GOLD"));
    assert!(boxes.p2_pieces().is_empty());
}
