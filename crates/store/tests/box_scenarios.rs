//! Fixed walk-through scenarios for both box backings and the pair.

use chessbox_core::ChessPiece;
use chessbox_store::{ChessBox, SlotArray, SlotChain, SlotItem};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    tag: &'static str,
    weight: usize,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            tag: "NONE",
            weight: 0,
        }
    }
}

impl SlotItem for Token {
    fn tag(&self) -> &str {
        self.tag
    }

    fn weight(&self) -> usize {
        self.weight
    }
}

fn pawn() -> Token {
    Token {
        tag: "PAWN",
        weight: 1,
    }
}

fn rook() -> Token {
    Token {
        tag: "ROOK",
        weight: 2,
    }
}

fn queen() -> Token {
    Token {
        tag: "QUEEN",
        weight: 3,
    }
}

#[test]
fn array_capacity_eight_walkthrough() {
    let mut array = SlotArray::new(8);
    assert!(array.add(pawn()));
    assert!(array.add(rook()));
    assert!(array.add(queen()));
    assert!(array.add(pawn()));
    assert_eq!(array.len(), 7);

    // 7 + 2 > 8: the second rook does not fit.
    assert!(!array.add(rook()));
    assert_eq!(array.len(), 7);

    assert_eq!(array.count("PAWN"), 2);
    assert!(array.remove("PAWN"));
    assert_eq!(array.count("PAWN"), 1);
    assert_eq!(array.len(), 6);
}

#[test]
fn chain_capacity_eight_walkthrough() {
    let mut chain = SlotChain::new(8);
    assert!(chain.add(pawn()));
    assert!(chain.add(rook()));
    assert!(chain.add(queen()));
    assert!(chain.add(pawn()));
    assert_eq!(chain.len(), 7);
    assert!(!chain.add(rook()));

    // Head-first order is most-recent-first.
    let order: Vec<&str> = chain.iter().map(|item| item.tag()).collect();
    assert_eq!(order, vec!["PAWN", "QUEEN", "ROOK", "PAWN"]);

    // Removal takes the head pawn, the most recently added one.
    assert!(chain.remove("PAWN"));
    let order: Vec<&str> = chain.iter().map(|item| item.tag()).collect();
    assert_eq!(order, vec!["QUEEN", "ROOK", "PAWN"]);
    assert_eq!(chain.len(), 6);
}

#[test]
fn add_then_remove_restores_prior_state() {
    let mut array = SlotArray::new(8);
    array.add(pawn());
    array.add(rook());
    let len_before = array.len();
    let rooks_before = array.count("ROOK");

    assert!(array.add(rook()));
    assert!(array.remove("ROOK"));
    assert_eq!(array.len(), len_before);
    assert_eq!(array.count("ROOK"), rooks_before);
    assert_eq!(array.count("PAWN"), 1);

    let mut chain = SlotChain::new(8);
    chain.add(pawn());
    chain.add(rook());
    let len_before = chain.len();

    assert!(chain.add(queen()));
    assert!(chain.remove("QUEEN"));
    assert_eq!(chain.len(), len_before);
    let order: Vec<&str> = chain.iter().map(|item| item.tag()).collect();
    assert_eq!(order, vec!["ROOK", "PAWN"]);
}

#[test]
fn array_clone_is_independent() {
    let mut array = SlotArray::new(8);
    array.add(pawn());
    array.add(rook());

    let snapshot = array.clone();
    assert!(array.remove("PAWN"));

    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.count("PAWN"), 1);
    assert_eq!(array.count("PAWN"), 0);
}

#[test]
fn pair_routes_a_full_side_setup() {
    let mut boxes = ChessBox::with_colors("BLACK", "WHITE", 16);
    for column in 0..4 {
        assert!(boxes.add_piece(ChessPiece::pawn("BLACK", 1, column, true, true)));
        assert!(boxes.add_piece(ChessPiece::pawn("WHITE", 6, column, false, true)));
    }
    assert!(boxes.add_piece(ChessPiece::rook("BLACK", 0, 0, true)));
    assert!(boxes.add_piece(ChessPiece::rook("WHITE", 7, 7, false)));

    assert_eq!(boxes.p1_pieces().len(), 6);
    assert_eq!(boxes.p2_pieces().len(), 6);
    assert_eq!(boxes.p1_pieces().count("PAWN"), 4);
    assert_eq!(boxes.p2_pieces().count("ROOK"), 1);

    assert!(boxes.remove_piece("ROOK", "WHITE"));
    assert!(!boxes.contains("ROOK", "WHITE"));
    assert!(boxes.contains("ROOK", "BLACK"));
}

#[test]
fn pair_with_equal_colors_uses_default_labels() {
    let mut boxes = ChessBox::with_colors("Red", "red", 8);
    assert_eq!(boxes.p1_color().as_str(), "BLACK");
    assert_eq!(boxes.p2_color().as_str(), "WHITE");

    // A RED piece now matches neither side.
    assert!(!boxes.add_piece(ChessPiece::pawn("RED", 1, 0, true, false)));
    assert!(boxes.p1_pieces().is_empty());
    assert!(boxes.p2_pieces().is_empty());
}
