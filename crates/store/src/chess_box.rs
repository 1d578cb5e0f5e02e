//! Paired per-player boxes with color routing.

use crate::{SlotArray, SlotItem, DEFAULT_CAPACITY};
use chessbox_core::{ChessPiece, Color};
use tracing::debug;

impl SlotItem for ChessPiece {
    fn tag(&self) -> &str {
        self.kind().tag()
    }

    fn weight(&self) -> usize {
        self.kind().weight()
    }
}

/// One box per player, routed by piece color.
///
/// Both colors are fixed at construction. Inputs that fail to parse, or
/// that normalize to the same label, fall back to the default
/// `BLACK`/`WHITE` pair.
#[derive(Debug, Clone)]
pub struct ChessBox {
    p1_color: Color,
    p2_color: Color,
    p1_box: SlotArray<ChessPiece>,
    p2_box: SlotArray<ChessPiece>,
}

impl ChessBox {
    /// Make a `BLACK`/`WHITE` box pair with the default capacity.
    pub fn new() -> Self {
        Self::with_colors("BLACK", "WHITE", DEFAULT_CAPACITY)
    }

    /// Make a box pair with the given player colors and per-box capacity
    /// (zero selects [`DEFAULT_CAPACITY`]).
    pub fn with_colors(color1: &str, color2: &str, capacity: usize) -> Self {
        let (p1_color, p2_color) = match (Color::parse(color1), Color::parse(color2)) {
            (Ok(c1), Ok(c2)) if c1 != c2 => (c1, c2),
            _ => (Color::black(), Color::white()),
        };
        Self {
            p1_color,
            p2_color,
            p1_box: SlotArray::new(capacity),
            p2_box: SlotArray::new(capacity),
        }
    }

    /// Player 1's color.
    pub fn p1_color(&self) -> &Color {
        &self.p1_color
    }

    /// Player 2's color.
    pub fn p2_color(&self) -> &Color {
        &self.p2_color
    }

    /// Player 1's box.
    pub fn p1_pieces(&self) -> &SlotArray<ChessPiece> {
        &self.p1_box
    }

    /// Player 2's box.
    pub fn p2_pieces(&self) -> &SlotArray<ChessPiece> {
        &self.p2_box
    }

    /// Deposit a piece into the box matching its color. Fails if the
    /// color matches neither player or the matching box is out of space.
    pub fn add_piece(&mut self, piece: ChessPiece) -> bool {
        if piece.color() == &self.p1_color {
            self.p1_box.add(piece)
        } else if piece.color() == &self.p2_color {
            self.p2_box.add(piece)
        } else {
            debug!(color = %piece.color(), "piece color matches neither box");
            false
        }
    }

    /// Remove a piece of the given tag from the box matching `color`.
    /// Colors are matched exactly; callers pass the canonical uppercase
    /// label.
    pub fn remove_piece(&mut self, tag: &str, color: &str) -> bool {
        if self.p1_color == *color {
            self.p1_box.remove(tag)
        } else if self.p2_color == *color {
            self.p2_box.remove(tag)
        } else {
            false
        }
    }

    /// Whether the box matching `color` holds a piece of the given tag.
    pub fn contains(&self, tag: &str, color: &str) -> bool {
        if self.p1_color == *color {
            self.p1_box.contains(tag)
        } else if self.p2_color == *color {
            self.p2_box.contains(tag)
        } else {
            false
        }
    }
}

impl Default for ChessBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pair_is_black_and_white_at_64() {
        let boxes = ChessBox::new();
        assert_eq!(boxes.p1_color().as_str(), "BLACK");
        assert_eq!(boxes.p2_color().as_str(), "WHITE");
        assert_eq!(boxes.p1_pieces().capacity(), DEFAULT_CAPACITY);
        assert_eq!(boxes.p2_pieces().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn colors_are_normalized_to_uppercase() {
        let boxes = ChessBox::with_colors("Red", "Blue", 8);
        assert_eq!(boxes.p1_color().as_str(), "RED");
        assert_eq!(boxes.p2_color().as_str(), "BLUE");
    }

    #[test]
    fn equal_normalized_colors_fall_back_to_defaults() {
        let boxes = ChessBox::with_colors("Red", "red", 8);
        assert_eq!(boxes.p1_color().as_str(), "BLACK");
        assert_eq!(boxes.p2_color().as_str(), "WHITE");
    }

    #[test]
    fn invalid_color_falls_back_to_defaults() {
        let boxes = ChessBox::with_colors("Red", "Blu3", 8);
        assert_eq!(boxes.p1_color().as_str(), "BLACK");
        assert_eq!(boxes.p2_color().as_str(), "WHITE");
    }

    #[test]
    fn pieces_route_to_their_color_box() {
        let mut boxes = ChessBox::with_colors("BLACK", "WHITE", 8);
        assert!(boxes.add_piece(ChessPiece::pawn("BLACK", 1, 0, true, true)));
        assert!(boxes.add_piece(ChessPiece::rook("WHITE", 7, 0, false)));

        assert_eq!(boxes.p1_pieces().len(), 1);
        assert_eq!(boxes.p2_pieces().len(), 2);
        assert!(boxes.contains("PAWN", "BLACK"));
        assert!(boxes.contains("ROOK", "WHITE"));
        assert!(!boxes.contains("PAWN", "WHITE"));
    }

    #[test]
    fn unmatched_color_mutates_neither_box() {
        let mut boxes = ChessBox::with_colors("BLACK", "WHITE", 8);
        // GREEN parses fine but matches neither player.
        assert!(!boxes.add_piece(ChessPiece::pawn("GREEN", 1, 0, true, false)));
        assert!(boxes.p1_pieces().is_empty());
        assert!(boxes.p2_pieces().is_empty());

        assert!(!boxes.remove_piece("PAWN", "GREEN"));
        assert!(!boxes.contains("PAWN", "GREEN"));
    }

    #[test]
    fn remove_piece_targets_the_named_box() {
        let mut boxes = ChessBox::with_colors("BLACK", "WHITE", 8);
        boxes.add_piece(ChessPiece::pawn("BLACK", 1, 0, true, false));
        boxes.add_piece(ChessPiece::pawn("WHITE", 6, 0, false, false));

        assert!(boxes.remove_piece("PAWN", "BLACK"));
        assert!(!boxes.contains("PAWN", "BLACK"));
        assert!(boxes.contains("PAWN", "WHITE"));
        assert!(!boxes.remove_piece("PAWN", "BLACK"));
    }
}
