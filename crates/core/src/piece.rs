//! Chess piece value objects.
//!
//! Pieces are a closed sum over [`PieceKind`]; the kind carries the tag
//! used for box lookups, the number of storage slots the piece occupies,
//! and any kind-specific state. Shared state (color, board position,
//! moving direction) lives on [`ChessPiece`] itself.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows/columns on the board. Positions are 0-indexed.
pub const BOARD_LENGTH: i32 = 8;

/// Sentinel coordinate for a piece that is not on the board.
pub const OFF_BOARD: i32 = -1;

/// Default number of castle moves available to a freshly made rook.
pub const DEFAULT_CASTLE_MOVES: u32 = 3;

/// The kind of a piece, with kind-specific state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    /// The empty filler piece used for unoccupied box slots.
    None,
    /// A pawn.
    Pawn {
        /// Whether the pawn may still jump two squares forward.
        double_jumpable: bool,
    },
    /// A rook.
    Rook {
        /// How many more castle moves this rook can make.
        castle_moves_left: u32,
    },
}

impl PieceKind {
    /// Tag used for box lookup, removal, and counting.
    pub fn tag(&self) -> &'static str {
        match self {
            PieceKind::None => "NONE",
            PieceKind::Pawn { .. } => "PAWN",
            PieceKind::Rook { .. } => "ROOK",
        }
    }

    /// Number of storage slots the piece occupies in a box.
    pub fn weight(&self) -> usize {
        match self {
            PieceKind::None => 0,
            PieceKind::Pawn { .. } => 1,
            PieceKind::Rook { .. } => 2,
        }
    }
}

/// A chess piece: kind plus color, board position, and moving direction.
///
/// Constructors validate their inputs and never yield an invalid piece: a
/// non-alphabetic color falls back to `BLACK`, and if either coordinate is
/// outside `[0, BOARD_LENGTH)` the piece starts off the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessPiece {
    kind: PieceKind,
    color: Color,
    row: i32,
    column: i32,
    moving_up: bool,
}

impl Default for ChessPiece {
    fn default() -> Self {
        Self {
            kind: PieceKind::None,
            color: Color::black(),
            row: OFF_BOARD,
            column: OFF_BOARD,
            moving_up: false,
        }
    }
}

/// Both coordinates must be on the board or the piece is off it entirely.
fn validated_square(row: i32, column: i32) -> (i32, i32) {
    let on_board = (0..BOARD_LENGTH).contains(&row) && (0..BOARD_LENGTH).contains(&column);
    if on_board {
        (row, column)
    } else {
        (OFF_BOARD, OFF_BOARD)
    }
}

impl ChessPiece {
    /// Make a base piece of kind [`PieceKind::None`].
    pub fn new(color: &str, row: i32, column: i32, moving_up: bool) -> Self {
        Self::with_kind(PieceKind::None, color, row, column, moving_up)
    }

    /// Make a pawn.
    pub fn pawn(
        color: &str,
        row: i32,
        column: i32,
        moving_up: bool,
        double_jumpable: bool,
    ) -> Self {
        Self::with_kind(PieceKind::Pawn { double_jumpable }, color, row, column, moving_up)
    }

    /// Make a rook with [`DEFAULT_CASTLE_MOVES`] castle moves available.
    pub fn rook(color: &str, row: i32, column: i32, moving_up: bool) -> Self {
        Self::with_kind(
            PieceKind::Rook {
                castle_moves_left: DEFAULT_CASTLE_MOVES,
            },
            color,
            row,
            column,
            moving_up,
        )
    }

    /// Make a piece of an explicit kind.
    pub fn with_kind(kind: PieceKind, color: &str, row: i32, column: i32, moving_up: bool) -> Self {
        let (row, column) = validated_square(row, column);
        Self {
            kind,
            color: Color::parse_or_default(color),
            row,
            column,
            moving_up,
        }
    }

    /// The piece's kind.
    pub fn kind(&self) -> &PieceKind {
        &self.kind
    }

    /// The piece's color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// 0-indexed row, or [`OFF_BOARD`].
    pub fn row(&self) -> i32 {
        self.row
    }

    /// 0-indexed column, or [`OFF_BOARD`].
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Whether the piece moves up the board (toward higher rows).
    pub fn is_moving_up(&self) -> bool {
        self.moving_up
    }

    /// Whether the piece currently sits on the board.
    pub fn is_on_board(&self) -> bool {
        self.row != OFF_BOARD && self.column != OFF_BOARD
    }

    /// Recolor the piece. Invalid (non-alphabetic) labels leave the piece
    /// unchanged and return false.
    pub fn set_color(&mut self, color: &str) -> bool {
        match Color::parse(color) {
            Ok(color) => {
                self.color = color;
                true
            }
            Err(_) => false,
        }
    }

    /// Move the piece to a new row. An out-of-bounds row takes the piece
    /// off the board (both coordinates cleared).
    pub fn set_row(&mut self, row: i32) {
        if (0..BOARD_LENGTH).contains(&row) {
            self.row = row;
        } else {
            self.row = OFF_BOARD;
            self.column = OFF_BOARD;
        }
    }

    /// Move the piece to a new column. An out-of-bounds column takes the
    /// piece off the board (both coordinates cleared).
    pub fn set_column(&mut self, column: i32) {
        if (0..BOARD_LENGTH).contains(&column) {
            self.column = column;
        } else {
            self.row = OFF_BOARD;
            self.column = OFF_BOARD;
        }
    }

    /// Set the moving direction.
    pub fn set_moving_up(&mut self, moving_up: bool) {
        self.moving_up = moving_up;
    }

    /// Whether this pawn may still double-jump. Always false for other
    /// kinds.
    pub fn can_double_jump(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn { double_jumpable: true })
    }

    /// Flip this pawn's double-jump flag. No effect on other kinds.
    pub fn toggle_double_jump(&mut self) {
        if let PieceKind::Pawn { double_jumpable } = &mut self.kind {
            *double_jumpable = !*double_jumpable;
        }
    }

    /// Whether this pawn has reached the farthest row in its moving
    /// direction and may promote. Always false for other kinds.
    pub fn can_promote(&self) -> bool {
        if !matches!(self.kind, PieceKind::Pawn { .. }) {
            return false;
        }
        let far_row = if self.moving_up { BOARD_LENGTH - 1 } else { 0 };
        self.row == far_row
    }

    /// How many castle moves this rook has left. Zero for other kinds.
    pub fn castle_moves_left(&self) -> u32 {
        match self.kind {
            PieceKind::Rook { castle_moves_left } => castle_moves_left,
            _ => 0,
        }
    }

    /// Whether this rook can castle with `other`: castle moves remain,
    /// the colors match, both pieces are on the board, and the two sit
    /// laterally adjacent (same row, columns differing by at most one).
    pub fn can_castle(&self, other: &ChessPiece) -> bool {
        let PieceKind::Rook { castle_moves_left } = self.kind else {
            return false;
        };
        castle_moves_left > 0
            && self.color == other.color
            && self.is_on_board()
            && other.is_on_board()
            && self.row == other.row
            && (self.column - other.column).abs() <= 1
    }
}

impl fmt::Display for ChessPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{} piece at ({},{}) is moving {}",
                self.color,
                self.row,
                self.column,
                if self.moving_up { "UP" } else { "DOWN" }
            )
        } else {
            write!(f, "{} piece is not on the board", self.color)
        }
    }
}
