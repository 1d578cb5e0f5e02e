#![warn(missing_docs)]
//! Core piece model shared across the workspace.

pub mod color;
pub mod piece;

// Re-export commonly used types
pub use color::{Color, ColorError};
pub use piece::{ChessPiece, PieceKind, BOARD_LENGTH, OFF_BOARD};
