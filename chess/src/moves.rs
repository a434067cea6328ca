//! Moves and move application errors.

use crate::types::{Piece, Position};

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Error applying a move to a board.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// The source square is empty.
    #[error("no piece to move at {0}")]
    EmptySource(Position),
    /// The destination is not reachable for the piece standing on the source square.
    #[error("destination {0} is not reachable")]
    UnreachableDestination(Position),
    /// The destination holds a piece of the moving side.
    #[error("cannot capture own piece at {0}")]
    FriendlyCapture(Position),
}

/// A single ply: which piece moved where, and what (if anything) it captured.
///
/// Equality and hashing consider `(from, to, piece)` only. The captured piece
/// is informational; two moves that differ only in `captured` collide when
/// collected into a set.
#[derive(Debug, Copy, Clone)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub const fn new(from: Position, to: Position, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
        }
    }

    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Long human-readable form, e.g.
    /// `WHITE PAWN moved from 4,1 to 4,3, capturing a BLACK KNIGHT`.
    pub fn describe(&self) -> String {
        let mut res = format!(
            "{} {} moved from {} to {}",
            self.piece.color.name(),
            self.piece.kind.name(),
            self.from,
            self.to
        );
        if let Some(captured) = self.captured {
            res.push_str(&format!(
                ", capturing a {} {}",
                captured.color.name(),
                captured.kind.name()
            ));
        }
        res
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.piece == other.piece
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.piece.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}:{}>{}", self.piece, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, "[x{}]", captured)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceKind};
    use std::collections::HashSet;

    fn pos(x: u8, y: u8) -> Position {
        Position::from_parts(x, y)
    }

    #[test]
    fn test_captured_is_not_identity() {
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let plain = Move::new(pos(0, 0), pos(0, 5), rook, None);
        let capture = Move::new(
            pos(0, 0),
            pos(0, 5),
            rook,
            Some(Piece::new(Color::Black, PieceKind::Pawn)),
        );
        assert_eq!(plain, capture);

        let mut set = HashSet::new();
        set.insert(plain);
        set.insert(capture);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_differing_moves() {
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let queen = Piece::new(Color::White, PieceKind::Queen);
        let mv = Move::new(pos(0, 0), pos(0, 5), rook, None);
        assert_ne!(mv, Move::new(pos(0, 1), pos(0, 5), rook, None));
        assert_ne!(mv, Move::new(pos(0, 0), pos(0, 6), rook, None));
        assert_ne!(mv, Move::new(pos(0, 0), pos(0, 5), queen, None));
    }

    #[test]
    fn test_display() {
        let mv = Move::new(
            pos(3, 1),
            pos(4, 2),
            Piece::new(Color::White, PieceKind::Pawn),
            Some(Piece::new(Color::Black, PieceKind::Bishop)),
        );
        assert_eq!(mv.to_string(), "PAWN,WHITE:3,1>4,2[xBISHOP,BLACK]");
        assert_eq!(
            mv.describe(),
            "WHITE PAWN moved from 3,1 to 4,2, capturing a BLACK BISHOP"
        );
    }
}
