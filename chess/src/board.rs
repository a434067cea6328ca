//! Board and related things

use crate::movegen;
use crate::moves::{Move, MoveError};
use crate::types::{Color, Piece, PieceKind, Position};

use std::collections::{HashMap, HashSet};
use std::fmt;

/// An 8x8 chess board: a mapping from occupied squares to pieces.
///
/// The board holds no game state beyond piece placement. Whose turn it is,
/// the move history, and the draw counters all belong to the caller (see
/// [`Game`](crate::game::Game)).
///
/// Cloning a board copies the whole mapping; a clone never aliases the
/// original. This is what makes the what-if probing in [`Board::legal_moves`]
/// safe: every candidate move is applied to its own clone and the clone is
/// discarded.
///
/// # Example
///
/// ```
/// # use duelchess::{Board, Color, Piece, PieceKind, Position};
/// #
/// let board = Board::initial();
/// assert_eq!(
///     board.get(Position::from_parts(4, 0)),
///     Some(Piece::new(Color::White, PieceKind::King)),
/// );
/// assert_eq!(board.legal_moves(Color::White).len(), 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pieces: HashMap<Position, Piece>,
}

impl Board {
    /// Returns a board with no pieces on it.
    pub fn empty() -> Board {
        Board::default()
    }

    /// Returns a board with the standard starting position.
    pub fn initial() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut res = Board::empty();
        for x in Position::MIN..=Position::MAX {
            res.put(
                Position::from_parts(x, 1),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            res.put(
                Position::from_parts(x, 6),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
        }
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            res.put(
                Position::from_parts(x as u8, 0),
                Piece::new(Color::White, kind),
            );
            res.put(
                Position::from_parts(x as u8, 7),
                Piece::new(Color::Black, kind),
            );
        }
        res
    }

    /// Returns the piece standing on `pos`, if any.
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.pieces.get(&pos).copied()
    }

    /// Places `piece` on `pos`, returning whatever stood there before.
    pub fn put(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.pieces.insert(pos, piece)
    }

    /// Iterates over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces.iter().map(|(&pos, &piece)| (pos, piece))
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Every move `color` may make by piece geometry alone, ignoring whether
    /// the mover's king is left in check.
    ///
    /// This is the generation mode [`Board::is_checked`] relies on: check
    /// detection must not recurse into the legality filter.
    pub fn pseudo_legal_moves(&self, color: Color) -> HashSet<Move> {
        let mut res = HashSet::new();
        for (from, piece) in self.pieces() {
            if piece.color != color {
                continue;
            }
            for to in &movegen::destinations(piece, from, &|p| self.get(p)) {
                res.insert(Move::new(from, *to, piece, self.get(*to)));
            }
        }
        res
    }

    /// Every move `color` may make without leaving its own king in check.
    ///
    /// Each pseudo-legal candidate is applied to a clone of the board and kept
    /// only if the clone does not report check for the mover afterwards. The
    /// cost is one board copy per candidate, which is fine for turn-based play.
    pub fn legal_moves(&self, color: Color) -> HashSet<Move> {
        let mut res = HashSet::new();
        for mv in self.pseudo_legal_moves(color) {
            let mut probe = self.clone();
            probe
                .apply_move(&mv)
                .expect("pseudo-legal move must apply to a board clone");
            if !probe.is_checked(color) {
                res.insert(mv);
            }
        }
        res
    }

    /// Whether the king of `color` is under attack.
    ///
    /// Check is derived from move generation in reverse: the king is checked
    /// iff some opposing pseudo-legal move would capture it next ply.
    pub fn is_checked(&self, color: Color) -> bool {
        self.pseudo_legal_moves(color.opposite())
            .iter()
            .any(|mv| match mv.captured {
                Some(captured) => captured.color == color && captured.kind == PieceKind::King,
                None => false,
            })
    }

    /// Applies `mv` to the board: the piece on `mv.from` is moved onto
    /// `mv.to`, capturing whatever stood there.
    ///
    /// The move is re-validated against the current position rather than
    /// trusted: there must be a piece on the source square, the destination
    /// must be in that piece's freshly computed pseudo-legal set, and the
    /// destination must not hold a piece of the moving side.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        let piece = self.get(mv.from).ok_or(MoveError::EmptySource(mv.from))?;
        if !movegen::destinations(piece, mv.from, &|p| self.get(p)).contains(&mv.to) {
            return Err(MoveError::UnreachableDestination(mv.to));
        }
        if let Some(target) = self.get(mv.to) {
            if target.color == piece.color {
                return Err(MoveError::FriendlyCapture(mv.to));
            }
        }
        self.pieces.remove(&mv.from);
        self.pieces.insert(mv.to, piece);
        Ok(())
    }

    /// Wraps the board to allow pretty-printing with the given style.
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

/// Pretty-printing style for [`Board::pretty`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrettyStyle {
    /// Two-character cells, color code followed by piece code.
    Ascii,
    /// Unicode chess glyphs.
    Utf8,
}

/// Board pretty-printer, see [`Board::pretty`].
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        const HORZ: &str = " +--+--+--+--+--+--+--+--+";
        for y in (Position::MIN..=Position::MAX).rev() {
            writeln!(f, "{}", HORZ)?;
            write!(f, "{}", Position::from_parts(0, y).rank_char())?;
            for x in Position::MIN..=Position::MAX {
                match self.board.get(Position::from_parts(x, y)) {
                    Some(piece) => match self.style {
                        PrettyStyle::Ascii => {
                            write!(f, "|{}{}", piece.color.code(), piece.kind.code())?
                        }
                        PrettyStyle::Utf8 => write!(f, "|{} ", piece.as_utf8_char())?,
                    },
                    None => write!(f, "|  ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", HORZ)?;
        write!(f, "  ")?;
        for x in Position::MIN..=Position::MAX {
            write!(f, "{}  ", Position::from_parts(x, 0).file_char())?;
        }
        writeln!(f)
    }
}
