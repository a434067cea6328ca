//! The game loop: turn alternation, terminal detection, draw counters.

use crate::board::Board;
use crate::moves::{Move, MoveError};
use crate::strategy::Strategy;
use crate::types::{Color, DrawReason, Outcome, PieceKind, WinReason};

use thiserror::Error;

/// Plies without a capture (or pawn move) after which the game is drawn.
const DRAW_PLY_LIMIT: u32 = 50;

#[derive(Debug, Error)]
pub enum GameError {
    /// [`Game::play`] was called a second time.
    #[error("this game has already been played")]
    AlreadyPlayed,
    /// The board rejected a move taken from its own legal set. This means a
    /// generator/board inconsistency and is not recoverable.
    #[error("board rejected a generated move: {0}")]
    Move(#[from] MoveError),
}

/// A single game between two strategies.
///
/// The game owns the real board; each strategy gets its own copy at
/// construction and is notified of every applied ply. Turn order, the applied
/// move list, and the draw counters all live here; the board knows nothing
/// about whose turn it is.
pub struct Game {
    board: Board,
    white: Box<dyn Strategy>,
    black: Box<dyn Strategy>,
    moves: Vec<Move>,
    side: Color,
    outcome: Option<Outcome>,
}

impl Game {
    /// Starts a game from the standard starting position.
    pub fn new(white: Box<dyn Strategy>, black: Box<dyn Strategy>) -> Game {
        Game::with_board(Board::initial(), white, black)
    }

    /// Starts a game from an arbitrary position.
    pub fn with_board(board: Board, mut white: Box<dyn Strategy>, mut black: Box<dyn Strategy>) -> Game {
        white.initialize(board.clone(), Color::White);
        black.initialize(board.clone(), Color::Black);
        Game {
            board,
            white,
            black,
            moves: Vec::new(),
            side: Color::White,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The side to move next (meaningless once the game is over).
    pub fn side(&self) -> Color {
        self.side
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(|o| o.winner())
    }

    /// Runs the game to its end and returns the outcome.
    ///
    /// Every ply: ask the board for the mover's legal moves; an empty set
    /// ends the game (checkmate when in check, stalemate otherwise). Then the
    /// mover's strategy picks a move (`None` forfeits), the move is applied
    /// to the real board and mirrored to both strategies, and the turn
    /// passes. A game with more than `DRAW_PLY_LIMIT` plies since the last
    /// capture, or since the last pawn move, is drawn.
    pub fn play(&mut self) -> Result<Outcome, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::AlreadyPlayed);
        }
        let mut since_capture = 0_u32;
        let mut since_pawn = 0_u32;
        let mut last_move: Option<Move> = None;
        loop {
            let available = self.board.legal_moves(self.side);
            let in_check = self.board.is_checked(self.side);
            tracing::debug!(
                "{} has {} available moves{}",
                self.side,
                available.len(),
                if in_check { " and is in CHECK" } else { "" }
            );
            if available.is_empty() {
                let outcome = if in_check {
                    Outcome::win(self.side.opposite(), WinReason::Checkmate)
                } else {
                    Outcome::Draw(DrawReason::Stalemate)
                };
                return Ok(self.finish(outcome));
            }

            let strategy = match self.side {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };
            let mv = match strategy.choose_move(last_move.as_ref(), &available) {
                Some(mv) => mv,
                None => {
                    let outcome = Outcome::win(self.side.opposite(), WinReason::Forfeit);
                    return Ok(self.finish(outcome));
                }
            };

            // A failure on any of these is a bug in move generation, not a
            // property of the game; propagate it as fatal.
            self.board.apply_move(&mv)?;
            self.white.apply_move(&mv)?;
            self.black.apply_move(&mv)?;
            self.moves.push(mv);
            tracing::debug!("ply {}: {}", self.moves.len(), mv.describe());

            if mv.is_capture() {
                since_capture = 0;
            }
            if mv.piece.kind == PieceKind::Pawn {
                since_pawn = 0;
            }
            since_capture += 1;
            since_pawn += 1;
            if since_capture > DRAW_PLY_LIMIT {
                return Ok(self.finish(Outcome::Draw(DrawReason::NoCapture50)));
            }
            if since_pawn > DRAW_PLY_LIMIT {
                return Ok(self.finish(Outcome::Draw(DrawReason::NoPawnMove50)));
            }

            self.side = self.side.opposite();
            last_move = Some(mv);
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        tracing::info!("game over after {} plies: {}", self.moves.len(), outcome);
        self.outcome = Some(outcome);
        outcome
    }
}

/// Win/loss/draw counts for a series, attributed to the strategy builders
/// passed to [`play_series`] rather than to colors.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Tally {
    pub first: u32,
    pub second: u32,
    pub draws: u32,
}

impl Tally {
    pub fn games(&self) -> u32 {
        self.first + self.second + self.draws
    }
}

/// Plays `games` games between two strategy builders, alternating which one
/// takes White, and tallies the results.
pub fn play_series<A, B>(games: u32, mut first: A, mut second: B) -> Result<Tally, GameError>
where
    A: FnMut() -> Box<dyn Strategy>,
    B: FnMut() -> Box<dyn Strategy>,
{
    let mut tally = Tally::default();
    for id in 0..games {
        let first_is_white = id % 2 == 0;
        let mut game = if first_is_white {
            Game::new(first(), second())
        } else {
            Game::new(second(), first())
        };
        let outcome = game.play()?;
        match outcome.winner() {
            None => tally.draws += 1,
            Some(color) => {
                if (color == Color::White) == first_is_white {
                    tally.first += 1;
                } else {
                    tally.second += 1;
                }
            }
        }
        tracing::debug!("game {} of {}: {}", id + 1, games, outcome);
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Random;
    use crate::types::{Piece, Position};
    use std::collections::HashSet;

    // Forfeits immediately.
    #[derive(Default)]
    struct Resigner {
        board: Board,
    }

    impl Strategy for Resigner {
        fn initialize(&mut self, board: Board, _color: Color) {
            self.board = board;
        }

        fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
            self.board.apply_move(mv)
        }

        fn choose_move(&mut self, _last: Option<&Move>, _available: &HashSet<Move>) -> Option<Move> {
            None
        }
    }

    fn random() -> Box<dyn Strategy> {
        Box::new(Random::new())
    }

    fn pos(x: u8, y: u8) -> Position {
        Position::from_parts(x, y)
    }

    #[test]
    fn test_forfeit() {
        let mut game = Game::new(Box::new(Resigner::default()), random());
        let outcome = game.play().unwrap();
        assert_eq!(outcome, Outcome::Black(WinReason::Forfeit));
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_replay_is_rejected() {
        let mut game = Game::new(Box::new(Resigner::default()), random());
        game.play().unwrap();
        assert!(matches!(game.play(), Err(GameError::AlreadyPlayed)));
    }

    #[test]
    fn test_corner_kings_draw_by_counters() {
        let mut board = Board::empty();
        board.put(pos(0, 0), Piece::new(Color::White, PieceKind::King));
        board.put(pos(7, 7), Piece::new(Color::Black, PieceKind::King));
        let mut game = Game::with_board(board, random(), random());
        let outcome = game.play().unwrap();
        assert_eq!(outcome, Outcome::Draw(DrawReason::NoCapture50));
        // The capture counter trips one ply past the limit.
        assert_eq!(game.moves().len(), DRAW_PLY_LIMIT as usize + 1);
    }

    #[test]
    fn test_moves_alternate_colors() {
        let mut board = Board::empty();
        board.put(pos(0, 0), Piece::new(Color::White, PieceKind::King));
        board.put(pos(7, 7), Piece::new(Color::Black, PieceKind::King));
        let mut game = Game::with_board(board, random(), random());
        game.play().unwrap();
        for (i, mv) in game.moves().iter().enumerate() {
            let expected = if i % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(mv.piece.color, expected);
        }
    }

    #[test]
    fn test_random_games_terminate() {
        let tally = play_series(4, || random(), || random()).unwrap();
        assert_eq!(tally.games(), 4);
    }

    #[test]
    fn test_immediate_stalemate_outcome() {
        let mut board = Board::empty();
        board.put(pos(0, 0), Piece::new(Color::White, PieceKind::King));
        board.put(pos(7, 7), Piece::new(Color::Black, PieceKind::King));
        board.put(pos(1, 2), Piece::new(Color::Black, PieceKind::Queen));
        let mut game = Game::with_board(board, random(), random());
        assert_eq!(game.play().unwrap(), Outcome::Draw(DrawReason::Stalemate));
    }

    #[test]
    fn test_immediate_checkmate_outcome() {
        let mut board = Board::empty();
        board.put(pos(0, 0), Piece::new(Color::White, PieceKind::King));
        board.put(pos(7, 7), Piece::new(Color::Black, PieceKind::King));
        board.put(pos(7, 0), Piece::new(Color::Black, PieceKind::Rook));
        board.put(pos(7, 1), Piece::new(Color::Black, PieceKind::Rook));
        let mut game = Game::with_board(board, random(), random());
        assert_eq!(game.play().unwrap(), Outcome::Black(WinReason::Checkmate));
        assert_eq!(game.winner(), Some(Color::Black));
    }
}
