//! Move-selection strategies.
//!
//! A strategy never sees the game's real board. It receives the legal move
//! set each turn and keeps its own board snapshot, fed through
//! [`Strategy::apply_move`] for every ply of either color.

use crate::board::{Board, PrettyStyle};
use crate::moves::{Move, MoveError};
use crate::types::{Color, Position};

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use rand::seq::SliceRandom;

/// A pluggable move chooser for one side of a game.
pub trait Strategy {
    /// Hands the strategy its own copy of the starting board and its color.
    fn initialize(&mut self, board: Board, color: Color);

    /// Mirrors an applied ply onto the strategy's board snapshot.
    fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError>;

    /// Picks one of `available`, or `None` to forfeit.
    fn choose_move(&mut self, last: Option<&Move>, available: &HashSet<Move>) -> Option<Move>;
}

/// Picks a uniformly random legal move.
#[derive(Debug, Default)]
pub struct Random {
    board: Board,
    color: Option<Color>,
}

impl Random {
    pub fn new() -> Random {
        Random::default()
    }

    /// The color this strategy plays, set by [`Strategy::initialize`].
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Strategy for Random {
    fn initialize(&mut self, board: Board, color: Color) {
        self.board = board;
        self.color = Some(color);
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.board.apply_move(mv)
    }

    fn choose_move(&mut self, _last: Option<&Move>, available: &HashSet<Move>) -> Option<Move> {
        let moves: Vec<Move> = available.iter().copied().collect();
        moves.choose(&mut rand::thread_rng()).copied()
    }
}

/// Takes the most valuable capture on offer, otherwise a random move.
#[derive(Debug, Default)]
pub struct Greedy {
    board: Board,
    color: Option<Color>,
}

impl Greedy {
    pub fn new() -> Greedy {
        Greedy::default()
    }

    /// The color this strategy plays, set by [`Strategy::initialize`].
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Strategy for Greedy {
    fn initialize(&mut self, board: Board, color: Color) {
        self.board = board;
        self.color = Some(color);
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.board.apply_move(mv)
    }

    fn choose_move(&mut self, _last: Option<&Move>, available: &HashSet<Move>) -> Option<Move> {
        let mut moves: Vec<Move> = available.iter().copied().collect();
        // Shuffling first makes the fallback move random and breaks ties
        // between equal-value captures.
        moves.shuffle(&mut rand::thread_rng());
        let mut best: Option<Move> = None;
        for mv in &moves {
            if let Some(captured) = mv.captured {
                let better = match best.and_then(|b| b.captured) {
                    Some(prev) => captured.kind.value() > prev.kind.value(),
                    None => true,
                };
                if better {
                    best = Some(*mv);
                }
            }
        }
        best.or_else(|| moves.first().copied())
    }
}

/// Asks a human on stdin, using the `x,y` square encoding.
///
/// Unparsable input and moves outside the legal set are rejected with a
/// re-prompt; end of input is a forfeit.
#[derive(Debug, Default)]
pub struct Human {
    board: Board,
    color: Option<Color>,
}

impl Human {
    pub fn new() -> Human {
        Human::default()
    }

    fn prompt(text: &str, input: &mut impl BufRead) -> Option<Result<Position, String>> {
        print!("{}", text);
        io::stdout().flush().ok();
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().parse().map_err(
                |e: crate::types::PositionParseError| e.to_string(),
            )),
        }
    }
}

impl Strategy for Human {
    fn initialize(&mut self, board: Board, color: Color) {
        self.board = board;
        self.color = Some(color);
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.board.apply_move(mv)
    }

    fn choose_move(&mut self, last: Option<&Move>, available: &HashSet<Move>) -> Option<Move> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        println!();
        println!("{}", self.board.pretty(PrettyStyle::Ascii));
        if let Some(mv) = last {
            println!("{}", mv.describe());
        }
        loop {
            match self.color {
                Some(color) => println!("Please make a move for {}", color),
                None => println!("Please make a move"),
            }
            let from = match Self::prompt("From: ", &mut input)? {
                Ok(pos) => pos,
                Err(e) => {
                    println!("Invalid input, try again. ({})", e);
                    continue;
                }
            };
            let to = match Self::prompt("To:   ", &mut input)? {
                Ok(pos) => pos,
                Err(e) => {
                    println!("Invalid input, try again. ({})", e);
                    continue;
                }
            };
            match available.iter().find(|mv| mv.from == from && mv.to == to) {
                Some(mv) => return Some(*mv),
                None => println!("Invalid move selection!"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_random_picks_from_set() {
        let board = Board::initial();
        let mut random = Random::new();
        random.initialize(board.clone(), Color::White);
        let available = board.legal_moves(Color::White);
        for _ in 0..20 {
            let mv = random.choose_move(None, &available).unwrap();
            assert!(available.contains(&mv));
        }
    }

    #[test]
    fn test_random_forfeits_without_moves() {
        let mut random = Random::new();
        random.initialize(Board::empty(), Color::White);
        assert_eq!(random.choose_move(None, &HashSet::new()), None);
    }

    #[test]
    fn test_initialize_sets_color() {
        let mut random = Random::new();
        let mut greedy = Greedy::new();
        assert_eq!(random.color(), None);
        random.initialize(Board::initial(), Color::White);
        greedy.initialize(Board::initial(), Color::Black);
        assert_eq!(random.color(), Some(Color::White));
        assert_eq!(greedy.color(), Some(Color::Black));
    }

    #[test]
    fn test_greedy_prefers_the_best_capture() {
        use crate::types::Piece;

        let mut board = Board::empty();
        let pos = Position::from_parts;
        board.put(pos(0, 0), Piece::new(Color::White, PieceKind::King));
        board.put(pos(7, 7), Piece::new(Color::Black, PieceKind::King));
        // The rook can capture either a pawn or a queen.
        board.put(pos(4, 0), Piece::new(Color::White, PieceKind::Rook));
        board.put(pos(4, 3), Piece::new(Color::Black, PieceKind::Pawn));
        board.put(pos(7, 0), Piece::new(Color::Black, PieceKind::Queen));

        let mut greedy = Greedy::new();
        greedy.initialize(board.clone(), Color::White);
        let available = board.legal_moves(Color::White);
        for _ in 0..20 {
            let mv = greedy.choose_move(None, &available).unwrap();
            assert_eq!(mv.captured, Some(Piece::new(Color::Black, PieceKind::Queen)));
        }
    }

    #[test]
    fn test_strategy_board_tracks_the_game() {
        let board = Board::initial();
        let mut random = Random::new();
        random.initialize(board.clone(), Color::White);
        let mv = random
            .choose_move(None, &board.legal_moves(Color::White))
            .unwrap();
        random.apply_move(&mv).unwrap();
        let mut expected = board;
        expected.apply_move(&mv).unwrap();
        assert_eq!(random.board, expected);
    }
}
