use crate::types::Color;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const fn pawn_forward_delta(c: Color) -> i8 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

pub const fn pawn_start_y(c: Color) -> u8 {
    match c {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// The promotion rank; a pawn standing here has nowhere left to go.
pub const fn pawn_last_y(c: Color) -> u8 {
    match c {
        Color::White => 7,
        Color::Black => 0,
    }
}
