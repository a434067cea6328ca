//! Pseudo-legal destination generation per piece.
//!
//! The generator is pure: it never sees a board, only an occupancy lookup
//! (`Position -> Option<Piece>`). Whether a destination leaves the mover's
//! own king in check is not its concern; that filter lives in
//! [`Board::legal_moves`](crate::board::Board::legal_moves).

use crate::geometry;
use crate::types::{Color, Piece, PieceKind, Position};

use std::ops::Deref;
use std::slice;

use arrayvec::ArrayVec;

/// Destination squares of a single piece.
///
/// Backed by a fixed-capacity vector; 32 covers the densest case (a centered
/// queen reaches 27 squares). Destinations are unique by construction: rays
/// visit distinct squares, and the rook and bishop components of a queen are
/// disjoint.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct DestList(ArrayVec<Position, 32>);

impl DestList {
    pub fn new() -> DestList {
        DestList(ArrayVec::new())
    }

    fn push(&mut self, p: Position) {
        self.0.push(p);
    }
}

impl Deref for DestList {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DestList {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for DestList {
    type Item = Position;
    type IntoIter = arrayvec::IntoIter<Position, 32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Computes every square `piece` standing on `from` may move to, ignoring
/// whether the move would expose its own king.
pub fn destinations<F>(piece: Piece, from: Position, occ: &F) -> DestList
where
    F: Fn(Position) -> Option<Piece>,
{
    let mut dst = DestList::new();
    match piece.kind {
        PieceKind::Pawn => gen_pawn(piece.color, from, occ, &mut dst),
        PieceKind::Rook => gen_rays(piece.color, from, &geometry::ROOK_DIRECTIONS, occ, &mut dst),
        PieceKind::Bishop => {
            gen_rays(piece.color, from, &geometry::BISHOP_DIRECTIONS, occ, &mut dst)
        }
        PieceKind::Queen => {
            gen_rays(piece.color, from, &geometry::ROOK_DIRECTIONS, occ, &mut dst);
            gen_rays(piece.color, from, &geometry::BISHOP_DIRECTIONS, occ, &mut dst);
        }
        PieceKind::Knight => gen_steps(piece.color, from, &geometry::KNIGHT_JUMPS, occ, &mut dst),
        PieceKind::King => gen_steps(piece.color, from, &geometry::KING_STEPS, occ, &mut dst),
    }
    dst
}

fn gen_pawn<F>(color: Color, from: Position, occ: &F, dst: &mut DestList)
where
    F: Fn(Position) -> Option<Piece>,
{
    // A pawn on its promotion rank is stuck; promotion is not modeled.
    if from.y() == geometry::pawn_last_y(color) {
        return;
    }
    let dy = geometry::pawn_forward_delta(color);
    if let Some(one_up) = from.offset(0, dy) {
        if occ(one_up).is_none() {
            dst.push(one_up);
            if from.y() == geometry::pawn_start_y(color) {
                if let Some(two_up) = from.offset(0, 2 * dy) {
                    if occ(two_up).is_none() {
                        dst.push(two_up);
                    }
                }
            }
        }
    }
    for dx in [-1, 1] {
        if let Some(diag) = from.offset(dx, dy) {
            if let Some(captured) = occ(diag) {
                if captured.color != color {
                    dst.push(diag);
                }
            }
        }
    }
}

fn gen_rays<F>(color: Color, from: Position, dirs: &[(i8, i8)], occ: &F, dst: &mut DestList)
where
    F: Fn(Position) -> Option<Piece>,
{
    for &(dx, dy) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(dx, dy) {
            if step_into(color, next, occ, dst) {
                break;
            }
            cur = next;
        }
    }
}

fn gen_steps<F>(color: Color, from: Position, offsets: &[(i8, i8)], occ: &F, dst: &mut DestList)
where
    F: Fn(Position) -> Option<Piece>,
{
    for &(dx, dy) in offsets {
        if let Some(next) = from.offset(dx, dy) {
            step_into(color, next, occ, dst);
        }
    }
}

// Returns true when the square terminates the ray: any occupant blocks,
// and only an enemy occupant is also a valid destination.
fn step_into<F>(color: Color, square: Position, occ: &F, dst: &mut DestList) -> bool
where
    F: Fn(Position) -> Option<Piece>,
{
    match occ(square) {
        None => {
            dst.push(square);
            false
        }
        Some(occupant) => {
            if occupant.color != color {
                dst.push(square);
            }
            true
        }
    }
}
