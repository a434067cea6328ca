//! # Base types for duelchess
//!
//! This is an auxiliary crate for `duelchess`, which contains the core value types
//! (squares, pieces, game outcomes) and board geometry tables.
//!
//! Normally you don't want to use this crate directly. Use `duelchess` instead.

pub mod geometry;
pub mod types;
