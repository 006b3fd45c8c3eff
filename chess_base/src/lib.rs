//! # Base types for gridchess
//!
//! This is an auxiliary crate for `gridchess`, which contains coordinates, pieces and the board
//! geometry. It is kept separate so the rules engine and any frontends can share the same
//! value types without pulling in move generation.
//!
//! Normally you don't want to use this crate directly. Use `gridchess` instead.

pub mod geometry;
pub mod types;
