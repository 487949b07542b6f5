//! Heuristic components for solving
//!
//! This module contains the neighborhood operators local search draws from.

pub mod r#move;

pub use r#move::{apply_move, MoveContext, MoveRejection};
