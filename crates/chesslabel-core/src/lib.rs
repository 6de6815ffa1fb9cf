//! Core types for chess detector dataset preparation.
//!
//! - [`Square`] / [`Board`]: board state and its placement notation
//!   (`rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`),
//! - [`BoundingBox`] / [`ImageSize`]: labeled pixel boxes,
//! - a small stderr logger.
//!
//! Everything here is a pure value transformation; no file or image I/O.

mod bbox;
mod board;
mod error;
mod logger;
mod square;

pub use bbox::{BoundingBox, ImageSize, CORNER_LABEL};
pub use board::{Board, Rank, BOARD_SIZE, START_NOTATION};
pub use error::NotationError;
pub use square::{Color, PieceKind, Square};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_from_env, init_with_level, LOG_ENV};
