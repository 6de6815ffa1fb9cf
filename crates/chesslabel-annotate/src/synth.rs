//! Random board generation for synthetic samples.
//!
//! A synthetic board holds exactly the 32 pieces of a full set plus 32
//! blanks, shuffled uniformly over the 64 squares. Positions are not legal
//! games; the detector only needs varied piece placements.

use chesslabel_core::{Board, Color, Square, BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Side to move written into synthetic boards.
pub const SYNTHETIC_ACTIVE_COLOR: Color = Color::Black;

/// The 64-square multiset shuffled into every synthetic board.
pub fn piece_multiset() -> [Square; BOARD_SIZE * BOARD_SIZE] {
    let mut squares = [Square::BLANK; BOARD_SIZE * BOARD_SIZE];
    for (slot, square) in squares
        .iter_mut()
        .zip(Board::starting().ranks().iter().flatten())
    {
        *slot = *square;
    }
    squares
}

/// Shuffle the full piece set onto an 8×8 board.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, active_color: Color) -> Board {
    let mut squares = piece_multiset();
    squares.shuffle(rng);

    let mut ranks = [[Square::BLANK; BOARD_SIZE]; BOARD_SIZE];
    for (index, square) in squares.into_iter().enumerate() {
        ranks[index / BOARD_SIZE][index % BOARD_SIZE] = square;
    }
    Board::new(ranks, active_color)
}
