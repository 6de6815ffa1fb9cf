//! Board state and its placement notation.
//!
//! Only the first two notation fields are used: piece placement and active
//! color, e.g. `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`. Ranks are
//! stored top to bottom (rank 8 first) and files left to right (file a
//! first), matching the order in which the notation lists them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Color, NotationError, PieceKind, Square};

/// Number of ranks and of files.
pub const BOARD_SIZE: usize = 8;

/// Notation of the standard starting position with white to move.
pub const START_NOTATION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// One rank, file a first.
pub type Rank = [Square; BOARD_SIZE];

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 board plus the side to move.
///
/// Serializes as its notation string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    ranks: [Rank; BOARD_SIZE],
    active_color: Color,
}

impl Board {
    pub fn new(ranks: [Rank; BOARD_SIZE], active_color: Color) -> Self {
        Self {
            ranks,
            active_color,
        }
    }

    /// Board with no pieces.
    pub fn empty(active_color: Color) -> Self {
        Self::new([[Square::BLANK; BOARD_SIZE]; BOARD_SIZE], active_color)
    }

    /// Standard starting position, white to move.
    pub fn starting() -> Self {
        let mut board = Self::empty(Color::White);
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            board.ranks[0][file] = Square::new(kind, Color::Black);
            board.ranks[1][file] = Square::new(PieceKind::Pawn, Color::Black);
            board.ranks[6][file] = Square::new(PieceKind::Pawn, Color::White);
            board.ranks[7][file] = Square::new(kind, Color::White);
        }
        board
    }

    /// Build a board from variable-length rows, validating the 8×8 shape.
    pub fn from_rows(rows: &[Vec<Square>], active_color: Color) -> Result<Self, NotationError> {
        if rows.len() != BOARD_SIZE {
            return Err(NotationError::InvalidRankCount { ranks: rows.len() });
        }
        let mut board = Self::empty(active_color);
        for (index, row) in rows.iter().enumerate() {
            board.ranks[index] =
                Rank::try_from(row.as_slice()).map_err(|_| NotationError::InvalidRankLength {
                    rank: index,
                    squares: row.len(),
                })?;
        }
        Ok(board)
    }

    #[inline]
    pub fn ranks(&self) -> &[Rank; BOARD_SIZE] {
        &self.ranks
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Square at `(rank, file)`, both indexed from the top-left.
    #[inline]
    pub fn get(&self, rank: usize, file: usize) -> Option<Square> {
        self.ranks.get(rank)?.get(file).copied()
    }

    /// Non-blank squares as `(rank, file, square)` in notation order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Square)> + '_ {
        self.ranks.iter().enumerate().flat_map(|(rank, squares)| {
            squares
                .iter()
                .enumerate()
                .filter(|(_, square)| !square.is_blank())
                .map(move |(file, square)| (rank, file, *square))
        })
    }

    /// Parse `<placement> <active color>`.
    pub fn parse(notation: &str) -> Result<Self, NotationError> {
        let fields: Vec<&str> = notation.split(' ').collect();
        let [placement, color] = fields.as_slice() else {
            return Err(NotationError::MalformedNotation {
                notation: notation.to_owned(),
                reason: "expected exactly two space-separated fields",
            });
        };
        let active_color =
            Color::from_notation(color).ok_or_else(|| NotationError::MalformedNotation {
                notation: notation.to_owned(),
                reason: "active color must be 'w' or 'b'",
            })?;

        let rank_fields: Vec<&str> = placement.split('/').collect();
        if rank_fields.len() != BOARD_SIZE {
            return Err(NotationError::InvalidRankCount {
                ranks: rank_fields.len(),
            });
        }

        let mut board = Self::empty(active_color);
        for (index, field) in rank_fields.into_iter().enumerate() {
            board.ranks[index] = parse_rank(index, field)?;
        }
        Ok(board)
    }

    /// Serialize to `<placement> <active color>`.
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1) + 2);
        for (index, rank) in self.ranks.iter().enumerate() {
            if index > 0 {
                out.push('/');
            }
            write_rank(&mut out, rank);
        }
        out.push(' ');
        out.push(self.active_color.notation());
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

impl TryFrom<String> for Board {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_notation()
    }
}

fn parse_rank(index: usize, field: &str) -> Result<Rank, NotationError> {
    let mut rank = [Square::BLANK; BOARD_SIZE];
    let mut filled = 0usize;
    for symbol in field.chars() {
        if let Some(run) = symbol.to_digit(10) {
            filled = filled.saturating_add(run as usize);
            continue;
        }
        let square = Square::decode(symbol)?;
        if let Some(slot) = rank.get_mut(filled) {
            *slot = square;
        }
        filled = filled.saturating_add(1);
    }
    if filled != BOARD_SIZE {
        return Err(NotationError::InvalidRankLength {
            rank: index,
            squares: filled,
        });
    }
    Ok(rank)
}

fn write_rank(out: &mut String, rank: &Rank) {
    let mut blanks = 0u8;
    for square in rank {
        match square.encode() {
            Some(symbol) => {
                flush_blanks(out, &mut blanks);
                out.push(symbol);
            }
            None => blanks += 1,
        }
    }
    flush_blanks(out, &mut blanks);
}

fn flush_blanks(out: &mut String, blanks: &mut u8) {
    if *blanks == 0 {
        return;
    }
    // A single digit encodes the run; ranks hold at most 8 squares.
    assert!(
        usize::from(*blanks) <= BOARD_SIZE,
        "blank run of {blanks} exceeds rank width"
    );
    out.push(char::from(b'0' + *blanks));
    *blanks = 0;
}
