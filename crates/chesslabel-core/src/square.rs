//! Single-square codec.
//!
//! A [`Square`] is a piece kind plus a color. It converts to and from the
//! one-character notation symbol (`p r n b q k`, uppercase for white) and to
//! and from the legacy packed byte used by older dataset tooling:
//!
//! ```text
//!   bit  4 3 | 2 1 0
//!        col | piece
//! ```
//!
//! The piece field holds `0..=6` (blank, pawn, rook, knight, bishop, queen,
//! king); the color field holds white (`0b01000`) or black (`0b10000`).

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::NotationError;

/// Piece kind of a square. `Blank` marks an empty square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    #[default]
    Blank = 0,
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// Every non-blank kind, in packed-field order.
    pub const PIECES: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    const MASK: u8 = 0b00111;

    /// Value of the packed piece field.
    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> Option<Self> {
        match bits & Self::MASK {
            0 => Some(PieceKind::Blank),
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Rook),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase notation symbol, `None` for blank.
    pub fn symbol(self) -> Option<char> {
        match self {
            PieceKind::Blank => None,
            PieceKind::Pawn => Some('p'),
            PieceKind::Rook => Some('r'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
        }
    }

    fn from_symbol(lower: char) -> Option<Self> {
        match lower {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Piece color, also used as the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    const MASK: u8 = 0b11000;
    const WHITE_BITS: u8 = 0b01000;
    const BLACK_BITS: u8 = 0b10000;

    /// Value of the packed color field.
    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            Color::White => Self::WHITE_BITS,
            Color::Black => Self::BLACK_BITS,
        }
    }

    fn from_bits(bits: u8) -> Option<Self> {
        match bits & Self::MASK {
            Self::WHITE_BITS => Some(Color::White),
            Self::BLACK_BITS => Some(Color::Black),
            _ => None,
        }
    }

    /// Active-color token used in board notation.
    #[inline]
    pub fn notation(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_notation(token: &str) -> Option<Self> {
        match token {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }
}

/// One board square.
///
/// Blank squares carry no color: two blank squares compare equal whatever
/// their `color` field holds.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Square {
    pub kind: PieceKind,
    pub color: Color,
}

impl Square {
    pub const BLANK: Square = Square {
        kind: PieceKind::Blank,
        color: Color::White,
    };

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub fn is_blank(self) -> bool {
        self.kind == PieceKind::Blank
    }

    /// Decode a notation symbol. Lowercase is black, uppercase is white.
    pub fn decode(symbol: char) -> Result<Self, NotationError> {
        let kind = PieceKind::from_symbol(symbol.to_ascii_lowercase())
            .ok_or(NotationError::InvalidSquareSymbol { symbol })?;
        let color = if symbol.is_ascii_lowercase() {
            Color::Black
        } else {
            Color::White
        };
        Ok(Self { kind, color })
    }

    /// Notation symbol for this square, `None` for a blank square.
    pub fn encode(self) -> Option<char> {
        let lower = self.kind.symbol()?;
        Some(match self.color {
            Color::White => lower.to_ascii_uppercase(),
            Color::Black => lower,
        })
    }

    /// Legacy packed representation. Blank squares pack to `0`.
    pub fn bits(self) -> u8 {
        if self.is_blank() {
            0
        } else {
            self.kind.bits() | self.color.bits()
        }
    }

    /// Unpack a legacy packed square.
    ///
    /// Color bits are ignored for a blank piece field. Non-blank values must
    /// carry exactly one color and no bits above the color field.
    pub fn from_bits(bits: u8) -> Result<Self, NotationError> {
        let invalid = NotationError::InvalidSquareBits { bits };
        if bits & !(PieceKind::MASK | Color::MASK) != 0 {
            return Err(invalid);
        }
        let kind = PieceKind::from_bits(bits).ok_or(invalid.clone())?;
        if kind == PieceKind::Blank {
            return Ok(Self::BLANK);
        }
        let color = Color::from_bits(bits).ok_or(invalid)?;
        Ok(Self { kind, color })
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && (self.is_blank() || self.color == other.color)
    }
}

impl Eq for Square {}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        if !self.is_blank() {
            self.color.hash(state);
        }
    }
}
