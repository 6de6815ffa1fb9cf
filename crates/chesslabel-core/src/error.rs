/// Errors produced while decoding squares or board notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square symbol {symbol:?}")]
    InvalidSquareSymbol { symbol: char },
    #[error("invalid packed square value {bits:#07b}")]
    InvalidSquareBits { bits: u8 },
    #[error("malformed notation {notation:?}: {reason}")]
    MalformedNotation {
        notation: String,
        reason: &'static str,
    },
    #[error("rank {rank} expands to {squares} squares, expected 8")]
    InvalidRankLength { rank: usize, squares: usize },
    #[error("found {ranks} ranks, expected 8")]
    InvalidRankCount { ranks: usize },
}
