use std::fmt;

use super::{PieceKind, Square};

/// A single piece movement: source, destination, and the kind a pawn turns
/// into when it reaches the last rank. Two moves to the same square with
/// different promotions are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Builds a move from the raw coordinates the input layer parses out of
    /// `e2e4` / `e7e8q` style notation. The promotion letter is
    /// case-insensitive; an unrecognized letter yields no move.
    pub fn from_coords(
        from_rank: i8,
        from_file: i8,
        to_rank: i8,
        to_file: i8,
        promotion: Option<char>,
    ) -> Option<Move> {
        let promotion = match promotion {
            None => None,
            Some(c) => match c.to_ascii_lowercase() {
                'q' => Some(PieceKind::Queen),
                'r' => Some(PieceKind::Rook),
                'b' => Some(PieceKind::Bishop),
                'n' => Some(PieceKind::Knight),
                _ => return None,
            },
        };
        Some(Move {
            from: Square::new(from_rank, from_file),
            to: Square::new(to_rank, to_file),
            promotion,
        })
    }

    pub(crate) fn file_distance(&self) -> i8 {
        (self.to.file - self.from.file).abs()
    }

    pub(crate) fn rank_distance(&self) -> i8 {
        (self.to.rank - self.from.rank).abs()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            let letter = match kind {
                PieceKind::Queen => 'q',
                PieceKind::Rook => 'r',
                PieceKind::Bishop => 'b',
                PieceKind::Knight => 'n',
                PieceKind::Pawn => 'p',
                PieceKind::King => 'k',
            };
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
