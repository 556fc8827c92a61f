//! Chess position plumbing for board widgets
//!
//! This crate converts between the piece-placement field of FEN and an 8x8 [`Grid`] of pieces,
//! and addresses the grid by algebraic square names. There are no chess rules in here: any piece
//! can be put anywhere and moved anywhere.

use core::{fmt, str::FromStr};

mod fen;
mod grid;

pub use crate::fen::{decode, encode, FenError, INITIAL_PLACEMENT, START_ALIAS};
pub use crate::grid::Grid;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquare),
    #[error("malformed FEN: {0}")]
    MalformedFen(#[from] FenError),
    #[error("no piece on {0} to move")]
    EmptySourceSquare(BoardSquare),
    #[error("invalid piece {0:?}, expected one of KQRBNP or kqrbnp")]
    InvalidPiece(String),
}

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 6] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
    ];

    /// The capitalized version of the letter used for this piece in FEN
    pub const fn fen_letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// The kind named by a FEN letter of either case
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_uppercase() {
            'P' => Self::Pawn,
            'R' => Self::Rook,
            'N' => Self::Knight,
            'B' => Self::Bishop,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => return None,
        })
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// A piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}
impl Piece {
    /// The FEN letter for this piece: uppercase for white, lowercase for black
    pub const fn fen_letter(self) -> char {
        match self.color {
            Color::White => self.kind.fen_letter().to_ascii_uppercase(),
            Color::Black => self.kind.fen_letter().to_ascii_lowercase(),
        }
    }

    /// Parse a single FEN letter, returning `None` for anything that isn't one of `KQRBNPkqrbnp`
    ///
    /// ```
    /// # use board::{Color, Piece, PieceKind};
    /// let knight = Piece::from_fen_letter('n').unwrap();
    /// assert_eq!(knight.kind, PieceKind::Knight);
    /// assert_eq!(knight.color, Color::Black);
    /// assert_eq!(Piece::from_fen_letter('x'), None);
    /// ```
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        let Some(kind) = PieceKind::from_fen_letter(letter) else {
            return None;
        };
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { kind, color })
    }

    /// The Unicode chess symbol for this piece
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// Returns an iterator of all pieces that exist
    pub fn all_pieces() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black].into_iter().flat_map(|color| {
            PieceKind::KINDS
                .into_iter()
                .map(move |kind| Self { kind, color })
        })
    }
}
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_letter())
    }
}
impl FromStr for Piece {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Self::from_fen_letter(letter).ok_or_else(|| Error::InvalidPiece(s.to_string()))
            }
            _ => Err(Error::InvalidPiece(s.to_string())),
        }
    }
}

/// The zero-based cell of the grid a square lives in
///
/// `rank` counts rows from the top of the board, so rank 8 is row 0 and rank 1 is row 7. This
/// matches the order ranks are written in FEN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub file: usize,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square {0:?}, expected a file a-h followed by a rank 1-8")]
pub struct InvalidSquare(pub String);

/// Parse an algebraic square name like `"a2"` into its grid cell
///
/// ```
/// # use board::{parse_square, GridIndex};
/// assert_eq!(parse_square("a1"), Ok(GridIndex { file: 0, rank: 7 }));
/// assert_eq!(parse_square("h8"), Ok(GridIndex { file: 7, rank: 0 }));
/// assert!(parse_square("i1").is_err());
/// ```
pub fn parse_square(square: &str) -> Result<GridIndex, InvalidSquare> {
    let &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] = square.as_bytes() else {
        return Err(InvalidSquare(square.to_string()));
    };
    Ok(GridIndex {
        file: usize::from(file - b'a'),
        rank: usize::from(b'8' - rank),
    })
}

/// A square on the board
///
/// Packed into one byte as `row << 3 | file`, where row 0 is the eighth rank. That's the order the
/// [`Grid`] stores its cells in, so converting to an index is a shift and a mask.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSquare(u8);
impl BoardSquare {
    /// The square at the given grid cell, or `None` if either index is off the board
    pub const fn from_grid_index(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(((rank as u8) << 3) | file as u8))
        } else {
            None
        }
    }

    /// Zero-based file, where the a-file is 0
    pub const fn file(self) -> usize {
        (self.0 & 0x07) as usize
    }

    /// Zero-based row, where the eighth rank is 0
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    pub const fn grid_index(self) -> GridIndex {
        GridIndex {
            file: self.file(),
            rank: self.rank(),
        }
    }

    /// The letter of this square's file
    pub const fn file_letter(self) -> char {
        (b'a' + (self.0 & 0x07)) as char
    }

    /// The digit of this square's rank as it is written in algebraic notation
    pub const fn rank_digit(self) -> char {
        (b'8' - (self.0 >> 3)) as char
    }

    /// An iterator over all squares, from a8 across to h8 and down to h1
    ///
    /// ```
    /// assert_eq!(board::BoardSquare::all_squares().count(), 64);
    /// ```
    pub fn all_squares() -> impl Iterator<Item = Self> {
        (0..64).map(Self)
    }
}
impl fmt::Debug for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardSquare")
            .field("repr", &format_args!("{:X}", self.0))
            .field("readable", &format_args!("{self}"))
            .finish()
    }
}
impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_digit())
    }
}
impl FromStr for BoardSquare {
    type Err = InvalidSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let GridIndex { file, rank } = parse_square(s)?;
        Self::from_grid_index(file, rank).ok_or_else(|| InvalidSquare(s.to_string()))
    }
}
