use core::{fmt, mem, str::FromStr};

use crate::{decode, encode, BoardSquare, Color, Error, FenError, Piece, PieceKind, Result};

/// The contents of all 64 squares
///
/// Rows run from rank 8 down to rank 1 and each row runs from the a-file to the h-file, the same
/// order as a FEN placement. The mutating helpers change the grid in place and either succeed
/// completely or leave it as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid([[Option<Piece>; 8]; 8]);

const fn back_rank(color: Color) -> [Option<Piece>; 8] {
    const KINDS: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    let mut rank = [None; 8];
    let mut file = 0;
    while file < 8 {
        rank[file] = Some(Piece {
            kind: KINDS[file],
            color,
        });
        file += 1;
    }
    rank
}

const fn pawn_rank(color: Color) -> [Option<Piece>; 8] {
    [Some(Piece {
        kind: PieceKind::Pawn,
        color,
    }); 8]
}

impl Grid {
    /// A board with nothing on it
    pub const EMPTY: Self = Self([[None; 8]; 8]);

    /// The standard starting position
    pub const INITIAL: Self = Self([
        back_rank(Color::Black),
        pawn_rank(Color::Black),
        [None; 8],
        [None; 8],
        [None; 8],
        [None; 8],
        pawn_rank(Color::White),
        back_rank(Color::White),
    ]);

    pub const fn from_cells(cells: [[Option<Piece>; 8]; 8]) -> Self {
        Self(cells)
    }

    pub const fn cells(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.0
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [[Option<Piece>; 8]; 8] {
        &mut self.0
    }

    fn cell_mut(&mut self, square: BoardSquare) -> &mut Option<Piece> {
        &mut self.0[square.rank()][square.file()]
    }

    /// The piece on the given square, if any
    pub const fn get(&self, square: BoardSquare) -> Option<Piece> {
        self.0[square.rank()][square.file()]
    }

    /// Put `piece` on the square (or empty it with `None`), returning whatever was there before
    pub fn set(&mut self, square: BoardSquare, piece: Option<Piece>) -> Option<Piece> {
        mem::replace(self.cell_mut(square), piece)
    }

    /// Remove the piece on the given square, returning it
    pub fn clear(&mut self, square: BoardSquare) -> Option<Piece> {
        self.cell_mut(square).take()
    }

    /// Empty every square
    pub fn clear_all(&mut self) {
        *self = Self::EMPTY;
    }

    /// Move the piece on `from` to `to`
    ///
    /// Whatever was on `to` is replaced and returned. Nothing checks that the move is legal, or
    /// even that the two pieces are different colors. If `from` is empty the grid is not touched.
    ///
    /// ```
    /// # use board::{Grid, BoardSquare};
    /// let mut grid = Grid::INITIAL;
    /// let e2 = "e2".parse::<BoardSquare>().unwrap();
    /// let e4 = "e4".parse::<BoardSquare>().unwrap();
    /// assert_eq!(grid.move_piece(e2, e4), Ok(None));
    /// assert_eq!(grid.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
    /// assert!(grid.move_piece(e2, e4).is_err());
    /// ```
    pub fn move_piece(&mut self, from: BoardSquare, to: BoardSquare) -> Result<Option<Piece>> {
        let piece = self.clear(from).ok_or(Error::EmptySourceSquare(from))?;
        Ok(self.set(to, Some(piece)))
    }

    /// All pieces on the board with the square each one stands on
    pub fn pieces(&self) -> impl Iterator<Item = (BoardSquare, Piece)> + '_ {
        BoardSquare::all_squares().filter_map(|square| Some((square, self.get(square)?)))
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Replace the whole position with the one described by `fen`
    ///
    /// An empty string leaves the grid unchanged, as does any error.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        if let Some(grid) = decode(fen)? {
            *self = grid;
        }
        Ok(())
    }

    /// The FEN placement for this grid
    pub fn to_fen(&self) -> String {
        encode(self)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

/// Parses a FEN placement; unlike [`decode`], an empty string is an error here
impl FromStr for Grid {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)?.ok_or(FenError::Empty)
    }
}
