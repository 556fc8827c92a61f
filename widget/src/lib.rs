//! A chess board widget
//!
//! [`ChessBoard`] owns a position and a [`Renderer`]. Every successful change to the position
//! (setting a FEN, moving, putting or clearing pieces) is followed by a redraw, and a failed one
//! leaves both the position and the drawing alone.

use board::{BoardSquare, Grid, Piece, Result};
use log::{debug, trace};

mod action;
mod config;
mod render;

pub use crate::action::{Action, ActionParseError};
pub use crate::config::{Config, ConfigError};
pub use crate::render::{RenderOptions, Renderer, TextRenderer};

/// A board showing one position at a time
#[derive(Debug)]
pub struct ChessBoard<R> {
    /// The position currently shown
    grid: Grid,
    options: RenderOptions,
    renderer: R,
}

impl<R: Renderer> ChessBoard<R> {
    /// Create a board with nothing on it
    ///
    /// Nothing is drawn until the first change.
    pub fn new(renderer: R, options: RenderOptions) -> Self {
        Self {
            grid: Grid::EMPTY,
            options,
            renderer,
        }
    }

    /// Create a board showing the given FEN
    ///
    /// Surrounding whitespace is ignored, and a blank string gives a board with nothing drawn,
    /// same as [`Self::new`].
    pub fn from_fen(fen: &str, renderer: R, options: RenderOptions) -> Result<Self> {
        let mut board = Self::new(renderer, options);
        board.set_fen(fen.trim())?;
        Ok(board)
    }

    /// Show a new position
    ///
    /// An empty string is ignored, and `"start"` shows the starting position.
    pub fn set_fen(&mut self, fen: &str) -> Result<()> {
        let Some(grid) = board::decode(fen)? else {
            trace!("Ignoring empty position");
            return Ok(());
        };
        debug!("Showing position {grid}");
        self.grid = grid;
        self.redraw();
        Ok(())
    }

    /// The FEN placement of the position currently shown
    pub fn fen(&self) -> String {
        self.grid.to_fen()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Move a piece from one square to another, e.g. `move_piece("e2", "e4")`
    ///
    /// Whatever stood on the target square is removed and returned. Fails if either square name
    /// is invalid or there is no piece to move.
    pub fn move_piece(&mut self, from: &str, to: &str) -> Result<Option<Piece>> {
        let from = from.parse::<BoardSquare>()?;
        let to = to.parse::<BoardSquare>()?;
        self.move_square(from, to)
    }

    /// Put a piece given by its FEN letter on a square, e.g. `put("e4", "Q")`
    pub fn put(&mut self, square: &str, piece: &str) -> Result<Option<Piece>> {
        let square = square.parse::<BoardSquare>()?;
        let piece = piece.parse::<Piece>()?;
        Ok(self.put_square(square, piece))
    }

    /// Remove the piece on a square, if there is one
    pub fn clear(&mut self, square: &str) -> Result<Option<Piece>> {
        let square = square.parse::<BoardSquare>()?;
        Ok(self.clear_square(square))
    }

    /// Remove every piece
    pub fn clear_board(&mut self) {
        debug!("Clearing the board");
        self.grid.clear_all();
        self.redraw();
    }

    /// Switch between letters and Unicode symbols for the pieces
    ///
    /// The position is redrawn if the setting changed.
    pub fn set_unicode(&mut self, unicode: bool) {
        if self.options.unicode != unicode {
            debug!("Unicode pieces {}", if unicode { "on" } else { "off" });
            self.options.unicode = unicode;
            self.redraw();
        }
    }

    /// Apply a scripted action
    pub fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::SetFen(fen) => self.set_fen(fen)?,
            Action::Move { from, to } => {
                self.move_square(*from, *to)?;
            }
            Action::Put { square, piece } => {
                self.put_square(*square, *piece);
            }
            Action::Clear(square) => {
                self.clear_square(*square);
            }
            Action::ClearBoard => self.clear_board(),
        }
        Ok(())
    }

    fn move_square(&mut self, from: BoardSquare, to: BoardSquare) -> Result<Option<Piece>> {
        let replaced = self.grid.move_piece(from, to)?;
        debug!("Moved {from} to {to}");
        self.redraw();
        Ok(replaced)
    }

    fn put_square(&mut self, square: BoardSquare, piece: Piece) -> Option<Piece> {
        let replaced = self.grid.set(square, Some(piece));
        debug!("Put {piece} on {square}");
        self.redraw();
        replaced
    }

    fn clear_square(&mut self, square: BoardSquare) -> Option<Piece> {
        let removed = self.grid.clear(square);
        debug!("Cleared {square}");
        self.redraw();
        removed
    }

    fn redraw(&mut self) {
        trace!("Redrawing {}", self.grid);
        self.renderer.render(&self.grid, &self.options);
    }
}
