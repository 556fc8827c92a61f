//! Drawing a position

use board::Grid;
use serde::Deserialize;

/// Settings for how a position is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Draw pieces as Unicode chess symbols instead of their FEN letters
    pub unicode: bool,
    /// Label ranks down the side and files along the bottom
    pub coordinates: bool,
    /// What to draw on a square with no piece
    pub empty_square: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: false,
            coordinates: true,
            empty_square: '.',
        }
    }
}

/// Something which can show a position
///
/// The board calls [`Renderer::render`] after every change, always with the full position, so
/// implementations can simply throw away whatever they drew last time.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, options: &RenderOptions);
}

/// Draws the board as lines of text, rank 8 at the top
#[derive(Debug, Default)]
pub struct TextRenderer {
    /// The most recent drawing
    frame: String,
    /// How many times we've drawn
    frames_drawn: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest drawing, or an empty string if nothing has been drawn yet
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, grid: &Grid, options: &RenderOptions) {
        self.frame.clear();
        for (row, squares) in grid.cells().iter().enumerate() {
            if options.coordinates {
                self.frame.push(char::from(b'8' - row as u8));
                self.frame.push_str(" |");
            }
            for square in squares {
                self.frame.push(' ');
                self.frame.push(match square {
                    Some(piece) if options.unicode => piece.symbol(),
                    Some(piece) => piece.fen_letter(),
                    None => options.empty_square,
                });
            }
            self.frame.push('\n');
        }
        if options.coordinates {
            self.frame.push_str("    a b c d e f g h\n");
        }
        self.frames_drawn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_letters_with_coordinates() {
        let mut renderer = TextRenderer::new();
        renderer.render(&Grid::INITIAL, &RenderOptions::default());
        assert_eq!(
            renderer.frame(),
            "8 | r n b q k b n r\n\
             7 | p p p p p p p p\n\
             6 | . . . . . . . .\n\
             5 | . . . . . . . .\n\
             4 | . . . . . . . .\n\
             3 | . . . . . . . .\n\
             2 | P P P P P P P P\n\
             1 | R N B Q K B N R\n    \
             a b c d e f g h\n",
        );
        assert_eq!(renderer.frames_drawn(), 1);
    }

    #[test]
    fn test_draws_symbols_without_coordinates() {
        let grid = "4k3/8/8/8/8/8/8/4K3".parse::<Grid>().expect("Bad FEN in test");
        let options = RenderOptions {
            unicode: true,
            coordinates: false,
            empty_square: '·',
        };
        let mut renderer = TextRenderer::new();
        renderer.render(&Grid::INITIAL, &options);
        renderer.render(&grid, &options);
        let lines = renderer.frame().lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " · · · · ♚ · · ·");
        assert_eq!(lines[7], " · · · · ♔ · · ·");
        assert_eq!(renderer.frames_drawn(), 2);
    }
}
