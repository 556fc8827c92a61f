//! Reading and writing the piece-placement field of FEN
//!
//! Only the first field is looked at. Anything after the first space (side to move, castling,
//! en passant, move counters) is skipped when decoding and never written when encoding.

use crate::{Grid, Piece};

/// Shorthand accepted by [`decode`] for the standard starting position
pub const START_ALIAS: &str = "start";

/// The placement field of the standard starting position
pub const INITIAL_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Why a FEN placement couldn't be decoded
///
/// Ranks are reported by their number on the board, so the first record in the string is rank 8.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("no position given")]
    Empty,
    #[error("rank {rank} runs past the h-file")]
    RankOverflow { rank: u8 },
    #[error("rank {rank} only covers {files} files")]
    RankUnderflow { rank: u8, files: u8 },
    #[error("more than 8 ranks given")]
    TooManyRanks,
    #[error("only {0} ranks given")]
    TooFewRanks(u8),
    #[error("unexpected character {character:?} at byte {index}")]
    UnexpectedCharacter { character: char, index: usize },
}

/// Board rank number for a zero-based row
fn rank_number(row: usize) -> u8 {
    8 - row as u8
}

/// Decode a FEN placement into a fresh grid
///
/// An empty string gives `Ok(None)`, meaning there's no new position and whatever is currently
/// shown should stay. `"start"` is shorthand for the starting position.
///
/// ```
/// let grid = board::decode("start").unwrap().unwrap();
/// assert_eq!(grid, board::Grid::INITIAL);
/// assert_eq!(board::decode(""), Ok(None));
/// ```
pub fn decode(fen: &str) -> Result<Option<Grid>, FenError> {
    if fen.is_empty() {
        return Ok(None);
    }
    let fen = if fen == START_ALIAS {
        INITIAL_PLACEMENT
    } else {
        fen
    };

    let mut grid = Grid::EMPTY;
    let mut row = 0;
    let mut file = 0;
    for (index, character) in fen.char_indices() {
        match character {
            ' ' => break,
            '/' => {
                finish_rank(row, file)?;
                row += 1;
                file = 0;
                if row >= 8 {
                    return Err(FenError::TooManyRanks);
                }
            }
            '0'..='9' => {
                let run = character as usize - '0' as usize;
                if run == 0 {
                    return Err(FenError::UnexpectedCharacter { character, index });
                }
                file += run;
                if file > 8 {
                    return Err(FenError::RankOverflow {
                        rank: rank_number(row),
                    });
                }
            }
            _ => {
                let piece = Piece::from_fen_letter(character)
                    .ok_or(FenError::UnexpectedCharacter { character, index })?;
                if file >= 8 {
                    return Err(FenError::RankOverflow {
                        rank: rank_number(row),
                    });
                }
                grid.cells_mut()[row][file] = Some(piece);
                file += 1;
            }
        }
    }
    finish_rank(row, file)?;
    if row < 7 {
        return Err(FenError::TooFewRanks(row as u8 + 1));
    }
    Ok(Some(grid))
}

/// A rank record has to account for all 8 files before the next one starts
fn finish_rank(row: usize, file: usize) -> Result<(), FenError> {
    if file < 8 {
        Err(FenError::RankUnderflow {
            rank: rank_number(row),
            files: file as u8,
        })
    } else {
        Ok(())
    }
}

/// Encode the grid as a FEN placement
///
/// Runs of empty squares are always written as a single digit, so the output is canonical.
///
/// ```
/// assert_eq!(board::encode(&board::Grid::EMPTY), "8/8/8/8/8/8/8/8");
/// ```
pub fn encode(grid: &Grid) -> String {
    let mut fen = String::with_capacity(71);
    for (row, squares) in grid.cells().iter().enumerate() {
        if row > 0 {
            fen.push('/');
        }
        let mut empty_run = 0;
        for square in squares {
            match square {
                Some(piece) => {
                    push_empty_run(&mut fen, &mut empty_run);
                    fen.push(piece.fen_letter());
                }
                None => empty_run += 1,
            }
        }
        push_empty_run(&mut fen, &mut empty_run);
    }
    fen
}

fn push_empty_run(fen: &mut String, run: &mut u8) {
    if *run > 0 {
        fen.push(char::from(b'0' + *run));
        *run = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::BoardSquare;

    #[track_caller]
    fn decode_ok(fen: &str) -> Grid {
        decode(fen)
            .expect("Couldn't decode FEN")
            .expect("FEN was treated as empty")
    }

    #[track_caller]
    fn piece_on(grid: &Grid, square: &str) -> Option<char> {
        let square = square.parse::<BoardSquare>().expect("Bad square in test");
        grid.get(square).map(Piece::fen_letter)
    }

    #[test]
    fn test_start_alias() {
        assert_eq!(decode_ok("start"), decode_ok(INITIAL_PLACEMENT));
        assert_eq!(decode_ok("start"), Grid::INITIAL);
    }

    #[test]
    fn test_empty_fen_is_no_position() {
        assert_eq!(decode(""), Ok(None));
    }

    #[test]
    fn test_all_empty_board() {
        let grid = decode_ok("8/8/8/8/8/8/8/8");
        assert_eq!(grid, Grid::EMPTY);
        assert_eq!(encode(&grid), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_suffix_ignored() {
        assert_eq!(
            decode_ok("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            decode_ok("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        );
        // Garbage after the space never gets looked at
        assert_eq!(decode_ok("8/8/8/8/8/8/8/8 ???///99"), Grid::EMPTY);
    }

    #[test]
    fn test_pieces_land_on_their_squares() {
        let grid = decode_ok("r3k2r/8/8/3pP3/8/8/8/R3K2R b KQkq d6 0 1");
        assert_eq!(piece_on(&grid, "a8"), Some('r'));
        assert_eq!(piece_on(&grid, "e8"), Some('k'));
        assert_eq!(piece_on(&grid, "h8"), Some('r'));
        assert_eq!(piece_on(&grid, "d5"), Some('p'));
        assert_eq!(piece_on(&grid, "e5"), Some('P'));
        assert_eq!(piece_on(&grid, "a1"), Some('R'));
        assert_eq!(piece_on(&grid, "e1"), Some('K'));
        assert_eq!(piece_on(&grid, "b8"), None);
        assert_eq!(piece_on(&grid, "e4"), None);
        assert_eq!(grid.pieces().count(), 8);
    }

    #[test]
    fn test_encode_canonical_positions() {
        for fen in [
            INITIAL_PLACEMENT,
            "8/8/8/8/8/8/8/8",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R",
            "4k3/8/8/8/8/8/8/4K3",
            "7k/8/8/8/8/8/8/K7",
            "kqrbnpPN/8/8/8/8/8/8/BRQK4",
        ] {
            assert_eq!(encode(&decode_ok(fen)), fen);
        }
    }

    #[test]
    fn test_encode_merges_split_runs() {
        assert_eq!(encode(&decode_ok("44/8/8/8/8/8/8/1111k3")), "8/8/8/8/8/8/8/4k3");
    }

    #[test]
    fn test_rank_overflow() {
        assert_eq!(
            decode("9/8/8/8/8/8/8/8"),
            Err(FenError::RankOverflow { rank: 8 }),
        );
        assert_eq!(
            decode("8/8/8/8/8/8/8/ppppppppp"),
            Err(FenError::RankOverflow { rank: 1 }),
        );
        assert_eq!(
            decode("8/8/8/8/7K1/8/8/8"),
            Err(FenError::RankOverflow { rank: 4 }),
        );
    }

    #[test]
    fn test_rank_underflow() {
        assert_eq!(
            decode("7/8/8/8/8/8/8/8"),
            Err(FenError::RankUnderflow { rank: 8, files: 7 }),
        );
        assert_eq!(
            decode("8/8/8/8/8/8/8/"),
            Err(FenError::RankUnderflow { rank: 1, files: 0 }),
        );
        assert_eq!(
            decode("8/8/8/8/8/8/8/pppp w"),
            Err(FenError::RankUnderflow { rank: 1, files: 4 }),
        );
    }

    #[test]
    fn test_wrong_rank_count() {
        assert_eq!(decode("8/8/8"), Err(FenError::TooFewRanks(3)));
        assert_eq!(decode("8"), Err(FenError::TooFewRanks(1)));
        assert_eq!(decode("8/8/8/8/8/8/8/8/"), Err(FenError::TooManyRanks));
        assert_eq!(decode("8/8/8/8/8/8/8/8/8"), Err(FenError::TooManyRanks));
    }

    #[test]
    fn test_unexpected_characters() {
        assert_eq!(
            decode("8/8/8/8/8/8/8/7x"),
            Err(FenError::UnexpectedCharacter {
                character: 'x',
                index: 15,
            }),
        );
        assert_eq!(
            decode("08/8/8/8/8/8/8/8"),
            Err(FenError::UnexpectedCharacter {
                character: '0',
                index: 0,
            }),
        );
        assert!(matches!(
            decode("8/8/8/8/8/8/8/8\t"),
            Err(FenError::UnexpectedCharacter { character: '\t', .. }),
        ));
    }
}
