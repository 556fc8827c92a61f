//! Edits to a board, written as short strings
//!
//! | Text        | Meaning                              |
//! |-------------|--------------------------------------|
//! | `e2-e4`     | move the piece on e2 to e4           |
//! | `e4=Q`      | put a white queen on e4              |
//! | `e4=`       | remove whatever is on e4 (or `e4=-`) |
//! | `clear`     | remove every piece                   |
//! | `fen:<FEN>` | show a new position                  |

use core::str::FromStr;

use board::{BoardSquare, InvalidSquare, Piece};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetFen(String),
    Move { from: BoardSquare, to: BoardSquare },
    Put { square: BoardSquare, piece: Piece },
    Clear(BoardSquare),
    ClearBoard,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("unrecognized action {0:?}, expected something like `e2-e4`, `e4=Q`, `e4=`, `clear` or `fen:start`")]
    Unrecognized(String),
    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquare),
    #[error(transparent)]
    Board(#[from] board::Error),
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "clear" {
            return Ok(Self::ClearBoard);
        }
        if let Some(fen) = s.strip_prefix("fen:") {
            return Ok(Self::SetFen(fen.to_string()));
        }
        if let Some((square, piece)) = s.split_once('=') {
            let square = square.parse::<BoardSquare>()?;
            return Ok(match piece {
                "" | "-" => Self::Clear(square),
                piece => Self::Put {
                    square,
                    piece: piece.parse::<Piece>()?,
                },
            });
        }
        if let Some((from, to)) = s.split_once('-') {
            return Ok(Self::Move {
                from: from.parse::<BoardSquare>()?,
                to: to.parse::<BoardSquare>()?,
            });
        }
        Err(ActionParseError::Unrecognized(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn square(name: &str) -> BoardSquare {
        name.parse().expect("Bad square in test")
    }

    #[test]
    fn test_parse_each_form() {
        assert_eq!(
            "e2-e4".parse::<Action>(),
            Ok(Action::Move {
                from: square("e2"),
                to: square("e4"),
            })
        );
        assert_eq!(
            "e4=q".parse::<Action>(),
            Ok(Action::Put {
                square: square("e4"),
                piece: Piece::from_fen_letter('q').expect("q is a piece"),
            })
        );
        assert_eq!("e4=".parse::<Action>(), Ok(Action::Clear(square("e4"))));
        assert_eq!("e4=-".parse::<Action>(), Ok(Action::Clear(square("e4"))));
        assert_eq!("clear".parse::<Action>(), Ok(Action::ClearBoard));
        assert_eq!(
            "fen:8/8/8/8/8/8/8/8 w - - 0 1".parse::<Action>(),
            Ok(Action::SetFen("8/8/8/8/8/8/8/8 w - - 0 1".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "e2-e9".parse::<Action>(),
            Err(ActionParseError::InvalidSquare(InvalidSquare(
                "e9".to_string()
            )))
        );
        assert_eq!(
            "e4=Z".parse::<Action>(),
            Err(ActionParseError::Board(board::Error::InvalidPiece(
                "Z".to_string()
            )))
        );
        assert_eq!(
            "castle".parse::<Action>(),
            Err(ActionParseError::Unrecognized("castle".to_string()))
        );
    }
}
