//! Move tokens, parsing, and inversion.

use std::fmt;
use std::str::FromStr;

use crate::cube::Face;

/// Turn amount and direction, seen from outside the turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    #[inline]
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// One vocabulary move: a face and a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// The full 18-token vocabulary, face-major.
    pub const ALL: [Move; 18] = {
        const T: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];
        let mut out = [Move {
            face: Face::U,
            turn: Turn::Clockwise,
        }; 18];
        let mut i = 0;
        while i < 18 {
            out[i] = Move {
                face: Face::ALL[i / 3],
                turn: T[i % 3],
            };
            i += 1;
        }
        out
    };

    #[inline]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    #[inline]
    pub fn inverse(self) -> Move {
        Move {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

/// A token that is not one of the 18 vocabulary moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMoveError {
    pub token: String,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown move token: {:?}", self.token)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Exact, case-sensitive match against the vocabulary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            token: s.to_string(),
        };
        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(err)?;
        let turn = match (chars.next(), chars.next()) {
            (None, _) => Turn::Clockwise,
            (Some('\''), None) => Turn::CounterClockwise,
            (Some('2'), None) => Turn::Half,
            _ => return Err(err()),
        };
        Ok(Move { face, turn })
    }
}

/// One scramble position: a vocabulary move or an unknown token kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Move(Move),
    Unknown(String),
}

impl Token {
    pub fn parse(raw: &str) -> Token {
        match raw.parse::<Move>() {
            Ok(m) => Token::Move(m),
            Err(_) => Token::Unknown(raw.to_string()),
        }
    }

    /// A no-op's inverse is the same no-op.
    pub fn inverse(&self) -> Token {
        match self {
            Token::Move(m) => Token::Move(m.inverse()),
            Token::Unknown(raw) => Token::Unknown(raw.clone()),
        }
    }

    #[inline]
    pub fn as_move(&self) -> Option<Move> {
        match self {
            Token::Move(m) => Some(*m),
            Token::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Move(m) => write!(f, "{m}"),
            Token::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Split on any whitespace (runs collapse, ends trim) and classify each piece.
pub fn tokenize(scramble: &str) -> Vec<Token> {
    scramble.split_whitespace().map(Token::parse).collect()
}

/// Reverse the order and invert each token.
pub fn invert(tokens: &[Token]) -> Vec<Token> {
    tokens.iter().rev().map(Token::inverse).collect()
}

/// `invert` restricted to vocabulary moves.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}
