use glam::IVec2;
use thiserror::Error;

use crate::helpers::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl From<Direction> for IVec2 {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => IVec2::Y,
            Direction::Right => IVec2::X,
            Direction::Down => IVec2::NEG_Y,
            Direction::Left => IVec2::NEG_X,
        }
    }
}

/// One parsed input command: move the head `distance` unit steps in
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub direction: Direction,
    pub distance: i32,
}

/// A line that does not match `<direction> <count>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid motion {line:?}: {reason}")]
pub struct ParseError {
    pub line: String,
    pub reason: String,
}

impl Motion {
    /// Parses one whole input line, e.g. `"L 5"`. The count must be a
    /// positive base-10 integer; anything else (including trailing
    /// garbage) is rejected with the offending line attached.
    pub fn from_line(line: &str) -> Result<Self, ParseError> {
        let motion = parse::from_str(line, Self::parser()).map_err(|err| ParseError {
            line: line.to_owned(),
            reason: err.map_position(|p| p.translate_position(line)).to_string(),
        })?;

        if motion.distance < 1 {
            return Err(ParseError {
                line: line.to_owned(),
                reason: String::from("count must be at least 1"),
            });
        }

        Ok(motion)
    }
}

mod parsing {
    use super::*;

    use crate::helpers::parse;

    mod c {
        pub use combine::*;
    }

    use c::{ParseError, Parser, Stream};

    impl Direction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            c::one_of("DLRU".chars()).map(|c: char| match c {
                'D' => Direction::Down,
                'L' => Direction::Left,
                'R' => Direction::Right,
                'U' => Direction::Up,
                _ => unreachable!(),
            })
        }
    }

    impl Motion {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "L 5"
            (Direction::parser(), c::token(' '), parse::decimal_integer()).map(
                |(direction, _, distance)| Motion {
                    direction,
                    distance,
                },
            )
        }
    }
}
