use std::str::FromStr;

use combine::error::StreamError;
use combine::stream::StreamErrorFor;
use combine::{easy, EasyParser, ParseError, Parser, Stream};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`; trailing input is an error.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Base-10 unsigned integer. Overflow is a parse error, not a panic.
pub fn decimal_integer<Input, N>() -> impl Parser<Input, Output = N>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    N: FromStr,
{
    combine::many1(combine::parser::char::digit()).and_then(|digits: String| {
        digits
            .parse::<N>()
            .map_err(|_| StreamErrorFor::<Input>::message_static_message("integer out of range"))
    })
}
