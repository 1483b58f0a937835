// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1, take_while};
use nom::character::complete::{char, digit1};
use nom::combinator::map_res;
use nom::sequence::{delimited, preceded};
use nom::IResult;
use std::str::FromStr;

/// A title between single or double quotes, `"Schindler's List (1993)"`
pub(crate) fn parse_string(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_till1(|c: char| c == '\''), char('\'')),
        delimited(char('"'), take_till1(|c: char| c == '"'), char('"')),
    ))(input)
}

pub(crate) fn parse_number<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, |s: &str| s.parse::<T>())(input)
}

/// `name(N)`
pub(crate) fn parse_call<'a, T: FromStr>(
    name: &'a str,
) -> impl Fn(&'a str) -> IResult<&'a str, T> {
    move |input: &'a str| {
        preceded(
            tag(name),
            delimited(char('('), parse_number::<T>, char(')')),
        )(input)
    }
}

pub(crate) fn parse_separator(input: &str) -> IResult<&str, &str> {
    delimited(
        take_while(|c: char| c == ' '),
        tag(","),
        take_while(|c: char| c == ' '),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strings() {
        assert_eq!(parse_string("'Heat (1995)'"), Ok(("", "Heat (1995)")));
        assert_eq!(
            parse_string("\"Schindler's List (1993)\" rest"),
            Ok((" rest", "Schindler's List (1993)"))
        );
        assert!(parse_string("''").is_err());
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_number::<usize>("120"), Ok(("", 120)));
        assert!(parse_number::<u8>("300").is_err());
    }

    #[test]
    fn test_parse_calls() {
        assert_eq!(parse_call::<usize>("top")("top(6), x"), Ok((", x", 6)));
        assert!(parse_call::<usize>("top")("min(6)").is_err());
    }

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_separator(" ,  x"), Ok(("x", ",")));
    }
}
