// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

mod basics;

use basics::{parse_call, parse_number, parse_separator, parse_string};
use controller::ItemId;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, space0, space1};
use nom::combinator::{all_consuming, map, opt};
use nom::multi::many0;
use nom::sequence::{delimited, preceded};
use nom::IResult;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Target {
    Id(ItemId),
    Title(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    Movies(Option<String>),
    Info(Target),
    Recommend {
        target: Target,
        min_ratings: Option<usize>,
        top: Option<usize>,
    },
    Reload,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Setting {
    MinRatings(usize),
    Top(usize),
}

fn parse_target(input: &str) -> IResult<&str, Target> {
    alt((
        map(
            preceded(tag("id"), delimited(char('('), parse_number, char(')'))),
            Target::Id,
        ),
        map(parse_string, |title: &str| Target::Title(title.into())),
    ))(input)
}

fn parse_setting(input: &str) -> IResult<&str, Setting> {
    alt((
        map(parse_call("min"), Setting::MinRatings),
        map(parse_call("top"), Setting::Top),
    ))(input)
}

fn parse_movies(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("movies")(input)?;
    let (input, filter) = opt(preceded(space1, parse_string))(input)?;

    Ok((input, Statement::Movies(filter.map(Into::into))))
}

fn parse_info(input: &str) -> IResult<&str, Statement> {
    let (input, target) = preceded(tag("info"), preceded(space1, parse_target))(input)?;
    Ok((input, Statement::Info(target)))
}

fn parse_recommend(input: &str) -> IResult<&str, Statement> {
    let (input, target) = preceded(tag("recommend"), preceded(space1, parse_target))(input)?;
    let (input, settings) = many0(preceded(parse_separator, parse_setting))(input)?;

    let mut min_ratings = None;
    let mut top = None;

    for setting in settings {
        match setting {
            Setting::MinRatings(value) => min_ratings = Some(value),
            Setting::Top(value) => top = Some(value),
        }
    }

    Ok((
        input,
        Statement::Recommend {
            target,
            min_ratings,
            top,
        },
    ))
}

fn parse_reload(input: &str) -> IResult<&str, Statement> {
    map(tag("reload"), |_| Statement::Reload)(input)
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    all_consuming(delimited(
        space0,
        alt((parse_movies, parse_info, parse_recommend, parse_reload)),
        space0,
    ))(input)
}

pub fn parse_line(line: &str) -> Option<Statement> {
    parse_statement(line).ok().map(|(_, stmt)| stmt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_movies_statement() {
        assert_eq!(parse_line("movies"), Some(Statement::Movies(None)));
        assert_eq!(
            parse_line("movies 'star'"),
            Some(Statement::Movies(Some("star".into())))
        );
    }

    #[test]
    fn parse_info_statement() {
        assert_eq!(parse_line("info id(50)"), Some(Statement::Info(Target::Id(50))));
        assert_eq!(
            parse_line("  info 'Heat (1995)' "),
            Some(Statement::Info(Target::Title("Heat (1995)".into())))
        );
    }

    #[test]
    fn parse_recommend_statement() {
        assert_eq!(
            parse_line("recommend 'Star Wars (1977)'"),
            Some(Statement::Recommend {
                target: Target::Title("Star Wars (1977)".into()),
                min_ratings: None,
                top: None,
            })
        );

        assert_eq!(
            parse_line("recommend id(50), top(10) , min(50)"),
            Some(Statement::Recommend {
                target: Target::Id(50),
                min_ratings: Some(50),
                top: Some(10),
            })
        );
    }

    #[test]
    fn parse_reload_statement() {
        assert_eq!(parse_line("reload"), Some(Statement::Reload));
    }

    #[test]
    fn invalid_statements() {
        assert_eq!(parse_line("recommend Heat"), None);
        assert_eq!(parse_line("recommend 'Heat', limit(3)"), None);
        assert_eq!(parse_line("info id(x)"), None);
        assert_eq!(parse_line("moviesx"), None);
    }
}
