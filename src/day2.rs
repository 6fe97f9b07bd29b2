use anyhow::Context;
use nom::{
    branch::alt,
    character::complete::{digit1, multispace0, multispace1, space1},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{self, final_parser},
    multi::collect_separated_terminated,
    tag::complete::tag,
    ParserExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Forward,
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Command {
    heading: Heading,
    distance: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Position {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Position {
    fn drive(self, command: Command) -> Self {
        match command.heading {
            Heading::Forward => Self {
                horizontal: self.horizontal + command.distance,
                ..self
            },
            Heading::Down => Self {
                depth: self.depth + command.distance,
                ..self
            },
            Heading::Up => Self {
                depth: self.depth - command.distance,
                ..self
            },
        }
    }

    fn steer(self, command: Command) -> Self {
        match command.heading {
            Heading::Forward => Self {
                horizontal: self.horizontal + command.distance,
                depth: self.depth + self.aim * command.distance,
                ..self
            },
            Heading::Down => Self {
                aim: self.aim + command.distance,
                ..self
            },
            Heading::Up => Self {
                aim: self.aim - command.distance,
                ..self
            },
        }
    }
}

fn parse_heading(input: &str) -> IResult<&str, Heading, ErrorTree<&str>> {
    alt((
        tag("forward").value(Heading::Forward),
        tag("down").value(Heading::Down),
        tag("up").value(Heading::Up),
    ))
    .context("heading")
    .parse(input)
}

fn parse_command(input: &str) -> IResult<&str, Command, ErrorTree<&str>> {
    parse_heading
        .terminated(space1)
        .and(digit1.parse_from_str().context("distance"))
        .map(|(heading, distance)| Command { heading, distance })
        .context("command")
        .parse(input)
}

fn parse_course(input: &str) -> IResult<&str, Vec<Command>, ErrorTree<&str>> {
    collect_separated_terminated(parse_command, multispace1, multispace0.all_consuming())
        .parse(input)
}

fn final_parse_course(input: &str) -> Result<Vec<Command>, ErrorTree<final_parser::Location>> {
    final_parser(parse_course)(input)
}

fn solve(input: &str, apply: impl Fn(Position, Command) -> Position) -> anyhow::Result<i64> {
    let course = final_parse_course(input).context("failed to parse course")?;

    let end = course.into_iter().fold(Position::default(), apply);
    Ok(end.horizontal * end.depth)
}

pub fn part1(input: &str) -> anyhow::Result<i64> {
    solve(input, Position::drive)
}

pub fn part2(input: &str) -> anyhow::Result<i64> {
    solve(input, Position::steer)
}
