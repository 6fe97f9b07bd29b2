mod day10;
mod day11;
mod day2;
mod day3;
mod day5;
mod day9;
mod library;

use std::{
    fs::File,
    io::{self, Read},
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use structopt::StructOpt;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DayError {
    #[error("Failed to parse day")]
    Parse(#[from] ParseIntError),

    #[error("there is no solution for day {0}")]
    Unsolved(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Day(u8);

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse()?;

        match value {
            2 | 3 | 5 | 9 | 10 | 11 => Ok(Day(value)),
            value => Err(DayError::Unsolved(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Part1,
    Part2,
}

#[derive(Debug, Clone, Error)]
pub enum PartError {
    #[error("Failed to parse part")]
    Parse(#[from] ParseIntError),

    #[error("{0} is not an Advent Puzzle Part; must be 1 or 2")]
    BadPart(u8),
}

impl FromStr for Part {
    type Err = PartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse()?;

        match value {
            1 => Ok(Part::Part1),
            2 => Ok(Part::Part2),
            value => Err(PartError::BadPart(value)),
        }
    }
}

#[derive(StructOpt)]
struct Args {
    /// The advent of code day to solve
    #[structopt(short, long)]
    day: Day,

    /// Which part of the day to solve; both parts run when omitted
    #[structopt(short, long)]
    part: Option<Part>,

    /// If given, read input from this file
    #[structopt(short, long, conflicts_with = "string")]
    file: Option<PathBuf>,

    /// If given, use this as the puzzle input directly
    #[structopt(short, long, conflicts_with = "file")]
    string: Option<String>,
}

fn solve_part(Day(day): Day, part: Part, input: &str) -> anyhow::Result<String> {
    match (day, part) {
        (2, Part::Part1) => day2::part1(input).map(|answer| answer.to_string()),
        (2, Part::Part2) => day2::part2(input).map(|answer| answer.to_string()),
        (3, Part::Part1) => day3::part1(input).map(|answer| answer.to_string()),
        (3, Part::Part2) => day3::part2(input).map(|answer| answer.to_string()),
        (5, Part::Part1) => day5::part1(input).map(|answer| answer.to_string()),
        (5, Part::Part2) => day5::part2(input).map(|answer| answer.to_string()),
        (9, Part::Part1) => day9::part1(input).map(|answer| answer.to_string()),
        (9, Part::Part2) => day9::part2(input).map(|answer| answer.to_string()),
        (10, Part::Part1) => day10::part1(input).map(|answer| answer.to_string()),
        (10, Part::Part2) => day10::part2(input).map(|answer| answer.to_string()),
        (11, Part::Part1) => day11::part1(input).map(|answer| answer.to_string()),
        (11, Part::Part2) => day11::part2(input).map(|answer| answer.to_string()),
        (day, _) => anyhow::bail!("there is no solution for day {}", day),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::from_args();

    let buf = match args.string {
        Some(buf) => buf,
        None => {
            let mut buf = String::new();
            match args.file {
                Some(file) => File::open(&file)
                    .with_context(|| format!("failed to open file: {:?}", file.display()))?
                    .read_to_string(&mut buf)
                    .context("failed to read puzzle input from file")?,
                None => io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read puzzle input from stdin")?,
            };
            buf
        }
    };

    match args.part {
        Some(part) => println!("{}", solve_part(args.day, part, &buf)?),
        None => {
            // the two parts share nothing but the input text, so they can
            // run as independent jobs
            let (first, second) = rayon::join(
                || solve_part(args.day, Part::Part1, &buf),
                || solve_part(args.day, Part::Part2, &buf),
            );

            println!("{}", first?);
            println!("{}", second?);
        }
    }

    Ok(())
}
