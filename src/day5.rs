use anyhow::Context;
use gridly::prelude::*;
use gridly_grids::SparseGrid;
use nom::{
    character::complete::{char, digit1, multispace0, multispace1, space0},
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
struct Vent {
    start: Location,
    end: Location,
}

impl Vent {
    fn is_axis_aligned(&self) -> bool {
        self.start.row == self.end.row || self.start.column == self.end.column
    }

    /// Every cell the vent covers, endpoints included, in unit steps
    fn points(&self) -> impl Iterator<Item = Location> {
        let span = self.end - self.start;
        let step = Vector {
            rows: span.rows.clamp(Rows(-1), Rows(1)),
            columns: span.columns.clamp(Columns(-1), Columns(1)),
        };
        let length = span.rows.0.abs().max(span.columns.0.abs());
        let start = self.start;

        (0..=length).map(move |i| start + step * i)
    }
}

fn parse_point(input: &str) -> IResult<&str, Location, ErrorTree<&str>> {
    digit1
        .parse_from_str()
        .separated_array(char(','))
        .map(|[x, y]: [isize; 2]| Row(y) + Column(x))
        .parse(input)
}

fn parse_vent(input: &str) -> IResult<&str, Vent, ErrorTree<&str>> {
    parse_point
        .separated_array(tag("->").delimited_by(space0))
        .map(|[start, end]| Vent { start, end })
        .parse(input)
}

fn parse_vent_field(input: &str) -> IResult<&str, Vec<Vent>, ErrorTree<&str>> {
    collect_separated_terminated(parse_vent, multispace1, multispace0.all_consuming()).parse(input)
}

fn final_parse_vent_field(input: &str) -> Result<Vec<Vent>, ErrorTree<final_parser::Location>> {
    final_parser(parse_vent_field)(input)
}

fn solve(input: &str, keep: impl Fn(&Vent) -> bool) -> anyhow::Result<usize> {
    let vents = final_parse_vent_field(input).context("failed to parse vents")?;

    let zero = Vector {
        rows: Rows(0),
        columns: Columns(0),
    };

    let dimensions = vents
        .iter()
        .flat_map(|vent| [vent.start, vent.end])
        .fold(zero, |span, loc| Vector {
            rows: span.rows.max(Rows(loc.row.0 + 1)),
            columns: span.columns.max(Columns(loc.column.0 + 1)),
        });

    let mut overlaps: SparseGrid<i32> = SparseGrid::new(dimensions);

    for vent in vents.iter().filter(|&vent| keep(vent)) {
        for point in vent.points() {
            *overlaps
                .get_mut(point)
                .ok()
                .context("vent outside the mapped area")? += 1;
        }
    }

    Ok(overlaps
        .occupied_entries()
        .filter(|&(_, &count)| count > 1)
        .count())
}

pub fn part1(input: &str) -> anyhow::Result<usize> {
    solve(input, Vent::is_axis_aligned)
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    solve(input, |_| true)
}
