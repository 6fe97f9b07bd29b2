use std::{collections::BinaryHeap, iter};

use anyhow::Context;
use gridly::prelude::*;
use gridly_grids::VecGrid;
use itertools::Itertools;
use pathfinding::directed::bfs::bfs_reach;

fn parse_heightmap(input: &str) -> anyhow::Result<VecGrid<i32>> {
    let rows: Vec<Vec<i32>> = input
        .lines()
        .map(|line| {
            line.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|digit| digit as i32)
                        .with_context(|| format!("invalid height {:?}", c))
                })
                .try_collect()
        })
        .try_collect()?;

    VecGrid::new_from_rows(rows).context("inconsistent row length")
}

fn low_points(grid: &VecGrid<i32>) -> impl Iterator<Item = (Location, i32)> + '_ {
    grid.rows()
        .iter()
        .flat_map(|row| row.iter_with_locations())
        .filter(move |&(loc, &cell)| {
            EACH_DIRECTION
                .iter()
                .map(|&direction| loc + direction)
                .filter_map(|neighbor| grid.get(neighbor).ok())
                .all(|&neighbor| neighbor > cell)
        })
        .map(|(loc, &cell)| (loc, cell))
}

pub fn part1(input: &str) -> anyhow::Result<i32> {
    let grid = parse_heightmap(input)?;

    Ok(low_points(&grid).map(|(_, height)| height + 1).sum())
}

// a basin climbs uphill from its low point, stopping at cells of height 9
fn basin_size(grid: &VecGrid<i32>, low_point: Location) -> usize {
    bfs_reach(low_point, |&loc| {
        let height = *grid.get(loc).unwrap();

        EACH_DIRECTION
            .iter()
            .map(move |&direction| loc + direction)
            .filter(|&neighbor| {
                grid.get(neighbor)
                    .map(|&cell| cell != 9 && cell > height)
                    .unwrap_or(false)
            })
            .collect_vec()
    })
    .count()
}

pub fn part2(input: &str) -> anyhow::Result<usize> {
    let grid = parse_heightmap(input)?;

    let mut sizes: BinaryHeap<usize> = low_points(&grid)
        .map(|(loc, _)| basin_size(&grid, loc))
        .collect();

    Ok(iter::from_fn(|| sizes.pop()).take(3).product())
}
