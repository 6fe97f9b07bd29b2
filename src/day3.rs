use anyhow::Context;
use itertools::Itertools;

use crate::library::StrExt;

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let reports = input.lines().collect_vec();
    let width = reports
        .first()
        .context("no diagnostic reports in input")?
        .len();

    let mut ones = vec![0usize; width];

    for report in &reports {
        for (slot, bit) in ones.iter_mut().zip(report.bytes()) {
            if bit == b'1' {
                *slot += 1;
            }
        }
    }

    let (gamma, epsilon): (String, String) = ones
        .iter()
        .map(|&count| count >= reports.len() - count)
        .map(|most_are_ones| if most_are_ones { ('1', '0') } else { ('0', '1') })
        .unzip();

    let gamma: u64 = gamma.parse_radix(2).context("failed to parse gamma rate")?;
    let epsilon: u64 = epsilon
        .parse_radix(2)
        .context("failed to parse epsilon rate")?;

    Ok(gamma * epsilon)
}

/// keep_ones is given (zero_count, one_count) for the current column
fn locate_rating<'a>(
    mut candidates: Vec<&'a str>,
    keep_ones: impl Fn(usize, usize) -> bool,
) -> Option<&'a str> {
    let width = candidates.first()?.len();

    for column in 0..width {
        if candidates.len() <= 1 {
            break;
        }

        let (ones, zeros): (Vec<&str>, Vec<&str>) = candidates
            .into_iter()
            .partition(|report| report.as_bytes().get(column) == Some(&b'1'));

        candidates = if keep_ones(zeros.len(), ones.len()) {
            ones
        } else {
            zeros
        };
    }

    candidates.into_iter().exactly_one().ok()
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    let reports = input.lines().collect_vec();

    let oxygen: u64 = locate_rating(reports.clone(), |zeros, ones| ones >= zeros)
        .context("no oxygen generator rating found")?
        .parse_radix(2)
        .context("failed to parse oxygen generator rating")?;

    let co2: u64 = locate_rating(reports, |zeros, ones| zeros > ones)
        .context("no co2 scrubber rating found")?
        .parse_radix(2)
        .context("failed to parse co2 scrubber rating")?;

    Ok(oxygen * co2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str =
        "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010";

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 198);
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 230);
    }

    #[test]
    fn test_locate_rating_keeps_filtering_until_one_remains() {
        let survivor = locate_rating(vec!["10", "11", "01"], |zeros, ones| ones >= zeros);
        assert_eq!(survivor, Some("11"));
    }
}
