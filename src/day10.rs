use anyhow::{bail, Context};
use enum_map::{enum_map, Enum, EnumMap};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
enum Delimiter {
    Paren,
    Square,
    Curly,
    Angle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Open(Delimiter),
    Close(Delimiter),
}

fn tokenize(c: char) -> anyhow::Result<Token> {
    Ok(match c {
        '(' => Token::Open(Delimiter::Paren),
        ')' => Token::Close(Delimiter::Paren),
        '[' => Token::Open(Delimiter::Square),
        ']' => Token::Close(Delimiter::Square),
        '{' => Token::Open(Delimiter::Curly),
        '}' => Token::Close(Delimiter::Curly),
        '<' => Token::Open(Delimiter::Angle),
        '>' => Token::Close(Delimiter::Angle),
        c => bail!("unrecognized character {:?} in navigation line", c),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCheck {
    /// The first closing delimiter that didn't match its opener
    Corrupted(Delimiter),

    /// The unclosed openers, bottom of the stack first
    Incomplete(Vec<Delimiter>),
}

fn check_line(line: &str) -> anyhow::Result<LineCheck> {
    let mut stack = Vec::new();

    for c in line.chars() {
        match tokenize(c)? {
            Token::Open(delimiter) => stack.push(delimiter),
            Token::Close(delimiter) => match stack.pop() {
                Some(top) if top == delimiter => {}
                _ => return Ok(LineCheck::Corrupted(delimiter)),
            },
        }
    }

    Ok(LineCheck::Incomplete(stack))
}

pub fn part1(input: &str) -> anyhow::Result<u64> {
    let penalties: EnumMap<Delimiter, u64> = enum_map! {
        Delimiter::Paren => 3,
        Delimiter::Square => 57,
        Delimiter::Curly => 1197,
        Delimiter::Angle => 25137,
    };

    input
        .lines()
        .map(|line| {
            check_line(line).map(|check| match check {
                LineCheck::Corrupted(delimiter) => penalties[delimiter],
                LineCheck::Incomplete(_) => 0,
            })
        })
        .sum()
}

pub fn part2(input: &str) -> anyhow::Result<u64> {
    let points: EnumMap<Delimiter, u64> = enum_map! {
        Delimiter::Paren => 1,
        Delimiter::Square => 2,
        Delimiter::Curly => 3,
        Delimiter::Angle => 4,
    };

    let mut scores: Vec<u64> = input
        .lines()
        .map(check_line)
        .filter_map_ok(|check| match check {
            LineCheck::Incomplete(stack) => Some(
                stack
                    .iter()
                    .rev()
                    .fold(0, |score, &delimiter| score * 5 + points[delimiter]),
            ),
            LineCheck::Corrupted(_) => None,
        })
        .try_collect()?;

    scores.sort_unstable();

    scores
        .get(scores.len() / 2)
        .copied()
        .context("no incomplete lines in input")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "[({(<(())[]>[[{[]{<()<>>\n[(()[<>])]({[<{<<[]>>(\n{([(<{}[<>[]}>{[]{[(<()>\n(((({<>}<{<{<>}{[]{[]{}\n[[<[([]))<([[{}[[()]]]\n[{[{({}]{}}([{[{{{}}([]\n{<[[]]>}<{[{[{[]{()[[[]\n[<(<(<(<{}))><([]([]()\n<{([([[(<>()){}]>(<<{{\n<{([{{}}[<[[[<>{}]]]>[]]";

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 26397);
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 288957);
    }

    #[test]
    fn test_corrupted_line_reports_first_mismatch() {
        let check = check_line("{([(<{}[<>[]}>{[]{[(<()>").unwrap();
        assert_eq!(check, LineCheck::Corrupted(Delimiter::Curly));
    }

    #[test]
    fn test_matched_line_has_empty_completion() {
        let check = check_line("([<>]{})").unwrap();
        assert_eq!(check, LineCheck::Incomplete(vec![]));
    }

    #[test]
    fn test_unrecognized_character_is_fatal() {
        assert!(part1("(x)").is_err());
    }
}
