use chipin_application::{Command, CommandParseError, CommandParser};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{multispace1, u64},
    combinator::{eof, map, opt, peek, rest, verify},
    sequence::{preceded, terminated},
    IResult, Parser,
};

/// Keywords recognized as the first word of a line. A failed parse that
/// starts with one of these reports bad arguments instead of an unknown
/// command.
const KEYWORDS: &[&str] = &[
    "add", "amount", "rename", "remove", "list", "split", "calc", "reset", "help", "quit", "exit",
];

pub struct ReplCommandParser;

impl CommandParser for ReplCommandParser {
    fn parse<'a>(&self, input: &'a str) -> Result<Command<'a>, CommandParseError> {
        parse_command(input)
    }
}

pub fn parse_command(input: &str) -> Result<Command<'_>, CommandParseError> {
    let line = input.trim();
    if line.is_empty() {
        return Err(CommandParseError::EmptyInput);
    }

    match command(line) {
        Ok((remaining, parsed)) if remaining.trim().is_empty() => Ok(parsed),
        Ok((remaining, _)) => Err(CommandParseError::TrailingInput {
            rest: remaining.trim().to_string(),
        }),
        Err(_) => {
            let word = line
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase();
            if KEYWORDS.contains(&word.as_str()) {
                Err(CommandParseError::InvalidArguments { command: word })
            } else {
                Err(CommandParseError::UnknownCommand { word })
            }
        }
    }
}

fn command(input: &str) -> IResult<&str, Command<'_>> {
    alt((
        add_command,
        amount_command,
        rename_command,
        remove_command,
        list_command,
        split_command,
        reset_command,
        help_command,
        quit_command,
    ))
    .parse(input)
}

fn add_command(input: &str) -> IResult<&str, Command<'_>> {
    (tag_no_case("add"), multispace1, name_arg)
        .map(|(_, _, name)| Command::Add { name })
        .parse(input)
}

fn amount_command(input: &str) -> IResult<&str, Command<'_>> {
    (tag_no_case("amount"), multispace1, index_arg, amount_text)
        .map(|(_, _, index, text)| Command::SetAmount { index, text })
        .parse(input)
}

fn rename_command(input: &str) -> IResult<&str, Command<'_>> {
    (
        tag_no_case("rename"),
        multispace1,
        index_arg,
        multispace1,
        name_arg,
    )
        .map(|(_, _, index, _, name)| Command::Rename { index, name })
        .parse(input)
}

fn remove_command(input: &str) -> IResult<&str, Command<'_>> {
    (tag_no_case("remove"), multispace1, index_arg)
        .map(|(_, _, index)| Command::Remove { index })
        .parse(input)
}

fn list_command(input: &str) -> IResult<&str, Command<'_>> {
    map(tag_no_case("list"), |_| Command::List).parse(input)
}

fn split_command(input: &str) -> IResult<&str, Command<'_>> {
    map(alt((tag_no_case("split"), tag_no_case("calc"))), |_| {
        Command::Split
    })
    .parse(input)
}

fn reset_command(input: &str) -> IResult<&str, Command<'_>> {
    map(tag_no_case("reset"), |_| Command::Reset).parse(input)
}

fn help_command(input: &str) -> IResult<&str, Command<'_>> {
    map(tag_no_case("help"), |_| Command::Help).parse(input)
}

fn quit_command(input: &str) -> IResult<&str, Command<'_>> {
    map(alt((tag_no_case("quit"), tag_no_case("exit"))), |_| {
        Command::Quit
    })
    .parse(input)
}

// An index must stand alone: `amount 2x` is a malformed argument, not
// an index followed by amount text.
fn index_arg(input: &str) -> IResult<&str, usize> {
    map(terminated(u64, peek(alt((multispace1, eof)))), |value| {
        value as usize
    })
    .parse(input)
}

// The rest of the line, trimmed; names must be non-empty but may
// contain spaces.
fn name_arg(input: &str) -> IResult<&str, &str> {
    verify(map(rest, str::trim), |name: &str| !name.is_empty()).parse(input)
}

// Amount text is free-form and optional; it is parsed leniently only
// when a settlement runs.
fn amount_text(input: &str) -> IResult<&str, &str> {
    map(opt(preceded(multispace1, map(rest, str::trim))), |text| {
        text.unwrap_or("")
    })
    .parse(input)
}
