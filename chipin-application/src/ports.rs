use crate::{error::CommandParseError, model::Command};

pub trait CommandParser: Send + Sync {
    fn parse<'a>(&self, input: &'a str) -> Result<Command<'a>, CommandParseError>;
}
