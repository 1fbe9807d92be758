use chipin_domain::EmptyRosterError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("nothing to do; `help` lists the commands")]
    EmptyInput,
    #[error("unknown command `{word}`; `help` lists the commands")]
    UnknownCommand { word: String },
    #[error("bad arguments for `{command}`; `help` shows the expected form")]
    InvalidArguments { command: String },
    #[error("unexpected trailing input `{rest}`")]
    TrailingInput { rest: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    EmptyRoster(#[from] EmptyRosterError),
    #[error("no participant at index {index}; the roster has {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("participant names cannot be blank")]
    BlankName,
}
