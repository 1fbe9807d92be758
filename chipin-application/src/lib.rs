#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod session;

pub use error::{CommandParseError, SessionError};
pub use model::Command;
pub use ports::CommandParser;
pub use session::Session;
