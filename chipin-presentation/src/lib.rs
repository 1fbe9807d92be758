#![warn(clippy::uninlined_format_args)]

pub mod help;
pub mod roster_presenter;
pub mod settlement_presenter;

pub use help::help_text;
pub use roster_presenter::{ColorMode, RosterPresenter};
pub use settlement_presenter::SettlementPresenter;
