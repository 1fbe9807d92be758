#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Amount, DisplayColor, Participant, ParticipantId, Roster, SettlementResult, Transfer,
};
pub use services::{EmptyRosterError, SettlementCalculator};
