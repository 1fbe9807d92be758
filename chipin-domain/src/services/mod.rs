pub mod settlement_calculator;

pub use settlement_calculator::{EmptyRosterError, SettlementCalculator};
