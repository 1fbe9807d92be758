use crate::error::SessionError;
use chipin_domain::{
    Participant, ParticipantId, Roster, SettlementCalculator, SettlementResult,
};

/// In-memory state of one interactive run: the roster being edited and
/// the most recent settlement, if any.
///
/// Exclusively owned by the calling loop, so a calculation can never
/// interleave with a roster mutation. Every successful mutation drops the
/// cached result; a rejected one leaves it in place. `settle` derives a
/// fresh one.
pub struct Session {
    roster: Roster,
    calculator: SettlementCalculator,
    last_result: Option<SettlementResult>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            calculator: SettlementCalculator,
            last_result: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn last_result(&self) -> Option<&SettlementResult> {
        self.last_result.as_ref()
    }

    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::BlankName);
        }
        self.last_result = None;
        Ok(self.roster.add(name))
    }

    pub fn remove_participant(&mut self, index: usize) -> Result<Participant, SessionError> {
        let len = self.roster.len();
        let removed = self
            .roster
            .remove(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;
        self.last_result = None;
        Ok(removed)
    }

    pub fn rename_participant(&mut self, index: usize, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::BlankName);
        }
        if self.roster.rename(index, name) {
            self.last_result = None;
            Ok(())
        } else {
            Err(SessionError::IndexOutOfRange {
                index,
                len: self.roster.len(),
            })
        }
    }

    pub fn set_amount_text(&mut self, index: usize, text: &str) -> Result<(), SessionError> {
        if self.roster.set_amount_text(index, text) {
            self.last_result = None;
            Ok(())
        } else {
            Err(SessionError::IndexOutOfRange {
                index,
                len: self.roster.len(),
            })
        }
    }

    /// Runs the settlement calculation over the current roster and caches
    /// the outcome. Fails on an empty roster.
    pub fn settle(&mut self) -> Result<SettlementResult, SessionError> {
        let result = self.calculator.calculate(&self.roster)?;
        tracing::debug!(transfers = result.transfers.len(), "settlement computed");
        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Discards the roster and any previously computed settlement.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.last_result = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
