//! Greedy settlement of a roster against its average share.
//!
//! Each participant's declared payment is compared with the arithmetic
//! mean; whoever paid less owes the shortfall, whoever paid more is owed
//! the surplus. Debtors are walked in roster order and each one settles
//! greedily against the creditors in roster order. The walk covers every
//! deficit because total deficit equals total surplus by construction of
//! the average; it does not minimize the number of transfers.

use crate::model::{Amount, ParticipantId, Roster, SettlementResult, Transfer};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot settle an empty roster")]
pub struct EmptyRosterError;

/// Settlement calculation service.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Computes the average share and the transfers that bring every
    /// participant to it.
    ///
    /// Pure with respect to the roster; amount text is parsed leniently
    /// at this point (unparsable or negative text counts as zero).
    pub fn calculate(&self, roster: &Roster) -> Result<SettlementResult, EmptyRosterError> {
        if roster.is_empty() {
            return Err(EmptyRosterError);
        }

        // Division by the participant count can produce a repeating
        // decimal, so per-person deficits may miss exact zero by the
        // tail of Decimal's 28-digit precision.
        let epsilon = Decimal::new(1, 10);

        let paid: Vec<(ParticipantId, Decimal)> = roster
            .participants()
            .map(|participant| (participant.id, participant.amount_paid().as_decimal()))
            .collect();

        let total: Decimal = paid.iter().map(|&(_, amount)| amount).sum();
        let average = total / Decimal::from(paid.len() as u64);
        tracing::debug!(participants = paid.len(), %total, %average, "computed average share");

        let mut surpluses: Vec<(ParticipantId, Decimal)> = paid
            .iter()
            .filter(|&&(_, amount)| amount > average)
            .map(|&(id, amount)| (id, amount - average))
            .collect();

        let mut transfers = Vec::new();
        for &(debtor, amount) in &paid {
            let mut deficit = average - amount;
            if deficit <= epsilon {
                continue;
            }

            for (creditor, surplus) in &mut surpluses {
                if *surplus <= epsilon {
                    continue;
                }

                let step = deficit.min(*surplus);
                let rounded = round2(step);
                if !rounded.is_zero() {
                    transfers.push(Transfer {
                        from: debtor,
                        to: *creditor,
                        amount: Amount::from_decimal(rounded),
                    });
                }
                *surplus -= step;
                deficit -= step;

                if deficit <= epsilon {
                    break;
                }
            }
            debug_assert!(deficit <= epsilon);
        }

        Ok(SettlementResult {
            average_share: Amount::from_decimal(average),
            transfers,
        })
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
