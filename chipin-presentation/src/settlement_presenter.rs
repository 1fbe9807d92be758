use chipin_domain::{ParticipantId, Roster, SettlementResult};
use fxhash::FxHashSet;
use std::{borrow::Cow, fmt::Write as _};

pub struct SettlementPresenter;

impl SettlementPresenter {
    /// Renders the average share and one `owes` line per transfer.
    ///
    /// Names come from the roster at render time. A name shared by more
    /// than one participant gets a `#<id>` suffix so the instructions
    /// stay unambiguous; a participant no longer on the roster renders
    /// as `participant #<id>`.
    pub fn render(result: &SettlementResult, roster: &Roster) -> String {
        let mut out = format!("Average share: {}\n", result.average_share);

        if result.transfers.is_empty() {
            out.push_str("Everyone is settled; no transfers needed.\n");
            return out;
        }

        let ambiguous = ambiguous_names(roster);
        for transfer in &result.transfers {
            let _ = writeln!(
                out,
                "{} owes {} {}",
                label(transfer.from, roster, &ambiguous),
                label(transfer.to, roster, &ambiguous),
                transfer.amount
            );
        }
        out
    }
}

fn ambiguous_names(roster: &Roster) -> FxHashSet<&str> {
    let mut seen = FxHashSet::default();
    let mut duplicated = FxHashSet::default();
    for participant in roster.participants() {
        if !seen.insert(participant.name.as_str()) {
            duplicated.insert(participant.name.as_str());
        }
    }
    duplicated
}

fn label<'a>(
    id: ParticipantId,
    roster: &'a Roster,
    ambiguous: &FxHashSet<&str>,
) -> Cow<'a, str> {
    match roster.name_of(id) {
        Some(name) if ambiguous.contains(name) => Cow::Owned(format!("{name}#{}", id.0)),
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("participant #{}", id.0)),
    }
}
