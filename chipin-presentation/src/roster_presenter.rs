use chipin_domain::{Participant, Roster};
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Truecolor ANSI escapes around each participant's name.
    Ansi,
    /// No escapes; for tests and terminals without color support.
    Plain,
}

pub struct RosterPresenter {
    color_mode: ColorMode,
}

impl RosterPresenter {
    pub fn new(color_mode: ColorMode) -> Self {
        Self { color_mode }
    }

    pub fn render(&self, roster: &Roster) -> String {
        if roster.is_empty() {
            return String::from("(no participants yet)\n");
        }

        let mut out = String::new();
        for (index, participant) in roster.participants().enumerate() {
            let _ = writeln!(
                out,
                "[{index}] {}  {}",
                self.label(participant),
                participant.amount_text
            );
        }
        out
    }

    fn label(&self, participant: &Participant) -> String {
        match self.color_mode {
            ColorMode::Plain => participant.name.clone(),
            ColorMode::Ansi => {
                let color = participant.color;
                format!(
                    "\x1b[38;2;{};{};{}m{}\x1b[0m",
                    color.r, color.g, color.b, participant.name
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn roster_of(entries: &[(&str, &str)]) -> Roster {
        let mut roster = Roster::new();
        for (index, (name, amount)) in entries.iter().enumerate() {
            roster.add(*name);
            roster.set_amount_text(index, *amount);
        }
        roster
    }

    #[rstest]
    #[case::empty(&[], "(no participants yet)\n")]
    #[case::single(&[("Alice", "300")], "[0] Alice  300\n")]
    #[case::keeps_roster_order(
        &[("Alice", "300"), ("Bob", "0")],
        "[0] Alice  300\n[1] Bob  0\n"
    )]
    #[case::shows_raw_amount_text(
        &[("Alice", "not sure yet")],
        "[0] Alice  not sure yet\n"
    )]
    fn plain_mode_render_cases(#[case] entries: &[(&str, &str)], #[case] expected: &str) {
        let presenter = RosterPresenter::new(ColorMode::Plain);
        assert_eq!(presenter.render(&roster_of(entries)), expected);
    }

    #[test]
    fn ansi_mode_wraps_names_in_truecolor_escapes() {
        let mut roster = Roster::new();
        roster.add("Alice");
        let color = roster.get(0).unwrap().color;

        let presenter = RosterPresenter::new(ColorMode::Ansi);
        let expected = format!(
            "[0] \x1b[38;2;{};{};{}mAlice\x1b[0m  0\n",
            color.r, color.g, color.b
        );
        assert_eq!(presenter.render(&roster), expected);
    }
}
