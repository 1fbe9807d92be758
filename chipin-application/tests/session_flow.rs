use chipin_application::{Command, CommandParser, Session, SessionError};
use chipin_domain::{Amount, EmptyRosterError};
use chipin_infrastructure::ReplCommandParser;
use rstest::{fixture, rstest};

#[fixture]
fn session() -> Session {
    Session::new()
}

fn amount(text: &str) -> Amount {
    Amount::parse_lenient(text)
}

#[rstest]
fn add_amount_settle_flow(mut session: Session) {
    let a = session.add_participant("A").unwrap();
    let b = session.add_participant("B").unwrap();
    let c = session.add_participant("C").unwrap();
    session.set_amount_text(0, "300").unwrap();
    session.set_amount_text(1, "300").unwrap();
    session.set_amount_text(2, "0").unwrap();

    let result = session.settle().unwrap();

    assert_eq!(result.average_share, amount("200"));
    assert_eq!(result.transfers.len(), 2);
    assert_eq!((result.transfers[0].from, result.transfers[0].to), (c, a));
    assert_eq!(result.transfers[0].amount, amount("100"));
    assert_eq!((result.transfers[1].from, result.transfers[1].to), (c, b));
    assert_eq!(result.transfers[1].amount, amount("100"));

    // C's transfers add up to exactly their shortfall.
    let transferred = result
        .transfers
        .iter()
        .fold(Amount::zero(), |acc, transfer| acc + transfer.amount);
    assert_eq!(transferred, amount("200"));

    assert_eq!(session.last_result(), Some(&result));
}

#[rstest]
fn settling_an_empty_roster_fails(mut session: Session) {
    assert_eq!(
        session.settle(),
        Err(SessionError::EmptyRoster(EmptyRosterError))
    );
    assert_eq!(session.last_result(), None);
}

#[rstest]
fn single_participant_settles_without_transfers(mut session: Session) {
    session.add_participant("A").unwrap();

    let result = session.settle().unwrap();

    assert_eq!(result.average_share, amount("0"));
    assert!(result.transfers.is_empty());
}

#[rstest]
fn blank_names_are_rejected(mut session: Session) {
    assert_eq!(session.add_participant("   "), Err(SessionError::BlankName));

    session.add_participant("Alice").unwrap();
    assert_eq!(
        session.rename_participant(0, ""),
        Err(SessionError::BlankName)
    );
}

#[rstest]
fn names_are_trimmed_on_entry(mut session: Session) {
    session.add_participant("  Alice  ").unwrap();
    assert_eq!(session.roster().get(0).unwrap().name, "Alice");

    session.rename_participant(0, "  Bob ").unwrap();
    assert_eq!(session.roster().get(0).unwrap().name, "Bob");
}

#[rstest]
fn out_of_range_indices_report_roster_size(mut session: Session) {
    session.add_participant("Alice").unwrap();

    assert_eq!(
        session.set_amount_text(3, "10"),
        Err(SessionError::IndexOutOfRange { index: 3, len: 1 })
    );
    assert_eq!(
        session.remove_participant(3),
        Err(SessionError::IndexOutOfRange { index: 3, len: 1 })
    );
}

#[rstest]
fn removal_invalidates_the_cached_result(mut session: Session) {
    session.add_participant("A").unwrap();
    session.add_participant("B").unwrap();
    session.set_amount_text(0, "100").unwrap();
    session.settle().unwrap();
    assert!(session.last_result().is_some());

    let removed = session.remove_participant(0).unwrap();
    assert_eq!(removed.name, "A");
    assert_eq!(session.last_result(), None);
}

#[rstest]
fn rejected_mutations_keep_the_cached_result(mut session: Session) {
    session.add_participant("A").unwrap();
    session.add_participant("B").unwrap();
    session.set_amount_text(0, "100").unwrap();
    let result = session.settle().unwrap();

    assert!(session.remove_participant(7).is_err());
    assert!(session.set_amount_text(7, "10").is_err());
    assert!(session.rename_participant(7, "nobody").is_err());

    assert_eq!(session.last_result(), Some(&result));
}

#[rstest]
fn unparsable_amount_text_settles_as_zero(mut session: Session) {
    session.add_participant("A").unwrap();
    session.add_participant("B").unwrap();
    session.set_amount_text(0, "not a number").unwrap();
    session.set_amount_text(1, "50").unwrap();

    let result = session.settle().unwrap();

    assert_eq!(result.average_share, amount("25"));
    assert_eq!(result.transfers.len(), 1);
    assert_eq!(result.transfers[0].amount, amount("25"));
}

#[rstest]
fn reset_discards_roster_and_result(mut session: Session) {
    session.add_participant("A").unwrap();
    session.settle().unwrap();

    session.reset();

    assert!(session.roster().is_empty());
    assert_eq!(session.last_result(), None);
}

#[rstest]
fn parsed_commands_drive_the_session(mut session: Session) {
    let parser = ReplCommandParser;
    for line in [
        "add Alice",
        "add Bob",
        "amount 0 90",
        "amount 1 30",
        "rename 1 Robert",
    ] {
        match parser.parse(line).unwrap() {
            Command::Add { name } => {
                session.add_participant(name).unwrap();
            }
            Command::SetAmount { index, text } => {
                session.set_amount_text(index, text).unwrap();
            }
            Command::Rename { index, name } => {
                session.rename_participant(index, name).unwrap();
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    assert_eq!(parser.parse("split").unwrap(), Command::Split);
    let result = session.settle().unwrap();

    assert_eq!(result.average_share, amount("60"));
    assert_eq!(result.transfers.len(), 1);
    assert_eq!(
        session.roster().name_of(result.transfers[0].from),
        Some("Robert")
    );
    assert_eq!(
        session.roster().name_of(result.transfers[0].to),
        Some("Alice")
    );
    assert_eq!(result.transfers[0].amount, amount("30"));
}
