#![warn(clippy::uninlined_format_args)]

use std::{
    env,
    io::{self, BufRead, Write},
    process,
};

use chipin_application::{Command, CommandParseError, CommandParser, Session, SessionError};
use chipin_infrastructure::ReplCommandParser;
use chipin_presentation::{help_text, ColorMode, RosterPresenter, SettlementPresenter};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let parser = ReplCommandParser;
    let mut session = Session::new();
    let roster_presenter = RosterPresenter::new(color_mode());

    println!("chipin - split a shared expense evenly. Type `help` for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("chipin> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parser.parse(&line) {
            Ok(command) => command,
            Err(CommandParseError::EmptyInput) => continue,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", help_text()),
            other => match execute(&mut session, &roster_presenter, other) {
                Ok(output) => print!("{output}"),
                Err(err) => println!("error: {err}"),
            },
        }
    }

    Ok(())
}

fn execute(
    session: &mut Session,
    roster_presenter: &RosterPresenter,
    command: Command<'_>,
) -> Result<String, SessionError> {
    match command {
        Command::Add { name } => {
            session.add_participant(name)?;
            Ok(roster_presenter.render(session.roster()))
        }
        Command::SetAmount { index, text } => {
            session.set_amount_text(index, text)?;
            Ok(roster_presenter.render(session.roster()))
        }
        Command::Rename { index, name } => {
            session.rename_participant(index, name)?;
            Ok(roster_presenter.render(session.roster()))
        }
        Command::Remove { index } => {
            let removed = session.remove_participant(index)?;
            Ok(format!(
                "removed {}\n{}",
                removed.name,
                roster_presenter.render(session.roster())
            ))
        }
        Command::List => Ok(roster_presenter.render(session.roster())),
        Command::Split => {
            let result = session.settle()?;
            Ok(SettlementPresenter::render(&result, session.roster()))
        }
        Command::Reset => {
            session.reset();
            Ok(String::from("roster cleared\n"))
        }
        // Handled by the loop before dispatch.
        Command::Help | Command::Quit => Ok(String::new()),
    }
}

fn color_mode() -> ColorMode {
    if env::var_os("NO_COLOR").is_some() {
        ColorMode::Plain
    } else {
        ColorMode::Ansi
    }
}
