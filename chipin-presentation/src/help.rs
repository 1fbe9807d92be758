const HELP_TEXT: &str = "\
Commands:
  add <name>              add a participant
  amount <index> <text>   record how much a participant paid
  rename <index> <name>   rename a participant
  remove <index>          remove a participant
  list                    show the roster
  split                   compute the settlement (alias: calc)
  reset                   clear the roster
  help                    show this help
  quit                    exit (alias: exit)";

pub fn help_text() -> &'static str {
    HELP_TEXT
}
