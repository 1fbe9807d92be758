/// One line of user input, parsed. Index arguments refer to the current
/// display order of the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Add { name: &'a str },
    SetAmount { index: usize, text: &'a str },
    Rename { index: usize, name: &'a str },
    Remove { index: usize },
    List,
    Split,
    Reset,
    Help,
    Quit,
}
