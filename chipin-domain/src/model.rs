use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};

/// Stable identifier assigned when a participant joins the roster.
///
/// Transfers reference participants by id, never by display name, so
/// renaming or duplicate names cannot make a settlement ambiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u64);

/// Decimal money value. Full precision internally; two decimal places
/// (half away from zero) for display and emitted transfer amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Parses free-form amount text. Unparsable, empty, or negative text
    /// normalizes to zero rather than erroring.
    pub fn parse_lenient(text: &str) -> Self {
        let value = Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO);
        if value.is_sign_negative() {
            Self(Decimal::ZERO)
        } else {
            Self(value)
        }
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn rounded(self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Cosmetic label color, picked at random when a participant is added and
/// fixed for their lifetime. Carries no identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    pub fn random() -> Self {
        let [r, g, b] = rand::random::<[u8; 3]>();
        Self { r, g, b }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One person's declared payment toward the shared expense.
///
/// The amount is stored as the raw text the user typed and only parsed
/// when a settlement runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub amount_text: String,
    pub color: DisplayColor,
}

impl Participant {
    pub fn amount_paid(&self) -> Amount {
        Amount::parse_lenient(&self.amount_text)
    }
}

/// Insertion-ordered roster of participants. Order is display-only.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    entries: IndexMap<ParticipantId, Participant>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.entries.values()
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.entries.get_index(index).map(|(_, participant)| participant)
    }

    pub fn by_id(&self, id: ParticipantId) -> Option<&Participant> {
        self.entries.get(&id)
    }

    pub fn name_of(&self, id: ParticipantId) -> Option<&str> {
        self.by_id(id).map(|participant| participant.name.as_str())
    }

    /// Adds a participant with amount text `"0"` and a freshly picked
    /// display color, returning the assigned id.
    pub fn add(&mut self, name: impl Into<String>) -> ParticipantId {
        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Participant {
                id,
                name: name.into(),
                amount_text: String::from("0"),
                color: DisplayColor::random(),
            },
        );
        id
    }

    /// Removes the participant at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Option<Participant> {
        self.entries
            .shift_remove_index(index)
            .map(|(_, participant)| participant)
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.entries.get_index_mut(index) {
            Some((_, participant)) => {
                participant.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_amount_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.entries.get_index_mut(index) {
            Some((_, participant)) => {
                participant.amount_text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        // The id counter is deliberately not reset; ids stay unique for
        // the lifetime of the roster value.
        self.entries.clear();
    }
}

/// Instruction for one pairwise repayment: `from` paid below the average
/// share, `to` above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Amount,
}

/// Outcome of one settlement run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementResult {
    /// Arithmetic mean of all declared payments, at full precision.
    /// Rounds to two decimals at display time.
    pub average_share: Amount,
    /// Transfers in emission order: grouped by debtor, creditors in
    /// roster encounter order.
    pub transfers: Vec<Transfer>,
}
