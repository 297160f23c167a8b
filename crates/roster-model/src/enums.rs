//! Closed token enums used by the record fields.
//!
//! Each enum carries a fixed token set matching the persisted format.
//! Parsing is case-insensitive; the canonical written form is the
//! upper-case token returned by `as_str`.

use crate::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Study semester, ordered FIRST through EIGHTH.
///
/// The ordinal ordering backs the `filter_greater_than_semester_enum`
/// command: declaration order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Semester {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Semester {
    /// All semesters in ordinal order.
    pub const ALL: [Semester; 8] = [
        Semester::First,
        Semester::Second,
        Semester::Third,
        Semester::Fourth,
        Semester::Fifth,
        Semester::Sixth,
        Semester::Seventh,
        Semester::Eighth,
    ];

    /// Canonical token for this semester.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Semester::First => "FIRST",
            Semester::Second => "SECOND",
            Semester::Third => "THIRD",
            Semester::Fourth => "FOURTH",
            Semester::Fifth => "FIFTH",
            Semester::Sixth => "SIXTH",
            Semester::Seventh => "SEVENTH",
            Semester::Eighth => "EIGHTH",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semester {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|sem| sem.as_str() == token)
            .ok_or_else(|| ValidationError::UnknownSemester(s.to_string()))
    }
}

/// Administrator eye color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeColor {
    Black,
    Blue,
    Orange,
    White,
    Green,
    Brown,
}

impl EyeColor {
    /// All eye colors.
    pub const ALL: [EyeColor; 6] = [
        EyeColor::Black,
        EyeColor::Blue,
        EyeColor::Orange,
        EyeColor::White,
        EyeColor::Green,
        EyeColor::Brown,
    ];

    /// Canonical token for this color.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EyeColor::Black => "BLACK",
            EyeColor::Blue => "BLUE",
            EyeColor::Orange => "ORANGE",
            EyeColor::White => "WHITE",
            EyeColor::Green => "GREEN",
            EyeColor::Brown => "BROWN",
        }
    }
}

impl fmt::Display for EyeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EyeColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == token)
            .ok_or_else(|| ValidationError::UnknownEyeColor(s.to_string()))
    }
}

/// Administrator nationality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Russia,
    Germany,
    Usa,
    Spain,
}

impl Country {
    /// All countries.
    pub const ALL: [Country; 4] = [
        Country::Russia,
        Country::Germany,
        Country::Usa,
        Country::Spain,
    ];

    /// Canonical token for this country.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Country::Russia => "RUSSIA",
            Country::Germany => "GERMANY",
            Country::Usa => "USA",
            Country::Spain => "SPAIN",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|country| country.as_str() == token)
            .ok_or_else(|| ValidationError::UnknownCountry(s.to_string()))
    }
}
