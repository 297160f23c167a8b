//! Group administrator.

use crate::{Country, EyeColor, ValidationError};
use chrono::{DateTime, Utc};
use std::fmt;

/// Administrator of a study group.
///
/// Name and birthday are required; eye color and nationality are
/// optional. Construction validates the name, trimming surrounding
/// whitespace.
///
/// # Example
///
/// ```
/// use roster_model::Person;
/// use chrono::{TimeZone, Utc};
///
/// let admin = Person::new("Alice", Utc.timestamp_millis_opt(0).unwrap(), None, None).unwrap();
/// assert_eq!(admin.name(), "Alice");
/// assert!(Person::new("  ", Utc::now(), None, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    birthday: DateTime<Utc>,
    eye_color: Option<EyeColor>,
    nationality: Option<Country>,
}

impl Person {
    /// Creates a validated administrator.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPersonName`] if the name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        birthday: DateTime<Utc>,
        eye_color: Option<EyeColor>,
        nationality: Option<Country>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyPersonName);
        }
        Ok(Self {
            name,
            birthday,
            eye_color,
            nationality,
        })
    }

    /// Administrator name; never empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date of birth.
    #[must_use]
    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    /// Eye color, if recorded.
    #[must_use]
    pub fn eye_color(&self) -> Option<EyeColor> {
        self.eye_color
    }

    /// Nationality, if recorded.
    #[must_use]
    pub fn nationality(&self) -> Option<Country> {
        self.nationality
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (born {})", self.name, self.birthday.format("%Y-%m-%d"))
    }
}
