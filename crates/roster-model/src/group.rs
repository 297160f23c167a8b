//! The study-group record.

use crate::{Coordinates, GroupId, Person, Semester, ValidationError};
use chrono::NaiveDate;
use std::fmt;

/// A study group, the primary record of the collection.
///
/// Immutable once constructed. The collection replaces whole records
/// rather than mutating fields; the only sanctioned field change is the
/// id-preserving replace done through [`with_id`](Self::with_id).
///
/// # Ordering
///
/// Records are ordered by `(students_count, id)` ascending - see
/// [`ordering_key`](Self::ordering_key). All "minimal element" semantics
/// in the collection use this key.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyGroup {
    id: GroupId,
    name: String,
    coordinates: Coordinates,
    creation_date: NaiveDate,
    students_count: u32,
    expelled_students: Option<u64>,
    transferred_students: u32,
    semester: Option<Semester>,
    group_admin: Person,
}

impl StudyGroup {
    /// Creates a validated record.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyGroupName`] if the name is blank
    /// - [`ValidationError::NonPositiveStudentsCount`] if `students_count` is 0
    /// - [`ValidationError::NonPositiveExpelledCount`] if `expelled_students`
    ///   is present but 0
    /// - [`ValidationError::NonPositiveTransferredCount`] if
    ///   `transferred_students` is 0
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        coordinates: Coordinates,
        creation_date: NaiveDate,
        students_count: u32,
        expelled_students: Option<u64>,
        transferred_students: u32,
        semester: Option<Semester>,
        group_admin: Person,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        if students_count == 0 {
            return Err(ValidationError::NonPositiveStudentsCount);
        }
        if expelled_students == Some(0) {
            return Err(ValidationError::NonPositiveExpelledCount);
        }
        if transferred_students == 0 {
            return Err(ValidationError::NonPositiveTransferredCount);
        }
        Ok(Self {
            id,
            name,
            coordinates,
            creation_date,
            students_count,
            expelled_students,
            transferred_students,
            semester,
            group_admin,
        })
    }

    /// Returns a copy of this record carrying `id` instead of its own.
    ///
    /// Used by the collection's id-preserving replace.
    #[must_use]
    pub fn with_id(mut self, id: GroupId) -> Self {
        self.id = id;
        self
    }

    /// The ordering key: `(students_count, id)`, both ascending.
    #[must_use]
    pub fn ordering_key(&self) -> (u32, GroupId) {
        (self.students_count, self.id)
    }

    /// Record identifier.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Group name; never empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group coordinates.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Creation date, set once when the record was first built.
    #[must_use]
    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Number of students; always positive.
    #[must_use]
    pub fn students_count(&self) -> u32 {
        self.students_count
    }

    /// Number of expelled students, if tracked; positive when present.
    #[must_use]
    pub fn expelled_students(&self) -> Option<u64> {
        self.expelled_students
    }

    /// Number of transferred students; always positive.
    #[must_use]
    pub fn transferred_students(&self) -> u32 {
        self.transferred_students
    }

    /// Current semester, if known.
    #[must_use]
    pub fn semester(&self) -> Option<Semester> {
        self.semester
    }

    /// Group administrator.
    #[must_use]
    pub fn group_admin(&self) -> &Person {
        &self.group_admin
    }
}

impl fmt::Display for StudyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {:?} students={} expelled={} transferred={} semester={} coords={} admin={} created={}",
            self.id,
            self.name,
            self.students_count,
            self.expelled_students
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            self.transferred_students,
            self.semester
                .map_or_else(|| "-".to_string(), |s| s.to_string()),
            self.coordinates,
            self.group_admin.name(),
            self.creation_date,
        )
    }
}
