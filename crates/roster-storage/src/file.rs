//! The collection file: load and save.

use crate::tags::Element;
use crate::StorageError;
use chrono::{DateTime, NaiveDate, Utc};
use roster_collection::GroupCollection;
use roster_model::{Coordinates, Country, EyeColor, IdAllocator, Person, Semester, StudyGroup};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const ROOT_TAG: &str = "studyGroups";
const GROUP_TAG: &str = "studyGroup";

/// Handle to the collection file given at startup.
///
/// `load` reads the whole file into records before touching anything
/// else, so a malformed file leaves both the collection and the id
/// allocator untouched. `save` writes the full snapshot through a
/// sibling temp file and renames it into place.
///
/// # Example
///
/// ```no_run
/// use roster_storage::CollectionFile;
/// use roster_model::IdAllocator;
///
/// let store = CollectionFile::new("groups.xml");
/// let mut ids = IdAllocator::new();
/// let groups = match store.load(&mut ids) {
///     Ok(groups) => groups,
///     Err(err) if err.is_missing() => Default::default(),
///     Err(err) => {
///         eprintln!("load failed: {err}");
///         Default::default()
///     }
/// };
/// # let _ = groups;
/// ```
#[derive(Debug, Clone)]
pub struct CollectionFile {
    path: PathBuf,
}

impl CollectionFile {
    /// Creates a handle for the given path. No I/O happens here.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The underlying file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the collection, feeding every record id into `ids`.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] when the file does not exist (the
    ///   caller starts with an empty collection)
    /// - [`StorageError::Parse`] / [`StorageError::Invalid`] when any
    ///   record is malformed; nothing is loaded and `ids` is unchanged
    /// - [`StorageError::Io`] for other read failures
    pub fn load(&self, ids: &mut IdAllocator) -> Result<GroupCollection, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        let root = Element::parse(&content)?;
        if root.name != ROOT_TAG {
            return Err(StorageError::parse(format!(
                "expected <{ROOT_TAG}> root, found <{}>",
                root.name
            )));
        }

        // Parse every record before mutating anything (all-or-nothing).
        let records: Vec<StudyGroup> = root
            .children_named(GROUP_TAG)
            .map(parse_group)
            .collect::<Result<_, _>>()?;

        let mut groups = GroupCollection::new();
        for record in records {
            ids.observe(record.id());
            groups.add(record);
        }
        info!(count = groups.len(), path = %self.path.display(), "loaded collection");
        Ok(groups)
    }

    /// Saves the full snapshot, overwriting any existing content.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on write failure; the previous file
    /// content is kept intact in that case.
    pub fn save(&self, groups: &GroupCollection) -> Result<(), StorageError> {
        let mut root = Element::node(ROOT_TAG);
        for group in groups.snapshot() {
            root.push(render_group(&group));
        }

        let temp = self.temp_path();
        std::fs::write(&temp, root.render())?;
        if let Err(err) = std::fs::rename(&temp, &self.path) {
            // Don't leave the temp file behind next to the collection.
            let _ = std::fs::remove_file(&temp);
            return Err(err.into());
        }
        debug!(count = groups.len(), path = %self.path.display(), "saved collection");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "collection".into(), |n| n.to_string_lossy().into_owned());
        self.path.with_file_name(format!(".{file_name}.tmp"))
    }
}

fn render_group(group: &StudyGroup) -> Element {
    let mut el = Element::node(GROUP_TAG);
    el.push(Element::leaf("id", group.id().to_string()));
    el.push(Element::leaf("name", group.name()));
    el.push(Element::leaf(
        "creationDate",
        group.creation_date().format("%Y-%m-%d").to_string(),
    ));
    el.push(Element::leaf(
        "studentsCount",
        group.students_count().to_string(),
    ));
    el.push(Element::leaf(
        "expelledStudents",
        group
            .expelled_students()
            .map_or_else(String::new, |n| n.to_string()),
    ));
    el.push(Element::leaf(
        "transferredStudents",
        group.transferred_students().to_string(),
    ));
    el.push(Element::leaf(
        "semesterEnum",
        group.semester().map_or("", Semester::as_str),
    ));

    let mut coordinates = Element::node("coordinates");
    coordinates.push(Element::leaf("x", group.coordinates().x().to_string()));
    coordinates.push(Element::leaf("y", group.coordinates().y().to_string()));
    el.push(coordinates);

    let admin = group.group_admin();
    let mut admin_el = Element::node("groupAdmin");
    admin_el.push(Element::leaf("name", admin.name()));
    admin_el.push(Element::leaf(
        "birthday",
        admin.birthday().timestamp_millis().to_string(),
    ));
    admin_el.push(Element::leaf(
        "eyeColor",
        admin.eye_color().map_or("", EyeColor::as_str),
    ));
    admin_el.push(Element::leaf(
        "nationality",
        admin.nationality().map_or("", Country::as_str),
    ));
    el.push(admin_el);

    el
}

fn parse_group(el: &Element) -> Result<StudyGroup, StorageError> {
    let id = required_text(el, "id")?.parse()?;
    let name = required_text(el, "name")?;

    let creation_date: NaiveDate = required_text(el, "creationDate")?
        .parse()
        .map_err(|_| StorageError::parse("invalid <creationDate>"))?;

    let students_count: u32 = required_text(el, "studentsCount")?
        .parse()
        .map_err(|_| StorageError::parse("invalid <studentsCount>"))?;

    let expelled_students = match optional_text(el, "expelledStudents") {
        None => None,
        Some(text) => Some(
            text.parse::<u64>()
                .map_err(|_| StorageError::parse("invalid <expelledStudents>"))?,
        ),
    };

    let transferred_students: u32 = required_text(el, "transferredStudents")?
        .parse()
        .map_err(|_| StorageError::parse("invalid <transferredStudents>"))?;

    let semester = match optional_text(el, "semesterEnum") {
        None => None,
        Some(token) => Some(token.parse::<Semester>()?),
    };

    let coordinates_el = el
        .child("coordinates")
        .ok_or_else(|| StorageError::parse("missing <coordinates>"))?;
    let x: i32 = required_text(coordinates_el, "x")?
        .parse()
        .map_err(|_| StorageError::parse("invalid <x>"))?;
    // y is required: an absent or empty element is rejected here.
    let y: f64 = required_text(coordinates_el, "y")?
        .parse()
        .map_err(|_| StorageError::parse("invalid <y>"))?;
    let coordinates = Coordinates::new(x, y);

    let admin_el = el
        .child("groupAdmin")
        .ok_or_else(|| StorageError::parse("missing <groupAdmin>"))?;
    let admin_name = required_text(admin_el, "name")?;
    let birthday_millis: i64 = required_text(admin_el, "birthday")?
        .parse()
        .map_err(|_| StorageError::parse("invalid <birthday>"))?;
    let birthday: DateTime<Utc> = DateTime::from_timestamp_millis(birthday_millis)
        .ok_or_else(|| StorageError::parse("out-of-range <birthday>"))?;
    let eye_color = match optional_text(admin_el, "eyeColor") {
        None => None,
        Some(token) => Some(token.parse::<EyeColor>()?),
    };
    let nationality = match optional_text(admin_el, "nationality") {
        None => None,
        Some(token) => Some(token.parse::<Country>()?),
    };
    let admin = Person::new(admin_name, birthday, eye_color, nationality)?;

    Ok(StudyGroup::new(
        id,
        name,
        coordinates,
        creation_date,
        students_count,
        expelled_students,
        transferred_students,
        semester,
        admin,
    )?)
}

fn required_text<'a>(el: &'a Element, tag: &str) -> Result<&'a str, StorageError> {
    let text = el
        .child_text(tag)
        .ok_or_else(|| StorageError::parse(format!("missing <{tag}>")))?;
    if text.is_empty() {
        return Err(StorageError::parse(format!("empty <{tag}>")));
    }
    Ok(text)
}

fn optional_text<'a>(el: &'a Element, tag: &str) -> Option<&'a str> {
    el.child_text(tag).filter(|text| !text.is_empty())
}
