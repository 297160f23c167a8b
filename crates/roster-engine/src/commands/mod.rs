//! Built-in command set.

mod collection;
mod editing;
mod session;

use crate::{CommandError, Handler, Prompter, Registry};
use chrono::Utc;
use roster_model::{Coordinates, Country, EyeColor, GroupId, Person, Semester, StudyGroup};

/// Registers every built-in command.
pub(crate) fn register_builtins(registry: &mut Registry) {
    registry.register("help", Handler::Plain(Box::new(session::Help)));
    registry.register("info", Handler::Plain(Box::new(collection::Info)));
    registry.register("show", Handler::Plain(Box::new(collection::Show)));
    registry.register("clear", Handler::Plain(Box::new(collection::Clear)));
    registry.register("save", Handler::Plain(Box::new(session::Save)));
    registry.register("exit", Handler::Plain(Box::new(session::Exit)));
    registry.register(
        "remove_first",
        Handler::Plain(Box::new(collection::RemoveFirst)),
    );
    registry.register(
        "remove_by_id",
        Handler::Plain(Box::new(collection::RemoveById)),
    );
    registry.register(
        "filter_contains_name",
        Handler::Plain(Box::new(collection::FilterContainsName)),
    );
    registry.register(
        "filter_greater_than_semester_enum",
        Handler::Plain(Box::new(collection::FilterGreaterThanSemester)),
    );
    registry.register(
        "print_field_descending_group_admin",
        Handler::Plain(Box::new(collection::PrintAdminNamesDescending)),
    );
    registry.register(
        "execute_script",
        Handler::Plain(Box::new(session::ExecuteScript)),
    );
    registry.register("add", Handler::Input(Box::new(editing::Add)));
    registry.register("update", Handler::Input(Box::new(editing::Update)));
    registry.register("add_if_min", Handler::Input(Box::new(editing::AddIfMin)));
    registry.register(
        "remove_lower",
        Handler::Input(Box::new(editing::RemoveLower)),
    );
}

/// Builds a complete record from prompted fields, carrying `id`.
///
/// The creation date is stamped with today's date. The first invalid
/// field aborts the build; nothing observable has been mutated at that
/// point.
fn build_group(prompter: &mut Prompter<'_>, id: GroupId) -> Result<StudyGroup, CommandError> {
    let name = prompter.read_string("group name", "group name: ", None)?;
    let x = prompter.read_i32("x coordinate", "coordinates x (integer): ", None)?;
    let y = prompter.read_f64("y coordinate", "coordinates y (number): ", None)?;
    let students = prompter.read_u32("students count", "students count (positive): ", None)?;
    let expelled = prompter.read_opt_u64(
        "expelled students",
        "expelled students (positive, empty to skip): ",
    )?;
    let transferred =
        prompter.read_u32("transferred students", "transferred students (positive): ", None)?;
    let semester = prompter.read_opt_enum::<Semester>(
        "semester",
        "semester (FIRST..EIGHTH, empty to skip): ",
    )?;
    let admin_name = prompter.read_string("admin name", "admin name: ", None)?;
    let birthday = prompter.read_millis("admin birthday", "admin birthday (epoch millis): ", None)?;
    let eye_color = prompter.read_opt_enum::<EyeColor>(
        "eye color",
        "admin eye color (BLACK/BLUE/ORANGE/WHITE/GREEN/BROWN, empty to skip): ",
    )?;
    let nationality = prompter.read_opt_enum::<Country>(
        "nationality",
        "admin nationality (empty to skip): ",
    )?;

    let admin = Person::new(admin_name, birthday, eye_color, nationality)?;
    let group = StudyGroup::new(
        id,
        name,
        Coordinates::new(x, y),
        Utc::now().date_naive(),
        students,
        expelled,
        transferred,
        semester,
        admin,
    )?;
    Ok(group)
}
