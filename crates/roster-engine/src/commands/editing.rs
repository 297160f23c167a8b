//! Commands that build records from prompted input.

use super::build_group;
use crate::{CommandError, Context, InputCommand, LineSource, Outcome, Prompter};
use roster_model::{Coordinates, GroupId, Person, StudyGroup};
use std::io::Write as _;

pub(crate) struct Add;

impl InputCommand for Add {
    fn description(&self) -> &'static str {
        "add a new record, reading its fields from input"
    }

    fn run(
        &self,
        _args: &[&str],
        ctx: &mut Context,
        source: &mut dyn LineSource,
    ) -> Result<Outcome, CommandError> {
        let id = ctx.ids.next_id();
        let mut prompter = Prompter::new(source);
        let group = build_group(&mut prompter, id)?;
        ctx.groups.add(group);
        writeln!(ctx.out, "added group {id}")?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct Update;

impl InputCommand for Update {
    fn description(&self) -> &'static str {
        "update <id>: re-prompt name, coordinates and administrator of a record"
    }

    fn run(
        &self,
        args: &[&str],
        ctx: &mut Context,
        source: &mut dyn LineSource,
    ) -> Result<Outcome, CommandError> {
        let raw = args.first().ok_or(CommandError::MissingArgument("id"))?;
        let id: GroupId = raw.parse()?;
        let existing = ctx
            .groups
            .get_by_id(id)
            .cloned()
            .ok_or(CommandError::NotFound(id))?;

        // Empty lines keep the stored values.
        let mut prompter = Prompter::new(source);
        let name = prompter.read_string("group name", "group name: ", Some(existing.name()))?;
        let x = prompter.read_i32(
            "x coordinate",
            "coordinates x (integer): ",
            Some(existing.coordinates().x()),
        )?;
        let y = prompter.read_f64(
            "y coordinate",
            "coordinates y (number): ",
            Some(existing.coordinates().y()),
        )?;
        let admin_name = prompter.read_string(
            "admin name",
            "admin name: ",
            Some(existing.group_admin().name()),
        )?;
        let birthday = prompter.read_millis(
            "admin birthday",
            "admin birthday (epoch millis): ",
            Some(existing.group_admin().birthday()),
        )?;

        let admin = Person::new(
            admin_name,
            birthday,
            existing.group_admin().eye_color(),
            existing.group_admin().nationality(),
        )?;
        // The creation date and all counters are carried over unchanged.
        let replacement = StudyGroup::new(
            id,
            name,
            Coordinates::new(x, y),
            existing.creation_date(),
            existing.students_count(),
            existing.expelled_students(),
            existing.transferred_students(),
            existing.semester(),
            admin,
        )?;
        ctx.groups.update(id, replacement);
        writeln!(ctx.out, "updated group {id}")?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct AddIfMin;

impl InputCommand for AddIfMin {
    fn description(&self) -> &'static str {
        "add a new record only if its key is below the current minimum"
    }

    fn run(
        &self,
        _args: &[&str],
        ctx: &mut Context,
        source: &mut dyn LineSource,
    ) -> Result<Outcome, CommandError> {
        let id = ctx.ids.next_id();
        let mut prompter = Prompter::new(source);
        let group = build_group(&mut prompter, id)?;
        if ctx.groups.add_if_min(group) {
            writeln!(ctx.out, "added group {id}")?;
        } else {
            writeln!(ctx.out, "not added: key is not below the current minimum")?;
        }
        Ok(Outcome::Continue)
    }
}

pub(crate) struct RemoveLower;

impl InputCommand for RemoveLower {
    fn description(&self) -> &'static str {
        "build a pivot record and remove every record with a smaller key"
    }

    fn run(
        &self,
        _args: &[&str],
        ctx: &mut Context,
        source: &mut dyn LineSource,
    ) -> Result<Outcome, CommandError> {
        let id = ctx.ids.next_id();
        let mut prompter = Prompter::new(source);
        let pivot = build_group(&mut prompter, id)?;
        let removed = ctx.groups.remove_lower(&pivot);
        writeln!(ctx.out, "removed {removed} group(s)")?;
        Ok(Outcome::Continue)
    }
}
