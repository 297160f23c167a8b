//! Commands that query or shrink the collection in place.

use crate::{Command, CommandError, Context, Outcome};
use roster_model::{GroupId, Semester, StudyGroup};
use std::fmt::Write as _;
use std::io::Write as _;

/// Prints sorted matching records, or a no-match message.
fn print_records(
    out: &mut dyn std::io::Write,
    mut records: Vec<&StudyGroup>,
) -> Result<(), CommandError> {
    if records.is_empty() {
        writeln!(out, "no matching groups")?;
        return Ok(());
    }
    records.sort_by_key(|group| group.ordering_key());
    let mut buf = String::new();
    for group in records {
        let _ = writeln!(buf, "{group}");
    }
    out.write_all(buf.as_bytes())?;
    Ok(())
}

pub(crate) struct Info;

impl Command for Info {
    fn description(&self) -> &'static str {
        "print collection type, initialization time and size"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        writeln!(
            ctx.out,
            "type: priority queue of study groups\ninitialized: {}\nsize: {}",
            ctx.groups.initialized_at().format("%Y-%m-%d %H:%M:%S UTC"),
            ctx.groups.len()
        )?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct Show;

impl Command for Show {
    fn description(&self) -> &'static str {
        "print every record, minimal first"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        if ctx.groups.is_empty() {
            writeln!(ctx.out, "the collection is empty")?;
            return Ok(Outcome::Continue);
        }
        let snapshot = ctx.groups.snapshot();
        let mut buf = String::new();
        for group in &snapshot {
            let _ = writeln!(buf, "{group}");
        }
        ctx.out.write_all(buf.as_bytes())?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct Clear;

impl Command for Clear {
    fn description(&self) -> &'static str {
        "remove every record"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        ctx.groups.clear();
        writeln!(ctx.out, "collection cleared")?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct RemoveFirst;

impl Command for RemoveFirst {
    fn description(&self) -> &'static str {
        "remove and print the record with the minimal key"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        match ctx.groups.remove_first() {
            Some(group) => writeln!(ctx.out, "removed {group}")?,
            None => writeln!(ctx.out, "the collection is empty")?,
        }
        Ok(Outcome::Continue)
    }
}

pub(crate) struct RemoveById;

impl Command for RemoveById {
    fn description(&self) -> &'static str {
        "remove_by_id <id>: remove the record with the given id"
    }

    fn run(&self, args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        let raw = args.first().ok_or(CommandError::MissingArgument("id"))?;
        let id: GroupId = raw.parse()?;
        if !ctx.groups.remove_by_id(id) {
            return Err(CommandError::NotFound(id));
        }
        writeln!(ctx.out, "removed group {id}")?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct FilterContainsName;

impl Command for FilterContainsName {
    fn description(&self) -> &'static str {
        "filter_contains_name <substring>: print records whose name contains the substring"
    }

    fn run(&self, args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingArgument("substring"));
        }
        let substring = args.join(" ");
        let matched = ctx.groups.filter_contains_name(&substring);
        print_records(&mut ctx.out, matched)?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct FilterGreaterThanSemester;

impl Command for FilterGreaterThanSemester {
    fn description(&self) -> &'static str {
        "filter_greater_than_semester_enum <SEMESTER>: print records past the given semester"
    }

    fn run(&self, args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        let raw = args
            .first()
            .ok_or(CommandError::MissingArgument("semester"))?;
        let semester: Semester = raw.parse()?;
        let matched = ctx.groups.filter_greater_than_semester(semester);
        print_records(&mut ctx.out, matched)?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct PrintAdminNamesDescending;

impl Command for PrintAdminNamesDescending {
    fn description(&self) -> &'static str {
        "print every administrator name in descending order"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        let names = ctx.groups.admin_names_descending();
        if names.is_empty() {
            writeln!(ctx.out, "the collection is empty")?;
        } else {
            for name in names {
                writeln!(ctx.out, "{name}")?;
            }
        }
        Ok(Outcome::Continue)
    }
}
