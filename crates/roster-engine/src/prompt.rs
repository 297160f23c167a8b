//! Typed field prompter on top of a [`LineSource`].
//!
//! Record-building commands read their fields one line at a time. Each
//! reader validates the line and fails the whole command on the first
//! bad value, so an aborted build leaves no partial state behind. An
//! empty line selects the field's default when one applies.

use crate::{CommandError, LineSource};
use chrono::{DateTime, TimeZone, Utc};
use roster_model::ValidationError;
use std::str::FromStr;

/// Reads typed field values from the active line source.
pub struct Prompter<'a> {
    source: &'a mut dyn LineSource,
}

impl<'a> Prompter<'a> {
    /// Wraps the given source.
    pub fn new(source: &'a mut dyn LineSource) -> Self {
        Self { source }
    }

    /// Reads the raw line for `field`, trimmed. `None` on empty input.
    /// The field hint is forwarded only to interactive sources.
    fn read_raw(&mut self, field: &'static str, prompt: &str) -> Result<Option<String>, CommandError> {
        let prompt = if self.source.is_interactive() { prompt } else { "" };
        let line = self
            .source
            .read_line(prompt)?
            .ok_or(CommandError::InputExhausted(field))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    /// Reads a non-empty string. An empty line selects `default` when
    /// given, otherwise the field is rejected as empty.
    pub fn read_string(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<String, CommandError> {
        match self.read_raw(field, prompt)? {
            Some(value) => Ok(value),
            None => match default {
                Some(value) => Ok(value.to_string()),
                None => Err(CommandError::EmptyField(field)),
            },
        }
    }

    /// Reads a value of any `FromStr` type, with an optional default.
    fn read_parsed<T: FromStr>(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: Option<T>,
    ) -> Result<T, CommandError> {
        match self.read_raw(field, prompt)? {
            Some(raw) => raw
                .parse()
                .map_err(|_| CommandError::invalid(field, raw)),
            None => default.ok_or(CommandError::EmptyField(field)),
        }
    }

    /// Reads a signed integer field.
    pub fn read_i32(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: Option<i32>,
    ) -> Result<i32, CommandError> {
        self.read_parsed(field, prompt, default)
    }

    /// Reads a floating-point field.
    pub fn read_f64(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: Option<f64>,
    ) -> Result<f64, CommandError> {
        self.read_parsed(field, prompt, default)
    }

    /// Reads an unsigned counter field.
    pub fn read_u32(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: Option<u32>,
    ) -> Result<u32, CommandError> {
        self.read_parsed(field, prompt, default)
    }

    /// Reads an optional unsigned counter. An empty line means absent.
    pub fn read_opt_u64(
        &mut self,
        field: &'static str,
        prompt: &str,
    ) -> Result<Option<u64>, CommandError> {
        match self.read_raw(field, prompt)? {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| CommandError::invalid(field, raw)),
            None => Ok(None),
        }
    }

    /// Reads an optional closed-enum token. An empty line means absent.
    pub fn read_opt_enum<T>(
        &mut self,
        field: &'static str,
        prompt: &str,
    ) -> Result<Option<T>, CommandError>
    where
        T: FromStr<Err = ValidationError>,
    {
        match self.read_raw(field, prompt)? {
            Some(raw) => raw.parse().map(Some).map_err(CommandError::Validation),
            None => Ok(None),
        }
    }

    /// Reads an epoch-milliseconds timestamp.
    pub fn read_millis(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, CommandError> {
        match self.read_raw(field, prompt)? {
            Some(raw) => {
                let millis: i64 = raw
                    .parse()
                    .map_err(|_| CommandError::invalid(field, raw.clone()))?;
                Utc.timestamp_millis_opt(millis)
                    .single()
                    .ok_or_else(|| CommandError::invalid(field, raw))
            }
            None => default.ok_or(CommandError::EmptyField(field)),
        }
    }
}
