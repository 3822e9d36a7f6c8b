//! Field presence checks run before a request leaves the process.

use std::fmt::Display;

use rust_decimal::Decimal;

use crate::gateway::Currency;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// JSON name of the offending field, `bulk_data[1].bank_code` for nested entries
    pub field: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl std::error::Error for ValidationErrors {}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid input: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        f.write_str(".")
    }
}

/// Accumulates every failure of one request
#[derive(Debug, Default)]
pub(crate) struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: impl Into<String>, message: &'static str) {
        self.errors.push(FieldError {
            field: field.into(),
            message,
        });
    }

    pub(crate) fn required_str(
        &mut self,
        field: impl Into<String>,
        value: &str,
        message: &'static str,
    ) {
        if value.trim().is_empty() {
            self.fail(field, message);
        }
    }

    pub(crate) fn required_amount(
        &mut self,
        field: impl Into<String>,
        value: Decimal,
        message: &'static str,
    ) {
        if value.is_zero() {
            self.fail(field, message);
        }
    }

    pub(crate) fn required_units(
        &mut self,
        field: impl Into<String>,
        value: i64,
        message: &'static str,
    ) {
        if value == 0 {
            self.fail(field, message);
        }
    }

    pub(crate) fn required_currency(
        &mut self,
        field: &str,
        value: &Currency,
        message: &'static str,
    ) {
        if value.is_blank() {
            self.fail(field, message);
        }
    }

    pub(crate) fn non_empty<T>(&mut self, field: &str, value: &[T], message: &'static str) {
        if value.is_empty() {
            self.fail(field, message);
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}
