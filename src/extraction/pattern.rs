//! Label-anchored numeric extraction from free-form report text.
//!
//! Every field a parser reads is described by a [`FieldRule`]: the literal
//! label the report tool prints, how the value is separated from it, and the
//! shape of the value. Rules compile into a [`LabelPattern`] once and are
//! reused for every report.

use regex::{Captures, Regex};

use crate::core::error::{PerfDashError, Result};

/// How a value follows its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `Label: value`
    Colon,
    /// `Label | value`
    Pipe,
    /// `Label | used | <ignored> | available | percent`
    Row,
}

/// Character class a captured value must consist of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    SignedReal,
    UnsignedReal,
    Count,
}

impl ValueShape {
    fn class(&self) -> &'static str {
        match self {
            ValueShape::SignedReal => r"[-\d.]+",
            ValueShape::UnsignedReal => r"[\d.]+",
            ValueShape::Count => r"\d+",
        }
    }
}

/// One entry of a parser's static extraction table
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name reported in parse errors
    pub field: &'static str,
    /// Label text exactly as the report tool prints it
    pub label: &'static str,
    pub delimiter: Delimiter,
    /// Shape of the value; ignored for [`Delimiter::Row`]
    pub shape: ValueShape,
}

impl FieldRule {
    pub const fn new(
        field: &'static str,
        label: &'static str,
        delimiter: Delimiter,
        shape: ValueShape,
    ) -> Self {
        Self {
            field,
            label,
            delimiter,
            shape,
        }
    }

    /// A four-column table row keyed by `label`
    pub const fn row(field: &'static str, label: &'static str) -> Self {
        Self::new(field, label, Delimiter::Row, ValueShape::Count)
    }

    /// Regex source for this rule
    pub fn pattern(&self) -> String {
        let label = regex::escape(self.label);
        match self.delimiter {
            Delimiter::Colon => format!(r"{label}:\s*({})", self.shape.class()),
            Delimiter::Pipe => format!(r"{label}\s*\|\s*({})", self.shape.class()),
            Delimiter::Row => format!(
                r"{label}\s*\|\s*({count})\s*\|\s*{count}\s*\|\s*({count})\s*\|\s*({real})",
                count = ValueShape::Count.class(),
                real = ValueShape::UnsignedReal.class(),
            ),
        }
    }

    pub fn compile(&self) -> Result<LabelPattern> {
        Ok(LabelPattern {
            field: self.field,
            regex: Regex::new(&self.pattern())?,
        })
    }
}

/// Values captured from a four-column table row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub used: u64,
    pub available: u64,
    pub percent: f64,
}

/// A compiled [`FieldRule`]
#[derive(Debug, Clone)]
pub struct LabelPattern {
    field: &'static str,
    regex: Regex,
}

impl LabelPattern {
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// First match in `text`, if any
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }

    /// Extract the first matching value.
    ///
    /// Returns `Ok(None)` when the label is absent and a [`PerfDashError::Parse`]
    /// when the label is present but its value does not convert to `T`.
    pub fn extract<T: ReportValue>(&self, text: &str) -> Result<Option<T>> {
        match self.captures(text).and_then(|caps| caps.get(1)) {
            Some(m) => convert(self.field, m.as_str()).map(Some),
            None => Ok(None),
        }
    }

    /// Like [`extract`](Self::extract) but substitutes `default` when absent
    pub fn extract_or<T: ReportValue>(&self, text: &str, default: T) -> Result<T> {
        Ok(self.extract(text)?.unwrap_or(default))
    }

    /// Extract a four-column row: used, placeholder, available, percent
    pub fn extract_row(&self, text: &str) -> Result<Option<TableRow>> {
        let Some(caps) = self.captures(text) else {
            return Ok(None);
        };

        let group = |index: usize| caps.get(index).map(|m| m.as_str()).unwrap_or_default();

        Ok(Some(TableRow {
            used: convert(self.field, group(1))?,
            available: convert(self.field, group(2))?,
            percent: convert(self.field, group(3))?,
        }))
    }
}

/// A numeric type a report value can be read into
pub trait ReportValue: Sized {
    fn from_report(raw: &str) -> std::result::Result<Self, String>;
}

impl ReportValue for u64 {
    fn from_report(raw: &str) -> std::result::Result<Self, String> {
        raw.parse::<u64>().map_err(|e| e.to_string())
    }
}

impl ReportValue for f64 {
    /// Digit strings too long for `f64` parse to infinity, which JSON cannot carry
    fn from_report(raw: &str) -> std::result::Result<Self, String> {
        let value = raw.parse::<f64>().map_err(|e| e.to_string())?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err("number out of range".to_string())
        }
    }
}

fn convert<T: ReportValue>(field: &str, raw: &str) -> Result<T> {
    T::from_report(raw).map_err(|reason| PerfDashError::Parse {
        field: field.to_string(),
        value: raw.to_string(),
        reason,
    })
}

/// Compile a whole rule table, keeping table order
pub fn compile_table(rules: &[FieldRule]) -> Result<Vec<LabelPattern>> {
    rules.iter().map(FieldRule::compile).collect()
}
