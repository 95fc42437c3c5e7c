//! Per-column projection rules for the npm popular-packages dataset.
//!
//! Each output column is one [`FieldSpec`] entry in [`PACKAGE_FIELDS`]: its
//! type, how a raw value is coalesced, and its published description. The
//! table order of that slice is the column order of the dataset.

use super::table::{Cell, DataType, Table};
use crate::shared::Result;
use serde_json::Value;

/// How a raw value becomes a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Row identity. A missing or falsy value drops the whole row.
    Key,
    /// Type coercion only; empty strings survive.
    Keep,
    /// Absent, null, empty string, empty list and other falsy values become null.
    FalsyToNull,
    /// Absent, null or mistyped values become 0.
    DefaultZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub column: &'static str,
    pub data_type: DataType,
    pub rule: FieldRule,
    pub description: &'static str,
}

const fn field(
    column: &'static str,
    data_type: DataType,
    rule: FieldRule,
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        column,
        data_type,
        rule,
        description,
    }
}

pub const PACKAGE_FIELDS: &[FieldSpec] = &[
    field("name", DataType::String, FieldRule::Key, "Package name (used in package.json)"),
    field("version", DataType::String, FieldRule::Keep, "Latest published version"),
    field(
        "description",
        DataType::String,
        FieldRule::FalsyToNull,
        "Short description of the package",
    ),
    field(
        "license",
        DataType::String,
        FieldRule::FalsyToNull,
        "License identifier (e.g., MIT, Apache-2.0)",
    ),
    field("date", DataType::String, FieldRule::FalsyToNull, "Timestamp of latest publish"),
    field(
        "publisher_username",
        DataType::String,
        FieldRule::FalsyToNull,
        "npm username of latest publisher",
    ),
    field(
        "maintainers_count",
        DataType::Int,
        FieldRule::DefaultZero,
        "Number of maintainers",
    ),
    field(
        "keywords",
        DataType::StringList,
        FieldRule::FalsyToNull,
        "List of keywords/tags",
    ),
    field(
        "repository_url",
        DataType::String,
        FieldRule::FalsyToNull,
        "Source code repository URL",
    ),
    field("homepage_url", DataType::String, FieldRule::FalsyToNull, "Project homepage URL"),
    field("npm_url", DataType::String, FieldRule::FalsyToNull, "npm package page URL"),
    field("score_final", DataType::Double, FieldRule::Keep, "Overall npm score (0-1)"),
    field(
        "score_quality",
        DataType::Double,
        FieldRule::Keep,
        "Quality score component (0-1)",
    ),
    field(
        "score_popularity",
        DataType::Double,
        FieldRule::Keep,
        "Popularity score component (0-1)",
    ),
    field(
        "score_maintenance",
        DataType::Double,
        FieldRule::Keep,
        "Maintenance score component (0-1)",
    ),
];

/// Result of projecting a batch of raw records
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub table: Table,
    pub dropped: usize,
}

/// JavaScript-style truthiness, the test the registry's own tooling applies
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn coerce(data_type: DataType, value: &Value) -> Cell {
    match (data_type, value) {
        (DataType::String, Value::String(s)) => Cell::Str(s.clone()),
        (DataType::Int, Value::Number(n)) => match n.as_i64() {
            Some(i) => Cell::Int(i),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Cell::Int(f as i64),
                _ => Cell::Null,
            },
        },
        (DataType::Double, Value::Number(n)) => n.as_f64().map(Cell::Double).unwrap_or(Cell::Null),
        (DataType::StringList, Value::Array(items)) => Cell::List(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        ),
        _ => Cell::Null,
    }
}

impl FieldSpec {
    /// Projects one raw value. `None` means the row must be dropped.
    pub fn project(&self, value: Option<&Value>) -> Option<Cell> {
        match self.rule {
            FieldRule::Key => match value {
                Some(v) if !is_falsy(v) => match coerce(self.data_type, v) {
                    Cell::Null => None,
                    cell => Some(cell),
                },
                _ => None,
            },
            FieldRule::Keep => Some(value.map_or(Cell::Null, |v| coerce(self.data_type, v))),
            FieldRule::FalsyToNull => Some(match value {
                Some(v) if !is_falsy(v) => match coerce(self.data_type, v) {
                    Cell::List(items) if items.is_empty() => Cell::Null,
                    cell => cell,
                },
                _ => Cell::Null,
            }),
            FieldRule::DefaultZero => Some(match value.map(|v| coerce(self.data_type, v)) {
                Some(Cell::Null) | None => Cell::Int(0),
                Some(cell) => cell,
            }),
        }
    }
}

/// Projects one raw record through every rule. `None` if the record has no
/// usable key or is not a JSON object.
pub fn project_record(record: &Value) -> Option<Vec<Cell>> {
    let object = record.as_object()?;
    PACKAGE_FIELDS
        .iter()
        .map(|spec| spec.project(object.get(spec.column)))
        .collect()
}

/// Projects every raw record and assembles the typed table.
pub fn project_records(raw: &[Value]) -> Result<Projection> {
    let rows: Vec<Vec<Cell>> = raw.iter().filter_map(project_record).collect();
    let dropped = raw.len() - rows.len();

    let schema: Vec<(&str, DataType)> = PACKAGE_FIELDS
        .iter()
        .map(|spec| (spec.column, spec.data_type))
        .collect();

    Ok(Projection {
        table: Table::from_rows(&schema, rows)?,
        dropped,
    })
}
