use super::contract::SchemaContract;
use super::table::{Cell, Table};
use crate::shared::error::RegistryError;
use crate::shared::Result;
use std::collections::HashSet;

/// Outcome of checking a table against a [`SchemaContract`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_result(self, dataset: &str) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        Err(RegistryError::DataQuality {
            dataset: dataset.to_string(),
            violations: self.violations,
        }
        .into())
    }

    fn push(&mut self, violation: String) {
        self.violations.push(violation);
    }
}

/// Checks `table` against every rule in `contract`, collecting all violations.
pub fn validate(table: &Table, contract: &SchemaContract) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_schema(table, contract, &mut report);
    check_not_null(table, contract, &mut report);
    check_unique(table, contract, &mut report);

    if table.num_rows() < contract.min_rows {
        report.push(format!(
            "expected at least {} rows, found {}",
            contract.min_rows,
            table.num_rows()
        ));
    }

    check_non_negative(table, contract, &mut report);
    check_sample(table, contract, &mut report);

    report
}

fn check_schema(table: &Table, contract: &SchemaContract, report: &mut ValidationReport) {
    for (name, expected) in &contract.columns {
        let Some(column) = table.column(name) else {
            report.push(format!("missing column '{}'", name));
            continue;
        };

        if column.data_type() != *expected {
            report.push(format!(
                "column '{}' has type {}, expected {}",
                name,
                column.data_type(),
                expected
            ));
            continue;
        }

        let mismatched = column
            .cells()
            .iter()
            .filter(|cell| !cell.conforms_to(*expected))
            .count();
        if mismatched > 0 {
            report.push(format!(
                "column '{}' has {} value(s) that are not {}",
                name, mismatched, expected
            ));
        }
    }
}

fn check_not_null(table: &Table, contract: &SchemaContract, report: &mut ValidationReport) {
    for name in &contract.not_null {
        if let Some(column) = table.column(name) {
            let nulls = column.cells().iter().filter(|c| c.is_null()).count();
            if nulls > 0 {
                report.push(format!("column '{}' has {} null value(s)", name, nulls));
            }
        }
    }
}

fn check_unique(table: &Table, contract: &SchemaContract, report: &mut ValidationReport) {
    for name in &contract.unique {
        if let Some(column) = table.column(name) {
            let mut seen = HashSet::new();
            let duplicates = column
                .cells()
                .iter()
                .filter(|c| !c.is_null())
                .filter(|c| !seen.insert(c.to_json().to_string()))
                .count();
            if duplicates > 0 {
                report.push(format!(
                    "column '{}' has {} duplicate value(s)",
                    name, duplicates
                ));
            }
        }
    }
}

fn check_non_negative(table: &Table, contract: &SchemaContract, report: &mut ValidationReport) {
    for name in &contract.non_negative {
        if let Some(column) = table.column(name) {
            let negatives = column
                .cells()
                .iter()
                .filter(|c| match c {
                    Cell::Int(i) => *i < 0,
                    Cell::Double(d) => *d < 0.0,
                    _ => false,
                })
                .count();
            if negatives > 0 {
                report.push(format!(
                    "column '{}' has {} negative value(s)",
                    name, negatives
                ));
            }
        }
    }
}

fn check_sample(table: &Table, contract: &SchemaContract, report: &mut ValidationReport) {
    let Some((name, size)) = &contract.sample_non_empty else {
        return;
    };
    if let Some(column) = table.column(name) {
        let empty = column
            .cells()
            .iter()
            .take(*size)
            .filter(|c| c.as_str().map_or(true, str::is_empty))
            .count();
        if empty > 0 {
            report.push(format!(
                "{} of the first {} value(s) in column '{}' are empty",
                empty, size, name
            ));
        }
    }
}
