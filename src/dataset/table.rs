use crate::shared::Result;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Logical column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Int,
    Double,
    StringList,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "string"),
            DataType::Int => write!(f, "int"),
            DataType::Double => write!(f, "double"),
            DataType::StringList => write!(f, "list<string>"),
        }
    }
}

/// A single table value. `Null` is valid in a column of any type.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Str(String),
    Int(i64),
    Double(f64),
    List(Vec<String>),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn conforms_to(&self, data_type: DataType) -> bool {
        matches!(
            (self, data_type),
            (Cell::Null, _)
                | (Cell::Str(_), DataType::String)
                | (Cell::Int(_), DataType::Int)
                | (Cell::Double(_), DataType::Double)
                | (Cell::List(_), DataType::StringList)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Str(s) => Value::String(s.clone()),
            Cell::Int(i) => Value::from(*i),
            Cell::Double(d) => Value::from(*d),
            Cell::List(items) => Value::from(items.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data_type: DataType,
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            data_type,
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Column-oriented table with a fixed column order
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    num_rows: usize,
}

impl Table {
    /// Builds a table from columns of equal length with distinct names.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let num_rows = columns.first().map(|c| c.cells.len()).unwrap_or(0);

        let mut names = HashSet::new();
        for column in &columns {
            if !names.insert(column.name.as_str()) {
                anyhow::bail!("Duplicate column name '{}'", column.name);
            }
            if column.cells.len() != num_rows {
                anyhow::bail!(
                    "Column '{}' has {} values, expected {}",
                    column.name,
                    column.cells.len(),
                    num_rows
                );
            }
        }

        Ok(Self { columns, num_rows })
    }

    /// Builds a table from row-major cells. Each row must have one cell per
    /// entry in `schema`, in the same order.
    pub fn from_rows(schema: &[(&str, DataType)], rows: Vec<Vec<Cell>>) -> Result<Self> {
        let mut columns: Vec<Vec<Cell>> = schema
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != schema.len() {
                anyhow::bail!(
                    "Row {} has {} values, expected {}",
                    index,
                    row.len(),
                    schema.len()
                );
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        Table::new(
            schema
                .iter()
                .zip(columns)
                .map(|((name, data_type), cells)| Column::new(*name, *data_type, cells))
                .collect(),
        )
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Renders one JSON object per row, columns in table order, each line
    /// terminated by `\n`. Output depends only on the table contents.
    pub fn to_json_lines(&self) -> Result<String> {
        let mut out = String::new();
        for row in 0..self.num_rows {
            let mut object = Map::with_capacity(self.columns.len());
            for column in &self.columns {
                object.insert(column.name.clone(), column.cells[row].to_json());
            }
            out.push_str(&serde_json::to_string(&Value::Object(object))?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            &[("name", DataType::String), ("count", DataType::Int)],
            vec![
                vec![Cell::Str("a".to_string()), Cell::Int(1)],
                vec![Cell::Str("b".to_string()), Cell::Null],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_rows_transposes() {
        let table = sample();
        assert_eq!(table.num_rows(), 2);
        let count = table.column("count").unwrap();
        assert_eq!(count.cells(), &[Cell::Int(1), Cell::Null]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_row() {
        let result = Table::from_rows(
            &[("name", DataType::String), ("count", DataType::Int)],
            vec![vec![Cell::Str("a".to_string())]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_column() {
        let result = Table::new(vec![
            Column::new("name", DataType::String, vec![]),
            Column::new("name", DataType::String, vec![]),
        ]);
        assert!(result.unwrap_err().to_string().contains("Duplicate column"));
    }

    #[test]
    fn test_json_lines_keep_column_order_and_nulls() {
        let lines = sample().to_json_lines().unwrap();
        assert_eq!(
            lines,
            "{\"name\":\"a\",\"count\":1}\n{\"name\":\"b\",\"count\":null}\n"
        );
    }

    #[test]
    fn test_null_conforms_to_every_type() {
        for data_type in [
            DataType::String,
            DataType::Int,
            DataType::Double,
            DataType::StringList,
        ] {
            assert!(Cell::Null.conforms_to(data_type));
        }
        assert!(!Cell::Int(1).conforms_to(DataType::Double));
    }
}
