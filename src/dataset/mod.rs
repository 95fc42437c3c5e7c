/// Dataset domain: projection of raw records into a typed table and the
/// data-quality contract the table must satisfy before publishing
pub mod contract;
pub mod field_rules;
pub mod metadata;
pub mod table;
pub mod validator;

pub use contract::SchemaContract;
pub use field_rules::{FieldRule, FieldSpec, Projection, PACKAGE_FIELDS};
pub use metadata::{ColumnDescription, DatasetMetadata};
pub use table::{Cell, Column, DataType, Table};
pub use validator::{validate, ValidationReport};
