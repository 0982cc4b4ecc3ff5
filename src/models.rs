//! Console Models
//!
//! Data structures shared by the grids, the filter editor and the forms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw row object as delivered in `aaData`. Keys are entity specific.
pub type RawRow = serde_json::Value;

/// Maps one raw server row to a display row
pub type Projection = fn(&RawRow) -> RowRecord;

/// Synchronous source of autocomplete values for `textoptions` columns
pub type OptionsFn = fn() -> &'static [&'static str];

// ========================
// Filter Tokens
// ========================

/// Comparison applied by a filter token.
///
/// Serialized with the symbols the list endpoints understand; the short
/// mnemonic aliases (`gt`, `eq`, ...) are accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "==", alias = "eq")]
    Eq,
    #[serde(rename = "!=", alias = "ne")]
    Ne,
    #[serde(rename = "<", alias = "lt")]
    Lt,
    #[serde(rename = "<=", alias = "le")]
    Le,
    #[serde(rename = ">", alias = "gt")]
    Gt,
    #[serde(rename = ">=", alias = "ge")]
    Ge,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "!contains")]
    NotContains,
}

const TEXT_OPERATORS: &[Operator] = &[
    Operator::Contains,
    Operator::NotContains,
    Operator::Eq,
    Operator::Ne,
];

const OPTION_OPERATORS: &[Operator] = &[Operator::Eq, Operator::Ne];

const ORDERED_OPERATORS: &[Operator] = &[
    Operator::Eq,
    Operator::Ne,
    Operator::Lt,
    Operator::Le,
    Operator::Gt,
    Operator::Ge,
];

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Contains => "contains",
            Operator::NotContains => "!contains",
        }
    }

    /// Parse the wire symbol or its mnemonic alias
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "==" | "eq" => Some(Operator::Eq),
            "!=" | "ne" => Some(Operator::Ne),
            "<" | "lt" => Some(Operator::Lt),
            "<=" | "le" => Some(Operator::Le),
            ">" | "gt" => Some(Operator::Gt),
            ">=" | "ge" => Some(Operator::Ge),
            "contains" => Some(Operator::Contains),
            "!contains" => Some(Operator::NotContains),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter value. Dates travel as `YYYY-MM-DD` text.
///
/// `Int` goes on the wire as a JSON number and `Text` as a string, so the
/// kind survives a round trip; list endpoints must accept either form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Int(n) => write!(f, "{}", n),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

/// One structured unit of a compound filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterToken {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    pub value: FilterValue,
}

impl FilterToken {
    pub fn new(category: impl Into<String>, operator: Option<Operator>, value: FilterValue) -> Self {
        Self {
            category: category.into(),
            operator,
            value,
        }
    }

    pub fn text(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(category, None, FilterValue::Text(value.into()))
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Some(op) => write!(f, "{} {} {}", self.category, op, self.value),
            None => write!(f, "{}: {}", self.category, self.value),
        }
    }
}

// ========================
// Column Descriptors
// ========================

/// Declared kind of a filterable column
#[derive(Clone, Copy)]
pub enum ColumnKind {
    Text,
    Date,
    Int,
    /// Free text with autocomplete values. The values never gate input.
    TextOptions(OptionsFn),
}

impl ColumnKind {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Date => "date",
            ColumnKind::Int => "int",
            ColumnKind::TextOptions(_) => "textoptions",
        }
    }

    /// Operators offered for this kind, the first one being the default
    pub fn operators(&self) -> &'static [Operator] {
        match self {
            ColumnKind::Text => TEXT_OPERATORS,
            ColumnKind::TextOptions(_) => OPTION_OPERATORS,
            ColumnKind::Date | ColumnKind::Int => ORDERED_OPERATORS,
        }
    }

    pub fn default_operator(&self) -> Operator {
        self.operators()[0]
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            ColumnKind::TextOptions(options) => options(),
            _ => &[],
        }
    }
}

impl fmt::Debug for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column the filter editor may build tokens for
#[derive(Debug, Clone, Copy)]
pub struct ColumnDescriptor {
    pub category: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub const fn new(category: &'static str, kind: ColumnKind) -> Self {
        Self { category, kind }
    }
}

// ========================
// Grid Data
// ========================

/// Everything that determines a grid's next fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuerySpec {
    pub filter: String,
    pub sort_column: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl QuerySpec {
    /// Page 0, no filter, ascending on `sort_column`
    pub fn new(sort_column: impl Into<String>, page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort_column: sort_column.into(),
            sort_ascending: true,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }
}

/// A renderable grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link { href: String, label: String },
}

impl Cell {
    pub fn label(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Link { label, .. } => label,
        }
    }
}

/// Display row keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    cells: Vec<(&'static str, Cell)>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.cells.push((column, Cell::Text(value.into())));
        self
    }

    pub fn link(mut self, column: &'static str, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.cells.push((
            column,
            Cell::Link {
                href: href.into(),
                label: label.into(),
            },
        ));
        self
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, cell)| cell)
    }
}

/// A bounded slice of rows plus the server's total for the current filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub rows: Vec<RowRecord>,
    pub total_results: usize,
    pub page_size: usize,
}

/// Render a raw field as display text. Missing and null fields are empty.
pub fn field_text(row: &RawRow, key: &str) -> String {
    row.get(key).map(value_text).unwrap_or_default()
}

pub fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ========================
// Form Payloads
// ========================

/// Account profile (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Agent/system details (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(rename = "System", default)]
    pub uuid: String,
    #[serde(rename = "MachineGUID", default)]
    pub machine_guid: String,
    #[serde(rename = "AgentVersion", default)]
    pub agent_version: String,
    #[serde(rename = "Comment", default)]
    pub comment: String,
    #[serde(rename = "OSHumanName", default)]
    pub os: String,
    #[serde(rename = "Manufacturer", default)]
    pub manufacturer: String,
    #[serde(rename = "Model", default)]
    pub model: String,
    #[serde(rename = "LastSeen", default)]
    pub last_seen: String,
    #[serde(rename = "FirstSeen", default)]
    pub first_seen: String,
}

/// Everything the console knows about one executable
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileInfo {
    pub sha256: String,
    pub sha1: String,
    pub md5: String,
    pub size: serde_json::Value,
    pub file_path: String,
    pub first_seen: String,
    pub last_seen: String,
    pub num_systems: serde_json::Value,
    pub company_name: String,
    pub product_name: String,
    pub product_version: String,
    pub file_description: String,
    pub internal_name: String,
    pub file_version: String,
    pub original_filename: String,
    pub subject_short_name: String,
    pub subject: String,
    pub serial_number: String,
    pub digest_algorithm: String,
    pub digest_encryption_algorithm: String,
}
