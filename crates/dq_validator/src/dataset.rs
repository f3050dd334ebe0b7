//! Dataset representation for validation.
//!
//! A dataset is an ordered sequence of named, typed columns of equal length.
//! The evaluator never mutates it; the only derived copy is the presentation
//! view produced by [`DataSet::highlight_failures`].

use crate::ValidationError;
use dq_core::ColumnType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Marker appended to values of failed columns in the presentation copy.
pub const FAILURE_MARKER: &str = "❗";

/// A value in a dataset.
///
/// In JSON, values are untagged: `null`, booleans, integers, floats and strings
/// map to the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

/// Hashable identity of a non-null value, used for distinct counts.
///
/// Integral floats share the integer key so `3` and `3.0` count once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey<'a> {
    Integer(i64),
    Number(u64),
    Text(&'a str),
    Bool(bool),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns true for integers and floats.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataValue::Int(_) | DataValue::Float(_))
    }

    /// Attempts to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub(crate) fn key(&self) -> Option<ValueKey<'_>> {
        match self {
            DataValue::Null => None,
            DataValue::Bool(b) => Some(ValueKey::Bool(*b)),
            DataValue::Int(i) => Some(ValueKey::Integer(*i)),
            DataValue::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(ValueKey::Integer(*f as i64))
                } else if f.is_nan() {
                    Some(ValueKey::Number(f64::NAN.to_bits()))
                } else {
                    Some(ValueKey::Number(f.to_bits()))
                }
            }
            DataValue::String(s) => Some(ValueKey::Text(s)),
        }
    }
}

/// String form of a value, as matched by regex rules and shown in samples.
///
/// Floats keep their fractional part (`2.0`, not `2`).
impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, "null"),
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Float(x) => write!(f, "{:?}", x),
            DataValue::String(s) => f.write_str(s),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i32> for DataValue {
    fn from(i: i32) -> Self {
        DataValue::Int(i64::from(i))
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DataValue::Null, Into::into)
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColumn")]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<DataValue>,
}

/// Wire form of a column; `dtype` is inferred when omitted.
#[derive(Deserialize)]
struct RawColumn {
    name: String,
    #[serde(default)]
    dtype: Option<ColumnType>,
    #[serde(default)]
    values: Vec<DataValue>,
}

impl From<RawColumn> for Column {
    fn from(raw: RawColumn) -> Self {
        match raw.dtype {
            Some(dtype) => Column::new(raw.name, dtype, raw.values),
            None => Column::infer(raw.name, raw.values),
        }
    }
}

impl Column {
    /// Creates a column with a declared type.
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<DataValue>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Creates a column and infers its type from the non-null values.
    ///
    /// All numeric → numeric, all strings → string, anything else
    /// (booleans, mixed content, no non-null values) → other.
    pub fn infer(name: impl Into<String>, values: Vec<DataValue>) -> Self {
        let dtype = infer_type(&values);
        Self::new(name, dtype, values)
    }

    /// Creates a numeric column.
    pub fn numeric<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        Self::new(
            name,
            ColumnType::Numeric,
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Creates a string column.
    pub fn string<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        Self::new(
            name,
            ColumnType::String,
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared or inferred type.
    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    /// Returns true if the column is numeric.
    pub fn is_numeric(&self) -> bool {
        self.dtype.is_numeric()
    }

    /// All values, nulls included.
    pub fn values(&self) -> &[DataValue] {
        &self.values
    }

    /// Number of values (the dataset's row count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the non-null values.
    pub fn non_null(&self) -> impl Iterator<Item = &DataValue> {
        self.values.iter().filter(|v| !v.is_null())
    }

    /// Number of null values.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Number of distinct non-null values.
    pub fn distinct_count(&self) -> usize {
        self.values
            .iter()
            .filter_map(DataValue::key)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Share of null values; 0 for an empty column.
    pub fn null_ratio(&self) -> f64 {
        ratio(self.null_count(), self.len())
    }

    /// Distinct non-null values over the row count; 0 for an empty column.
    pub fn unique_ratio(&self) -> f64 {
        ratio(self.distinct_count(), self.len())
    }

    /// Non-null numeric values as floats. Non-numeric values are skipped.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(DataValue::as_float).collect()
    }
}

fn infer_type(values: &[DataValue]) -> ColumnType {
    let mut non_null = values.iter().filter(|v| !v.is_null()).peekable();
    if non_null.peek().is_none() {
        return ColumnType::Other;
    }

    let mut all_numeric = true;
    let mut all_strings = true;
    for value in non_null {
        all_numeric &= value.is_numeric();
        all_strings &= matches!(value, DataValue::String(_));
    }

    if all_numeric {
        ColumnType::Numeric
    } else if all_strings {
        ColumnType::String
    } else {
        ColumnType::Other
    }
}

pub(crate) fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// A dataset made of equally long, uniquely named columns.
///
/// # Example
///
/// ```rust
/// use dq_validator::{Column, DataSet};
///
/// let dataset = DataSet::new(vec![
///     Column::numeric("id", [1, 2, 3]),
///     Column::string("code", ["AB12", "AB13", "xx99"]),
/// ])
/// .unwrap();
///
/// assert_eq!(dataset.len(), 3);
/// assert_eq!(dataset.column_names(), vec!["id", "code"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataSet")]
pub struct DataSet {
    columns: Vec<Column>,
    #[serde(skip_serializing)]
    row_count: usize,
}

#[derive(Deserialize)]
struct RawDataSet {
    #[serde(default)]
    columns: Vec<Column>,
}

impl TryFrom<RawDataSet> for DataSet {
    type Error = ValidationError;

    fn try_from(raw: RawDataSet) -> Result<Self, Self::Error> {
        DataSet::new(raw.columns)
    }
}

impl DataSet {
    /// Creates a dataset, checking that columns are equally long and uniquely named.
    pub fn new(columns: Vec<Column>) -> Result<Self, ValidationError> {
        let row_count = columns.first().map_or(0, Column::len);
        let mut seen = HashSet::new();

        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(ValidationError::duplicate_column(column.name()));
            }
            if column.len() != row_count {
                return Err(ValidationError::ragged_column(
                    column.name(),
                    row_count,
                    column.len(),
                ));
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Creates a new empty dataset (no columns, no rows).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.row_count
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterates over the columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Gets a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Returns a presentation copy in which every value of the named columns is
    /// rendered as a string followed by [`FAILURE_MARKER`].
    ///
    /// Names that do not match a column are ignored; `self` is untouched.
    pub fn highlight_failures<S: AsRef<str>>(&self, failed_columns: &[S]) -> DataSet {
        let failed: HashSet<&str> = failed_columns.iter().map(AsRef::as_ref).collect();

        let columns = self
            .columns
            .iter()
            .map(|column| {
                if failed.contains(column.name()) {
                    Column::new(
                        column.name(),
                        ColumnType::String,
                        column
                            .values()
                            .iter()
                            .map(|v| DataValue::String(format!("{} {}", v, FAILURE_MARKER)))
                            .collect(),
                    )
                } else {
                    column.clone()
                }
            })
            .collect();

        DataSet {
            columns,
            row_count: self.row_count,
        }
    }
}
