//! Grid columns, rows, and the reconcile operation

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::GridError;

/// Maximum number of subject columns a study grid may declare
pub const MAX_SUBJECTS: usize = 48;

/// Maximum number of time-point rows a study grid may declare
pub const MAX_ROWS: usize = 999;

/// Zero-based subject index
pub type SubjectId = usize;

/// Typed column identifier: the time column, or one subject's
/// concentration column
///
/// Ordered with `Time` first, then subjects by index — the display order
/// of the grid. Serializes to the grid-record key: `"time"`, or the
/// subject index as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKey {
    Time,
    Subject(SubjectId),
}

impl Serialize for ColumnKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnKey::Time => serializer.serialize_str("time"),
            ColumnKey::Subject(id) => serializer.collect_str(id),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = ColumnKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "\"time\" or a subject index")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ColumnKey, E> {
                if v == "time" {
                    Ok(ColumnKey::Time)
                } else {
                    v.parse::<SubjectId>()
                        .map(ColumnKey::Subject)
                        .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

/// A grid column descriptor; every column is numeric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: ColumnKey,
    /// Display header
    pub label: String,
}

impl Column {
    /// The time column
    pub fn time() -> Self {
        Self {
            key: ColumnKey::Time,
            label: "Time (hr)".to_string(),
        }
    }

    /// One subject's concentration column
    pub fn subject(id: SubjectId) -> Self {
        Self {
            key: ColumnKey::Subject(id),
            label: format!("Subj{} Conc (uM)", id + 1),
        }
    }
}

/// One grid row: an ordered map from column key to cell
///
/// A cell is `Option<f64>`; `None` and an absent key both read as blank.
/// Serializes to the record shape of the grid widget, with `null` for
/// blank cells: `{"time": 0.5, "0": 4.85, "1": null}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<ColumnKey, Option<f64>>,
}

impl Row {
    /// A row with every given column present and blank
    pub fn blank(columns: &[Column]) -> Self {
        Self {
            cells: columns.iter().map(|c| (c.key, None)).collect(),
        }
    }

    /// Read a cell; absent keys and blank cells both yield `None`
    pub fn get(&self, key: ColumnKey) -> Option<f64> {
        self.cells.get(&key).copied().flatten()
    }

    /// Write a cell (`None` blanks it)
    pub fn set(&mut self, key: ColumnKey, value: Option<f64>) {
        self.cells.insert(key, value);
    }

    /// The time cell, if entered
    #[inline]
    pub fn time(&self) -> Option<f64> {
        self.get(ColumnKey::Time)
    }

    /// One subject's concentration cell, if entered
    #[inline]
    pub fn concentration(&self, id: SubjectId) -> Option<f64> {
        self.get(ColumnKey::Subject(id))
    }

    fn retain_keys(&mut self, keys: &BTreeSet<ColumnKey>) {
        self.cells.retain(|k, _| keys.contains(k));
    }
}

/// Reconcile a grid against a target subject count and row count
///
/// Pure structural delta over the current rows:
///
/// - columns are deterministically `[Time, Subject(0), ...,
///   Subject(subjects - 1)]`;
/// - extra rows are truncated from the end; missing rows are appended
///   fully blank, with every declared column present;
/// - cells whose column left the set are dropped from every surviving
///   row; newly added subject columns stay absent on old rows (absent
///   reads as blank);
/// - zero counts are legal: no subject columns, or no rows.
///
/// Reconciling twice with the same targets is a no-op on the second call.
///
/// # Errors
/// [`GridError::InvalidRequest`] when a target exceeds [`MAX_SUBJECTS`]
/// or [`MAX_ROWS`].
pub fn reconcile(
    subjects: usize,
    rows: usize,
    current: &[Row],
) -> Result<(Vec<Column>, Vec<Row>), GridError> {
    if subjects > MAX_SUBJECTS {
        return Err(GridError::InvalidRequest {
            param: "subjects",
            value: subjects,
            max: MAX_SUBJECTS,
        });
    }
    if rows > MAX_ROWS {
        return Err(GridError::InvalidRequest {
            param: "rows",
            value: rows,
            max: MAX_ROWS,
        });
    }

    let columns: Vec<Column> = std::iter::once(Column::time())
        .chain((0..subjects).map(Column::subject))
        .collect();
    let keys: BTreeSet<ColumnKey> = columns.iter().map(|c| c.key).collect();

    let mut new_rows: Vec<Row> = current.iter().take(rows).cloned().collect();
    for row in &mut new_rows {
        row.retain_keys(&keys);
    }
    while new_rows.len() < rows {
        new_rows.push(Row::blank(&columns));
    }

    Ok((columns, new_rows))
}
