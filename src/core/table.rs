use serde::{Deserialize, Serialize};

use crate::core::field::Field;
use crate::error::{ChartError, ChartResult};

/// One dataset row: display code, descriptive name and the six plottable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub abbr: String,
    pub name: String,
    values: [f64; 6],
}

impl Record {
    /// Builds a record, rejecting empty text columns and non-finite values.
    pub fn new(
        abbr: impl Into<String>,
        name: impl Into<String>,
        values: [f64; 6],
    ) -> ChartResult<Self> {
        let abbr = abbr.into();
        let name = name.into();
        if abbr.trim().is_empty() || name.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "record label and name must be non-empty".to_owned(),
            ));
        }
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| !values[field.index()].is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "record `{abbr}` has non-finite `{field}` value"
            )));
        }
        Ok(Self { abbr, name, values })
    }

    #[must_use]
    pub fn value(&self, field: Field) -> f64 {
        self.values[field.index()]
    }

    #[must_use]
    pub fn values(&self) -> &[f64; 6] {
        &self.values
    }
}

/// Immutable, ordered set of records loaded once per session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// `(min, max)` of `field` over all rows, or `None` for an empty table.
    #[must_use]
    pub fn extent(&self, field: Field) -> Option<(f64, f64)> {
        let mut values = self.records.iter().map(|record| record.value(field));
        let first = values.next()?;
        Some(values.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        }))
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
