//! Dataset loading.
//!
//! The source is a delimited text table with a header row. Numeric columns are
//! parsed exactly once, here; anything that is not a finite number is a load
//! failure rather than a silent `NaN`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::core::{Field, Record, Table};
use crate::error::{ChartError, ChartResult};

/// Column naming and parsing options for [`DatasetLoader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetLoaderConfig {
    #[serde(default = "default_label_column")]
    pub label_column: String,
    #[serde(default = "default_name_column")]
    pub name_column: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
}

impl Default for DatasetLoaderConfig {
    fn default() -> Self {
        Self {
            label_column: default_label_column(),
            name_column: default_name_column(),
            delimiter: default_delimiter(),
        }
    }
}

impl DatasetLoaderConfig {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_label_column(mut self, column: impl Into<String>) -> Self {
        self.label_column = column.into();
        self
    }

    #[must_use]
    pub fn with_name_column(mut self, column: impl Into<String>) -> Self {
        self.name_column = column.into();
        self
    }
}

fn default_label_column() -> String {
    "abbr".to_owned()
}

fn default_name_column() -> String {
    "state".to_owned()
}

fn default_delimiter() -> u8 {
    b','
}

/// Header positions resolved once per load.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    label: usize,
    name: usize,
    values: [usize; 6],
}

#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: DatasetLoaderConfig,
}

impl DatasetLoader {
    #[must_use]
    pub fn new(config: DatasetLoaderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DatasetLoaderConfig {
        &self.config
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> ChartResult<Table> {
        let path = path.as_ref();
        let file = File::open(path).inspect_err(|err| {
            error!(path = %path.display(), error = %err, "failed to open dataset");
        })?;
        self.read_table(file).inspect_err(|err| {
            error!(path = %path.display(), error = %err, "failed to load dataset");
        })
    }

    pub fn load_str(&self, input: &str) -> ChartResult<Table> {
        self.load_reader(input.as_bytes())
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> ChartResult<Table> {
        self.read_table(reader).inspect_err(|err| {
            error!(error = %err, "failed to load dataset");
        })
    }

    fn read_table<R: Read>(&self, reader: R) -> ChartResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = self.resolve_columns(csv_reader.headers()?)?;

        let mut records = Vec::new();
        for (offset, row) in csv_reader.records().enumerate() {
            let row_number = offset + 1;
            let row = row?;
            records.push(self.parse_row(&row, row_number, columns)?);
        }

        if records.is_empty() {
            return Err(ChartError::DataLoad("dataset contains no rows".to_owned()));
        }

        debug!(rows = records.len(), "dataset loaded");
        Ok(Table::new(records))
    }

    fn resolve_columns(&self, headers: &csv::StringRecord) -> ChartResult<ColumnIndex> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| ChartError::MissingColumn {
                    column: column.to_owned(),
                })
        };

        let mut values = [0; 6];
        for field in Field::ALL {
            values[field.index()] = find(field.column_name())?;
        }
        Ok(ColumnIndex {
            label: find(&self.config.label_column)?,
            name: find(&self.config.name_column)?,
            values,
        })
    }

    fn parse_row(
        &self,
        row: &csv::StringRecord,
        row_number: usize,
        columns: ColumnIndex,
    ) -> ChartResult<Record> {
        let text = |index: usize, column: &str| -> ChartResult<String> {
            match row.get(index) {
                Some(value) if !value.is_empty() => Ok(value.to_owned()),
                _ => Err(ChartError::EmptyField {
                    row: row_number,
                    column: column.to_owned(),
                }),
            }
        };

        let abbr = text(columns.label, &self.config.label_column)?;
        let name = text(columns.name, &self.config.name_column)?;

        let mut values = [0.0; 6];
        for field in Field::ALL {
            let raw = text(columns.values[field.index()], field.column_name())?;
            values[field.index()] = parse_number(&raw, row_number, field)?;
        }

        Record::new(abbr, name, values)
    }
}

fn parse_number(raw: &str, row: usize, field: Field) -> ChartResult<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::NonNumericField {
            row,
            column: field.column_name().to_owned(),
            value: raw.to_owned(),
        }),
    }
}
