use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("failed to load dataset: {0}")]
    DataLoad(String),

    #[error("dataset is missing required column `{column}`")]
    MissingColumn { column: String },

    #[error("row {row}: column `{column}` is empty")]
    EmptyField { row: usize, column: String },

    #[error("row {row}: column `{column}` is not numeric: `{value}`")]
    NonNumericField {
        row: usize,
        column: String,
        value: String,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Returns `true` for failures raised while loading the dataset.
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::DataLoad(_)
                | Self::MissingColumn { .. }
                | Self::EmptyField { .. }
                | Self::NonNumericField { .. }
                | Self::Csv(_)
                | Self::Io(_)
        )
    }
}
