use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Which axis of the scatter plot a field can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// Fields selectable on this axis, in display order.
    #[must_use]
    pub const fn choices(self) -> &'static [Field] {
        match self {
            Self::X => &X_CHOICES,
            Self::Y => &Y_CHOICES,
        }
    }

    /// First entry of [`Axis::choices`]; the session starts with it selected.
    #[must_use]
    pub const fn default_choice(self) -> Field {
        match self {
            Self::X => X_CHOICES[0],
            Self::Y => Y_CHOICES[0],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Numeric dataset column that can be plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Poverty,
    Age,
    Income,
    Healthcare,
    Obesity,
    Smokes,
}

pub const X_CHOICES: [Field; 3] = [Field::Poverty, Field::Age, Field::Income];
pub const Y_CHOICES: [Field; 3] = [Field::Healthcare, Field::Smokes, Field::Obesity];

impl Field {
    /// Column order used by `Record` storage.
    pub const ALL: [Field; 6] = [
        Field::Poverty,
        Field::Age,
        Field::Income,
        Field::Healthcare,
        Field::Obesity,
        Field::Smokes,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Poverty => 0,
            Self::Age => 1,
            Self::Income => 2,
            Self::Healthcare => 3,
            Self::Obesity => 4,
            Self::Smokes => 5,
        }
    }

    /// Header name of the column in the source table.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Age => "age",
            Self::Income => "income",
            Self::Healthcare => "healthcare",
            Self::Obesity => "obesity",
            Self::Smokes => "smokes",
        }
    }

    /// Text of the clickable axis label.
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Poverty => "In Poverty (%)",
            Self::Age => "Age (Median)",
            Self::Income => "Household Income (Median)",
            Self::Healthcare => "Lacks Healthcare (%)",
            Self::Obesity => "Obese (%)",
            Self::Smokes => "Smokes (%)",
        }
    }

    /// Short label used in tooltip lines.
    #[must_use]
    pub const fn tooltip_label(self) -> &'static str {
        match self {
            Self::Poverty => "Poverty",
            Self::Age => "Age",
            Self::Income => "Income",
            Self::Healthcare => "Healthcare",
            Self::Obesity => "Obese",
            Self::Smokes => "Smokes",
        }
    }

    #[must_use]
    pub const fn is_percentage(self) -> bool {
        !matches!(self, Self::Age | Self::Income)
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Poverty | Self::Age | Self::Income => Axis::X,
            Self::Healthcare | Self::Obesity | Self::Smokes => Axis::Y,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Field {
    type Err = ChartError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.column_name() == raw)
            .ok_or_else(|| ChartError::UnknownField(raw.to_owned()))
    }
}
