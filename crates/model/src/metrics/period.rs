use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Aggregation window for the order-count series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsPeriod {
    Hour,
    Day,
    Week,
}

impl MetricsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricsPeriod::Hour => "hour",
            MetricsPeriod::Day => "day",
            MetricsPeriod::Week => "week",
        }
    }
}

impl fmt::Display for MetricsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetricsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(MetricsPeriod::Hour),
            "day" => Ok(MetricsPeriod::Day),
            "week" => Ok(MetricsPeriod::Week),
            other => Err(format!("Unknown metrics period: {other}")),
        }
    }
}
