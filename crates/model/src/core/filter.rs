use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison kinds a filter condition can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    GreaterThan,
    LessThan,
    Equal,
    Between,
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::GreaterThan => write!(f, ">"),
            ComparisonOp::LessThan => write!(f, "<"),
            ComparisonOp::Equal => write!(f, "="),
            ComparisonOp::Between => write!(f, ".."),
        }
    }
}

/// One filter condition attached to an executor parameter.
///
/// Only one operand group is active at a time, selected by `op`: `value` for
/// the scalar comparisons, `min_value`/`max_value` for `Between`. The struct
/// does not enforce the exclusion; encoding reads only the active group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub parameter_id: u64,
    pub op: ComparisonOp,
    pub value: String,
    pub min_value: String,
    pub max_value: String,
}

impl FilterCondition {
    pub fn equal(parameter_id: u64, value: impl Into<String>) -> Self {
        Self {
            parameter_id,
            op: ComparisonOp::Equal,
            value: value.into(),
            min_value: String::new(),
            max_value: String::new(),
        }
    }

    pub fn greater_than(parameter_id: u64, value: impl Into<String>) -> Self {
        Self {
            parameter_id,
            op: ComparisonOp::GreaterThan,
            value: value.into(),
            min_value: String::new(),
            max_value: String::new(),
        }
    }

    pub fn less_than(parameter_id: u64, value: impl Into<String>) -> Self {
        Self {
            parameter_id,
            op: ComparisonOp::LessThan,
            value: value.into(),
            min_value: String::new(),
            max_value: String::new(),
        }
    }

    pub fn between(parameter_id: u64, min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            parameter_id,
            op: ComparisonOp::Between,
            value: String::new(),
            min_value: min.into(),
            max_value: max.into(),
        }
    }
}
