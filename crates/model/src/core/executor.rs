use crate::core::identifiers::{Identified, Named};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorStatus {
    Active,
    Inactive,
}

/// Executor-side reference to a parameter and its encoded filter condition.
///
/// `mask` holds the wire form of the condition; see the mask codec for the
/// encoding rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorParameter {
    pub id: u64,
    pub mask: String,
}

impl ExecutorParameter {
    pub fn new(id: u64, mask: impl Into<String>) -> Self {
        Self {
            id,
            mask: mask.into(),
        }
    }
}

/// An executor row as served by the backend. `parameters` may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Executor {
    pub id: u64,
    pub name: String,
    pub status: ExecutorStatus,
    pub order_count: u64,
    pub parameters: Option<Vec<ExecutorParameter>>,
}

impl Identified for Executor {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Named for Executor {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExecutorRequest {
    pub name: String,
    pub status: ExecutorStatus,
    pub parameters: Vec<ExecutorParameter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExecutorResponse {
    pub id: u64,
}
