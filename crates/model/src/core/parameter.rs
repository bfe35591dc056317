use crate::core::identifiers::{Identified, Named};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Value kind of a parameter, tagged lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Int,
    Float,
    Text,
    Bool,
    Datetime,
}

impl ParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Int => "int",
            ParameterKind::Float => "float",
            ParameterKind::Text => "text",
            ParameterKind::Bool => "bool",
            ParameterKind::Datetime => "datetime",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParameterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" => Ok(ParameterKind::Int),
            "float" => Ok(ParameterKind::Float),
            "text" => Ok(ParameterKind::Text),
            "bool" => Ok(ParameterKind::Bool),
            "datetime" => Ok(ParameterKind::Datetime),
            other => Err(format!("Unknown parameter kind: {other}")),
        }
    }
}

/// A parameter definition as served by the backend.
///
/// The kind travels under the `type` key on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
}

impl Parameter {
    pub fn new(id: u64, name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}

impl Identified for Parameter {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Named for Parameter {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParameterRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParameterResponse {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_from_str() {
        for kind in [
            ParameterKind::Int,
            ParameterKind::Float,
            ParameterKind::Text,
            ParameterKind::Bool,
            ParameterKind::Datetime,
        ] {
            assert_eq!(kind.as_str().parse::<ParameterKind>(), Ok(kind));
        }
        assert!("duration".parse::<ParameterKind>().is_err());
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let param = Parameter::new(3, "Threshold", ParameterKind::Int);
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Threshold", "type": "int"})
        );

        let back: Parameter = serde_json::from_value(json).unwrap();
        assert_eq!(back, param);
    }
}
