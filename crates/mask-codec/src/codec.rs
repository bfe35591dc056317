use crate::error::{MaskError, Result};
use model::core::{
    executor::ExecutorParameter,
    filter::{ComparisonOp, FilterCondition},
};
use tracing::debug;

/// Marker character separating range bounds and flagging open-ended
/// comparisons on the wire.
const MARKER: char = 'x';

/// Encodes a condition into its mask string.
///
/// Total and deterministic. Operands are written as-is, so values that are
/// empty or contain the marker produce masks that decode to a different
/// condition; use [`encode_strict`] when that matters.
pub fn encode(cond: &FilterCondition) -> String {
    match cond.op {
        ComparisonOp::GreaterThan => format!("{}x", cond.value),
        ComparisonOp::LessThan => format!("x{}", cond.value),
        ComparisonOp::Equal => cond.value.clone(),
        ComparisonOp::Between => format!("{}x{}", cond.min_value, cond.max_value),
    }
}

/// Decodes a mask string into a condition for `parameter_id`.
///
/// Total: input matching none of the mask patterns degrades to an `Equal`
/// condition carrying the string unchanged. Patterns are tried in order,
/// first match wins:
/// 1. empty string → equal to `""`
/// 2. exactly two non-empty parts around the marker → between
/// 3. trailing marker only → greater-than
/// 4. leading marker only → less-than
/// 5. anything else → equal
pub fn decode(parameter_id: u64, mask: &str) -> FilterCondition {
    if mask.is_empty() {
        return FilterCondition::equal(parameter_id, "");
    }

    // Split on every marker occurrence; three or more parts means the mask
    // is not a well-formed range and falls through to the suffix checks.
    let parts: Vec<&str> = mask.split(MARKER).collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        return FilterCondition::between(parameter_id, parts[0], parts[1]);
    }

    if let Some(value) = mask.strip_suffix(MARKER) {
        if !mask.starts_with(MARKER) {
            return FilterCondition::greater_than(parameter_id, value);
        }
    }

    if let Some(value) = mask.strip_prefix(MARKER) {
        if !mask.ends_with(MARKER) {
            return FilterCondition::less_than(parameter_id, value);
        }
    }

    if mask.contains(MARKER) {
        debug!("Ambiguous mask '{mask}', treating as equality");
    }
    FilterCondition::equal(parameter_id, mask)
}

/// Checks that the condition's active operands survive a round-trip.
///
/// Operands that are empty or contain the marker encode to masks that
/// decode differently, so they are rejected here.
pub fn validate(cond: &FilterCondition) -> Result<()> {
    match cond.op {
        ComparisonOp::Between => {
            check_operand(cond, &cond.min_value)?;
            check_operand(cond, &cond.max_value)
        }
        _ => check_operand(cond, &cond.value),
    }
}

/// Validating encode, for conditions built from user input.
pub fn encode_strict(cond: &FilterCondition) -> Result<String> {
    validate(cond)?;
    Ok(encode(cond))
}

/// Packs a condition into its executor-parameter wire entry.
pub fn to_wire(cond: &FilterCondition) -> ExecutorParameter {
    ExecutorParameter::new(cond.parameter_id, encode(cond))
}

/// Unpacks an executor-parameter wire entry into a condition.
pub fn from_wire(param: &ExecutorParameter) -> FilterCondition {
    decode(param.id, &param.mask)
}

fn check_operand(cond: &FilterCondition, operand: &str) -> Result<()> {
    if operand.is_empty() {
        return Err(MaskError::EmptyOperand {
            parameter_id: cond.parameter_id,
            op: cond.op,
        });
    }
    if operand.contains(MARKER) {
        return Err(MaskError::ReservedMarker {
            parameter_id: cond.parameter_id,
            operand: operand.to_string(),
        });
    }
    Ok(())
}
