use model::core::filter::ComparisonOp;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("Empty operand for {op} condition on parameter {parameter_id}")]
    EmptyOperand { parameter_id: u64, op: ComparisonOp },

    #[error("Operand '{operand}' on parameter {parameter_id} contains the reserved marker 'x'")]
    ReservedMarker { parameter_id: u64, operand: String },
}

pub type Result<T> = std::result::Result<T, MaskError>;
