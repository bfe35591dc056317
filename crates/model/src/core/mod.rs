pub mod executor;
pub mod filter;
pub mod identifiers;
pub mod parameter;
