pub mod codec;
pub mod error;

pub use codec::{decode, encode, encode_strict, from_wire, to_wire, validate};
pub use error::{MaskError, Result};
