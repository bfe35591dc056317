pub mod error;
pub mod parameters;
pub mod store;

pub use error::StoreError;
pub use parameters::{FALLBACK_PARAMETERS_KEY, ParameterCache};
pub use store::{BlobStore, memory::MemoryBlobStore, sled_store::SledBlobStore};
