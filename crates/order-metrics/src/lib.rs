pub mod error;
pub mod series;
pub mod workload;

pub use error::SeriesError;
pub use series::{SeriesPayload, decode_series, sum_series};
pub use workload::{WorkloadEntry, normalize_workload};
