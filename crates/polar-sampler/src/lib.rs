pub mod error;
pub mod occupancy;
pub mod resample;

pub use error::SampleError;
pub use occupancy::sample_occupancy;
pub use resample::{derive_rows, resample_polar};
