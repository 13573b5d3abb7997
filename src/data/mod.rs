pub mod dataset;
pub mod synthetic;

pub use dataset::Dataset;
