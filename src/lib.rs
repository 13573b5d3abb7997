pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use network::snapshot::NetworkSnapshot;
pub use network::topology::Topology;
pub use loss::mse::MseLoss;
pub use train::{train_loop, EpochStats, TrainConfig};
pub use data::dataset::Dataset;
