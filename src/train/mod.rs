pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;
pub mod metrics;

pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use loop_fn::train_loop;
pub use metrics::{mean_absolute_error, threshold_accuracy};
