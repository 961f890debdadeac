// 並列実行 - 分割の起動と完了待ち

pub mod aggregator;
pub mod parallel;

pub use aggregator::SlotAggregator;
pub use parallel::{ParallelConfig, ParallelExecutor, WorkerPool};
