// 検索関連のドメインモデル

pub mod config;
pub mod result;

pub use config::{BoardSize, ExecutionMode, SearchConfig, SolverKind};
pub use result::{PartitionResult, SearchSummary};
