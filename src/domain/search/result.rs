// 検索結果の定義

use serde::{Deserialize, Serialize};

use super::config::{BoardSize, ExecutionMode, SolverKind};

/// 1つの分割（1行目の列）の探索結果
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// 1行目に固定したクイーンの列
    pub column: usize,
    /// 完成した配置の数
    pub count: u64,
    /// 訪問したノード数
    pub nodes: u64,
}

/// 検索サマリー
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub board_size: BoardSize,
    pub solver: SolverKind,
    pub mode: ExecutionMode,
    pub partitions: usize,
    /// 1行目の列ごとの解の数
    pub slots: Vec<u64>,
    pub total: u64,
    pub total_nodes: u64,
    pub elapsed_seconds: f64,
    pub nodes_per_second: f64,
}

impl SearchSummary {
    pub fn new(board_size: BoardSize, solver: SolverKind, mode: ExecutionMode) -> Self {
        Self {
            board_size,
            solver,
            mode,
            partitions: board_size.get(),
            slots: vec![0; board_size.get()],
            total: 0,
            total_nodes: 0,
            elapsed_seconds: 0.0,
            nodes_per_second: 0.0,
        }
    }
}
