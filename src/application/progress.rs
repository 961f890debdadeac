// 進捗管理

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::domain::search::PartitionResult;

/// 進捗統計
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub partitions_done: usize,
    pub solutions_found: u64,
    pub nodes_searched: u64,
}

/// 進捗マネージャー（並列実行の単位から共有される）
pub struct ProgressManager {
    partitions_done: AtomicUsize,
    solutions_found: AtomicU64,
    nodes_searched: AtomicU64,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            partitions_done: AtomicUsize::new(0),
            solutions_found: AtomicU64::new(0),
            nodes_searched: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// 分割の完了を記録
    pub fn record(&self, result: &PartitionResult) {
        self.solutions_found.fetch_add(result.count, Ordering::Relaxed);
        self.nodes_searched.fetch_add(result.nodes, Ordering::Relaxed);
        self.partitions_done.fetch_add(1, Ordering::Relaxed);
    }

    /// 現在の統計を取得
    pub fn get_stats(&self) -> ProgressStats {
        ProgressStats {
            partitions_done: self.partitions_done.load(Ordering::Relaxed),
            solutions_found: self.solutions_found.load(Ordering::Relaxed),
            nodes_searched: self.nodes_searched.load(Ordering::Relaxed),
        }
    }

    /// 経過時間を取得
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 検索速度（ノード/秒）を取得
    pub fn nodes_per_second(&self) -> f64 {
        let nodes = self.nodes_searched.load(Ordering::Relaxed) as f64;
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            nodes / elapsed
        } else {
            0.0
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
