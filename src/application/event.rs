// 検索イベント定義（出力先に依存しない）

use crate::domain::search::{PartitionResult, SearchSummary};

/// 検索エンジンからのイベント
#[derive(Clone, Debug)]
pub enum SearchEvent {
    /// 分割の起動（1行目の列数ぶん）
    Started { partitions: usize },
    /// 1つの分割の探索完了
    PartitionFinished(PartitionResult),
    /// 集約完了
    Finished(SearchSummary),
    /// ログメッセージ
    Log(String),
}
